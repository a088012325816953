mod about_us;
mod category;
mod contact_info;
mod contact_request;
mod dynamic_translation;
mod home_slider;
mod language;
mod permission;
mod product;
mod product_image;
mod role;
mod user;

pub use about_us::*;
pub use category::*;
pub use contact_info::*;
pub use contact_request::*;
pub use dynamic_translation::*;
pub use home_slider::*;
pub use language::*;
pub use permission::*;
pub use product::*;
pub use product_image::*;
pub use role::*;
pub use user::*;
