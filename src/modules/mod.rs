pub mod about_us;
pub mod categories;
pub mod contact_info;
pub mod contact_requests;
pub mod home_slider;
pub mod languages;
pub mod permissions;
pub mod products;
pub mod roles;
pub mod users;
