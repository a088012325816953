mod about_us_repository;
mod category_repository;
mod contact_info_repository;
mod contact_request_repository;
mod home_slider_repository;
mod language_repository;
mod permission_repository;
mod product_image_repository;
mod product_repository;
mod role_repository;
mod user_repository;

pub use about_us_repository::AboutUsRepository;
pub use category_repository::CategoryRepository;
pub use contact_info_repository::ContactInfoRepository;
pub use contact_request_repository::ContactRequestRepository;
pub use home_slider_repository::HomeSliderRepository;
pub use language_repository::LanguageRepository;
pub use permission_repository::PermissionRepository;
pub use product_image_repository::ProductImageRepository;
pub use product_repository::ProductRepository;
pub use role_repository::RoleRepository;
pub use user_repository::UserRepository;
