pub mod handlers;
pub mod image_handlers;
pub mod routes;
