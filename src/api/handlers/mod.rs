//! HTTP request handlers.

pub mod auth_handler;
pub mod info_handler;

pub use auth_handler::auth_routes;
pub use info_handler::info_routes;
