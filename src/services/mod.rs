//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and repositories. They depend on the
//! repository traits, not on SeaORM directly.

mod user_service;

pub use user_service::{UserManager, UserService};
