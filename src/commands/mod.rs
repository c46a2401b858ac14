//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module.

pub mod check;
pub mod createsuperuser;
pub mod migrate;
pub mod serve;
pub mod show_config;
pub mod test_logging;
