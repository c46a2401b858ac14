//! Application registry
//!
//! Every installed application is a named unit with its own label. The
//! registry is populated once from `Settings::installed_apps` and answers
//! lookups by label.

mod registry;

pub use registry::{AppConfig, AppRegistry};
