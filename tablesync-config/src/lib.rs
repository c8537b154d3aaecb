//! Configuration loading for the tablesync service.
//!
//! Configuration is layered: a `base` file, an environment-specific file
//! selected through `APP_ENVIRONMENT`, and `APP_`-prefixed environment
//! variable overrides applied last.

mod environment;
mod load;
pub mod shared;

pub use environment::Environment;
pub use load::{LoadConfigError, load_config};
