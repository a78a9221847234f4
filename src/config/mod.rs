//! Configuration: TOML file, environment override, CLI override.
//!
//! Resolution order (later wins): built-in defaults, config file,
//! `HABITDECK_API_URL`, `--api-url`.

mod loader;
mod types;

pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig, DEFAULT_BASE_URL};
