//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), its `llm` and `run` sections,
//! `AppPaths` for the platform settings directory, TOML persistence via
//! `AppConfig::load` / `AppConfig::save`, and `ApiKey` resolution.

pub mod credentials;
pub mod paths;
pub mod settings;

pub use credentials::{ApiKey, ConfigError};
pub use paths::AppPaths;
pub use settings::{AppConfig, LlmConfig, RunConfig};
