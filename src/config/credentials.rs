//! API-key resolution.
//!
//! The key is looked up once at startup from the environment variable named
//! by [`LlmConfig::api_key_env`](super::LlmConfig) and handed to the client
//! constructor as an [`ApiKey`].  Nothing inside the correction loop reads
//! the environment.

use std::fmt;

use thiserror::Error;

/// Fatal configuration errors raised before any remote call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The credential variable is unset or empty.
    #[error("{var} not found in environment variables (set it or add it to .env)")]
    MissingCredential { var: String },
}

/// A resolved, non-empty API key.  `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Resolve `var` from the process environment.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        Self::resolve(var, |name| std::env::var(name).ok())
    }

    /// Resolve `var` through an arbitrary lookup function.
    ///
    /// Whitespace-only values count as missing.
    pub fn resolve<F>(var: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(var) {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(ConfigError::MissingCredential {
                var: var.to_string(),
            }),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
