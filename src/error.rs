use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Unknown timezone: {0}")]
    #[diagnostic(code(critterfeed::timezone))]
    Timezone(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(critterfeed::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(critterfeed::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(critterfeed::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(critterfeed::serialization))]
    Serialization(String),
}

// Implement From for JSON serialization errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type FeederResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create timezone errors
pub fn timezone_error(name: &str) -> Error {
    Error::Timezone(name.to_string())
}

/// Helper to create configuration errors
#[allow(dead_code)]
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}
