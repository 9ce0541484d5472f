//! Error types for configuration loading.
//!
//! Resolution itself has no error path — it is total over its input
//! domain. Errors only arise at the edges, when reading and parsing the
//! stored configuration.

use std::fmt;

/// Error type for configuration loading and parsing.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Load { message: String },

    /// The configuration file could not be parsed.
    Parse { message: String },

    /// A stored theme name that is not one of the known settings.
    UnknownSetting(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load { message } => write!(f, "config load error: {}", message),
            ConfigError::Parse { message } => write!(f, "config parse error: {}", message),
            ConfigError::UnknownSetting(name) => {
                write!(f, "unknown theme setting: {}", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}
