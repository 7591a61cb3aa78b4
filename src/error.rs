use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot scan '{path}': {source}")]
    ScanIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete '{path}': {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("tick_rate_ms must be greater than 0".into());
        assert!(err.to_string().contains("tick_rate_ms"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let sweep_err: SweepError = config_err.into();
        assert!(matches!(sweep_err, SweepError::Config(_)));
    }

    #[test]
    fn delete_error_names_path() {
        let err = SweepError::Delete {
            path: PathBuf::from("/data/big.iso"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/data/big.iso"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_to_terminal() {
        let err: SweepError = io::Error::new(io::ErrorKind::Other, "tty gone").into();
        assert!(matches!(err, SweepError::Terminal(_)));
    }
}
