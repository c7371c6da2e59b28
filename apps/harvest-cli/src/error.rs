//! # CLI Error Types
//!
//! Everything a subcommand can fail with. `main` wraps these in `anyhow`
//! for reporting.

use harvest_backend::BackendError;
use harvest_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not read input from {source_name}: {source}")]
    Input {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_names_source() {
        let err = CliError::Input {
            source_name: "stdin".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8"),
        };
        assert_eq!(err.to_string(), "Could not read input from stdin: not utf-8");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: CliError = CoreError::NonFiniteAmount.into();
        assert_eq!(err.to_string(), "Amount must be a finite number");
    }
}
