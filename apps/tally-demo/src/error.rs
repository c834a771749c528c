//! # Demo Error Type
//!
//! Everything that can stop the demo from printing a summary.
//!
//! ```text
//! env var unparsable ──► ConfigError ──┐
//! order file missing ──► Io ───────────┤
//! order file malformed ► Json ─────────┼──► AppError ──► stderr + exit 1
//! order invalid ───────► OrderError ───┤
//! bad arguments ───────► Usage ────────┘
//! ```

use std::path::PathBuf;

use tally_core::OrderError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read order file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Order file {path} is not a valid order: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode quote: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid order: {0}")]
    Order(#[from] OrderError),

    #[error("{0}")]
    Usage(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::ValidationError;

    #[test]
    fn test_order_error_message() {
        let err: AppError = OrderError::from(ValidationError::EmptyOrder).into();
        assert_eq!(
            err.to_string(),
            "Invalid order: Order must contain at least one item"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err: AppError = ConfigError::InvalidValue("TALLY_SHIPPING_CENTS".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for TALLY_SHIPPING_CENTS"
        );
    }
}
