//! Error types and exit codes for wayfind
//!
//! Only recoverable failures at the edges of the library live here: parsing
//! input, loading configuration, file I/O. A search that finds nothing is
//! `None`, not an error, and a negative move cost is a panic.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed grid, edge list or config)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while preparing or driving a search
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{what} line {line}: {reason}")]
    Parse {
        what: String,
        line: usize,
        reason: String,
    },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl WayfindError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WayfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for malformed input at a 1-based line
    pub fn parse(what: &str, line: usize, reason: impl std::fmt::Display) -> Self {
        WayfindError::Parse {
            what: what.to_string(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WayfindError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WayfindError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UsageError(_) | WayfindError::InvalidValue { .. } => ExitCode::Usage,

            WayfindError::Parse { .. }
            | WayfindError::NotFound { .. }
            | WayfindError::InvalidConfig { .. } => ExitCode::Data,

            WayfindError::Io(_)
            | WayfindError::Json(_)
            | WayfindError::Toml(_)
            | WayfindError::FailedOperation { .. }
            | WayfindError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::InvalidValue { .. } => "invalid_value",
            WayfindError::Parse { .. } => "parse_error",
            WayfindError::NotFound { .. } => "not_found",
            WayfindError::InvalidConfig { .. } => "invalid_config",
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Toml(_) => "toml_error",
            WayfindError::FailedOperation { .. } => "failed_operation",
            WayfindError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            WayfindError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WayfindError::parse("grid", 3, "unexpected character 'x'").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WayfindError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_parse_message() {
        let err = WayfindError::parse("grid", 3, "unexpected character 'x'");
        assert_eq!(err.to_string(), "grid line 3: unexpected character 'x'");
    }

    #[test]
    fn test_to_json_envelope() {
        let json = WayfindError::invalid_value("iterations", 0).to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "invalid_value");
        assert_eq!(json["error"]["message"], "invalid iterations: 0");
    }
}
