//! Error types for the heimdall-rs library.
//!
//! Structured error types covering configuration, validation, I/O, and
//! serialization failures, with context preserved for proper propagation
//! from the evaluation pipeline to the caller.

use std::io;

use thiserror::Error;

/// Main result type for heimdall operations.
pub type Result<T> = std::result::Result<T, HeimdallError>;

/// Comprehensive error type for all heimdall operations.
#[derive(Error, Debug)]
pub enum HeimdallError {
    /// I/O related errors (report files, configuration files)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data type being serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
        /// Expected value or format
        expected: Option<String>,
        /// Actual value received
        actual: Option<String>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
        /// Additional context
        context: Option<String>,
    },
}

impl HeimdallError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
            expected: None,
            actual: None,
        }
    }

    /// Create a new validation error with field, expected, and actual values
    pub fn validation_details(
        message: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        if let Self::Internal { context: ctx, .. } = &mut self {
            *ctx = Some(context.into());
        }
        self
    }
}

// Implement From traits for common error types
impl From<io::Error> for HeimdallError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for HeimdallError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for HeimdallError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<regex::Error> for HeimdallError {
    fn from(err: regex::Error) -> Self {
        Self::config(format!("Invalid filter pattern: {err}"))
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<HeimdallError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = HeimdallError::config("Invalid configuration");
        assert!(matches!(err, HeimdallError::Config { .. }));

        let err = HeimdallError::validation("Bad input");
        assert!(matches!(err, HeimdallError::Validation { .. }));
    }

    #[test]
    fn test_config_field_error() {
        let err = HeimdallError::config_field("Invalid value", "unhealthy");

        if let HeimdallError::Config { message, field } = err {
            assert_eq!(message, "Invalid value");
            assert_eq!(field, Some("unhealthy".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_validation_details() {
        let err = HeimdallError::validation_details("Threshold out of range", "healthy", ">= 0", "-1");

        if let HeimdallError::Validation {
            field,
            expected,
            actual,
            ..
        } = err
        {
            assert_eq!(field, Some("healthy".to_string()));
            assert_eq!(expected, Some(">= 0".to_string()));
            assert_eq!(actual, Some("-1".to_string()));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_error_with_context() {
        let err = HeimdallError::internal("Something went wrong").with_context("During evaluation");

        if let HeimdallError::Internal { context, .. } = err {
            assert_eq!(context, Some("During evaluation".to_string()));
        } else {
            panic!("Expected Internal error");
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let heimdall_err: HeimdallError = io_err.into();

        assert!(matches!(heimdall_err, HeimdallError::Io { .. }));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let heimdall_err: HeimdallError = json_err.into();

        if let HeimdallError::Serialization { data_type, .. } = heimdall_err {
            assert_eq!(data_type, Some("JSON".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("[unclosed").unwrap_err();
        let heimdall_err: HeimdallError = regex_err.into();

        assert!(matches!(heimdall_err, HeimdallError::Config { .. }));
    }

    #[test]
    fn test_result_extension() {
        let result: std::result::Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "File not found",
        ));

        let heimdall_result = result.context("Failed to read report file");
        assert!(heimdall_result.is_err());
    }

    #[test]
    fn test_error_display_formatting() {
        let err = HeimdallError::config_field("unhealthy must be greater than healthy", "health");
        let display = format!("{}", err);
        assert!(display.contains("Configuration error"));
        assert!(display.contains("unhealthy must be greater than healthy"));
    }
}
