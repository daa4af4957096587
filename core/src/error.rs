//! Error types for connection string conversion.
//!
//! [`ParseError`] covers a single connection string, [`ConversionError`]
//! ties a parse failure to the entry that caused it, and [`Error`] is the
//! unified type returned by the reading and writing helpers.

use thiserror::Error;

/// Failure to decode one connection string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string is not a syntactically valid URL.
    #[error("malformed URL: {detail}")]
    Malformed { detail: String },

    /// The scheme has no entry in the dialect table.
    #[error("unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// The port component is not a valid integer.
    #[error("invalid port: {detail}")]
    InvalidPort { detail: String },
}

impl ParseError {
    /// Short, stable reason string without the detail.
    pub fn reason(&self) -> &'static str {
        match self {
            ParseError::Malformed { .. } => "malformed URL",
            ParseError::UnsupportedDialect(_) => "unsupported dialect",
            ParseError::InvalidPort { .. } => "invalid port",
        }
    }
}

/// A batch conversion aborted on the first entry that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error parsing connection string of entry #{index} ({name:?}): {cause}")]
pub struct ConversionError {
    /// Zero-based position of the entry in the input list.
    pub index: usize,
    /// Name of the failing entry.
    pub name: String,
    /// Already part of the message, so not exposed as an error source.
    pub cause: ParseError,
}

/// Errors returned by the end-to-end conversion helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be decoded, or JSON output could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML output could not be encoded.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        let malformed = ParseError::Malformed {
            detail: "relative URL without a base".into(),
        };
        assert_eq!(malformed.reason(), "malformed URL");
        assert_eq!(
            ParseError::UnsupportedDialect("oracle".into()).reason(),
            "unsupported dialect"
        );
        assert_eq!(
            ParseError::InvalidPort {
                detail: "x".into()
            }
            .reason(),
            "invalid port"
        );
    }

    #[test]
    fn test_conversion_error_names_entry() {
        let err = ConversionError {
            index: 2,
            name: "prod".into(),
            cause: ParseError::UnsupportedDialect("oracle".into()),
        };
        let message = err.to_string();
        assert!(message.contains("#2"), "{message}");
        assert!(message.contains("\"prod\""), "{message}");
        assert!(message.ends_with("unsupported dialect: oracle"), "{message}");
    }

    #[test]
    fn test_parse_error_is_reported_once() {
        use std::error::Error as _;

        let err = ConversionError {
            index: 0,
            name: "legacy".into(),
            cause: ParseError::UnsupportedDialect("oracle".into()),
        };
        assert!(err.source().is_none());

        let wrapped = Error::from(err);
        assert!(wrapped.source().is_none());
        assert_eq!(wrapped.to_string().matches("unsupported dialect").count(), 1);
    }
}
