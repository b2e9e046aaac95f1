//! Error taxonomy for request parsing and rendering
//!
//! Every failure is a returned value. The `Display` text of each variant is
//! part of the public contract: callers surface it verbatim in diagnostics.

use thiserror::Error;

/// Unified error type for slurp operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlurpError {
    /// The request line names a different method than the message model
    #[error("Expected Method {expected} but got {actual}")]
    MethodMismatch { expected: String, actual: String },

    /// The request line carries a SIP version other than 2.0
    #[error("Unsupported SIP version: {version:.6}")]
    UnsupportedVersion { version: f32 },

    /// A structural assumption about the message text was violated.
    /// Carries the offending raw text.
    #[error("Invalid Message Format: {0}")]
    InvalidFormat(String),

    /// A header field failed to convert. `line` is 0-based and relative to
    /// the header block; `message` is the whole message with its lines
    /// concatenated.
    #[error("Error parsing header on line {line}. Full Message: \n{message}")]
    HeaderParse {
        line: usize,
        message: String,
        #[source]
        cause: Box<SlurpError>,
    },
}

impl SlurpError {
    /// Create a method mismatch error
    pub fn method_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        SlurpError::MethodMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an unsupported version error
    pub fn unsupported_version(version: f32) -> Self {
        SlurpError::UnsupportedVersion { version }
    }

    /// Create an invalid format error around the offending text
    pub fn invalid_format(context: impl Into<String>) -> Self {
        SlurpError::InvalidFormat(context.into())
    }

    /// Wrap a field-level failure with its header line index and the full message
    pub fn header_parse(line: usize, message: impl Into<String>, cause: SlurpError) -> Self {
        SlurpError::HeaderParse {
            line,
            message: message.into(),
            cause: Box::new(cause),
        }
    }

    /// Get error category for log fields
    pub fn category(&self) -> &'static str {
        match self {
            SlurpError::MethodMismatch { .. } => "method",
            SlurpError::UnsupportedVersion { .. } => "version",
            SlurpError::InvalidFormat(_) => "format",
            SlurpError::HeaderParse { .. } => "header",
        }
    }
}

/// Result type for slurp operations
pub type SlurpResult<T> = Result<T, SlurpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_contract() {
        let err = SlurpError::method_mismatch("INVITE", "REGISTER");
        assert_eq!(err.to_string(), "Expected Method INVITE but got REGISTER");

        let err = SlurpError::unsupported_version(3.0);
        assert_eq!(err.to_string(), "Unsupported SIP version: 3.000000");

        let err = SlurpError::invalid_format("INVITE sip:x SIP/x.y");
        assert_eq!(err.to_string(), "Invalid Message Format: INVITE sip:x SIP/x.y");

        let err = SlurpError::header_parse(2, "ab", SlurpError::invalid_format("abc"));
        assert_eq!(
            err.to_string(),
            "Error parsing header on line 2. Full Message: \nab"
        );
    }

    #[test]
    fn test_header_parse_exposes_cause() {
        let err = SlurpError::header_parse(0, "", SlurpError::invalid_format("abc"));
        let source = err.source().expect("cause should be exposed");
        assert_eq!(source.to_string(), "Invalid Message Format: abc");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(SlurpError::unsupported_version(1.0).category(), "version");
        assert_eq!(SlurpError::invalid_format("x").category(), "format");
        assert_eq!(SlurpError::method_mismatch("A", "B").category(), "method");
    }
}
