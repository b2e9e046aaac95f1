//! Request line validation
//!
//! Only the method token and the protocol version are checked. The
//! request-target is not inspected here.

use crate::error::{SlurpError, SlurpResult};
use crate::limits::SIP_VERSION;
use crate::types::Method;

/// Make sure the request line (`<METHOD> <target> SIP/<version>`) is of
/// the expected method and speaks SIP/2.0.
///
/// Both checks always run. When both fail, the method mismatch is the
/// error returned.
pub fn validate_request_line(line: &str, expected: Method) -> SlurpResult<()> {
    let line = line.trim();
    let method_result = check_method(line, expected);
    let version_result = check_version(line);

    if let Err(e) = &method_result {
        tracing::debug!(error = %e, "request line method check failed");
    }
    if let Err(e) = &version_result {
        tracing::debug!(error = %e, category = e.category(), "request line version check failed");
    }

    method_result.and(version_result)
}

fn check_method(line: &str, expected: Method) -> SlurpResult<()> {
    let actual = line.split_whitespace().next().unwrap_or("");
    if actual.eq_ignore_ascii_case(expected.as_str()) {
        Ok(())
    } else {
        Err(SlurpError::method_mismatch(expected.as_str(), actual))
    }
}

fn check_version(line: &str) -> SlurpResult<()> {
    if line.ends_with(SIP_VERSION) {
        return Ok(());
    }

    // SIP/<version> is the third token
    let version = line
        .split_whitespace()
        .nth(2)
        .and_then(|proto| proto.split('/').nth(1))
        .and_then(|v| v.parse::<f32>().ok())
        .ok_or_else(|| SlurpError::invalid_format(line))?;

    Err(SlurpError::unsupported_version(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_line() {
        assert!(validate_request_line("INVITE sip:bob@biloxi.com SIP/2.0", Method::INVITE).is_ok());
        assert!(validate_request_line("register sip:biloxi.com SIP/2.0\r", Method::REGISTER).is_ok());
    }

    #[test]
    fn test_method_mismatch() {
        let err = validate_request_line("REGISTER sip:biloxi.com SIP/2.0", Method::INVITE).unwrap_err();
        assert_eq!(err, SlurpError::method_mismatch("INVITE", "REGISTER"));
    }

    #[test]
    fn test_unsupported_version() {
        let err = validate_request_line("INVITE sip:x SIP/3.0", Method::INVITE).unwrap_err();
        assert_eq!(err, SlurpError::UnsupportedVersion { version: 3.0 });
    }

    #[test]
    fn test_unparseable_version_is_invalid_format() {
        let err = validate_request_line("INVITE sip:x SIP/two", Method::INVITE).unwrap_err();
        assert_eq!(err, SlurpError::invalid_format("INVITE sip:x SIP/two"));

        let err = validate_request_line("INVITE", Method::INVITE).unwrap_err();
        assert_eq!(err, SlurpError::invalid_format("INVITE"));
    }

    #[test]
    fn test_method_mismatch_wins_over_version() {
        let err = validate_request_line("BYE sip:x SIP/3.0", Method::INVITE).unwrap_err();
        assert_eq!(err, SlurpError::method_mismatch("INVITE", "BYE"));
    }
}
