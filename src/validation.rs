//! Input validation for rendered header values
//!
//! Rendering writes user-supplied strings straight onto the wire, so each
//! one must stay on a single line.

use crate::error::{SlurpError, SlurpResult};

/// Reject a header field value that would break out of its line
pub fn validate_header_value(name: &str, value: &str) -> SlurpResult<()> {
    if value.contains('\r') || value.contains('\n') {
        return Err(SlurpError::invalid_format(format!(
            "line break in {} value: {:?}",
            name, value
        )));
    }

    if value.contains('\0') {
        return Err(SlurpError::invalid_format(format!(
            "null byte in {} value: {:?}",
            name, value
        )));
    }

    Ok(())
}
