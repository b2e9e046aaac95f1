//! Parser limits and protocol constants
//!
//! Limits guard against oversized input without rejecting anything a
//! compliant peer would send.

/// Maximum message size accepted by default (64KB - 1)
pub const MAX_MESSAGE_SIZE: usize = 65535;

/// Maximum number of header lines in a single message
pub const MAX_HEADERS: usize = 256;

/// Maximum length of a single header line
pub const MAX_HEADER_LINE_LENGTH: usize = 8192;

/// Max-Forwards value written when none was set. We are never a proxy.
pub const DEFAULT_MAX_FORWARDS: u32 = 70;

/// The only protocol version spoken
pub const SIP_VERSION: &str = "SIP/2.0";

/// Wire line separator used when rendering
pub const CRLF: &str = "\r\n";

/// Value of the Supported header appended to every rendered request
pub const SUPPORTED_OPTIONS: &str = "SUBSCRIBE, NOTIFY";

/// Size limits applied while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLimits {
    /// Largest message accepted, in bytes
    pub max_message_size: usize,
    /// Most header lines accepted before the blank line
    pub max_headers: usize,
    /// Longest single header line accepted, in bytes
    pub max_header_line_length: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_message_size: MAX_MESSAGE_SIZE,
            max_headers: MAX_HEADERS,
            max_header_line_length: MAX_HEADER_LINE_LENGTH,
        }
    }
}
