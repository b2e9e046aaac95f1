//! Common types and static tables used throughout slurp

use strum_macros::{Display, EnumString, IntoStaticStr};

/// SIP request methods slurp knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Method {
    INVITE,
    REGISTER,
    NOTIFY,
    SUBSCRIBE,
    ACK,
}

impl Method {
    /// Wire form of the method token, always uppercase
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Every request type currently supported
pub const SUPPORTED_METHODS: [Method; 5] = [
    Method::INVITE,
    Method::REGISTER,
    Method::NOTIFY,
    Method::SUBSCRIBE,
    Method::ACK,
];

/// Supported response codes and their reason phrases
pub static SUPPORTED_RESPONSES: &[(u16, &str)] = &[
    (100, "Trying"),
    (180, "Ringing"),
    (183, "Session Progress"),
    (200, "OK"),
    (401, "Unauthorized"),
    (404, "Not Found"),
    (486, "Busy Here"),
];

/// Look up the reason phrase for a supported response code
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    SUPPORTED_RESPONSES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, phrase)| *phrase)
}
