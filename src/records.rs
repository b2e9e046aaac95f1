//! Header records filled by the parser and read by the renderer

use crate::header::HeaderValue;

/// One Via hop: the transport (UDP, TCP) and the sent-by host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Via {
    pub transport: String,
    pub host: String,
}

impl Via {
    pub fn new(transport: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            transport: transport.into(),
            host: host.into(),
        }
    }
}

impl<T: Into<String>, H: Into<String>> From<(T, H)> for Via {
    fn from((transport, host): (T, H)) -> Self {
        Via::new(transport, host)
    }
}

impl PartialEq<(&str, &str)> for Via {
    fn eq(&self, other: &(&str, &str)) -> bool {
        self.transport == other.0 && self.host == other.1
    }
}

/// Header information common across all messages
#[derive(Debug, Clone, PartialEq)]
pub struct CommonHeaders {
    /// Single-tag kind
    pub to: HeaderValue,
    /// Single-tag kind
    pub from: HeaderValue,
    /// Repeatable kind, in encounter order
    pub contacts: Vec<HeaderValue>,
    /// Max-Forwards; zero means "unset" and renders as the default
    pub forward: u32,
    pub user_agent: String,
    pub content_type: String,
    /// Only rendered together with a non-empty `content_type`
    pub content_length: u32,
}

impl Default for CommonHeaders {
    fn default() -> Self {
        Self {
            to: HeaderValue::single_tag(),
            from: HeaderValue::single_tag(),
            contacts: Vec::new(),
            forward: 0,
            user_agent: String::new(),
            content_type: String::new(),
            content_length: 0,
        }
    }
}

/// Headers that are usually set by the system, not by users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallControlHeaders {
    /// At least one hop is required before rendering
    pub via: Vec<Via>,
    /// Branch of the most recent Via, or ours if we added it
    pub via_branch: String,
    pub call_id: String,
    pub sequence: u32,
    /// Opaque challenge value
    pub authenticate: String,
}
