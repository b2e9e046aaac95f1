//! Request models
//!
//! A message is either built field by field and rendered, or filled
//! wholesale by `parse`. Each parse replaces the header records entirely;
//! there is no merging.

use std::borrow::Cow;
use std::str::FromStr;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{SlurpError, SlurpResult};
use crate::header::Header;
use crate::limits::{ParserLimits, CRLF, SIP_VERSION, SUPPORTED_OPTIONS};
use crate::parser::HeaderParser;
use crate::records::{CallControlHeaders, CommonHeaders};
use crate::render::render_headers;
use crate::types::Method;
use crate::validator::validate_request_line;

/// A SIP request that can be rendered to and parsed from wire text
pub trait Message {
    /// Render the full request text
    fn render(&self) -> SlurpResult<String>;

    /// Parse with explicit limits and diagnostic sink
    fn parse_with(
        &mut self,
        message: &str,
        limits: &ParserLimits,
        sink: &dyn DiagnosticSink,
    ) -> SlurpResult<()>;

    /// Parse with default limits, logging skipped headers through `tracing`
    fn parse(&mut self, message: &str) -> SlurpResult<()> {
        self.parse_with(message, &ParserLimits::default(), &TracingSink)
    }

    fn method(&self) -> Method;
    fn headers(&self) -> &CommonHeaders;
    fn headers_mut(&mut self) -> &mut CommonHeaders;
    fn control(&self) -> &CallControlHeaders;
    fn control_mut(&mut self) -> &mut CallControlHeaders;

    /// Request-target from the last parsed request line
    fn uri(&self) -> &str;

    fn payload(&self) -> &[u8];
    fn set_payload(&mut self, data: Vec<u8>);

    fn string_payload(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.payload())
    }
}

/// Everything a parse produces, committed to the message only on success
struct ParsedRequest {
    uri: String,
    headers: CommonHeaders,
    control: CallControlHeaders,
    payload: Vec<u8>,
}

fn parse_request(
    message: &str,
    method: Method,
    limits: &ParserLimits,
    sink: &dyn DiagnosticSink,
) -> SlurpResult<ParsedRequest> {
    if message.len() > limits.max_message_size {
        return Err(SlurpError::invalid_format(format!(
            "Message size {} exceeds maximum {}",
            message.len(),
            limits.max_message_size
        )));
    }

    let lines: Vec<&str> = message.split('\n').collect();
    let request_line = lines[0].trim();
    validate_request_line(request_line, method)?;

    // <METHOD> <target> SIP/<version>, nothing more or less
    let tokens: Vec<&str> = request_line.split_whitespace().collect();
    let uri = match tokens.as_slice() {
        [_, target, _] => target.to_string(),
        _ => return Err(SlurpError::invalid_format(request_line)),
    };

    let mut headers = CommonHeaders::default();
    let mut control = CallControlHeaders::default();
    let end = HeaderParser::new(*limits, sink).parse(&lines, &mut headers, &mut control)?;

    // The blank line sits at lines[end + 1]; the payload is what follows it
    let payload = match end {
        Some(end) if end + 2 < lines.len() => lines[end + 2..].join("\n").into_bytes(),
        _ => Vec::new(),
    };

    tracing::trace!(
        method = method.as_str(),
        %uri,
        payload_len = payload.len(),
        "parsed request"
    );

    Ok(ParsedRequest {
        uri,
        headers,
        control,
        payload,
    })
}

/// Assemble request line, header block, method trailer and payload
fn render_request(
    method: Method,
    target: &str,
    headers: &CommonHeaders,
    control: &CallControlHeaders,
    payload: &[u8],
) -> SlurpResult<String> {
    let mut out = format!(
        "{method} {target} {version}{CRLF}{headers}{CRLF}CSeq: {seq} {method}{CRLF}Supported: {supported}{CRLF}{CRLF}",
        method = method.as_str(),
        target = request_target(target),
        version = SIP_VERSION,
        CRLF = CRLF,
        headers = render_headers(headers, control)?,
        // CSeq is rendered here because it is method dependent
        seq = control.sequence,
        supported = SUPPORTED_OPTIONS,
    );
    // the payload goes out byte for byte or not at all
    let payload = std::str::from_utf8(payload).map_err(|e| {
        SlurpError::invalid_format(format!("payload is not valid UTF-8: {}", e))
    })?;
    out.push_str(payload);
    Ok(out)
}

/// Prefix `sip:` unless the target already names a SIP scheme
fn request_target(target: &str) -> Cow<'_, str> {
    if target.starts_with("sip:") || target.starts_with("sips:") {
        Cow::Borrowed(target)
    } else {
        Cow::Owned(format!("sip:{}", target))
    }
}

/// Implement the accessor half of [`Message`] and the parse entry point
/// for a request struct with `headers`, `control`, `payload` and `uri`
/// fields.
macro_rules! impl_message_common {
    ($method:expr) => {
        fn parse_with(
            &mut self,
            message: &str,
            limits: &ParserLimits,
            sink: &dyn DiagnosticSink,
        ) -> SlurpResult<()> {
            let parsed = parse_request(message, $method, limits, sink)?;
            self.uri = parsed.uri;
            self.headers = parsed.headers;
            self.control = parsed.control;
            self.payload = parsed.payload;
            Ok(())
        }

        fn method(&self) -> Method {
            $method
        }

        fn headers(&self) -> &CommonHeaders {
            &self.headers
        }

        fn headers_mut(&mut self) -> &mut CommonHeaders {
            &mut self.headers
        }

        fn control(&self) -> &CallControlHeaders {
            &self.control
        }

        fn control_mut(&mut self) -> &mut CallControlHeaders {
            &mut self.control
        }

        fn uri(&self) -> &str {
            &self.uri
        }

        fn payload(&self) -> &[u8] {
            &self.payload
        }

        fn set_payload(&mut self, data: Vec<u8>) {
            self.payload = data;
        }
    };
}

/// An INVITE request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invite {
    headers: CommonHeaders,
    control: CallControlHeaders,
    payload: Vec<u8>,
    uri: String,
}

impl Invite {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Message for Invite {
    /// The request-target is the To URI as currently set
    fn render(&self) -> SlurpResult<String> {
        render_request(
            Method::INVITE,
            self.headers.to.uri(),
            &self.headers,
            &self.control,
            &self.payload,
        )
    }

    impl_message_common!(Method::INVITE);
}

/// A REGISTER request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Register {
    headers: CommonHeaders,
    control: CallControlHeaders,
    payload: Vec<u8>,
    uri: String,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    /// REGISTER targets the registrar's domain, so the user-info part of
    /// the To URI (everything through the first `@`) is dropped.
    pub fn registrar_target(&self) -> SlurpResult<&str> {
        let to = self.headers.to.uri();
        to.split_once('@')
            .map(|(_, domain)| domain)
            .ok_or_else(|| SlurpError::invalid_format(format!("To URI has no '@': {}", to)))
    }
}

impl Message for Register {
    fn render(&self) -> SlurpResult<String> {
        render_request(
            Method::REGISTER,
            self.registrar_target()?,
            &self.headers,
            &self.control,
            &self.payload,
        )
    }

    impl_message_common!(Method::REGISTER);
}

/// Any request with a message model, chosen by the request line's method
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Invite(Invite),
    Register(Register),
}

impl Request {
    /// Parse a request, picking the model from its method token
    pub fn parse(message: &str) -> SlurpResult<Self> {
        Self::parse_with(message, &ParserLimits::default(), &TracingSink)
    }

    pub fn parse_with(
        message: &str,
        limits: &ParserLimits,
        sink: &dyn DiagnosticSink,
    ) -> SlurpResult<Self> {
        let request_line = message.lines().next().unwrap_or("").trim();
        let token = request_line.split_whitespace().next().unwrap_or("");

        match Method::from_str(token) {
            Ok(Method::INVITE) => {
                let mut invite = Invite::new();
                invite.parse_with(message, limits, sink)?;
                Ok(Request::Invite(invite))
            }
            Ok(Method::REGISTER) => {
                let mut register = Register::new();
                register.parse_with(message, limits, sink)?;
                Ok(Request::Register(register))
            }
            _ => Err(SlurpError::invalid_format(request_line)),
        }
    }

    pub fn as_message(&self) -> &dyn Message {
        match self {
            Request::Invite(m) => m,
            Request::Register(m) => m,
        }
    }

    pub fn as_message_mut(&mut self) -> &mut dyn Message {
        match self {
            Request::Invite(m) => m,
            Request::Register(m) => m,
        }
    }
}
