//! Header block parsing
//!
//! Lines are handled one at a time, matched by lower-cased header name or
//! RFC 3261 compact form, and written into the header records. Headers
//! without a record field are reported to the diagnostic sink and skipped.

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{SlurpError, SlurpResult};
use crate::header::{Header, HeaderValue, RepeatableHeader};
use crate::limits::ParserLimits;
use crate::records::{CallControlHeaders, CommonHeaders, Via};

/// Parses the header block of a split message
pub struct HeaderParser<'a> {
    limits: ParserLimits,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> HeaderParser<'a> {
    pub fn new(limits: ParserLimits, sink: &'a dyn DiagnosticSink) -> Self {
        Self { limits, sink }
    }

    /// Parse the header lines of `lines`, where `lines[0]` is the request
    /// line and is skipped.
    ///
    /// Returns the header-block index of the blank line that ended the
    /// block, or `None` when the input ran out first. Errors carry the same
    /// 0-based header-block index.
    pub fn parse(
        &self,
        lines: &[&str],
        h: &mut CommonHeaders,
        c: &mut CallControlHeaders,
    ) -> SlurpResult<Option<usize>> {
        for (i, raw) in lines.iter().skip(1).enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                return Ok(Some(i));
            }

            if i >= self.limits.max_headers {
                return Err(SlurpError::invalid_format(format!(
                    "Too many headers: more than {}",
                    self.limits.max_headers
                )));
            }

            self.parse_line(line, h, c)
                .map_err(|cause| SlurpError::header_parse(i, lines.concat(), cause))?;
        }

        Ok(None)
    }

    fn parse_line(
        &self,
        line: &str,
        h: &mut CommonHeaders,
        c: &mut CallControlHeaders,
    ) -> SlurpResult<()> {
        if line.len() > self.limits.max_header_line_length {
            return Err(SlurpError::invalid_format(format!(
                "Header line length {} exceeds maximum {}",
                line.len(),
                self.limits.max_header_line_length
            )));
        }

        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| SlurpError::invalid_format(line))?;
        let value = value.trim();

        match name.trim().to_ascii_lowercase().as_str() {
            // SIP integer values must fit in 32 bits
            "max-forwards" => h.forward = parse_u32(value)?,
            "contact" | "m" => h.contacts.extend(parse_contacts(value)?),
            "content-type" | "c" => h.content_type = value.to_string(),
            "content-length" | "l" => h.content_length = parse_u32(value)?,
            "via" | "v" => c.via.push(parse_via(value)?),
            "cseq" => {
                // The CSeq method is not checked against the request line
                let number = value.split_whitespace().next().unwrap_or("");
                c.sequence = parse_u32(number)?;
            }
            "call-id" | "i" => c.call_id = value.to_string(),
            "from" | "f" => parse_from_to(value, &mut h.from)?,
            "to" | "t" => parse_from_to(value, &mut h.to)?,
            "user-agent" => h.user_agent = value.to_string(),
            "www-authenticate" | "proxy-authenticate" => c.authenticate = value.to_string(),
            _ => self
                .sink
                .notice(&format!("Ignoring Unrecognized Header: {}", line)),
        }

        Ok(())
    }
}

/// Parse a header block with default limits, logging skipped headers
/// through `tracing`.
pub fn parse_headers(
    lines: &[&str],
    h: &mut CommonHeaders,
    c: &mut CallControlHeaders,
) -> SlurpResult<Option<usize>> {
    HeaderParser::new(ParserLimits::default(), &TracingSink).parse(lines, h, c)
}

/// Parse a From or To value (`Name <uri>;tag=...`) into `target`.
///
/// The `<...>` URI span is required. Only the first `tag` parameter is
/// kept; other parameters are offered to `target`, which for the
/// single-tag kind drops them.
pub fn parse_from_to<H: Header + ?Sized>(value: &str, target: &mut H) -> SlurpResult<()> {
    parse_name_addr(value, target, true)
}

/// Parse a Contact value, which may hold several comma separated entries
pub fn parse_contacts(value: &str) -> SlurpResult<Vec<HeaderValue>> {
    split_outside_brackets(value, ',')
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let mut contact = RepeatableHeader::default();
            parse_name_addr(entry, &mut contact, false)?;
            Ok(HeaderValue::Repeatable(contact))
        })
        .collect()
}

/// Parse the sent-protocol and sent-by of a Via value. Parameters are
/// discarded on read.
pub fn parse_via(value: &str) -> SlurpResult<Via> {
    let sent = value.split(';').next().unwrap_or("");
    let mut parts = sent.split_whitespace();

    let (protocol, host) = match (parts.next(), parts.next()) {
        (Some(protocol), Some(host)) => (protocol, host),
        _ => return Err(SlurpError::invalid_format(value)),
    };
    // SIP/2.0/UDP -> UDP
    let transport = protocol.rsplit('/').next().unwrap_or(protocol);

    Ok(Via::new(transport, host))
}

fn parse_u32(value: &str) -> SlurpResult<u32> {
    value
        .parse::<u32>()
        .map_err(|e| SlurpError::invalid_format(format!("{}: {}", value, e)))
}

/// Shared name-addr parsing for Contact, From and To.
///
/// `Name <uri>;p=v` splits on the angle brackets. Without brackets the
/// whole text before the first `;` is the URI, unless `require_brackets`
/// is set, in which case that is an error.
fn parse_name_addr<H: Header + ?Sized>(
    value: &str,
    target: &mut H,
    require_brackets: bool,
) -> SlurpResult<()> {
    let value = value.trim();

    let (display, uri, params) = match value.find('<') {
        Some(open) => {
            let rest = &value[open + 1..];
            let close = rest
                .find('>')
                .ok_or_else(|| SlurpError::invalid_format(value))?;
            (value[..open].trim(), &rest[..close], &rest[close + 1..])
        }
        None if require_brackets => return Err(SlurpError::invalid_format(value)),
        None => {
            let (uri, params) = value.split_once(';').unwrap_or((value, ""));
            ("", uri.trim(), params)
        }
    };

    target.set_value(display);
    target.set_uri(uri);

    let mut seen: Vec<&str> = Vec::new();
    for segment in params.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (name, param_value) = segment.split_once('=').unwrap_or((segment, ""));
        let name = name.trim();
        // first occurrence wins
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);
        target.set_param(name, param_value.trim());
    }

    Ok(())
}

/// Split on `sep` wherever it is not inside `<...>` or a quoted string
fn split_outside_brackets(value: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quoted = false;
    let mut bracketed = false;
    let mut start = 0;

    for (i, ch) in value.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            '<' if !quoted => bracketed = true,
            '>' if !quoted => bracketed = false,
            c if c == sep && !quoted && !bracketed => {
                parts.push(&value[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);

    parts
}
