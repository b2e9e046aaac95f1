//! Header block rendering
//!
//! Output order is fixed: Via, Max-Forwards, From, To, Contact, Call-ID,
//! then Content-Type/Content-Length. Lines are joined by CRLF with no
//! trailing separator; the message variant appends CSeq and the rest.

use crate::error::{SlurpError, SlurpResult};
use crate::header::Header;
use crate::limits::{CRLF, DEFAULT_MAX_FORWARDS};
use crate::records::{CallControlHeaders, CommonHeaders};
use crate::validation::validate_header_value;

/// Render the common header block of a request
pub fn render_headers(h: &CommonHeaders, c: &CallControlHeaders) -> SlurpResult<String> {
    let mut lines: Vec<String> = Vec::with_capacity(10);

    // As a client or server, never a proxy, we only send one Via: ours
    let via = c
        .via
        .first()
        .ok_or_else(|| SlurpError::invalid_format("at least one Via is required to render"))?;
    lines.push(line(
        "Via",
        &format!("SIP/2.0/{} {};branch={}", via.transport, via.host, c.via_branch),
    )?);

    let forwards = if h.forward == 0 {
        DEFAULT_MAX_FORWARDS
    } else {
        h.forward
    };
    lines.push(format!("Max-Forwards: {}", forwards));

    // there is always a tag in From, even an empty one
    lines.push(line(
        "From",
        &format!("{};tag={}", name_addr(&h.from), h.from.param("tag")),
    )?);

    let mut to = name_addr(&h.to);
    let to_tag = h.to.param("tag");
    if !to_tag.is_empty() {
        to.push_str(";tag=");
        to.push_str(to_tag);
    }
    lines.push(line("To", &to)?);

    if h.contacts.is_empty() {
        // no Contact set: reach us at the From address
        lines.push(line("Contact", &name_addr(&h.from))?);
    } else {
        for contact in &h.contacts {
            lines.push(line(
                "Contact",
                &format!("{}{}", name_addr(contact), contact.param_string()),
            )?);
        }
    }

    lines.push(line("Call-ID", &c.call_id)?);

    if !h.content_type.is_empty() {
        lines.push(line("Content-Type", &h.content_type)?);
        lines.push(format!("Content-Length: {}", h.content_length));
    }

    Ok(lines.join(CRLF))
}

/// `Name <uri>`, or just `<uri>` when there is no display name. The empty
/// case never leaves a double space after the header colon.
fn name_addr<H: Header + ?Sized>(header: &H) -> String {
    if header.value().is_empty() {
        format!("<{}>", header.uri())
    } else {
        format!("{} <{}>", header.value(), header.uri())
    }
}

fn line(name: &str, value: &str) -> SlurpResult<String> {
    validate_header_value(name, value)?;
    Ok(format!("{}: {}", name, value))
}
