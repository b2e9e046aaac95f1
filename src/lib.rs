//! Slurp - SIP request modelling
//!
//! Converts between the wire text of a SIP request (request line and
//! header block) and structured header records, for INVITE and REGISTER.
//!
//! ```
//! use slurp::{Header, Invite, Message};
//!
//! let text = "INVITE sip:bob@biloxi.com SIP/2.0\r\n\
//!             Via: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds\r\n\
//!             To: Bob <sip:bob@biloxi.com>\r\n\
//!             From: Alice <sip:alice@atlanta.com>;tag=1928301774\r\n\
//!             Call-ID: a84b4c76e66710@pc33.atlanta.com\r\n\
//!             CSeq: 314159 INVITE\r\n\r\n";
//!
//! let mut invite = Invite::new();
//! invite.parse(text).unwrap();
//! assert_eq!(invite.headers().to.value(), "Bob");
//! assert_eq!(invite.control().sequence, 314159);
//! ```

pub mod diagnostics;
pub mod error;
pub mod header;
pub mod limits;
pub mod message;
pub mod parser;
pub mod records;
pub mod render;
pub mod types;
pub mod validation;
pub mod validator;

pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use error::{SlurpError, SlurpResult};
pub use header::{Header, HeaderValue, RepeatableHeader, SingleTagHeader};
pub use limits::ParserLimits;
pub use message::{Invite, Message, Register, Request};
pub use parser::{parse_from_to, parse_headers, HeaderParser};
pub use records::{CallControlHeaders, CommonHeaders, Via};
pub use render::render_headers;
pub use types::{reason_phrase, Method, SUPPORTED_METHODS, SUPPORTED_RESPONSES};
pub use validator::validate_request_line;
