//! Header values shared by the name/URI/parameter style headers
//!
//! Not every header is a [`Header`]. Max-Forwards or Call-ID are too simple
//! to need one and live as plain fields on the header records. The two
//! kinds here differ in what parameters they accept:
//!
//! - [`RepeatableHeader`] (Contact) keeps any parameter, in insertion order.
//! - [`SingleTagHeader`] (To, From) keeps only `tag` and drops the rest.
//!
//! [`HeaderValue`] wraps either kind so parsing and rendering can share one
//! code path.

/// Capabilities common to every structured header value
pub trait Header {
    /// The display name, like `Bob`
    fn value(&self) -> &str;
    fn set_value(&mut self, value: &str);

    /// The URI, like `sip:bob@biloxi.com`. Empty until set or parsed.
    fn uri(&self) -> &str;
    fn set_uri(&mut self, uri: &str);

    /// Parameter lookup; an unknown name yields the empty string
    fn param(&self, name: &str) -> &str;
    fn set_param(&mut self, name: &str, value: &str);

    /// All stored parameters as name/value pairs
    fn params(&self) -> Vec<(&str, &str)>;

    /// Parameters in wire form, appended after the `<uri>` span
    fn param_string(&self) -> String;
}

/// A header that may repeat and carry arbitrary parameters (Contact)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatableHeader {
    value: String,
    uri: String,
    // Insertion ordered so rendering is deterministic
    params: Vec<(String, String)>,
}

impl RepeatableHeader {
    pub fn new(value: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            uri: uri.into(),
            params: Vec::new(),
        }
    }

    /// Builder form of [`Header::set_param`]
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.set_param(name, value);
        self
    }
}

impl Header for RepeatableHeader {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    fn set_uri(&mut self, uri: &str) {
        self.uri = uri.to_string();
    }

    fn param(&self, name: &str) -> &str {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    fn set_param(&mut self, name: &str, value: &str) {
        match self.params.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.params.push((name.to_string(), value.to_string())),
        }
    }

    fn params(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn param_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("; {}={}", k, v))
            .collect()
    }
}

/// A header whose only parameter is `tag` (To and From)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleTagHeader {
    value: String,
    uri: String,
    tag: String,
}

impl SingleTagHeader {
    pub fn new(value: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            uri: uri.into(),
            tag: String::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Header for SingleTagHeader {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    fn set_uri(&mut self, uri: &str) {
        self.uri = uri.to_string();
    }

    fn param(&self, name: &str) -> &str {
        if name == "tag" {
            &self.tag
        } else {
            ""
        }
    }

    fn set_param(&mut self, name: &str, value: &str) {
        // To and From carry nothing but a tag; everything else is dropped
        if name == "tag" {
            self.tag = value.to_string();
        }
    }

    fn params(&self) -> Vec<(&str, &str)> {
        vec![("tag", self.tag.as_str())]
    }

    fn param_string(&self) -> String {
        format!("; tag={}", self.tag)
    }
}

/// Either header kind behind one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Repeatable(RepeatableHeader),
    SingleTag(SingleTagHeader),
}

impl HeaderValue {
    /// An empty value of the repeatable kind
    pub fn repeatable() -> Self {
        HeaderValue::Repeatable(RepeatableHeader::default())
    }

    /// An empty value of the single-tag kind
    pub fn single_tag() -> Self {
        HeaderValue::SingleTag(SingleTagHeader::default())
    }

    fn inner(&self) -> &dyn Header {
        match self {
            HeaderValue::Repeatable(h) => h,
            HeaderValue::SingleTag(h) => h,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Header {
        match self {
            HeaderValue::Repeatable(h) => h,
            HeaderValue::SingleTag(h) => h,
        }
    }
}

impl Header for HeaderValue {
    fn value(&self) -> &str {
        self.inner().value()
    }

    fn set_value(&mut self, value: &str) {
        self.inner_mut().set_value(value)
    }

    fn uri(&self) -> &str {
        self.inner().uri()
    }

    fn set_uri(&mut self, uri: &str) {
        self.inner_mut().set_uri(uri)
    }

    fn param(&self, name: &str) -> &str {
        self.inner().param(name)
    }

    fn set_param(&mut self, name: &str, value: &str) {
        self.inner_mut().set_param(name, value)
    }

    fn params(&self) -> Vec<(&str, &str)> {
        self.inner().params()
    }

    fn param_string(&self) -> String {
        self.inner().param_string()
    }
}

impl From<RepeatableHeader> for HeaderValue {
    fn from(h: RepeatableHeader) -> Self {
        HeaderValue::Repeatable(h)
    }
}

impl From<SingleTagHeader> for HeaderValue {
    fn from(h: SingleTagHeader) -> Self {
        HeaderValue::SingleTag(h)
    }
}
