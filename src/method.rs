/// Supported encoding methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Url,
    DoubleUrl,
    Html,
    HtmlHex,
    HtmlDec,
    Base64,
    Hex,
    Octal,
    Rot13,
    MixedCase,
    Unicode,
}

/// Error returned when a method name does not match any supported method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl std::fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown encoding method: {}", self.0)
    }
}

impl std::error::Error for UnknownMethod {}

impl Method {
    /// All methods, in listing order.
    pub const ALL: &'static [Method] = &[
        Method::Url,
        Method::DoubleUrl,
        Method::Html,
        Method::HtmlHex,
        Method::HtmlDec,
        Method::Base64,
        Method::Hex,
        Method::Octal,
        Method::Rot13,
        Method::MixedCase,
        Method::Unicode,
    ];

    /// Parse a method from its name, case-insensitively.
    pub fn from_str(s: &str) -> Result<Self, UnknownMethod> {
        match s.to_lowercase().as_str() {
            "url" => Ok(Method::Url),
            "double_url" | "double-url" => Ok(Method::DoubleUrl),
            "html" => Ok(Method::Html),
            "html_hex" | "html-hex" => Ok(Method::HtmlHex),
            "html_dec" | "html-dec" => Ok(Method::HtmlDec),
            "base64" => Ok(Method::Base64),
            "hex" => Ok(Method::Hex),
            "octal" => Ok(Method::Octal),
            "rot13" => Ok(Method::Rot13),
            "mixed_case" | "mixed-case" => Ok(Method::MixedCase),
            "unicode" => Ok(Method::Unicode),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Url => "url",
            Method::DoubleUrl => "double_url",
            Method::Html => "html",
            Method::HtmlHex => "html_hex",
            Method::HtmlDec => "html_dec",
            Method::Base64 => "base64",
            Method::Hex => "hex",
            Method::Octal => "octal",
            Method::Rot13 => "rot13",
            Method::MixedCase => "mixed_case",
            Method::Unicode => "unicode",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &str {
        match self {
            Method::Url => "percent-encode URL component (RFC 3986, UTF-8 bytes)",
            Method::DoubleUrl => "percent-encode twice (encodes the % signs)",
            Method::Html => "escape &, <, >, \" and ' as HTML entities",
            Method::HtmlHex => "every character as a hex entity (&#x41;)",
            Method::HtmlDec => "every character as a decimal entity (&#65;)",
            Method::Base64 => "standard base64 over UTF-8 bytes (RFC 4648)",
            Method::Hex => "every character as a \\x hex escape",
            Method::Octal => "every character as a backslash octal escape",
            Method::Rot13 => "rotate ASCII letters by 13 places",
            Method::MixedCase => "aLtErNaTe case by character position",
            Method::Unicode => "every character as a \\u hex escape",
        }
    }
}
