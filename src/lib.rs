mod case;
mod chunked;
mod entity;
mod escape;
mod method;
mod percent;
mod rotate;

pub use method::{Method, UnknownMethod};

/// Result returned by [`encode_payload`] when the method name is not recognized.
pub const UNKNOWN_METHOD: &str = "Unknown encoding method.";

/// Encode a payload with the given method.
///
/// Every transform is a pure function of its input: no state, no randomness,
/// no I/O. Encoding never fails; the output is ASCII except where the
/// transform itself emits the input's characters (e.g. `mixed_case`).
pub fn encode(payload: &str, method: Method) -> String {
    match method {
        Method::Url => percent::encode_component(payload),
        Method::DoubleUrl => percent::encode_component(&percent::encode_component(payload)),
        Method::Html => entity::escape_markup(payload),
        Method::HtmlHex => entity::encode_hex(payload),
        Method::HtmlDec => entity::encode_dec(payload),
        Method::Base64 => chunked::encode_base64(payload.as_bytes()),
        Method::Hex => escape::encode_hex(payload),
        Method::Octal => escape::encode_octal(payload),
        Method::Rot13 => rotate::rot13(payload),
        Method::MixedCase => case::alternate(payload),
        Method::Unicode => escape::encode_unicode(payload),
    }
}

/// Encode a payload with a method selected by name.
///
/// Method names are matched case-insensitively. An unrecognized name yields
/// the [`UNKNOWN_METHOD`] sentinel as a normal return value rather than an
/// error, so batch callers can assert on it without error machinery. Callers
/// that want a typed outcome should parse with [`Method::from_str`] and call
/// [`encode`] directly.
pub fn encode_payload(payload: &str, method: &str) -> String {
    match Method::from_str(method) {
        Ok(m) => encode(payload, m),
        Err(_) => UNKNOWN_METHOD.to_string(),
    }
}
