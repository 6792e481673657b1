const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a string as a URL component (RFC 3986).
///
/// Unreserved characters (ALPHA / DIGIT / '-' / '.' / '_' / '~') pass through;
/// every other byte of the UTF-8 encoding becomes `%XX` with uppercase hex.
pub fn encode_component(input: &str) -> String {
    // Worst case every byte becomes "%XX"
    let mut result = String::with_capacity(input.len() * 3);

    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                result.push(byte as char);
            }
            _ => {
                result.push('%');
                result.push(HEX_UPPER[(byte >> 4) as usize] as char);
                result.push(HEX_UPPER[(byte & 0x0F) as usize] as char);
            }
        }
    }

    result
}
