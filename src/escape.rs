//! Backslash escape transforms (`\xHH`, `\OOO`, `\uHHHH`).
//!
//! Each formats the raw code point ordinal at its natural width: code points
//! beyond one byte / four hex digits emit more digits rather than being
//! truncated or split into surrogate pairs.

/// Encode every character as a `\x` hex escape, lowercase, minimum two digits.
pub fn encode_hex(input: &str) -> String {
    input
        .chars()
        .map(|c| format!("\\x{:02x}", c as u32))
        .collect()
}

/// Encode every character as a backslash octal escape, no zero padding.
pub fn encode_octal(input: &str) -> String {
    input.chars().map(|c| format!("\\{:o}", c as u32)).collect()
}

/// Encode every character as a `\u` hex escape, lowercase, minimum four digits.
pub fn encode_unicode(input: &str) -> String {
    input
        .chars()
        .map(|c| format!("\\u{:04x}", c as u32))
        .collect()
}
