/// ROT13: rotate ASCII letters by 13 places, leave everything else alone.
///
/// Self-inverse over its domain, so applying it twice restores the input.
pub fn rot13(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'A'..='Z' => (((c as u8 - b'A' + 13) % 26) + b'A') as char,
            'a'..='z' => (((c as u8 - b'a' + 13) % 26) + b'a') as char,
            _ => c,
        })
        .collect()
}
