/// Escape the five HTML-significant characters as entities.
///
/// The apostrophe uses the numeric form `&#x27;` since the named `&apos;`
/// entity is not defined in HTML 4.
pub fn escape_markup(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }

    result
}

/// Encode every character as a hexadecimal entity (`&#x41;`), uppercase digits.
pub fn encode_hex(input: &str) -> String {
    input
        .chars()
        .map(|c| format!("&#x{:X};", c as u32))
        .collect()
}

/// Encode every character as a decimal entity (`&#65;`).
pub fn encode_dec(input: &str) -> String {
    input.chars().map(|c| format!("&#{};", c as u32)).collect()
}
