/// Alternate case by character position: even (0-based) positions are forced
/// lower, odd positions upper.
///
/// Uncased characters pass through but still consume a position. Unicode case
/// mapping can expand a character (e.g. U+00DF to "SS"); parity follows input
/// positions, not output length.
pub fn alternate(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for (i, c) in input.chars().enumerate() {
        if i % 2 == 0 {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
    }

    result
}
