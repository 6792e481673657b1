const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BITS_PER_CHAR: usize = 6;
const PAD: char = '=';

/// Standard base64 (RFC 4648 alphabet, '=' padding).
pub fn encode_base64(data: &[u8]) -> String {
    // Pre-calculate output size for better memory allocation
    let output_bits = data.len() * 8;
    let output_chars = (output_bits + BITS_PER_CHAR - 1) / BITS_PER_CHAR;
    let padded_chars = ((output_chars + 3) / 4) * 4;
    let mut result = String::with_capacity(padded_chars);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= BITS_PER_CHAR {
            bits_in_buffer -= BITS_PER_CHAR;
            let index = ((bit_buffer >> bits_in_buffer) & 0x3F) as usize;
            result.push(BASE64_ALPHABET[index] as char);
        }
    }

    // Remaining bits are left-aligned into a final character
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (BITS_PER_CHAR - bits_in_buffer)) & 0x3F) as usize;
        result.push(BASE64_ALPHABET[index] as char);
    }

    while result.len() < padded_chars {
        result.push(PAD);
    }

    result
}
