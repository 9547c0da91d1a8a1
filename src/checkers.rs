use crate::character_sets::is_scheme_char;

/// Check if a string is a scheme token: one ASCII letter followed by letters,
/// digits, `+`, `.` or `-` (case insensitive).
pub fn is_scheme_token(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic()) && chars.all(is_scheme_char)
}

/// Check if a string consists only of ASCII digits (at least one).
pub fn is_ascii_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Value of a decimal number of at most three ASCII digits.
pub fn small_decimal(input: &str) -> Option<u16> {
    if input.len() > 3 || !is_ascii_digits(input) {
        return None;
    }
    Some(
        input
            .bytes()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0')),
    )
}

/// RFC 3986 `dec-octet`: 0-255 without leading zeros.
pub fn is_dec_octet(input: &str) -> bool {
    (input == "0" || !input.starts_with('0')) && small_decimal(input).is_some_and(|v| v <= 255)
}
