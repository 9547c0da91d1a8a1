use crate::character_sets::is_punycode_char;

/// Check if 4 bytes match "xn--" (case insensitive)
pub fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Same as [`is_punycode_prefix`] over decoded characters
pub fn starts_with_punycode_prefix(chars: &[char]) -> bool {
    chars.len() >= 4
        && matches!(chars[0], 'x' | 'X')
        && matches!(chars[1], 'n' | 'N')
        && chars[2] == '-'
        && chars[3] == '-'
}

/// Check if a label is `xn--` followed by at least one ASCII alphanumeric or
/// hyphen. The encoded part is not decoded.
pub fn is_punycode_label(label: &str) -> bool {
    is_punycode_prefix(label.as_bytes()) && label.len() > 4 && label[4..].chars().all(is_punycode_char)
}

/// Hyphens in the third and fourth position of a label collide with the
/// Punycode prefix (UTS #46 validity criteria).
pub fn collides_with_punycode(chars: &[char], label_start: usize) -> bool {
    chars.get(label_start + 2) == Some(&'-') && chars.get(label_start + 3) == Some(&'-')
}
