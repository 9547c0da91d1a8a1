/// Check if the input is already in Unicode normalization form C.
/// The check never rewrites the input.
pub fn is_nfc(input: &str) -> bool {
    // Fast path: ASCII text is always NFC
    input.is_ascii() || unicode_normalization::is_nfc(input)
}
