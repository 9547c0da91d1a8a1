use crate::compat::Vec;

/// Byte offset of the first character at or after `start` that `accept`
/// rejects, or the input length when every remaining character is accepted.
pub fn scan_while(input: &str, start: usize, accept: impl Fn(char) -> bool) -> usize {
    input[start..]
        .char_indices()
        .find(|&(_, c)| !accept(c))
        .map_or(input.len(), |(offset, _)| start + offset)
}

/// Position of the `:` that ends the scheme, provided it is followed by `//`.
/// Optimization: Uses SIMD-accelerated memchr for the colon search
pub fn scheme_separator(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let colon = memchr::memchr(b':', bytes)?;
    bytes[colon..].starts_with(b"://").then_some(colon)
}

/// Every `@` at or after `start` that could terminate a userinfo section.
/// Username and password never span a line feed, so the scan stops at the
/// first one.
pub fn userinfo_terminators(input: &str, start: usize) -> Vec<usize> {
    let bytes = &input.as_bytes()[start..];
    let limit = memchr::memchr(b'\n', bytes).unwrap_or(bytes.len());
    memchr::memchr_iter(b'@', &bytes[..limit])
        .map(|pos| start + pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_while() {
        assert_eq!(scan_while("abc123", 0, |c| c.is_ascii_alphabetic()), 3);
        assert_eq!(scan_while("abc", 1, |c| c.is_ascii_alphabetic()), 3);
        assert_eq!(scan_while("✪df.ws", 0, |c| c != '.'), 5);
        assert_eq!(scan_while("", 0, |_| true), 0);
    }

    #[test]
    fn test_scheme_separator() {
        assert_eq!(scheme_separator("http://example.com"), Some(4));
        assert_eq!(scheme_separator("://x"), Some(0));
        assert_eq!(scheme_separator("http:/example.com"), None);
        assert_eq!(scheme_separator("mailto:a@b.c"), None);
        assert_eq!(scheme_separator("//a"), None);
    }

    #[test]
    fn test_userinfo_terminators() {
        assert_eq!(userinfo_terminators("http://a@b@c", 7), [8, 10]);
        assert_eq!(userinfo_terminators("http://a\n@b", 7), Vec::<usize>::new());
        assert_eq!(userinfo_terminators("http://example.com", 7), Vec::<usize>::new());
    }
}
