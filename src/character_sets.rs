/// ASCII classification flags
const ALPHA: u8 = 1 << 0;
const DIGIT: u8 = 1 << 1;
const SCHEME: u8 = 1 << 2;
const EXCLUDED: u8 = 1 << 3;

/// ASCII character classification for the URL grammar.
/// `EXCLUDED` marks control characters and whitespace, which no component
/// after the userinfo may contain.
const ASCII_CLASS_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];

    // Letters (both cases) are alphabetic and valid in scheme tokens
    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = ALPHA | SCHEME;
        table[(i - 32) as usize] = ALPHA | SCHEME;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = DIGIT | SCHEME;
        i += 1;
    }
    table[b'+' as usize] = SCHEME;
    table[b'.' as usize] = SCHEME;
    table[b'-' as usize] = SCHEME;

    // C0 controls, space and DEL
    let mut i = 0;
    while i <= 0x20 {
        table[i] = EXCLUDED;
        i += 1;
    }
    table[0x7F] = EXCLUDED;

    table
};

fn ascii_class(c: char) -> u8 {
    if c.is_ascii() {
        ASCII_CLASS_TABLE[c as usize]
    } else {
        0
    }
}

/// Non-ASCII code points accepted in host names (U+00A1 through U+FFFF)
fn is_extended_host_char(c: char) -> bool {
    ('\u{00A1}'..='\u{FFFF}').contains(&c)
}

/// Check if a character may appear in the body of a domain label
pub fn is_label_char(c: char) -> bool {
    ascii_class(c) & (ALPHA | DIGIT) != 0 || is_extended_host_char(c)
}

/// Check if a character may appear in a non-Punycode top-level domain
pub fn is_tld_char(c: char) -> bool {
    ascii_class(c) & ALPHA != 0 || is_extended_host_char(c)
}

/// Check if a character may follow the `xn--` prefix of a Punycode label
pub fn is_punycode_char(c: char) -> bool {
    ascii_class(c) & (ALPHA | DIGIT) != 0 || c == '-'
}

/// Check if a character can be part of a domain-form host run
pub fn is_host_char(c: char) -> bool {
    is_label_char(c) || c == '-' || c == '.'
}

/// Check if a character can follow the first letter of a scheme token
pub fn is_scheme_char(c: char) -> bool {
    ascii_class(c) & SCHEME != 0
}

/// Check if a character is whitespace or a control character (Unicode `Cc`)
pub fn is_excluded(c: char) -> bool {
    if c.is_ascii() {
        ascii_class(c) & EXCLUDED != 0
    } else {
        c.is_whitespace() || c.is_control()
    }
}

pub fn is_path_char(c: char) -> bool {
    !is_excluded(c) && c != '?' && c != '#'
}

pub fn is_query_char(c: char) -> bool {
    !is_excluded(c) && c != '#'
}

pub fn is_fragment_char(c: char) -> bool {
    !is_excluded(c)
}
