use crate::character_sets::{is_excluded, is_fragment_char, is_path_char, is_query_char};
use crate::helpers::scan_while;
use crate::url_components::{Span, Tail};

/// Match port, path, query and fragment from `start` to the end of the input.
///
/// Each part is optional but they must appear in that order, and nothing may
/// follow the fragment. A `:` must be followed by at least one digit; the
/// port value itself is not range checked.
pub fn match_tail(input: &str, start: usize) -> Option<Tail> {
    let bytes = input.as_bytes();
    let mut tail = Tail::default();
    let mut pos = start;

    if bytes.get(pos) == Some(&b':') {
        let end = scan_while(input, pos + 1, |c| c.is_ascii_digit());
        tail.port = Some(Span::non_empty(pos + 1, end)?);
        pos = end;
    }

    if bytes.get(pos) == Some(&b'/') {
        let end = scan_while(input, pos + 1, is_path_char);
        tail.path = Span::non_empty(pos, end);
        pos = end;
    }

    if bytes.get(pos) == Some(&b'?') {
        let end = scan_while(input, pos + 1, is_query_char);
        tail.query = Span::non_empty(pos + 1, end);
        pos = end;
    }

    if bytes.get(pos) == Some(&b'#') {
        let end = scan_while(input, pos + 1, is_fragment_char);
        tail.fragment = Span::non_empty(pos + 1, end);
        pos = end;
    }

    (pos == input.len()).then_some(tail)
}

/// Offset after the last whitespace or control character in the input, or 0
/// when there is none. No tail can start before this offset.
pub fn clean_suffix_start(input: &str) -> usize {
    input
        .char_indices()
        .rev()
        .find(|&(_, c)| is_excluded(c))
        .map_or(0, |(offset, c)| offset + c.len_utf8())
}

/// Check if [`match_tail`] would succeed at `start` without scanning the path,
/// query or fragment. With no excluded character left, a path, query or
/// fragment always runs to the end of the input, so only the port and the
/// character after it matter.
pub fn tail_reaches_end(input: &str, start: usize, clean_from: usize) -> bool {
    if start < clean_from {
        return false;
    }
    let bytes = input.as_bytes();
    let mut pos = start;
    if bytes.get(pos) == Some(&b':') {
        let end = scan_while(input, pos + 1, |c| c.is_ascii_digit());
        if end == pos + 1 {
            return false;
        }
        pos = end;
    }
    matches!(bytes.get(pos), None | Some(b'/' | b'?' | b'#'))
}
