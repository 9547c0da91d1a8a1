//! Domain-form hosts: a dotted run of labels followed by a top-level domain.
//!
//! A domain is a sequence of units, each an optional `.` and then either a
//! Punycode label (`xn--` followed by ASCII alphanumerics or hyphens) or a
//! plain body of label characters trailed by any number of hyphens. Units may
//! follow each other without a dot, which is how `b-c` splits into `b-` and
//! `c`. A plain unit may not start where its third and fourth characters are
//! hyphens.

use crate::character_sets::{is_label_char, is_punycode_char, is_tld_char};
use crate::compat::{Vec, vec};
use crate::unicode::punycode::{
    collides_with_punycode, is_punycode_label, starts_with_punycode_prefix,
};

/// Split a host run into domain and top-level domain.
/// Returns the byte offset where the top-level domain starts, or `None` if
/// the run is not a valid domain-form host.
pub fn split_domain(host: &str) -> Option<usize> {
    let dot = memchr::memrchr(b'.', host.as_bytes())?;
    let tld = &host[dot + 1..];
    (is_tld(tld) && is_domain(host, dot)).then_some(dot + 1)
}

/// Top-level domain: two or more letters, or a Punycode label
fn is_tld(tld: &str) -> bool {
    is_punycode_label(tld) || (tld.chars().nth(1).is_some() && tld.chars().all(is_tld_char))
}

/// Check if `host[..domain_end]` is a sequence of domain units.
/// The full host is passed because the hyphen-collision check may look past
/// the end of the domain.
fn is_domain(host: &str, domain_end: usize) -> bool {
    let domain = &host[..domain_end];
    if domain.is_empty() || domain.starts_with('.') || domain.ends_with('-') {
        return false;
    }

    let chars: Vec<char> = host.chars().collect();
    let len = domain.chars().count();
    let label_end = run_ends(&chars[..len], is_label_char);
    let hyphen_end = run_ends(&chars[..len], |c| c == '-');
    let punycode_end = run_ends(&chars[..len], is_punycode_char);

    // A unit starting at one position reaches a contiguous range of end
    // positions. Ranges always open after the position that creates them, so
    // one sweep tracking how many ranges cover the current position suffices.
    let mut opened = vec![0usize; len + 2];
    let mut closed = vec![0usize; len + 2];
    let mut covering = 0;

    for unit_start in 0..len {
        covering = covering + opened[unit_start] - closed[unit_start];
        if unit_start > 0 && covering == 0 {
            continue;
        }
        let body = if chars[unit_start] == '.' {
            unit_start + 1
        } else {
            unit_start
        };
        if body >= len {
            continue;
        }

        let (first, last) = if starts_with_punycode_prefix(&chars[body..]) {
            (body + 5, punycode_end[body + 4])
        } else if label_end[body] > body && !collides_with_punycode(&chars, body) {
            (body + 1, hyphen_end[label_end[body]])
        } else {
            continue;
        };
        if first <= last {
            opened[first] += 1;
            closed[last + 1] += 1;
        }
    }

    covering + opened[len] - closed[len] > 0
}

/// `ends[i]` is the end of the run of `accept` characters starting at `i`
fn run_ends(chars: &[char], accept: impl Fn(char) -> bool) -> Vec<usize> {
    let mut ends = vec![chars.len(); chars.len() + 1];
    for i in (0..chars.len()).rev() {
        ends[i] = if accept(chars[i]) { ends[i + 1] } else { i };
    }
    ends
}
