use super::tail::tail_reaches_end;
use crate::character_sets::is_host_char;
use crate::domain::split_domain;
use crate::helpers::scan_while;
use crate::ipv4::is_public_ipv4;
use crate::ipv6::parse_ipv6;
use crate::types::HostKind;
use crate::url_components::{Host, Span};

/// Match a host at `start` whose tail reaches the end of the input.
/// Host forms are tried in order: domain name, IPv4, bracketed IPv6.
///
/// Each form only looks at its own run of host characters, so matching after
/// every `@` of an input stays linear overall.
pub fn match_host(input: &str, start: usize, clean_from: usize) -> Option<Host> {
    [match_domain, match_ipv4, match_ipv6]
        .into_iter()
        .filter_map(|form| form(input, start))
        .find(|host| tail_reaches_end(input, host.span.end, clean_from))
}

/// The domain form always spans the whole run of host characters: the
/// top-level domain cannot contain the characters that start a tail.
fn match_domain(input: &str, start: usize) -> Option<Host> {
    let end = scan_while(input, start, is_host_char);
    let tld_offset = split_domain(&input[start..end])?;
    Some(Host {
        span: Span::new(start, end),
        kind: HostKind::Domain,
        tld_start: Some(start + tld_offset),
    })
}

fn match_ipv4(input: &str, start: usize) -> Option<Host> {
    let end = scan_while(input, start, |c| c.is_ascii_digit() || c == '.');
    is_public_ipv4(&input[start..end]).then_some(Host {
        span: Span::new(start, end),
        kind: HostKind::Ipv4,
        tld_start: None,
    })
}

/// Grammar pass only; the range check happens once the whole URL matched.
fn match_ipv6(input: &str, start: usize) -> Option<Host> {
    if input.as_bytes().get(start) != Some(&b'[') {
        return None;
    }
    let close = scan_while(input, start + 1, |c| {
        c.is_ascii_hexdigit() || c == ':' || c == '.'
    });
    if input.as_bytes().get(close) != Some(&b']') {
        return None;
    }
    parse_ipv6(&input[start + 1..close])?;
    Some(Host {
        span: Span::new(start, close + 1),
        kind: HostKind::Ipv6,
        tld_start: None,
    })
}
