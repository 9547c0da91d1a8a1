//! IPv6 host literals, checked in two passes.
//!
//! The grammar pass accepts the RFC 3986 `IPv6address` production: hex groups
//! of one to four digits, at most one `::`, and an optional dotted IPv4 tail.
//! The strict pass re-reads the address with the standard library parser and
//! rejects private and reserved ranges.

use crate::checkers::{is_dec_octet, small_decimal};
use crate::compat::Vec;
use core::net::Ipv6Addr;

/// Parse an IPv6 address, with or without surrounding brackets, into its
/// 8 segments. Returns `None` if it does not follow the address grammar.
pub fn parse_ipv6(input: &str) -> Option<[u16; 8]> {
    // Remove brackets if present
    let input = input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(input);

    let mut head = Vec::with_capacity(8);
    let mut tail = Vec::with_capacity(8);

    if let Some(double_colon_pos) = input.find("::") {
        // Split around :: and parse both parts; a second :: shows up as an
        // empty group on the right
        read_groups(&input[..double_colon_pos], false, &mut head)?;
        read_groups(&input[double_colon_pos + 2..], true, &mut tail)?;
        if head.len() + tail.len() > 7 {
            return None;
        }
    } else {
        // No :: compression - must have exactly 8 groups
        read_groups(input, true, &mut head)?;
        if head.len() != 8 {
            return None;
        }
    }

    let mut segments = [0u16; 8];
    segments[..head.len()].copy_from_slice(&head);
    segments[8 - tail.len()..].copy_from_slice(&tail);
    Some(segments)
}

/// Parse colon-separated groups. When `ipv4_tail` is set the last group may
/// be a dotted IPv4 address, which counts as two groups.
fn read_groups(input: &str, ipv4_tail: bool, groups: &mut Vec<u16>) -> Option<()> {
    if input.is_empty() {
        return Some(());
    }

    let mut parts = input.split(':').peekable();
    while let Some(part) = parts.next() {
        if ipv4_tail && parts.peek().is_none() && part.contains('.') {
            let [a, b, c, d] = parse_embedded_ipv4(part)?;
            groups.push(u16::from_be_bytes([a, b]));
            groups.push(u16::from_be_bytes([c, d]));
        } else {
            groups.push(parse_hex_group(part)?);
        }
        if groups.len() > 8 {
            return None;
        }
    }
    Some(())
}

/// Parse a single hex group (1-4 hex digits).
fn parse_hex_group(group: &str) -> Option<u16> {
    if group.is_empty() || group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(group, 16).ok()
}

/// Parse a dotted IPv4 tail made of four `dec-octet`s.
fn parse_embedded_ipv4(input: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = input.split('.');
    for octet in &mut octets {
        let part = parts.next()?;
        if !is_dec_octet(part) {
            return None;
        }
        *octet = u8::try_from(small_decimal(part)?).ok()?;
    }
    parts.next().is_none().then_some(octets)
}

/// Strict pass: check that the address between the brackets parses as an
/// IPv6 address and lies outside the private and reserved ranges.
pub fn is_public_ipv6(address: &str) -> bool {
    let address = address
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(address);

    address
        .parse::<Ipv6Addr>()
        .is_ok_and(|addr| !is_reserved(&addr.segments()))
}

/// Private and reserved ranges: unspecified, loopback, unique local
/// (`fc00::/7`), link-local (`fe80::/10`), documentation (`2001:db8::/32`),
/// ORCHID (`2001:10::/28`) and the retired `3ff3::/16` and `5f00::/8` blocks.
fn is_reserved(segments: &[u16; 8]) -> bool {
    let [first, second, ..] = *segments;
    let unspecified_or_loopback = segments[..7].iter().all(|&s| s == 0) && segments[7] <= 1;

    unspecified_or_loopback
        || first & 0xFE00 == 0xFC00
        || first & 0xFFC0 == 0xFE80
        || first & 0xFF00 == 0x5F00
        || first == 0x3FF3
        || (first == 0x2001 && (second == 0x0DB8 || second & 0xFFF0 == 0x0010))
}
