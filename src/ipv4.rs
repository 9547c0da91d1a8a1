//! Public IPv4 host literals in dotted-quad form.
//!
//! Only plain decimal notation is accepted. The first octet is 1-223 and the
//! last 1-254 (neither with leading zeros), which rules out `0.0.0.0/8`,
//! multicast and above, and network/broadcast-style endings. Middle octets
//! allow one or two digits freely (`0`, `07`, `99`) and three digits for
//! 100-255.

use crate::checkers::small_decimal;

/// Check if `host` is a dotted quad accepted as a public address.
pub fn is_public_ipv4(host: &str) -> bool {
    let mut octets = host.split('.');
    let (Some(first), Some(second), Some(third), Some(fourth), None) = (
        octets.next(),
        octets.next(),
        octets.next(),
        octets.next(),
        octets.next(),
    ) else {
        return false;
    };

    is_leading_octet(first)
        && is_inner_octet(second)
        && is_inner_octet(third)
        && is_trailing_octet(fourth)
        && !is_private(first, second)
}

fn is_leading_octet(octet: &str) -> bool {
    !octet.starts_with('0') && small_decimal(octet).is_some_and(|v| (1..=223).contains(&v))
}

fn is_inner_octet(octet: &str) -> bool {
    match octet.len() {
        1 | 2 => small_decimal(octet).is_some(),
        3 => !octet.starts_with('0') && small_decimal(octet).is_some_and(|v| v <= 255),
        _ => false,
    }
}

fn is_trailing_octet(octet: &str) -> bool {
    !octet.starts_with('0') && small_decimal(octet).is_some_and(|v| (1..=254).contains(&v))
}

/// Loopback and private blocks: 10/8, 127/8, 169.254/16, 192.168/16 and
/// 172.16/12.
fn is_private(first: &str, second: &str) -> bool {
    matches!(first, "10" | "127")
        || matches!((first, second), ("169", "254") | ("192", "168"))
        || (first == "172"
            && second.len() == 2
            && small_decimal(second).is_some_and(|v| (16..=31).contains(&v)))
}
