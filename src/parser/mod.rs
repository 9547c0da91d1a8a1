//! Grammar matcher for absolute URLs.
//!
//! `scheme "://" [ username [ ":" password ] "@" ] host [ ":" port ]
//! [ path ] [ "?" query ] [ "#" fragment ]`, anchored at both ends.
//!
//! Where the grammar is ambiguous the matcher prefers, in order: no userinfo
//! at all, then the shortest username, then a username directly followed by
//! `@` over one followed by `:password`, then the shortest password.

mod host;
mod tail;

use crate::compat::{Vec, vec};
use crate::helpers::{scheme_separator, userinfo_terminators};
use crate::scheme::AllowedSchemes;
use crate::url_components::{Host, Span, UrlComponents};
use host::match_host;
use tail::{clean_suffix_start, match_tail};

/// Match `input` against the URL grammar with the given scheme whitelist.
/// Returns the component offsets, or `None` if the input does not match.
///
/// Runs in time linear in the input length, up to a logarithmic factor.
pub fn parse_components(input: &str, schemes: &AllowedSchemes) -> Option<UrlComponents> {
    let colon = scheme_separator(input)?;
    if !schemes.contains(&input[..colon]) {
        return None;
    }
    let scheme = Span::new(0, colon);
    let authority_start = colon + 3;
    let clean_from = clean_suffix_start(input);

    let (username, password, host) = match match_host(input, authority_start, clean_from) {
        Some(host) => (None, None, host),
        None => {
            let userinfo = match_userinfo(input, authority_start, clean_from)?;
            (Some(userinfo.username), userinfo.password, userinfo.host)
        }
    };

    Some(UrlComponents {
        scheme,
        username,
        password,
        host,
        tail: match_tail(input, host.span.end)?,
    })
}

struct UserinfoMatch {
    username: Span,
    password: Option<Span>,
    host: Host,
}

fn match_userinfo(input: &str, start: usize, clean_from: usize) -> Option<UserinfoMatch> {
    let terminators = userinfo_terminators(input, start);
    let last = *terminators.last()?;

    // Host after each `@`; the host runs are disjoint so this is linear
    let hosts: Vec<Option<Host>> = terminators
        .iter()
        .map(|&at| match_host(input, at + 1, clean_from))
        .collect();

    // next_match[i]: first terminator at or after index i with a host match
    let mut next_match = vec![None; terminators.len() + 1];
    for index in (0..terminators.len()).rev() {
        next_match[index] = if hosts[index].is_some() {
            Some(index)
        } else {
            next_match[index + 1]
        };
    }

    let bytes = input.as_bytes();
    // Index of the first terminator at or after the username end
    let mut next = 0;

    // The username is at least one character, so it ends at start + 1 or later
    for username_end in start + 1..=last {
        while terminators[next] < username_end {
            next += 1;
        }
        match bytes[username_end] {
            b'@' => {
                if let Some(host) = hosts[next] {
                    return Some(UserinfoMatch {
                        username: Span::new(start, username_end),
                        password: None,
                        host,
                    });
                }
            }
            b':' => {
                // The password is at least one character as well
                let first = if terminators[next] == username_end + 1 {
                    next + 1
                } else {
                    next
                };
                if let Some(index) = next_match[first] {
                    return Some(UserinfoMatch {
                        username: Span::new(start, username_end),
                        password: Some(Span::new(username_end + 1, terminators[index])),
                        host: hosts[index]?,
                    });
                }
            }
            _ => {}
        }
    }

    None
}
