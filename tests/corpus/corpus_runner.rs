#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Corpus runner
use super::corpus_loader::{CorpusResult, ErrorKind, load_corpus};
use strict_url::{Url, ValidationError};

fn error_kind(error: &ValidationError) -> ErrorKind {
    match error {
        ValidationError::Empty => ErrorKind::Empty,
        ValidationError::NotNormalized { .. } => ErrorKind::NotNormalized,
        ValidationError::InvalidIpv6 { .. } => ErrorKind::InvalidIpv6,
        ValidationError::Malformed { .. } | ValidationError::NotRepresentable { .. } => {
            ErrorKind::Malformed
        }
    }
}

#[test]
fn test_valid_urls() {
    let corpus = load_corpus();
    let mut result = CorpusResult::new();

    for input in &corpus.valid {
        match Url::parse(input) {
            Ok(url) => result.check(input, "raw", &Some(input.clone()), &Some(url.to_string())),
            Err(error) => result.fail(input, "validate", "success".to_string(), error.to_string()),
        }
    }

    println!("{}", result.summary());
    assert!(result.failures.is_empty(), "{}", result.summary());
}

#[test]
fn test_invalid_urls() {
    let corpus = load_corpus();
    let mut result = CorpusResult::new();

    for case in &corpus.invalid {
        let mut url = Url::new();
        match url.validate(&case.input) {
            Ok(_) => result.fail(
                &case.input,
                "validate",
                format!("{:?}", case.error),
                "success".to_string(),
            ),
            Err(error) if error_kind(&error) == case.error => result.passed += 1,
            Err(error) => result.fail(
                &case.input,
                "error",
                format!("{:?}", case.error),
                format!("{error:?}"),
            ),
        }
        // A rejected input leaves nothing behind
        if url != Url::new() {
            result.fail(&case.input, "reset", "empty".to_string(), format!("{url:?}"));
        }
    }

    println!("{}", result.summary());
    assert!(result.failures.is_empty(), "{}", result.summary());
}

#[test]
fn test_decomposition() {
    let corpus = load_corpus();
    let mut result = CorpusResult::new();

    for case in &corpus.decomposed {
        let input = case.input.as_str();
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(error) => {
                result.fail(input, "validate", "success".to_string(), error.to_string());
                continue;
            }
        };
        result.check(input, "scheme", &case.scheme, &url.scheme);
        result.check(input, "username", &case.username, &url.username);
        result.check(input, "password", &case.password, &url.password);
        result.check(input, "hostname", &case.hostname, &url.hostname);
        result.check(input, "domain", &case.domain, &url.domain);
        result.check(input, "tld", &case.tld, &url.tld);
        result.check(input, "ipv4", &case.ipv4, &url.ipv4);
        result.check(input, "ipv6", &case.ipv6, &url.ipv6);
        result.check(input, "port", &case.port, &url.port);
        result.check(input, "path", &case.path, &url.path);
        result.check(input, "query", &case.query, &url.query);
        result.check(input, "fragment", &case.fragment, &url.fragment);
    }

    println!("{}", result.summary());
    assert!(result.failures.is_empty(), "{}", result.summary());
}

#[test]
fn test_can_parse_agrees_with_validate() {
    let corpus = load_corpus();
    for input in &corpus.valid {
        assert!(Url::can_parse(input), "{input:?}");
    }
    for case in &corpus.invalid {
        assert!(!Url::can_parse(&case.input), "{:?}", case.input);
    }
}
