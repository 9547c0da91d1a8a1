#![allow(clippy::panic)]

/// Corpus loader
///
/// Test data lives in `tests/data/urls.json`.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Corpus {
    pub valid: Vec<String>,
    pub invalid: Vec<InvalidCase>,
    pub decomposed: Vec<DecomposedCase>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Empty,
    NotNormalized,
    Malformed,
    InvalidIpv6,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InvalidCase {
    pub input: String,
    pub error: ErrorKind,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DecomposedCase {
    pub input: String,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub tld: Option<String>,
    #[serde(default)]
    pub ipv4: Option<String>,
    #[serde(default)]
    pub ipv6: Option<String>,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub fragment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CorpusFailure {
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct CorpusResult {
    pub passed: usize,
    pub failures: Vec<CorpusFailure>,
}

impl CorpusResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, input: &str, field: &str, expected: &Option<String>, actual: &Option<String>) {
        if expected == actual {
            self.passed += 1;
        } else {
            self.fail(input, field, format!("{expected:?}"), format!("{actual:?}"));
        }
    }

    pub fn fail(&mut self, input: &str, field: &str, expected: String, actual: String) {
        self.failures.push(CorpusFailure {
            input: input.to_string(),
            field: field.to_string(),
            expected,
            actual,
        });
    }

    pub fn summary(&self) -> String {
        let mut summary = format!("Passed: {}, Failed: {}", self.passed, self.failures.len());
        for failure in &self.failures {
            summary.push_str(&format!(
                "\n  {:?} [{}]: expected {}, got {}",
                failure.input, failure.field, failure.expected, failure.actual
            ));
        }
        summary
    }
}

pub fn load_corpus() -> Corpus {
    let data = include_str!("../data/urls.json");
    match serde_json::from_str(data) {
        Ok(corpus) => corpus,
        Err(error) => panic!("failed to parse tests/data/urls.json: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_corpus() {
        let corpus = load_corpus();
        assert!(corpus.valid.len() >= 55);
        assert!(corpus.invalid.len() >= 120);
        assert!(!corpus.decomposed.is_empty());
        assert!(
            corpus
                .invalid
                .iter()
                .any(|case| case.error == ErrorKind::NotNormalized)
        );
    }

    #[test]
    fn test_corpus_result() {
        let mut result = CorpusResult::new();
        result.check("x", "path", &None, &None);
        result.check("x", "path", &Some("/".to_string()), &None);
        assert_eq!(result.passed, 1);
        assert_eq!(result.failures.len(), 1);
        assert!(result.summary().contains("[path]"));
    }
}
