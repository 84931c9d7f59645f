//! Keyword matching strategies.
//!
//! Both the message classifier and the history analyzer ask a `KeywordMatcher`
//! whether a keyword occurs in a message, so the matching rule can change
//! without touching any scoring or aggregation code.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Decides whether a lexicon keyword occurs in a normalized message.
pub trait KeywordMatcher: Send + Sync {
    /// Fold raw text into the form keywords are compared against.
    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }

    /// Returns true if `keyword` occurs in the already-normalized `haystack`.
    fn contains(&self, haystack: &str, keyword: &str) -> bool;
}

/// Plain substring containment.
///
/// No tokenization: "sad" matches inside "sadness" and "happy" inside "unhappy".
/// This is the behaviour existing mood histories were scored with.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl KeywordMatcher for SubstringMatcher {
    fn contains(&self, haystack: &str, keyword: &str) -> bool {
        !keyword.is_empty() && haystack.contains(keyword)
    }
}

/// Whole-word matching on `\b` boundaries.
///
/// Each keyword's pattern is compiled once and reused for every later message.
#[derive(Debug, Default)]
pub struct WordBoundaryMatcher {
    patterns: RwLock<HashMap<String, Regex>>,
}

impl WordBoundaryMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matcher with the patterns for `keywords` already compiled
    pub fn with_keywords<'a>(keywords: impl IntoIterator<Item = &'a str>) -> Self {
        let patterns = keywords
            .into_iter()
            .filter(|k| !k.is_empty())
            .map(|k| (k.to_string(), Self::compile(k)))
            .collect();
        Self {
            patterns: RwLock::new(patterns),
        }
    }

    /// Number of compiled keyword patterns held
    pub fn cached_patterns(&self) -> usize {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn compile(keyword: &str) -> Regex {
        Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))
            .expect("Invalid regex: escaped keyword literal")
    }
}

impl KeywordMatcher for WordBoundaryMatcher {
    fn contains(&self, haystack: &str, keyword: &str) -> bool {
        if keyword.is_empty() {
            return false;
        }

        if let Some(re) = self
            .patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(keyword)
        {
            return re.is_match(haystack);
        }

        let re = Self::compile(keyword);
        let found = re.is_match(haystack);
        self.patterns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(keyword.to_string(), re);
        found
    }
}
