//! Lexical (exact and substring) matching of normalized terms

use crate::processing::text::{normalize, normalize_unique};
use aho_corasick::AhoCorasick;
use log::warn;
use std::collections::HashSet;

/// Exact-membership and substring matcher over a fixed set of normalized terms
pub struct LexicalMatcher {
    terms: Vec<String>,
    lookup: HashSet<String>,
    finder: Option<AhoCorasick>,
}

impl LexicalMatcher {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = normalize_unique(terms);
        let lookup = terms.iter().cloned().collect();

        let finder = match AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&terms)
        {
            Ok(finder) => Some(finder),
            Err(e) => {
                warn!("Failed to build substring matcher, using linear scan: {}", e);
                None
            }
        };

        Self { terms, lookup, finder }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Exact membership after normalization
    pub fn contains(&self, term: &str) -> bool {
        self.lookup.contains(&normalize(term))
    }

    /// Terms of this matcher that are also members of `other`, in matcher order
    pub fn overlap(&self, other: &LexicalMatcher) -> Vec<String> {
        self.terms
            .iter()
            .filter(|t| other.lookup.contains(*t))
            .cloned()
            .collect()
    }

    /// Terms of this matcher that `other` lacks, in matcher order
    pub fn difference(&self, other: &LexicalMatcher) -> Vec<String> {
        self.terms
            .iter()
            .filter(|t| !other.lookup.contains(*t))
            .cloned()
            .collect()
    }

    /// Whether any term occurs as a substring of `text`
    pub fn found_in(&self, text: &str) -> bool {
        if self.terms.is_empty() {
            return false;
        }

        let haystack = text.to_lowercase();
        match &self.finder {
            Some(finder) => finder.is_match(&haystack),
            None => self.terms.iter().any(|t| haystack.contains(t.as_str())),
        }
    }
}
