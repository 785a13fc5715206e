//! Normalization helpers shared by the lexical scorers

use std::collections::HashSet;

/// Lower-case, trimmed form used for every comparison
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Normalize a list, dropping blanks and duplicates while keeping first-seen order
pub fn normalize_unique<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for term in terms {
        let normalized = normalize(term.as_ref());
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            unique.push(normalized);
        }
    }

    unique
}

/// Keep the original spelling of each term, deduplicated on its normalized form
pub fn unique_preserving_case<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    terms
        .into_iter()
        .filter_map(|term| {
            let original = term.as_ref().trim();
            let normalized = normalize(original);
            if normalized.is_empty() || !seen.insert(normalized) {
                None
            } else {
                Some(original.to_string())
            }
        })
        .collect()
}

/// Split on anything that is not a letter or digit
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
}

/// Alias lookup inside an already-normalized text.
///
/// Short aliases ("it", "cs") must match a whole word; longer ones match as substrings.
pub fn contains_alias(haystack: &str, alias: &str) -> bool {
    if alias.chars().count() <= 3 {
        words(haystack).any(|w| w == alias)
    } else {
        haystack.contains(alias)
    }
}
