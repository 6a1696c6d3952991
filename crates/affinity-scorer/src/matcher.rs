//! Whole-word / whole-phrase term matching.
//!
//! Matching rules:
//! 1. Case-insensitive (Unicode simple case folding).
//! 2. The term must start and end on a word boundary. Only the outer edges
//!    are checked, so `"bad luck"` matches as a phrase with its inner space
//!    taken literally.
//! 3. A candidate directly preceded or followed by `'` or `’` is rejected,
//!    so `"won"` never counts inside `"won't"`.
//! 4. Matches are counted left to right without overlap.
//!
//! The term is always taken literally; regex metacharacters are escaped.

use regex::{Regex, RegexBuilder};

/// Characters that veto a match when adjacent to either end of it.
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// A term compiled once and reusable across documents.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    regex: Option<Regex>,
}

impl TermMatcher {
    /// Compile `term` into a boundary-anchored literal pattern.
    ///
    /// An empty term never matches. A term too large for the regex engine
    /// logs a warning and never matches.
    #[must_use]
    pub fn new(term: &str) -> Self {
        if term.is_empty() {
            return Self { regex: None };
        }

        let pattern = format!(r"\b{}\b", regex::escape(term));
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!(
                    term_len = term.len(),
                    error = %e,
                    "term could not be compiled; treating it as unmatched"
                );
                None
            }
        };
        Self { regex }
    }

    /// Count non-overlapping occurrences of the term in `text`.
    #[must_use]
    pub fn count(&self, text: &str) -> u64 {
        let Some(regex) = &self.regex else {
            return 0;
        };

        let mut count = 0_u64;
        let mut pos = 0_usize;

        while pos <= text.len() {
            let Some(m) = regex.find_at(text, pos) else {
                break;
            };

            if touches_apostrophe(text, m.start(), m.end()) {
                // Retry one character past the rejected start; a later
                // candidate may overlap this one.
                let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
                pos = m.start() + step;
            } else {
                count += 1;
                pos = m.end();
            }
        }

        count
    }
}

/// Count occurrences of `term` in `text`.
///
/// Convenience wrapper around [`TermMatcher`] for one-off lookups.
#[must_use]
pub fn match_count(term: &str, text: &str) -> u64 {
    TermMatcher::new(term).count(text)
}

fn touches_apostrophe(text: &str, start: usize, end: usize) -> bool {
    let is_apostrophe = |c: char| APOSTROPHES.contains(&c);
    text[..start].chars().next_back().is_some_and(is_apostrophe)
        || text[end..].chars().next().is_some_and(is_apostrophe)
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
