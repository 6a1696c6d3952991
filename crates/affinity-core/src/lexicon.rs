//! Weighted lexicon model.

use serde::{Deserialize, Serialize};

/// One lexicon row: a word or phrase and its integer affinity weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub term: String,
    pub weight: i64,
}

impl LexiconEntry {
    /// Build an entry from a raw term, trimming surrounding whitespace.
    ///
    /// Returns `None` when the trimmed term is empty.
    #[must_use]
    pub fn new(term: &str, weight: i64) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
            weight,
        })
    }
}

/// Ordered lexicon. Row order is preserved and determines output order.
///
/// Duplicate terms are allowed; each row is scored on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LexiconEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexiconEntry> {
        self.entries.iter()
    }
}

impl From<Vec<LexiconEntry>> for Lexicon {
    fn from(entries: Vec<LexiconEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<LexiconEntry> for Lexicon {
    fn from_iter<I: IntoIterator<Item = LexiconEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a LexiconEntry;
    type IntoIter = std::slice::Iter<'a, LexiconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
