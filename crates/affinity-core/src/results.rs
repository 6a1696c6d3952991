//! Scoring output: one record per lexicon row that matched at least once.

use serde::Serialize;

use crate::lexicon::LexiconEntry;

/// Column header written ahead of the result rows.
pub const RESULT_HEADER: [&str; 4] = ["Word", "Count", "Affinity Score", "Final Score"];

/// Tally for a single lexicon row.
///
/// Only constructible through [`ResultRecord::from_count`], which guarantees
/// `count >= 1` and `weighted_score == count * weight`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    term: String,
    count: u64,
    weight: i64,
    weighted_score: i128,
}

impl ResultRecord {
    /// Build the record for `entry` matched `count` times.
    ///
    /// Returns `None` when `count` is zero; unmatched terms produce no record.
    /// Any `u64 * i64` product fits in `i128`, so the score is always exact.
    #[must_use]
    pub fn from_count(entry: &LexiconEntry, count: u64) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let weighted_score = i128::from(count) * i128::from(entry.weight);
        Some(Self {
            term: entry.term.clone(),
            count,
            weight: entry.weight,
            weighted_score,
        })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub fn weight(&self) -> i64 {
        self.weight
    }

    #[must_use]
    pub fn weighted_score(&self) -> i128 {
        self.weighted_score
    }
}

/// Records in lexicon order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<ResultRecord>,
}

impl ResultSet {
    #[must_use]
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    /// Sum of every record's weighted score.
    ///
    /// Not part of the written results; callers opt in to reporting it.
    /// Returns `None` if the sum does not fit in `i128`.
    #[must_use]
    pub fn total_weighted_score(&self) -> Option<i128> {
        self.records
            .iter()
            .try_fold(0_i128, |acc, r| acc.checked_add(r.weighted_score))
    }
}

impl FromIterator<ResultRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
