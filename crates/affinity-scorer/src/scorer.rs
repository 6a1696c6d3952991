//! Lexicon scorer: one match pass per lexicon row, results in lexicon order.

use affinity_core::{Lexicon, LexiconEntry, ResultRecord, ResultSet};
use rayon::prelude::*;

use crate::matcher::TermMatcher;

/// Controls when scoring fans out across the rayon pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOptions {
    /// Lexicons with at least this many rows are scored in parallel.
    /// `0` always scores sequentially.
    pub parallel_min_terms: usize,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            parallel_min_terms: 256,
        }
    }
}

impl ScoreOptions {
    fn use_parallel(self, terms: usize) -> bool {
        self.parallel_min_terms > 0 && terms >= self.parallel_min_terms
    }
}

/// Score `text` against every lexicon row, sequentially.
///
/// Rows with no matches are omitted. Duplicate terms are scored
/// independently and each yields its own record.
#[must_use]
pub fn score(lexicon: &Lexicon, text: &str) -> ResultSet {
    if text.is_empty() {
        return ResultSet::default();
    }
    let results: ResultSet = lexicon
        .iter()
        .filter_map(|entry| score_entry(entry, text))
        .collect();
    log_summary(lexicon, &results, false);
    results
}

/// Score `text` against every lexicon row on the rayon pool.
///
/// Produces exactly the same [`ResultSet`] as [`score`]; the parallel
/// collect keeps lexicon order regardless of completion order.
#[must_use]
pub fn score_parallel(lexicon: &Lexicon, text: &str) -> ResultSet {
    if text.is_empty() {
        return ResultSet::default();
    }
    let records: Vec<ResultRecord> = lexicon
        .entries()
        .par_iter()
        .filter_map(|entry| score_entry(entry, text))
        .collect();
    let results: ResultSet = records.into_iter().collect();
    log_summary(lexicon, &results, true);
    results
}

/// Score sequentially or in parallel depending on lexicon size.
#[must_use]
pub fn score_with(lexicon: &Lexicon, text: &str, options: &ScoreOptions) -> ResultSet {
    if options.use_parallel(lexicon.len()) {
        score_parallel(lexicon, text)
    } else {
        score(lexicon, text)
    }
}

fn score_entry(entry: &LexiconEntry, text: &str) -> Option<ResultRecord> {
    let count = TermMatcher::new(&entry.term).count(text);
    ResultRecord::from_count(entry, count)
}

fn log_summary(lexicon: &Lexicon, results: &ResultSet, parallel: bool) {
    tracing::debug!(
        terms = lexicon.len(),
        matched = results.len(),
        parallel,
        "scored document against lexicon"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(rows: &[(&str, i64)]) -> Lexicon {
        rows.iter()
            .filter_map(|&(term, weight)| LexiconEntry::new(term, weight))
            .collect()
    }

    fn rows(results: &ResultSet) -> Vec<(&str, u64, i64, i128)> {
        results
            .iter()
            .map(|r| (r.term(), r.count(), r.weight(), r.weighted_score()))
            .collect()
    }

    #[test]
    fn scores_in_lexicon_order() {
        let lex = lexicon(&[("luck", 2), ("bad", -1)]);
        let results = score(&lex, "bad luck, bad luck");
        assert_eq!(rows(&results), [("luck", 2, 2, 4), ("bad", 2, -1, -2)]);
    }

    #[test]
    fn embedded_term_yields_no_records() {
        let lex = lexicon(&[("cat", 5)]);
        assert!(score(&lex, "concatenate categories").is_empty());
    }

    #[test]
    fn unmatched_terms_are_omitted() {
        let lex = lexicon(&[("alpha", 1), ("missing", 9), ("gamma", 3)]);
        let results = score(&lex, "gamma alpha gamma");
        assert_eq!(rows(&results), [("alpha", 1, 1, 1), ("gamma", 2, 3, 6)]);
    }

    #[test]
    fn order_follows_lexicon_not_text_or_score() {
        let lex = lexicon(&[("c", 1), ("a", 100), ("b", -50)]);
        let results = score(&lex, "a b c");
        let terms: Vec<&str> = results.iter().map(|r| r.term()).collect();
        assert_eq!(terms, ["c", "a", "b"]);
    }

    #[test]
    fn duplicate_terms_get_independent_records() {
        let lex = lexicon(&[("luck", 2), ("luck", -3)]);
        let results = score(&lex, "luck and luck");
        assert_eq!(rows(&results), [("luck", 2, 2, 4), ("luck", 2, -3, -6)]);
    }

    #[test]
    fn zero_weight_terms_still_reported() {
        let lex = lexicon(&[("meh", 0)]);
        let results = score(&lex, "meh");
        assert_eq!(rows(&results), [("meh", 1, 0, 0)]);
    }

    #[test]
    fn empty_lexicon_yields_empty_results() {
        assert!(score(&Lexicon::new(), "some text").is_empty());
    }

    #[test]
    fn empty_text_yields_empty_results() {
        let lex = lexicon(&[("luck", 2)]);
        assert!(score(&lex, "").is_empty());
        assert!(score_parallel(&lex, "").is_empty());
    }

    #[test]
    fn weighted_score_invariant_holds() {
        let lex = lexicon(&[("won", 3), ("race", -2), ("the", 1), ("won't", 7)]);
        let results = score(&lex, "I won the race, then won't race the won race");
        assert!(!results.is_empty());
        for r in &results {
            assert!(r.count() >= 1);
            assert_eq!(
                r.weighted_score(),
                i128::from(r.count()) * i128::from(r.weight())
            );
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let words = ["luck", "bad", "good", "won", "race", "cat", "bad luck"];
        let lex: Lexicon = (0..600)
            .map(|i| {
                let term = words[i % words.len()];
                LexiconEntry::new(term, i64::try_from(i).unwrap() - 300).unwrap()
            })
            .collect();
        let text = "Bad luck: I won't win, but I won the race. Good luck, cat!";

        let sequential = score(&lex, text);
        let parallel = score_parallel(&lex, text);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn score_with_threshold_selects_path_without_changing_output() {
        let lex = lexicon(&[("luck", 2), ("bad", -1)]);
        let text = "bad luck, bad luck";

        let always = ScoreOptions {
            parallel_min_terms: 1,
        };
        let never = ScoreOptions {
            parallel_min_terms: 0,
        };
        assert!(always.use_parallel(lex.len()));
        assert!(!never.use_parallel(lex.len()));
        assert_eq!(score_with(&lex, text, &always), score_with(&lex, text, &never));
    }
}
