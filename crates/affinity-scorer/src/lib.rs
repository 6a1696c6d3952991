//! Lexicon matching and scoring.
//!
//! [`matcher`] counts boundary-aware, case-insensitive occurrences of one
//! term; [`scorer`] runs it over a whole lexicon and assembles the
//! [`affinity_core::ResultSet`].

pub mod matcher;
pub mod scorer;

pub use matcher::{match_count, TermMatcher};
pub use scorer::{score, score_parallel, score_with, ScoreOptions};
