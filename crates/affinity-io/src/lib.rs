//! File boundary of the affinity scorer.
//!
//! Loads the weighted lexicon and the document text, locates the lexicon on
//! disk, and writes the scored results. Nothing here knows how matching works.

pub mod document;
pub mod error;
pub mod lexicon;
pub mod output;
pub mod paths;

pub use document::{load_document, DocumentKind, DocumentOptions};
pub use error::IoError;
pub use lexicon::{load_lexicon, parse_lexicon};
pub use output::{output_path_for, write_results, write_results_to};
pub use paths::{expand_home, resolve_lexicon, LexiconLocations};
