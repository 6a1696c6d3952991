//! Lexicon CSV loader.
//!
//! Expected layout is `term,weight` per row. The first row is a header only
//! when its first column reads `word` (any case); otherwise it is data.
//! Rows that are too short, have a blank term, or carry a non-integer weight
//! are skipped.

use std::io::Read;
use std::path::Path;

use affinity_core::{Lexicon, LexiconEntry};

use crate::error::IoError;

const HEADER_FIRST_COLUMN: &str = "word";
const BOM: char = '\u{feff}';

/// Load a lexicon from a CSV file.
///
/// # Errors
///
/// Returns [`IoError::NotFound`] if the file does not exist and
/// [`IoError::LexiconParse`] if it is not valid UTF-8 CSV.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, IoError> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let lexicon = parse_lexicon(file).map_err(|e| IoError::LexiconParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), terms = lexicon.len(), "loaded lexicon");
    Ok(lexicon)
}

/// Parse lexicon rows from any CSV source.
///
/// # Errors
///
/// Returns a [`csv::Error`] on malformed CSV or invalid UTF-8. Bad rows are
/// not errors; they are skipped.
pub fn parse_lexicon<R: Read>(reader: R) -> Result<Lexicon, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut lexicon = Lexicon::new();
    let mut first = true;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);

        let raw_term = record.get(0).unwrap_or_default();
        let raw_term = if first {
            raw_term.trim_start_matches(BOM)
        } else {
            raw_term
        };

        if std::mem::take(&mut first) && is_header(raw_term) {
            tracing::debug!(line, "skipping lexicon header row");
            continue;
        }

        let Some(raw_weight) = record.get(1) else {
            tracing::debug!(line, "skipping lexicon row with fewer than two columns");
            continue;
        };

        let Ok(weight) = raw_weight.trim().parse::<i64>() else {
            tracing::debug!(
                line,
                weight = raw_weight,
                "skipping lexicon row with non-integer weight"
            );
            continue;
        };

        match LexiconEntry::new(raw_term, weight) {
            Some(entry) => lexicon.push(entry),
            None => tracing::debug!(line, "skipping lexicon row with blank term"),
        }
    }

    Ok(lexicon)
}

fn is_header(first_column: &str) -> bool {
    first_column.trim().eq_ignore_ascii_case(HEADER_FIRST_COLUMN)
}
