//! Result CSV writer.

use std::io::Write;
use std::path::{Path, PathBuf};

use affinity_core::{ResultSet, RESULT_HEADER};

use crate::error::IoError;

const OUTPUT_SUFFIX: &str = "_affinity_results.csv";

/// `<document dir>/<document stem>_affinity_results.csv`.
///
/// Relative documents are resolved against the working directory first so
/// the output always lands beside the input.
#[must_use]
pub fn output_path_for(document: &Path) -> PathBuf {
    let absolute = std::path::absolute(document).unwrap_or_else(|_| document.to_path_buf());
    let stem = absolute
        .file_stem()
        .map_or_else(|| "document".to_string(), |s| s.to_string_lossy().into_owned());
    let dir = absolute.parent().map(Path::to_path_buf).unwrap_or_default();
    dir.join(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Write `results` as CSV to `path`, replacing any existing file.
///
/// Rows go to a temporary file in the destination directory which is renamed
/// over `path` only once fully written; a failed write leaves `path` as it was.
///
/// # Errors
///
/// Returns [`IoError::Write`] if the file cannot be created, written or moved
/// into place.
pub fn write_results(path: &Path, results: &ResultSet) -> Result<(), IoError> {
    let write_err = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(e.into()))?;
    write_results_to(staged.as_file_mut(), results).map_err(write_err)?;
    staged.persist(path).map_err(|e| write_err(e.error.into()))?;

    tracing::info!(path = %path.display(), rows = results.len(), "wrote results");
    Ok(())
}

/// Write the header and one row per record to any writer.
///
/// Rows use CRLF terminators and quote fields only when needed.
///
/// # Errors
///
/// Returns a [`csv::Error`] if serialization or the underlying write fails.
pub fn write_results_to<W: Write>(writer: W, results: &ResultSet) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(RESULT_HEADER)?;
    for record in results {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
