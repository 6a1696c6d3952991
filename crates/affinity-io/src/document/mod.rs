//! Document text extraction.
//!
//! The loader picks a strategy from the file extension:
//! - `.docx` is unpacked and its body paragraphs read from `word/document.xml`.
//! - `.doc` is handed to an external converter program.
//! - Anything else is read as text: UTF-8 first, Latin-1 on failure.

mod docx;
mod legacy;
mod text;

use std::path::Path;

use affinity_core::ConverterCommand;

use crate::error::IoError;

pub(crate) use text::decode_text;

/// How a document's text is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Office Open XML word-processing container.
    Docx,
    /// Legacy binary word-processing file, converted externally.
    LegacyDoc,
    PlainText,
}

impl DocumentKind {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("docx") => Self::Docx,
            Some("doc") => Self::LegacyDoc,
            _ => Self::PlainText,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    pub converter: ConverterCommand,
}

/// Read `path` into a single string.
///
/// # Errors
///
/// Returns [`IoError::NotFound`] if the path does not exist, and a
/// format-specific [`IoError`] variant if the content cannot be extracted.
pub fn load_document(path: &Path, options: &DocumentOptions) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let kind = DocumentKind::from_path(path);
    let text = match kind {
        DocumentKind::Docx => docx::extract(path)?,
        DocumentKind::LegacyDoc => legacy::convert(path, &options.converter)?,
        DocumentKind::PlainText => {
            let bytes = std::fs::read(path).map_err(|e| IoError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            decode_text(bytes)
        }
    };

    tracing::info!(
        path = %path.display(),
        kind = ?kind,
        chars = text.chars().count(),
        "loaded document"
    );
    Ok(text)
}
