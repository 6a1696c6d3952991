use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon file '{file_name}' not found (searched: {searched})")]
    LexiconNotFound { file_name: String, searched: String },

    #[error("failed to parse lexicon '{}': {source}", path.display())]
    LexiconParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to open document container '{}': {source}", path.display())]
    Container {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("malformed document XML in '{}': {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("document converter '{program}' is not installed (set AFFINITY_DOC_CONVERTER to use another)")]
    ConverterMissing { program: String },

    #[error("document converter '{program}' could not be started: {source}")]
    ConverterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("document converter '{program}' failed ({status}): {stderr}")]
    ConverterFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("failed to write results to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
