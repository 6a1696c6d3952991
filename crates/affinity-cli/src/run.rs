//! One scoring run: resolve inputs, score, write the CSV.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use affinity_core::{AppConfig, ResultSet};
use affinity_io::{
    load_document, load_lexicon, output_path_for, resolve_lexicon, write_results,
    DocumentOptions, LexiconLocations,
};
use affinity_scorer::{score_with, ScoreOptions};
use anyhow::Context;

const PROMPT: &str = "Enter the file name: ";

#[derive(Debug, Clone)]
pub(crate) struct RunArgs {
    pub document: PathBuf,
    pub lexicon: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub(crate) struct RunOutcome {
    pub output: PathBuf,
    pub results: ResultSet,
}

/// Ask for the document path on `output` and read one line from `input`.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written, stdin cannot be read,
/// or the answer is blank.
pub(crate) fn prompt_document_path<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read document path")?;

    let path = line.trim();
    if path.is_empty() {
        anyhow::bail!("no document path given");
    }
    Ok(path.to_string())
}

/// Score one document and write its results.
///
/// Nothing is written unless every input loads, and the results file is
/// replaced in one step, so a failed run leaves no partial output behind.
///
/// # Errors
///
/// Returns an error if the document or lexicon is missing or unreadable, or
/// the results cannot be written.
pub(crate) fn run(
    args: &RunArgs,
    config: &AppConfig,
    locations: &LexiconLocations,
) -> anyhow::Result<RunOutcome> {
    if !args.document.exists() {
        anyhow::bail!("file '{}' not found", args.document.display());
    }

    let lexicon_path = resolve_lexicon(args.lexicon.as_deref(), locations)?;
    let lexicon = load_lexicon(&lexicon_path).context("error reading affinity scores")?;

    let options = DocumentOptions {
        converter: config.doc_converter.clone(),
    };
    let text = load_document(&args.document, &options).context("error reading input file")?;

    let results = score_with(
        &lexicon,
        &text,
        &ScoreOptions {
            parallel_min_terms: config.parallel_min_terms,
        },
    );
    tracing::info!(
        terms = lexicon.len(),
        matched = results.len(),
        total = ?results.total_weighted_score(),
        "scored document"
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(&args.document));
    write_results(&output, &results).context("error writing output file")?;

    Ok(RunOutcome { output, results })
}
