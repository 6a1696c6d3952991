mod run;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::run::{prompt_document_path, run, RunArgs};

#[derive(Debug, Parser)]
#[command(name = "affinity")]
#[command(about = "Score a document against a weighted word and phrase lexicon")]
struct Cli {
    /// Document to score (.txt, .docx, .doc); prompted for when omitted
    document: Option<String>,

    /// Lexicon CSV to use instead of searching the conventional locations
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Write results here instead of beside the document
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also print the sum of all final scores
    #[arg(long)]
    total: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = affinity_core::load_app_config().context("invalid configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "loaded configuration");

    let document = match cli.document {
        Some(raw) => raw,
        None => {
            let stdin = std::io::stdin();
            prompt_document_path(&mut stdin.lock(), &mut std::io::stdout())?
        }
    };

    let args = RunArgs {
        document: affinity_io::expand_home(&document),
        lexicon: cli.lexicon.or_else(|| config.lexicon_path.clone()),
        output: cli.output,
    };
    let locations = affinity_io::LexiconLocations::conventional(&config.lexicon_file_name);

    let outcome = run(&args, &config, &locations)?;

    println!("Success! Results saved to '{}'", outcome.output.display());
    if cli.total {
        let total = outcome
            .results
            .total_weighted_score()
            .context("total score does not fit in 128 bits")?;
        println!("Total score: {total}");
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for the prompt and summary.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
