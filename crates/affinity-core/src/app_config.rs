use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the document path in converter arguments.
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// External program used to turn legacy binary documents into plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ConverterCommand {
    /// Parse a whitespace-separated command line such as
    /// `textutil -convert txt -stdout {input}`.
    ///
    /// Returns `None` for a blank command line.
    #[must_use]
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Arguments for converting `input`.
    ///
    /// Every `{input}` placeholder is substituted; when none is present the
    /// path is appended as the final argument.
    #[must_use]
    pub fn args_for(&self, input: &Path) -> Vec<OsString> {
        let mut substituted = false;
        let mut args: Vec<OsString> = self
            .args
            .iter()
            .map(|arg| {
                if arg == INPUT_PLACEHOLDER {
                    substituted = true;
                    input.as_os_str().to_os_string()
                } else {
                    OsString::from(arg)
                }
            })
            .collect();
        if !substituted {
            args.push(input.as_os_str().to_os_string());
        }
        args
    }
}

impl Default for ConverterCommand {
    fn default() -> Self {
        Self {
            program: "textutil".to_string(),
            args: vec![
                "-convert".to_string(),
                "txt".to_string(),
                "-stdout".to_string(),
                INPUT_PLACEHOLDER.to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// File name searched for beside the executable and in the working directory.
    pub lexicon_file_name: String,
    /// Explicit lexicon location; skips the conventional search when set.
    pub lexicon_path: Option<PathBuf>,
    /// Lexicons with at least this many rows are matched in parallel. `0` disables.
    pub parallel_min_terms: usize,
    pub doc_converter: ConverterCommand,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            lexicon_file_name: "affinity_scores.csv".to_string(),
            lexicon_path: None,
            parallel_min_terms: 256,
            doc_converter: ConverterCommand::default(),
        }
    }
}
