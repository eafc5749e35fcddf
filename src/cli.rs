//! Command line surface of `pdf_read`.
//!
//! Argument parsing lives here so it can be tested without spawning the
//! binary; [`Args::into_config`] resolves defaults into a [`ReadConfig`].

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::report::ReportFormat;
use crate::{Error, Result};

/// State count used when `-n` is not given (five-state left-to-right HMMs).
pub const DEFAULT_STATE_COUNT: usize = 5;

/// Extension stripped from the model file name to get the feature name.
pub const MODEL_EXTENSION: &str = ".pdf";

/// Extension of the default text output.
pub const REPORT_EXTENSION: &str = "txt";

#[derive(Parser, Debug, Clone)]
#[command(name = "pdf_read", version)]
#[command(about = "Read an HTS .pdf model file and restore it as text")]
#[command(after_help = "The pdf file name is the name of the feature (e.g. lf0.pdf, mgc.pdf, dur.pdf).")]
pub struct Args {
    /// Model file
    #[arg(short = 'm', long = "model", value_name = "PDF")]
    pub model: PathBuf,

    /// Number of states
    #[arg(short = 'n', long = "states", value_name = "INT", default_value_t = DEFAULT_STATE_COUNT)]
    pub states: usize,

    /// Output text file name [default: model path with .txt extension]
    #[arg(short = 'o', long = "output", value_name = "TXT")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "PDF_READ_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub state_count: usize,
    pub format: ReportFormat,
}

impl ReadConfig {
    /// Config with the default state count, output path and format.
    pub fn for_input(input: impl Into<PathBuf>) -> Result<Self> {
        let input = input.into();
        let output = default_output_path(&input)?;
        Ok(Self {
            input,
            output,
            state_count: DEFAULT_STATE_COUNT,
            format: ReportFormat::Text,
        })
    }
}

impl Args {
    pub fn into_config(self) -> Result<ReadConfig> {
        if self.states == 0 {
            return Err(Error::Argument("number of states must be at least 1".into()));
        }
        let output = match self.output {
            Some(path) => path,
            None => default_output_path(&self.model)?,
        };
        Ok(ReadConfig {
            input: self.model,
            output,
            state_count: self.states,
            format: self.format,
        })
    }
}

/// Feature name of a model file: the file name without directory and
/// without a trailing `.pdf`. Other extensions are kept.
pub fn model_name(path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Argument(format!("{} has no file name", path.display())))?
        .to_string_lossy();
    let name = file_name.strip_suffix(MODEL_EXTENSION).unwrap_or(&*file_name);
    Ok(name.to_string())
}

/// `{dir}/{model_name}.txt` next to the model file.
pub fn default_output_path(path: &Path) -> Result<PathBuf> {
    let name = model_name(path)?;
    Ok(path.with_file_name(format!("{}.{}", name, REPORT_EXTENSION)))
}
