//! # hts-pdf — HTS Engine `.pdf` Model Reader
//!
//! Decodes the binary probability-distribution files ("pdf files", nothing to
//! do with Portable Document Format) written by the HTS speech-synthesis
//! engine, and renders them as a tab-separated text report.
//!
//! ## Design Principles
//!
//! 1. **Model owns nothing but data**: `PdfModel` → `State` → `Node`, one
//!    contiguous `Vec<f32>` per node, released by ownership
//! 2. **Decoding is a single forward pass**: no seeking, no re-reads
//! 3. **Short reads are fatal**: a truncated file is an error, never stale data
//! 4. **Rendering borrows**: the report never mutates the model
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hts_pdf::{codec, report};
//!
//! # fn example() -> hts_pdf::Result<()> {
//! let model = codec::decode_file("voice/lf0.pdf", 5)?;
//!
//! let mut out = std::io::stdout();
//! report::render_report(&model, "lf0", &mut out)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Wire Layout
//!
//! | Field | Type | Count |
//! |-------|------|-------|
//! | msd flag | int32 | 1 |
//! | stream count | int32 | 1 |
//! | vector length | int32 | 1 |
//! | node count | int32 | one per state |
//! | mean, variance (, msd, counter) | float32 | per state, per node, per element |
//!
//! Every field is stored in the byte order opposite to the host's.

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod codec;
pub mod report;
pub mod cli;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, info};

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{ModelHeader, NodeLayout, Quadrant, Node, State, PdfModel};

// ============================================================================
// Re-exports: Codec / Report / CLI
// ============================================================================

pub use codec::{decode, decode_file, swap_endian, FieldReader};
pub use report::{render_report, render_json, ReportFormat};
pub use cli::{Args, ReadConfig, DEFAULT_STATE_COUNT};

// ============================================================================
// Top-level run
// ============================================================================

/// What a completed [`run`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub model_name: String,
    pub output: PathBuf,
    pub state_count: usize,
    pub node_count: usize,
}

/// Decode `config.input` and write its report to `config.output`.
///
/// The output file is only created once decoding has succeeded, so a
/// truncated model never leaves a partial report behind.
pub fn run(config: &ReadConfig) -> Result<RunSummary> {
    let model_name = cli::model_name(&config.input)?;
    debug!(model = %model_name, input = %config.input.display(), "decoding");

    let model = codec::decode_file(&config.input, config.state_count)?;

    let file = File::create(&config.output).map_err(|source| Error::Create {
        path: config.output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    match config.format {
        ReportFormat::Text => report::render_report(&model, &model_name, &mut writer)?,
        ReportFormat::Json => report::render_json(&model, &model_name, &mut writer)?,
    }
    writer.flush()?;

    let node_count = model.node_counts().iter().sum();
    info!(
        output = %config.output.display(),
        states = model.state_count(),
        nodes = node_count,
        "report written"
    );

    Ok(RunSummary {
        model_name,
        output: config.output.clone(),
        state_count: model.state_count(),
        node_count,
    })
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Argument error: {0}")]
    Argument(String),

    #[error("Cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: std::io::Error },

    #[error("Creating {} failed: {source}", path.display())]
    Create { path: PathBuf, source: std::io::Error },

    #[error("Truncated input: stream ended while reading {field} at byte offset {offset}")]
    TruncatedInput { field: &'static str, offset: u64 },

    #[error("Invalid dimension: {field} = {value}")]
    InvalidDimension { field: &'static str, value: i64 },

    #[error("Cannot allocate {bytes} bytes for node parameters")]
    Allocation { bytes: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
