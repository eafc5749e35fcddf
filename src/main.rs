//! `pdf_read` — read an HTS `.pdf` model file and restore it as text.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hts_pdf::{cli, Args};

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    let result = args.into_config().and_then(|config| {
        println!("Analyzing \"{}\" model.", cli::model_name(&config.input)?);
        hts_pdf::run(&config)
    });
    if let Err(e) = result {
        eprintln!("pdf_read: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides `--log-level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
