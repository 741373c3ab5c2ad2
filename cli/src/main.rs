#![allow(clippy::exit)]

//! snaptex: convert a clipboard screenshot of math into LaTeX.

use std::path::PathBuf;
use std::process::exit;

use anyhow::Result;
use clap::Parser;
use snaptex_cli::output::Output;
use snaptex_cli::{pipeline, timing};
use snaptex_input::SystemClipboard;
use snaptex_recognition::{DEFAULT_MODEL, RecognitionClient, RecognitionConfig};
use tracing::debug;

#[derive(Parser)]
#[command(name = "snaptex")]
#[command(about = "Convert a clipboard screenshot of math into LaTeX", long_about = None)]
struct Cli {
    /// Also save the LaTeX to a file (default: output.tex)
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = pipeline::DEFAULT_SAVE_FILENAME
    )]
    save: Option<PathBuf>,

    /// Gemini model to use
    #[arg(long, short = 'm', default_value = DEFAULT_MODEL)]
    model: String,

    /// Show timing/latency information
    #[arg(long)]
    timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    let out = Output::new();

    let config = match RecognitionConfig::from_env() {
        Ok(config) => config.with_model(cli.model),
        Err(e) => {
            out.error(format!("Error: {e}."));
            out.dim(RecognitionConfig::setup_hint());
            exit(1);
        }
    };
    debug!(model = %config.model, "configuration loaded");

    let clipboard = SystemClipboard;
    let client = RecognitionClient::new(config);

    match pipeline::run(
        &clipboard,
        &clipboard,
        &client,
        cli.save.as_deref(),
        &out,
    )
    .await
    {
        Ok(_) => Ok(()),
        Err(e) => {
            out.error(e.to_string());
            exit(1);
        }
    }
}
