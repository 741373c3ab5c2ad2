//! The snaptex pipeline: clipboard image → recognition → clipboard/file.
//!
//! One linear pass per invocation. Early exits (no image, failed
//! recognition) travel as explicit [`PipelineError`] values; only `main`
//! turns them into a process exit. Output writes are best-effort: a failed
//! clipboard write does not block the file write and neither failure changes
//! the pipeline result.

use std::path::Path;

use snaptex_input::{ClipboardError, ClipboardSink, ClipboardSource};
use snaptex_recognition::{RecognitionClient, RecognitionError};
use tracing::instrument;

use crate::output::Output;

/// File written by `--save` when no filename is given.
pub const DEFAULT_SAVE_FILENAME: &str = "output.tex";

/// Fatal pipeline conditions. Each maps to exit code 1 in `main`.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Clipboard was readable but held no image (or non-image content).
    #[error("no image found in clipboard; copy an image first")]
    NoImage,
    /// The clipboard subsystem itself failed.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    /// The recognition call failed or returned nothing usable.
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
}

/// Runs the full pipeline once.
///
/// Reads an image from `source`, sends it through `client`, writes the
/// resulting LaTeX to `sink` and, when `save` is given, to that file
/// (full overwrite, UTF-8, no wrapper). Returns the trimmed LaTeX on
/// success so tests can assert on it.
#[instrument(skip_all, name = "pipeline")]
pub async fn run<S, K>(
    source: &S,
    sink: &K,
    client: &RecognitionClient,
    save: Option<&Path>,
    out: &Output,
) -> Result<String, PipelineError>
where
    S: ClipboardSource,
    K: ClipboardSink,
{
    let image = source.read_image()?.ok_or(PipelineError::NoImage)?;
    out.clipboard(image.width, image.height);

    out.dim("Converting image to LaTeX...");
    let latex = recognize(client, &image).await?;

    out.print("Generated LaTeX code:");
    out.latex_block(&latex);

    // Clipboard write first, file write second; each reported independently
    match sink.write_text(&latex) {
        Ok(()) => out.success("LaTeX code copied to clipboard"),
        Err(e) => out.error(format!("Failed to copy to clipboard: {e}")),
    }

    if let Some(path) = save {
        match std::fs::write(path, &latex) {
            Ok(()) => out.success(format!("LaTeX code saved to {}", path.display())),
            Err(e) => out.error(format!("Failed to save to {}: {e}", path.display())),
        }
    }

    Ok(latex)
}

#[instrument(skip_all, name = "recognize")]
async fn recognize(
    client: &RecognitionClient,
    image: &snaptex_input::ClipboardImage,
) -> Result<String, RecognitionError> {
    client.recognize(image).await
}
