//! Clipboard input and output for the snaptex pipeline.
//!
//! The pipeline reads exactly one image from the system clipboard and later
//! writes the recognized LaTeX back as text. Both directions are abstracted
//! behind traits so the pipeline can be exercised with mock clipboards in
//! tests:
//!
//! - [`ClipboardSource`]: read an image snapshot from the clipboard
//! - [`ClipboardSink`]: write text back to the clipboard
//! - [`SystemClipboard`]: production implementation of both via `arboard`

pub mod clipboard;

pub use clipboard::{
    ClipboardError, ClipboardImage, ClipboardSink, ClipboardSource, SystemClipboard,
};
