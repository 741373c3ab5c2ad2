//! Clipboard image capture and text write-back.
//!
//! # Platform Support
//!
//! - **Windows**: Win32 Clipboard API (`CF_DIB/CF_DIBV5` formats)
//! - **macOS**: `NSPasteboard` (Cocoa, supports TIFF/PNG)
//! - **Linux X11**: X11 selections via xcb
//! - **Linux Wayland**: wl-clipboard protocols
//!
//! # File URI Support
//!
//! On Linux file managers (like Dolphin, Nautilus), copying an image file
//! often places a `file://` URI in the clipboard rather than the actual image
//! data. Reading detects such URIs and loads the image from the filesystem.
//!
//! # Example
//!
//! ```rust,no_run
//! use snaptex_input::{ClipboardSource as _, SystemClipboard};
//!
//! let clipboard = SystemClipboard;
//! match clipboard.read_image() {
//!     Ok(Some(image)) => println!("Found image: {}x{}", image.width, image.height),
//!     Ok(None) => println!("No image in clipboard"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

/// Image snapshot captured from the clipboard.
///
/// The pixel data is PNG-encoded at the clipboard boundary so it can be sent
/// to the recognition API without another conversion step. The snapshot is
/// immutable and dropped once the recognition call returns.
#[derive(Debug, Clone)]
pub struct ClipboardImage {
    /// Width of the image in pixels.
    pub width: usize,
    /// Height of the image in pixels.
    pub height: usize,
    /// PNG-encoded image bytes.
    pub bytes: Vec<u8>,
    /// MIME type of the encoded bytes (e.g., "image/png").
    pub mime_type: String,
    /// Suggested filename for the image.
    pub filename: String,
}

/// Error types for clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Failed to access the clipboard.
    #[error("clipboard access error: {0}")]
    AccessError(String),
    /// Image encoding/decoding failed.
    #[error("image processing error: {0}")]
    ImageError(String),
    /// Writing text to the clipboard failed.
    #[error("clipboard write error: {0}")]
    WriteError(String),
}

/// Trait for reading an image from the clipboard.
///
/// # Returns
/// - `Ok(Some(image))` if an image is available
/// - `Ok(None)` if the clipboard is accessible but holds no image
/// - `Err(...)` if clipboard access itself failed
pub trait ClipboardSource {
    fn read_image(&self) -> Result<Option<ClipboardImage>, ClipboardError>;
}

/// Trait for writing text back to the clipboard.
///
/// Abstracting the write side keeps platform clipboard mechanisms swappable
/// without touching pipeline logic, and enables mock sinks in tests.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard implementation using the `arboard` crate.
#[derive(Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;

        match clipboard.get_image() {
            Ok(image_data) => {
                // PNG-encode the RGBA bitmap for the recognition request
                let png_data =
                    encode_rgba_to_png(image_data.width, image_data.height, &image_data.bytes)?;

                let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
                let filename = format!("clipboard_{timestamp}.png");

                Ok(Some(ClipboardImage {
                    width: image_data.width,
                    height: image_data.height,
                    bytes: png_data,
                    mime_type: "image/png".to_owned(),
                    filename,
                }))
            }
            Err(arboard::Error::ContentNotAvailable) => {
                // Try to load image from a file:// URI in clipboard text
                if let Ok(text) = clipboard.get_text()
                    && let Some(image) = try_load_image_from_file_uri(&text)
                {
                    return Ok(Some(image));
                }
                Ok(None)
            }
            Err(e) => {
                // Try the file URI fallback before reporting the error
                if let Ok(text) = clipboard.get_text()
                    && let Some(image) = try_load_image_from_file_uri(&text)
                {
                    return Ok(Some(image));
                }
                Err(ClipboardError::AccessError(e.to_string()))
            }
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteError(e.to_string()))
    }
}

/// Encodes RGBA pixel data to PNG format.
fn encode_rgba_to_png(
    width: usize,
    height: usize,
    rgba_data: &[u8],
) -> Result<Vec<u8>, ClipboardError> {
    use image::{ImageBuffer, Rgba};

    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width as u32, height as u32, rgba_data.to_vec())
            .ok_or_else(|| ClipboardError::ImageError("Invalid image dimensions".to_owned()))?;

    let mut cursor = std::io::Cursor::new(Vec::new());
    img.write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(|e| ClipboardError::ImageError(format!("Failed to encode PNG: {e}")))?;

    Ok(cursor.into_inner())
}

/// Attempts to load an image from a file:// URI found in clipboard text.
fn try_load_image_from_file_uri(text: &str) -> Option<ClipboardImage> {
    // Clipboard may contain multiple lines (e.g., multiple files selected)
    for line in text.lines() {
        let line = line.trim();
        if let Some(path) = extract_file_path_from_uri(line) {
            log::trace!(
                target: "snaptex_input::clipboard",
                "file_uri_detected path={path:?}",
            );

            if let Some(image) = load_image_from_path(&path) {
                return Some(image);
            }
        }
    }
    None
}

/// Extracts a filesystem path from a file:// URI.
///
/// Handles URL decoding for paths with special characters (spaces, unicode, etc.)
fn extract_file_path_from_uri(uri: &str) -> Option<std::path::PathBuf> {
    let uri = uri.trim();

    if !uri.to_lowercase().starts_with("file://") {
        return None;
    }

    let path_str = &uri[7..]; // Skip "file://"

    // URL-decode the path (handles %20 for spaces, %C3%A9 for é, etc.)
    let decoded = urlencoding::decode(path_str).ok()?;

    let path = std::path::PathBuf::from(decoded.as_ref());

    if path.is_file() {
        Some(path)
    } else {
        log::trace!(
            target: "snaptex_input::clipboard",
            "file_uri_not_found path={path:?}",
        );
        None
    }
}

/// Loads an image from a filesystem path and PNG-encodes it.
fn load_image_from_path(path: &std::path::Path) -> Option<ClipboardImage> {
    use image::GenericImageView as _;

    // Check if it's an image file by extension
    let extension = path.extension()?.to_str()?.to_lowercase();
    let is_image = matches!(
        extension.as_str(),
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "tiff" | "tif" | "ico"
    );

    if !is_image {
        return None;
    }

    match image::open(path) {
        Ok(img) => {
            let (width, height) = img.dimensions();
            let rgba = img.to_rgba8();

            let filename = path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "clipboard_image.png".to_owned());

            let mut cursor = std::io::Cursor::new(Vec::new());
            if rgba.write_to(&mut cursor, image::ImageFormat::Png).is_err() {
                return None;
            }

            Some(ClipboardImage {
                width: width as usize,
                height: height as usize,
                bytes: cursor.into_inner(),
                mime_type: "image/png".to_owned(),
                filename,
            })
        }
        Err(e) => {
            log::trace!(
                target: "snaptex_input::clipboard",
                "failed_to_load_image path={path:?} error={e}",
            );
            None
        }
    }
}
