// SPDX-License-Identifier: MPL-2.0
//! The user-selected image awaiting submission.

use super::extensions;
use iced::widget::image;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{fs, io};

/// Bytes per mebibyte, for the human-readable size display.
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Fallback display name when a path has no readable file name.
const FALLBACK_NAME: &str = "image.jpg";

/// The currently selected image file, held entirely in memory.
///
/// The raw bytes back both the on-screen preview and the eventual upload,
/// so the file on disk is read exactly once, at selection time. The preview
/// handle is created in the constructor and lives only as long as this
/// value: replacing or dropping the candidate releases its preview with it,
/// which keeps preview acquisition and release strictly paired.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    name: String,
    bytes: Arc<Vec<u8>>,
    preview: image::Handle,
    path: PathBuf,
}

impl CandidateFile {
    /// Creates a candidate from already-loaded bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let bytes = Arc::new(bytes);
        let preview = image::Handle::from_bytes(bytes.to_vec());
        Self {
            name: name.into(),
            bytes,
            preview,
            path: path.into(),
        }
    }

    /// Reads a file from disk into a candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(FALLBACK_NAME)
            .to_string();
        Ok(Self::new(name, path, bytes))
    }

    /// Returns the file name shown on the selected card and sent with the
    /// upload.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the media type declared for the upload part.
    #[must_use]
    pub fn media_type(&self) -> &'static str {
        extensions::JPEG_MEDIA_TYPE
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Formats the file size for display, e.g. `2.41 MB`.
    #[must_use]
    pub fn size_display(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let size_mb = self.bytes.len() as f64 / BYTES_PER_MB;
        format!("{size_mb:.2} MB")
    }

    /// Returns the raw file bytes. The `Arc` makes sharing with an upload
    /// task cheap.
    #[must_use]
    pub fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }

    /// Returns the preview handle paired with this candidate.
    #[must_use]
    pub fn preview(&self) -> &image::Handle {
        &self.preview
    }

    /// Returns the path the file was selected from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
