// SPDX-License-Identifier: MPL-2.0
//! Media handling for the one kind of file this client accepts: JPEG images.
//!
//! A selected file becomes a [`CandidateFile`]: the bytes are read once, the
//! preview is derived from them, and the same bytes later back the upload.

pub mod candidate;

// Re-export commonly used types
pub use candidate::CandidateFile;

/// Accepted file extensions and media types.
pub mod extensions {
    use std::path::Path;

    /// JPEG file extensions accepted for selection and file dialogs
    pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

    /// Media type declared for accepted files in upload requests
    pub const JPEG_MEDIA_TYPE: &str = "image/jpeg";

    /// Returns whether an extension is on the JPEG allow-list.
    ///
    /// Matching is case-insensitive so `photo.JPG` is accepted.
    #[must_use]
    pub fn is_jpeg_extension(extension: &str) -> bool {
        JPEG_EXTENSIONS.contains(&extension.to_lowercase().as_str())
    }

    /// Returns whether a path carries an accepted JPEG extension.
    #[must_use]
    pub fn path_is_jpeg<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(is_jpeg_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::extensions;

    #[test]
    fn jpeg_extension_matching_is_case_insensitive() {
        assert!(extensions::is_jpeg_extension("jpg"));
        assert!(extensions::is_jpeg_extension("jpeg"));
        assert!(extensions::is_jpeg_extension("JPG"));
        assert!(extensions::is_jpeg_extension("Jpeg"));
        assert!(!extensions::is_jpeg_extension("png"));
        assert!(!extensions::is_jpeg_extension(""));
    }

    #[test]
    fn path_check_requires_accepted_extension() {
        assert!(extensions::path_is_jpeg("photo.jpg"));
        assert!(extensions::path_is_jpeg("/some/dir/photo.JPEG"));
        assert!(!extensions::path_is_jpeg("photo.png"));
        assert!(!extensions::path_is_jpeg("photo.jpg.gif"));
        assert!(!extensions::path_is_jpeg("photo"));
    }
}
