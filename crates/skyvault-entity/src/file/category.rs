//! File type classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad classification of a file, derived from its mime type.
///
/// The category is computed once at upload time and is immutable
/// thereafter — renaming a file never re-classifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Raster or vector images.
    Image,
    /// Video content.
    Video,
    /// Audio content.
    Audio,
    /// Text-like documents (pdf, plain text, office documents).
    Document,
    /// Compressed archives.
    Archive,
    /// Anything else.
    Unknown,
}

impl FileCategory {
    /// Classify a mime type into a category.
    ///
    /// Prefix matches win over substring matches; the first matching rule
    /// applies.
    pub fn from_mime(mime_type: &str) -> Self {
        let mime = mime_type.to_ascii_lowercase();
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else if mime.contains("pdf") || mime.contains("text") || mime.contains("document") {
            Self::Document
        } else if mime.contains("zip") || mime.contains("rar") || mime.contains("7z") {
            Self::Archive
        } else {
            Self::Unknown
        }
    }

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Archive => "archive",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matches() {
        assert_eq!(FileCategory::from_mime("image/png"), FileCategory::Image);
        assert_eq!(FileCategory::from_mime("video/mp4"), FileCategory::Video);
        assert_eq!(FileCategory::from_mime("audio/mpeg"), FileCategory::Audio);
    }

    #[test]
    fn test_document_substrings() {
        assert_eq!(
            FileCategory::from_mime("application/pdf"),
            FileCategory::Document
        );
        assert_eq!(FileCategory::from_mime("text/plain"), FileCategory::Document);
        assert_eq!(
            FileCategory::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            FileCategory::Document
        );
    }

    #[test]
    fn test_archive_substrings() {
        assert_eq!(
            FileCategory::from_mime("application/zip"),
            FileCategory::Archive
        );
        assert_eq!(
            FileCategory::from_mime("application/x-rar-compressed"),
            FileCategory::Archive
        );
        assert_eq!(
            FileCategory::from_mime("application/x-7z-compressed"),
            FileCategory::Archive
        );
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(
            FileCategory::from_mime("application/octet-stream"),
            FileCategory::Unknown
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(FileCategory::from_mime("IMAGE/JPEG"), FileCategory::Image);
    }
}
