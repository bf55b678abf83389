//! Image file format identification

use std::path::Path;

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// PNM format (P5 grayscale / P6 RGB, binary)
    Pnm,
}

impl ImageFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }

    /// Identify a format from leading file bytes.
    pub fn sniff(header: &[u8]) -> Self {
        if header.starts_with(b"\x89PNG\r\n\x1a\n") {
            Self::Png
        } else if header.starts_with(b"P5") || header.starts_with(b"P6") {
            Self::Pnm
        } else {
            Self::Unknown
        }
    }

    /// Guess a format from a file path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => Self::Png,
            Some("pnm") | Some("pgm") | Some("ppm") => Self::Pnm,
            _ => Self::Unknown,
        }
    }
}
