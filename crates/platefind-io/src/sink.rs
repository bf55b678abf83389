//! Output directory sink
//!
//! Persists a sequence of intermediate rasters into one output directory.
//! The directory is an explicit value held by the sink, never a
//! process-wide setting.

use crate::format::ImageFormat;
use crate::{IoError, IoResult, write_image_as};
use platefind_core::Raster;
use std::path::{Path, PathBuf};

/// Writes named intermediate images into a directory.
#[derive(Debug, Clone)]
pub struct ImageSink {
    dir: PathBuf,
    format: ImageFormat,
}

impl ImageSink {
    /// Create a sink writing PNG files into `dir`, creating it if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> IoResult<Self> {
        Self::with_format(dir, ImageFormat::Png)
    }

    /// Create a sink with an explicit output format.
    pub fn with_format<P: AsRef<Path>>(dir: P, format: ImageFormat) -> IoResult<Self> {
        if format == ImageFormat::Unknown {
            return Err(IoError::UnsupportedFormat(
                "sink needs a concrete output format".to_string(),
            ));
        }
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, format })
    }

    /// The directory this sink writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a raster under `stem` (the extension comes from the format).
    ///
    /// Returns the path written.
    pub fn save(&self, raster: &Raster, stem: &str) -> IoResult<PathBuf> {
        let path = self.dir.join(format!("{}.{}", stem, self.format.extension()));
        write_image_as(raster, &path, self.format)?;
        tracing::debug!(path = %path.display(), "saved image");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platefind_core::{PixelFormat, Raster};

    #[test]
    fn test_sink_creates_dir_and_saves() {
        let dir = std::env::temp_dir().join("platefind-sink-test");
        let _ = std::fs::remove_dir_all(&dir);

        let sink = ImageSink::new(&dir).unwrap();
        let raster = Raster::new(4, 4, PixelFormat::Gray8).unwrap();
        let path = sink.save(&raster, "01_gray").unwrap();

        assert!(path.ends_with("01_gray.png"));
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
