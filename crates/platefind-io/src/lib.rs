//! platefind-io - Image I/O for the platefind toolkit
//!
//! Reads and writes rasters from disk. PNG support comes from the `png`
//! crate; the binary PNM formats (P5/P6) are handled directly. Formats are
//! identified by file contents on read and by extension (or explicitly) on
//! write.
//!
//! [`ImageSink`] persists a pipeline's intermediate images into one output
//! directory.

pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;
pub mod sink;

pub use error::{IoError, IoResult};
pub use format::ImageFormat;
pub use sink::ImageSink;

use platefind_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom};
use std::path::Path;

/// Read an image from a file, identifying the format from its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);

    let mut header = [0u8; 8];
    let n = reader.read(&mut header)?;
    reader.seek(SeekFrom::Start(0))?;

    match ImageFormat::sniff(&header[..n]) {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot read {}: format {:?}",
            path.display(),
            other
        ))),
    }
}

/// Write an image to a file, picking the format from the extension.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path);
    write_image_as(raster, path, format)
}

/// Write an image to a file in an explicit format.
pub fn write_image_as<P: AsRef<Path>>(
    raster: &Raster,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(raster, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot write {}: format {:?}",
            path.display(),
            other
        ))),
    }
}
