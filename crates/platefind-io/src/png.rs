//! PNG image format support

use crate::{IoError, IoResult};
use platefind_core::{PixelFormat, Raster};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image.
///
/// 8-bit grayscale, gray+alpha, RGB, RGBA and indexed images are accepted;
/// alpha is dropped and palettes are expanded. Sixteen-bit and sub-byte
/// depths are not supported.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let npixels = width as usize * height as usize;
    match color_type {
        ColorType::Grayscale => {
            buf.truncate(npixels);
            Ok(Raster::from_vec(width, height, PixelFormat::Gray8, buf)?)
        }
        ColorType::GrayscaleAlpha => {
            let gray: Vec<u8> = buf.chunks_exact(2).map(|p| p[0]).collect();
            Ok(Raster::from_vec(width, height, PixelFormat::Gray8, gray)?)
        }
        ColorType::Rgb => {
            buf.truncate(npixels * 3);
            Ok(Raster::from_vec(width, height, PixelFormat::Rgb8, buf)?)
        }
        ColorType::Rgba => {
            let rgb: Vec<u8> = buf
                .chunks_exact(4)
                .flat_map(|p| [p[0], p[1], p[2]])
                .collect();
            Ok(Raster::from_vec(width, height, PixelFormat::Rgb8, rgb)?)
        }
        ColorType::Indexed => {
            let palette = reader
                .info()
                .palette
                .as_ref()
                .ok_or_else(|| IoError::DecodeError("indexed PNG without palette".to_string()))?;
            let mut rgb = Vec::with_capacity(npixels * 3);
            for &idx in buf.iter().take(npixels) {
                let base = idx as usize * 3;
                if base + 2 >= palette.len() {
                    return Err(IoError::DecodeError(format!(
                        "palette index {} out of range",
                        idx
                    )));
                }
                rgb.extend_from_slice(&palette[base..base + 3]);
            }
            Ok(Raster::from_vec(width, height, PixelFormat::Rgb8, rgb)?)
        }
    }
}

/// Write a PNG image.
///
/// Gray8 rasters encode as 8-bit grayscale, Rgb8 as 8-bit RGB.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let color_type = match raster.format() {
        PixelFormat::Gray8 => ColorType::Grayscale,
        PixelFormat::Rgb8 => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;

    Ok(())
}
