//! PNM image format support (binary P5 / P6)

use crate::{IoError, IoResult};
use platefind_core::{PixelFormat, Raster};
use std::io::{Read, Write};

/// Read a token from the header, skipping whitespace and `#` comments.
fn read_token(data: &[u8], pos: &mut usize) -> IoResult<Vec<u8>> {
    while *pos < data.len() {
        let b = data[*pos];
        if b == b'#' {
            while *pos < data.len() && data[*pos] != b'\n' {
                *pos += 1;
            }
        } else if b.is_ascii_whitespace() {
            *pos += 1;
        } else {
            break;
        }
    }

    let start = *pos;
    while *pos < data.len() && !data[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    if start == *pos {
        return Err(IoError::DecodeError("truncated PNM header".to_string()));
    }
    Ok(data[start..*pos].to_vec())
}

fn parse_number(token: &[u8]) -> IoResult<u32> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| IoError::DecodeError("malformed PNM header number".to_string()))
}

/// Read a binary PNM image (P5 grayscale or P6 RGB, maxval up to 255).
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Raster> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut pos = 0usize;
    let magic = read_token(&data, &mut pos)?;
    let format = match magic.as_slice() {
        b"P5" => PixelFormat::Gray8,
        b"P6" => PixelFormat::Rgb8,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM magic: {}",
                String::from_utf8_lossy(other)
            )));
        }
    };

    let width = parse_number(&read_token(&data, &mut pos)?)?;
    let height = parse_number(&read_token(&data, &mut pos)?)?;
    let maxval = parse_number(&read_token(&data, &mut pos)?)?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {}",
            maxval
        )));
    }

    // Exactly one whitespace byte separates the header from the samples
    pos += 1;

    let expected = width as usize * height as usize * format.bytes_per_pixel();
    if data.len() < pos + expected {
        return Err(IoError::DecodeError(format!(
            "PNM data truncated: expected {} bytes, got {}",
            expected,
            data.len().saturating_sub(pos)
        )));
    }

    Ok(Raster::from_vec(
        width,
        height,
        format,
        data[pos..pos + expected].to_vec(),
    )?)
}

/// Write a binary PNM image (P5 for Gray8, P6 for Rgb8).
pub fn write_pnm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    let magic = match raster.format() {
        PixelFormat::Gray8 => "P5",
        PixelFormat::Rgb8 => "P6",
    };
    write!(writer, "{}\n{} {}\n255\n", magic, raster.width(), raster.height())?;
    writer.write_all(raster.data())?;
    Ok(())
}
