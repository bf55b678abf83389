//! Seed fill
//!
//! Flood fill on a grayscale raster: starting from a seed pixel, every
//! connected pixel holding the seed's original value is rewritten.

use crate::conncomp::Connectivity;
use crate::error::{RegionError, RegionResult};
use platefind_core::RasterMut;
use std::collections::VecDeque;

/// Flood fill from a seed point.
///
/// Fills the connected region of pixels equal to the seed's original value
/// with `value` and returns the number of pixels written. A seed already
/// holding `value` fills nothing.
///
/// # Errors
///
/// Returns [`RegionError::NotBinary`] for multi-channel input and
/// [`RegionError::InvalidSeed`] for a seed outside the raster.
pub fn floodfill(
    raster: &mut RasterMut,
    x: u32,
    y: u32,
    value: u8,
    connectivity: Connectivity,
) -> RegionResult<u64> {
    if raster.format().channels() != 1 {
        return Err(RegionError::NotBinary(raster.format()));
    }
    let (w, h) = (raster.width(), raster.height());
    if x >= w || y >= h {
        return Err(RegionError::InvalidSeed { x, y });
    }

    let target = raster.get_unchecked(x, y, 0);
    if target == value {
        return Ok(0);
    }

    let offsets = connectivity.offsets();
    let mut filled = 0u64;
    let mut queue = VecDeque::new();

    raster.put_gray(x, y, value);
    filled += 1;
    queue.push_back((x as i32, y as i32));

    while let Some((cx, cy)) = queue.pop_front() {
        for &(dx, dy) in offsets {
            let nx = cx + dx;
            let ny = cy + dy;
            if nx < 0 || ny < 0 || nx as u32 >= w || ny as u32 >= h {
                continue;
            }
            if raster.get_unchecked(nx as u32, ny as u32, 0) == target {
                raster.put_gray(nx as u32, ny as u32, value);
                filled += 1;
                queue.push_back((nx, ny));
            }
        }
    }

    Ok(filled)
}
