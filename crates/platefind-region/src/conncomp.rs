//! Connected component analysis
//!
//! Labels connected foreground regions of a binary mask and reports
//! per-component statistics. Labeling is a breadth-first sweep with an
//! explicit queue; labels are assigned in raster-scan order of each
//! component's first (topmost-leftmost) pixel, which fixes the discovery
//! order everything downstream relies on.

use crate::error::{RegionError, RegionResult};
use platefind_core::{Raster, Rect};
use std::collections::VecDeque;

/// Connectivity for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl Connectivity {
    /// Neighbor offsets for this connectivity
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::FourWay => &[(1, 0), (0, 1), (-1, 0), (0, -1)],
            Connectivity::EightWay => &[
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
                (0, -1),
                (1, -1),
            ],
        }
    }
}

/// Label image produced by [`label_components`].
///
/// Label 0 is background; foreground labels start at 1 and follow
/// raster-scan discovery order.
#[derive(Debug, Clone)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    count: u32,
}

impl LabelMap {
    /// Image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of labeled components (labels run `1..=count`).
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Label at a pixel; 0 is background.
    #[inline]
    pub fn label_at(&self, x: u32, y: u32) -> u32 {
        self.labels[y as usize * self.width as usize + x as usize]
    }

    /// Whether `(x, y)` is inside the map and carries `label`.
    #[inline]
    pub fn has_label(&self, x: i32, y: i32, label: u32) -> bool {
        x >= 0
            && y >= 0
            && (x as u32) < self.width
            && (y as u32) < self.height
            && self.label_at(x as u32, y as u32) == label
    }
}

/// A connected component of a binary mask
#[derive(Debug, Clone)]
pub struct ConnectedComponent {
    /// Label in the corresponding [`LabelMap`] (1-based)
    pub label: u32,
    /// Number of foreground pixels
    pub pixel_count: u32,
    /// Axis-aligned bounding box
    pub bounds: Rect,
}

fn check_binary(mask: &Raster) -> RegionResult<()> {
    if !mask.is_gray() {
        return Err(RegionError::NotBinary(mask.format()));
    }
    Ok(())
}

/// Label all connected foreground components of a binary mask.
///
/// # Errors
///
/// Returns [`RegionError::NotBinary`] for non-grayscale input.
pub fn label_components(mask: &Raster, connectivity: Connectivity) -> RegionResult<LabelMap> {
    check_binary(mask)?;

    let (w, h) = mask.dimensions();
    let mut labels = vec![0u32; w as usize * h as usize];
    let mut count = 0u32;
    let offsets = connectivity.offsets();
    let mut queue = VecDeque::new();

    for y in 0..h {
        for x in 0..w {
            let idx = y as usize * w as usize + x as usize;
            if mask.gray_at(x, y) == 0 || labels[idx] != 0 {
                continue;
            }

            count += 1;
            labels[idx] = count;
            queue.push_back((x as i32, y as i32));

            while let Some((cx, cy)) = queue.pop_front() {
                for &(dx, dy) in offsets {
                    let nx = cx + dx;
                    let ny = cy + dy;
                    if nx < 0 || ny < 0 || nx as u32 >= w || ny as u32 >= h {
                        continue;
                    }
                    let nidx = ny as usize * w as usize + nx as usize;
                    if labels[nidx] == 0 && mask.gray_at(nx as u32, ny as u32) != 0 {
                        labels[nidx] = count;
                        queue.push_back((nx, ny));
                    }
                }
            }
        }
    }

    Ok(LabelMap {
        width: w,
        height: h,
        labels,
        count,
    })
}

/// Find all connected components with their pixel counts and bounding boxes.
///
/// Components come back in discovery order (matching [`LabelMap`] labels).
///
/// # Errors
///
/// Returns [`RegionError::NotBinary`] for non-grayscale input.
pub fn find_components(mask: &Raster, connectivity: Connectivity) -> RegionResult<Vec<ConnectedComponent>> {
    let map = label_components(mask, connectivity)?;
    let mut stats: Vec<(u32, i32, i32, i32, i32)> = Vec::new();

    for y in 0..map.height() {
        for x in 0..map.width() {
            let label = map.label_at(x, y);
            if label == 0 {
                continue;
            }
            let i = (label - 1) as usize;
            if i == stats.len() {
                stats.push((0, x as i32, y as i32, x as i32, y as i32));
            }
            let s = &mut stats[i];
            s.0 += 1;
            s.1 = s.1.min(x as i32);
            s.2 = s.2.min(y as i32);
            s.3 = s.3.max(x as i32);
            s.4 = s.4.max(y as i32);
        }
    }

    Ok(stats
        .into_iter()
        .enumerate()
        .map(|(i, (n, x0, y0, x1, y1))| ConnectedComponent {
            label: i as u32 + 1,
            pixel_count: n,
            bounds: Rect::new_unchecked(x0, y0, x1 - x0 + 1, y1 - y0 + 1),
        })
        .collect())
}
