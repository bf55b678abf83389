//! External contour tracing
//!
//! Traces the outer boundary of every connected foreground component in a
//! binary mask using Moore neighbor tracing with Jacob's stopping
//! criterion. Hole boundaries inside a component are not reported.
//!
//! Contours come back in discovery order: raster-scan order of each
//! component's topmost-leftmost pixel.

use crate::conncomp::{Connectivity, LabelMap, label_components};
use crate::error::RegionResult;
use platefind_core::{Point, Raster, Rect};

/// Ordered boundary of one connected foreground region.
///
/// Points are pixel positions in clockwise traversal order, starting at
/// the component's topmost-leftmost pixel. Thin one-pixel arms are
/// traversed out and back, so points may repeat; the area and perimeter
/// formulas account for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Wrap an ordered point list as a contour.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Boundary points in traversal order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of boundary points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area by the shoelace formula, in pixels.
    ///
    /// The boundary polygon runs through pixel centers, so a solid
    /// `w x h` block measures `(w-1) * (h-1)`. Degenerate contours
    /// (points, lines) measure 0.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut acc = 0.0f64;
        let n = self.points.len();
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            acc += p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
        }
        (acc * 0.5).abs()
    }

    /// Length of the closed boundary polyline.
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let n = self.points.len();
        let mut acc = 0.0f64;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            let dx = (p.x - q.x) as f64;
            let dy = (p.y - q.y) as f64;
            acc += (dx * dx + dy * dy).sqrt();
        }
        acc
    }

    /// Axis-aligned bounding box, or `None` for an empty contour.
    pub fn bounding_box(&self) -> Option<Rect> {
        if self.points.is_empty() {
            return None;
        }
        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::new_unchecked(
            min_x,
            min_y,
            max_x - min_x + 1,
            max_y - min_y + 1,
        ))
    }
}

/// Clockwise neighbor order: E, SE, S, SW, W, NW, N, NE
const NBRS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// First same-label neighbor of `p`, scanning clockwise from `start_dir`.
fn next_boundary_dir(map: &LabelMap, label: u32, p: Point, start_dir: usize) -> Option<usize> {
    for j in 0..8 {
        let d = (start_dir + j) % 8;
        let (dx, dy) = NBRS[d];
        if map.has_label(p.x + dx, p.y + dy, label) {
            return Some(d);
        }
    }
    None
}

/// Trace the outer border of the component `label`, starting at its
/// topmost-leftmost pixel.
fn trace_outer_border(map: &LabelMap, label: u32, start: Point) -> Contour {
    let mut points = vec![start];

    // The start pixel has background to its west, north and north-west,
    // so the clockwise scan begins at NW (index 5).
    let Some(d0) = next_boundary_dir(map, label, start, 5) else {
        // Isolated pixel
        return Contour::new(points);
    };

    let first = Point::new(start.x + NBRS[d0].0, start.y + NBRS[d0].1);
    let initial = (first, (d0 + 6) % 8);
    let (mut cur, mut start_dir) = initial;

    // The walk re-enters `initial` exactly when the border closes; the
    // last pushed point is then the start pixel again, which we drop.
    let limit = 8 * map.width() as usize * map.height() as usize;
    for _ in 0..limit {
        points.push(cur);
        let d = match next_boundary_dir(map, label, cur, start_dir) {
            Some(d) => d,
            None => break,
        };
        cur = Point::new(cur.x + NBRS[d].0, cur.y + NBRS[d].1);
        start_dir = (d + 6) % 8;
        if (cur, start_dir) == initial {
            break;
        }
    }

    if points.len() > 1 && points.last() == Some(&start) {
        points.pop();
    }

    Contour::new(points)
}

/// Trace the external contour of every connected foreground component.
///
/// Components are 8-connected; hole borders are ignored.
///
/// # Errors
///
/// Returns [`crate::RegionError::NotBinary`] for non-grayscale input.
pub fn find_external_contours(mask: &Raster) -> RegionResult<Vec<Contour>> {
    let map = label_components(mask, Connectivity::EightWay)?;

    let mut starts: Vec<Option<Point>> = vec![None; map.count() as usize];
    for y in 0..map.height() {
        for x in 0..map.width() {
            let label = map.label_at(x, y);
            if label != 0 && starts[(label - 1) as usize].is_none() {
                starts[(label - 1) as usize] = Some(Point::new(x as i32, y as i32));
            }
        }
    }

    Ok(starts
        .into_iter()
        .enumerate()
        .filter_map(|(i, start)| start.map(|s| trace_outer_border(&map, i as u32 + 1, s)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use platefind_core::PixelFormat;

    fn solid_rect_mask(w: u32, h: u32, x0: u32, y0: u32, bw: u32, bh: u32) -> Raster {
        let mut m = Raster::new(w, h, PixelFormat::Gray8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for y in y0..y0 + bh {
            for x in x0..x0 + bw {
                m.put_gray(x, y, 255);
            }
        }
        m.into()
    }

    #[test]
    fn test_empty_mask_no_contours() {
        let m = Raster::new(8, 8, PixelFormat::Gray8).unwrap();
        assert!(find_external_contours(&m).unwrap().is_empty());
    }

    #[test]
    fn test_single_pixel_contour() {
        let m = solid_rect_mask(5, 5, 2, 2, 1, 1);
        let contours = find_external_contours(&m).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points(), &[Point::new(2, 2)]);
        assert_eq!(contours[0].area(), 0.0);
    }

    #[test]
    fn test_square_block_area() {
        // 4x4 block: boundary polygon through pixel centers encloses 3x3
        let m = solid_rect_mask(10, 10, 3, 3, 4, 4);
        let contours = find_external_contours(&m).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].area(), 9.0);
        assert_eq!(
            contours[0].bounding_box(),
            Some(Rect::new_unchecked(3, 3, 4, 4))
        );
    }

    #[test]
    fn test_contour_starts_topmost_leftmost() {
        let m = solid_rect_mask(10, 10, 4, 2, 3, 3);
        let contours = find_external_contours(&m).unwrap();
        assert_eq!(contours[0].points()[0], Point::new(4, 2));
    }

    #[test]
    fn test_contour_visits_all_border_pixels() {
        let m = solid_rect_mask(12, 12, 2, 2, 5, 4);
        let contours = find_external_contours(&m).unwrap();
        let c = &contours[0];
        // Border of a 5x4 block has 2*5 + 2*4 - 4 = 14 pixels
        let unique: std::collections::HashSet<_> = c.points().iter().collect();
        assert_eq!(unique.len(), 14);
        // Interior stays untouched
        assert!(!c.points().contains(&Point::new(4, 4)));
    }

    #[test]
    fn test_hole_border_ignored() {
        // 6x6 block with a 2x2 hole: only the outer border is traced
        let mut m = Raster::new(10, 10, PixelFormat::Gray8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for y in 1..7 {
            for x in 1..7 {
                m.put_gray(x, y, 255);
            }
        }
        m.put_gray(3, 3, 0);
        m.put_gray(4, 3, 0);
        m.put_gray(3, 4, 0);
        m.put_gray(4, 4, 0);
        let contours = find_external_contours(&m.into()).unwrap();
        assert_eq!(contours.len(), 1);
        // Outer border of the 6x6 block measures 5x5 regardless of the hole
        assert_eq!(contours[0].area(), 25.0);
    }

    #[test]
    fn test_thin_line_zero_area() {
        let m = solid_rect_mask(10, 10, 2, 5, 6, 1);
        let contours = find_external_contours(&m).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].area(), 0.0);
        // Out-and-back traversal still covers every pixel of the line
        let unique: std::collections::HashSet<_> = contours[0].points().iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_two_components_two_contours() {
        let mut m = Raster::new(12, 12, PixelFormat::Gray8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for y in 1..4 {
            for x in 1..4 {
                m.put_gray(x, y, 255);
            }
        }
        for y in 7..10 {
            for x in 7..10 {
                m.put_gray(x, y, 255);
            }
        }
        let contours = find_external_contours(&m.into()).unwrap();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].points()[0], Point::new(1, 1));
        assert_eq!(contours[1].points()[0], Point::new(7, 7));
    }

    #[test]
    fn test_idempotent() {
        let m = solid_rect_mask(16, 16, 3, 4, 7, 5);
        let a = find_external_contours(&m).unwrap();
        let b = find_external_contours(&m).unwrap();
        assert_eq!(a, b);
    }
}
