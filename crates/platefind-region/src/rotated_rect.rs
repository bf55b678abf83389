//! Minimum-area rotated rectangles
//!
//! Computes the smallest enclosing rectangle, at any rotation, of a point
//! set: convex hull by Andrew's monotone chain, then one caliper sweep
//! over the hull edges (the minimum-area rectangle has a side collinear
//! with some hull edge).

use platefind_core::{Point, PointF};

/// A rectangle at an arbitrary rotation.
///
/// `angle` is the direction of the `width` side in degrees,
/// counter-clockwise from the positive x axis. Width and height are
/// always non-negative; degenerate point sets produce a zero side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    /// Center of the rectangle
    pub center: PointF,
    /// Extent along the `angle` direction
    pub width: f32,
    /// Extent perpendicular to the `angle` direction
    pub height: f32,
    /// Direction of the width side, degrees
    pub angle: f32,
}

impl RotatedRect {
    /// Area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    /// Length of the longer side.
    #[inline]
    pub fn long_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Length of the shorter side.
    #[inline]
    pub fn short_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// The four corners in order (adjacent corners share an edge).
    pub fn corners(&self) -> [PointF; 4] {
        let rad = self.angle.to_radians();
        let (sin, cos) = rad.sin_cos();
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        let along = (cos * hw, sin * hw);
        let across = (-sin * hh, cos * hh);
        [
            PointF::new(
                self.center.x - along.0 - across.0,
                self.center.y - along.1 - across.1,
            ),
            PointF::new(
                self.center.x + along.0 - across.0,
                self.center.y + along.1 - across.1,
            ),
            PointF::new(
                self.center.x + along.0 + across.0,
                self.center.y + along.1 + across.1,
            ),
            PointF::new(
                self.center.x - along.0 + across.0,
                self.center.y - along.1 + across.1,
            ),
        ]
    }
}

/// Cross product of `(b - a)` and `(c - a)`.
fn cross(a: Point, b: Point, c: Point) -> i64 {
    (b.x - a.x) as i64 * (c.y - a.y) as i64 - (b.y - a.y) as i64 * (c.x - a.x) as i64
}

/// Convex hull of a point set (Andrew's monotone chain).
///
/// Returns hull vertices in clockwise order under image coordinates
/// (y growing downward) with collinear points dropped. Duplicates in the
/// input are tolerated.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| (a.x, a.y).cmp(&(b.x, b.y)));
    pts.dedup();

    let n = pts.len();
    if n <= 2 {
        return pts;
    }

    let mut hull: Vec<Point> = Vec::with_capacity(2 * n);

    // Lower hull
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }

    // Upper hull
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }

    hull.pop();
    hull
}

/// Minimum-area rotated rectangle enclosing a point set.
///
/// Degenerate inputs are well-defined rather than errors: an empty set
/// yields a zero rectangle at the origin, a single point a zero-sized
/// rectangle at that point, and collinear points a rectangle with zero
/// height along the segment. Callers filtering on rectangle geometry
/// (see the classifier) drop those naturally.
pub fn min_area_rect(points: &[Point]) -> RotatedRect {
    let hull = convex_hull(points);

    match hull.len() {
        0 => {
            return RotatedRect {
                center: PointF::new(0.0, 0.0),
                width: 0.0,
                height: 0.0,
                angle: 0.0,
            };
        }
        1 => {
            return RotatedRect {
                center: hull[0].into(),
                width: 0.0,
                height: 0.0,
                angle: 0.0,
            };
        }
        2 => {
            let a: PointF = hull[0].into();
            let b: PointF = hull[1].into();
            return RotatedRect {
                center: PointF::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5),
                width: a.distance(b),
                height: 0.0,
                angle: (b.y - a.y).atan2(b.x - a.x).to_degrees(),
            };
        }
        _ => {}
    }

    let n = hull.len();
    let mut best_area = f64::INFINITY;
    let mut best = RotatedRect {
        center: PointF::new(0.0, 0.0),
        width: 0.0,
        height: 0.0,
        angle: 0.0,
    };

    for i in 0..n {
        let p = hull[i];
        let q = hull[(i + 1) % n];
        let ex = (q.x - p.x) as f64;
        let ey = (q.y - p.y) as f64;
        let len = (ex * ex + ey * ey).sqrt();
        if len == 0.0 {
            continue;
        }
        let ux = ex / len;
        let uy = ey / len;

        // Project the hull onto the edge direction and its normal
        let mut min_u = f64::INFINITY;
        let mut max_u = f64::NEG_INFINITY;
        let mut min_v = f64::INFINITY;
        let mut max_v = f64::NEG_INFINITY;
        for &h in &hull {
            let u = h.x as f64 * ux + h.y as f64 * uy;
            let v = -(h.x as f64) * uy + h.y as f64 * ux;
            min_u = min_u.min(u);
            max_u = max_u.max(u);
            min_v = min_v.min(v);
            max_v = max_v.max(v);
        }

        let w = max_u - min_u;
        let h = max_v - min_v;
        let area = w * h;
        if area < best_area {
            best_area = area;
            let cu = (min_u + max_u) * 0.5;
            let cv = (min_v + max_v) * 0.5;
            best = RotatedRect {
                center: PointF::new(
                    (cu * ux - cv * uy) as f32,
                    (cu * uy + cv * ux) as f32,
                ),
                width: w as f32,
                height: h as f32,
                angle: ey.atan2(ex).to_degrees() as f32,
            };
        }
    }

    best
}
