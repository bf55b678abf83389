//! Drawing primitives
//!
//! Shape rendering on a [`RasterMut`]: lines, rectangle and circle
//! outlines, filled circles, and closed polygons. All functions clip
//! silently at the raster boundary, so callers can draw geometry that
//! extends off-image (rotated rectangles near an edge routinely do).
//!
//! Thickness is rendered by stamping a square brush along the generated
//! line points.

use crate::geom::{Point, PointF, Rect};
use crate::raster::RasterMut;

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White color
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Red color
    pub const RED: Color = Color::new(255, 0, 0);
    /// Green color
    pub const GREEN: Color = Color::new(0, 255, 0);
    /// Blue color
    pub const BLUE: Color = Color::new(0, 0, 255);
    /// Mid gray
    pub const GRAY: Color = Color::new(128, 128, 128);

    /// Collapse to a grayscale value
    pub fn to_gray(self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Write one pixel, ignoring positions outside the raster.
fn plot(raster: &mut RasterMut, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x as u32 >= raster.width() || y as u32 >= raster.height() {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if raster.format().channels() == 1 {
        raster.put_gray(x, y, color.to_gray());
    } else {
        raster.put_rgb(x, y, color.r, color.g, color.b);
    }
}

/// Stamp a `thickness`-sized square brush centered on `(x, y)`.
fn stamp(raster: &mut RasterMut, x: i32, y: i32, color: Color, thickness: u32) {
    let t = thickness.max(1) as i32;
    let lo = -(t - 1) / 2;
    let hi = t / 2;
    for dy in lo..=hi {
        for dx in lo..=hi {
            plot(raster, x + dx, y + dy, color);
        }
    }
}

/// Generate the pixel positions of a line using Bresenham's algorithm.
///
/// Integer arithmetic only; the line connects `p0` to `p1` inclusive with
/// 8-connectivity.
pub fn line_points(p0: Point, p1: Point) -> Vec<Point> {
    if p0 == p1 {
        return vec![p0];
    }

    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    let sx = if p1.x > p0.x { 1i32 } else { -1 };
    let sy = if p1.y > p0.y { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pts = Vec::with_capacity(npts as usize);

    let mut x = p0.x;
    let mut y = p0.y;

    if dx >= dy {
        // Step along x (more horizontal)
        let mut err = dx / 2;
        for _ in 0..npts {
            pts.push(Point::new(x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y (more vertical)
        let mut err = dy / 2;
        for _ in 0..npts {
            pts.push(Point::new(x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pts
}

/// Draw a line segment.
pub fn draw_line(raster: &mut RasterMut, p0: Point, p1: Point, color: Color, thickness: u32) {
    for p in line_points(p0, p1) {
        stamp(raster, p.x, p.y, color, thickness);
    }
}

/// Draw a connected polyline. Closing the shape is the caller's choice.
pub fn draw_polyline(
    raster: &mut RasterMut,
    points: &[Point],
    closed: bool,
    color: Color,
    thickness: u32,
) {
    if points.is_empty() {
        return;
    }
    for pair in points.windows(2) {
        draw_line(raster, pair[0], pair[1], color, thickness);
    }
    if closed && points.len() > 2 {
        draw_line(raster, points[points.len() - 1], points[0], color, thickness);
    }
}

/// Draw the outline of an axis-aligned rectangle.
pub fn draw_rect_outline(raster: &mut RasterMut, rect: Rect, color: Color, thickness: u32) {
    if rect.is_empty() {
        return;
    }
    let tl = Point::new(rect.x, rect.y);
    let tr = Point::new(rect.right() - 1, rect.y);
    let br = Point::new(rect.right() - 1, rect.bottom() - 1);
    let bl = Point::new(rect.x, rect.bottom() - 1);
    draw_polyline(raster, &[tl, tr, br, bl], true, color, thickness);
}

/// Draw a closed polygon through sub-pixel corners, rounding each to the
/// nearest pixel. Used for rotated rectangles.
pub fn draw_polygon(raster: &mut RasterMut, corners: &[PointF], color: Color, thickness: u32) {
    let rounded: Vec<Point> = corners.iter().map(|p| p.round()).collect();
    draw_polyline(raster, &rounded, true, color, thickness);
}

/// Draw a circle outline using the midpoint algorithm.
pub fn draw_circle_outline(
    raster: &mut RasterMut,
    center: Point,
    radius: i32,
    color: Color,
    thickness: u32,
) {
    if radius < 0 {
        return;
    }
    if radius == 0 {
        stamp(raster, center.x, center.y, color, thickness);
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            stamp(raster, center.x + dx, center.y + dy, color, thickness);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Draw a filled circle.
pub fn fill_circle(raster: &mut RasterMut, center: Point, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                plot(raster, center.x + dx, center.y + dy, color);
            }
        }
    }
}
