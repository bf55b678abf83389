//! Overlay rendering
//!
//! Draws classification results back onto an image: target rectangles in
//! one color with a center mark, everything else in a muted outline.

use crate::classify::ClassificationResult;
use crate::error::DetectResult;
use platefind_core::{Color, Raster, draw};

/// Colors and line widths for [`render_overlay`].
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Outline color for targets
    pub target_color: Color,
    /// Outline thickness for targets
    pub target_thickness: u32,
    /// Outline color for rejected regions
    pub reject_color: Color,
    /// Outline thickness for rejected regions
    pub reject_thickness: u32,
    /// Color of the center mark on targets
    pub center_color: Color,
    /// Radius of the center mark; 0 disables it
    pub center_radius: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            target_color: Color::GREEN,
            target_thickness: 2,
            reject_color: Color::GRAY,
            reject_thickness: 1,
            center_color: Color::RED,
            center_radius: 3,
        }
    }
}

/// Render classification results over a copy of `base`.
///
/// Every result gets its rotated rectangle outlined; targets additionally
/// get a filled center mark. The input raster is left untouched.
pub fn render_overlay(
    base: &Raster,
    results: &[ClassificationResult],
    style: &OverlayStyle,
) -> DetectResult<Raster> {
    let mut canvas = base.to_mut();

    for result in results {
        let corners = result.rect.corners();
        if result.is_target {
            draw::draw_polygon(&mut canvas, &corners, style.target_color, style.target_thickness);
            if style.center_radius > 0 {
                draw::fill_circle(
                    &mut canvas,
                    result.rect.center.round(),
                    style.center_radius,
                    style.center_color,
                );
            }
        } else {
            draw::draw_polygon(&mut canvas, &corners, style.reject_color, style.reject_thickness);
        }
    }

    Ok(canvas.into())
}
