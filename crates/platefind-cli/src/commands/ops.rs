//! The `ops` subcommand
//!
//! Runs a fixed demonstration sequence of classical operations over one
//! input image, saving every intermediate into the output directory with
//! a numbered, self-describing name.

use super::CliError;
use clap::Args;
use platefind::color::{ChannelBounds, in_range, or_mask, split_channels, threshold_otsu, to_gray, to_hsv};
use platefind::detect::{ClassifierParams, classify_regions};
use platefind::filter::{gaussian_blur, mean_blur};
use platefind::io::ImageSink;
use platefind::morph::{Sel, dilate, erode};
use platefind::region::{Connectivity, find_external_contours, floodfill};
use platefind::transform::rotate_about_center;
use platefind::{Color, Point, Rect, crop, draw};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct OpsArgs {
    /// Input image (PNG or PNM)
    input: PathBuf,

    /// Directory for intermediate images
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Smoothing window size
    #[arg(long, default_value_t = 5)]
    blur: u32,

    /// Structuring element size for the morphology steps
    #[arg(long, default_value_t = 5)]
    sel: u32,

    /// Area floor when listing mask regions
    #[arg(long, default_value_t = 100.0)]
    min_area: f64,
}

pub fn run(args: OpsArgs) -> Result<(), CliError> {
    let image = platefind::io::read_image(&args.input)?;
    if !image.is_rgb() {
        return Err(format!("{} is not a color image", args.input.display()).into());
    }
    info!(
        input = %args.input.display(),
        width = image.width(),
        height = image.height(),
        "loaded image"
    );

    let sink = ImageSink::new(&args.out_dir)?;
    sink.save(&image, "01_original")?;

    // Color space conversions
    let gray = to_gray(&image)?;
    sink.save(&gray, "02_grayscale")?;
    let hsv = to_hsv(&image)?;
    sink.save(&hsv, "03_hsv")?;

    // Smoothing
    sink.save(&mean_blur(&image, args.blur, args.blur)?, "04_mean_blur")?;
    sink.save(
        &gaussian_blur(&image, args.blur, args.blur, 0.0)?,
        "05_gaussian_blur",
    )?;

    // Red mask: hue wraps, so union of the low and high bands
    let red_lo = in_range(&hsv, ChannelBounds::new([0, 80, 80], [10, 255, 255])?)?;
    let red_hi = in_range(&hsv, ChannelBounds::new([170, 80, 80], [179, 255, 255])?)?;
    let red_mask = or_mask(&red_lo, &red_hi)?;
    sink.save(&red_mask, "06_red_mask")?;

    // Outline and box the red regions on a copy of the input
    let contours = find_external_contours(&red_mask)?;
    let mut boxed = image.to_mut();
    for (i, contour) in contours.iter().enumerate() {
        let area = contour.area();
        if area < args.min_area {
            continue;
        }
        info!(region = i, area, "red region");
        if let Some(bounds) = contour.bounding_box() {
            draw::draw_rect_outline(&mut boxed, bounds, Color::GREEN, 2);
        }
        draw::draw_polyline(&mut boxed, contour.points(), true, Color::BLUE, 2);
    }
    sink.save(&boxed.into(), "07_red_regions")?;

    // Shape drawing demo
    let mut shapes = image.to_mut();
    draw::draw_circle_outline(&mut shapes, Point::new(300, 300), 100, Color::GREEN, 2);
    draw::draw_rect_outline(&mut shapes, Rect::from_corners(400, 100, 600, 300), Color::BLUE, 2);
    sink.save(&shapes.into(), "08_shapes")?;

    // Brightness plane and automatic binarization
    let [_, _, value] = split_channels(&hsv)?;
    sink.save(&value, "09_value_plane")?;
    let binary = threshold_otsu(&value)?;
    sink.save(&binary, "10_value_otsu")?;

    // Morphology: erosion, then dilation of the eroded mask (an opening)
    let sel = Sel::rect(args.sel, args.sel)?;
    let eroded = erode(&binary, &sel)?;
    sink.save(&eroded, "11_eroded")?;
    let opened = dilate(&eroded, &sel)?;
    sink.save(&opened, "12_opened")?;

    // Flood fill from the image center
    let mut flooded = opened.to_mut();
    let filled = floodfill(
        &mut flooded,
        image.width() / 2,
        image.height() / 2,
        255,
        Connectivity::FourWay,
    )?;
    info!(pixels = filled, "flood filled from center");
    sink.save(&flooded.into(), "13_flood_filled")?;

    // Geometric transforms
    sink.save(&rotate_about_center(&image, 35.0, 1.0)?, "14_rotated")?;
    let quarter = Rect::new_unchecked(0, 0, image.width() as i32 / 2, image.height() as i32 / 2);
    sink.save(&crop(&image, quarter)?, "15_cropped")?;

    // Summarize what the classifier would make of the cleaned-up mask
    let report = classify_regions(&opened, args.min_area, &ClassifierParams::default())?;
    info!(
        regions = report.len(),
        targets = report.iter().filter(|r| r.is_target).count(),
        out_dir = %sink.dir().display(),
        "ops sequence finished"
    );

    Ok(())
}
