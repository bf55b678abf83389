//! The `detect` subcommand
//!
//! Runs the plate detection pipeline over one input image, saves the stage
//! images plus the annotated overlay, and reports each candidate region.

use super::CliError;
use clap::Args;
use platefind::detect::{ClassifierParams, DetectOptions, detect_plates};
use platefind::io::ImageSink;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Input image (PNG or PNM)
    input: PathBuf,

    /// Directory for stage and result images
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Grayscale binarization threshold
    #[arg(long, default_value_t = 225)]
    threshold: u8,

    /// Mean blur window size
    #[arg(long, default_value_t = 5)]
    blur: u32,

    /// Structuring element size for the opening
    #[arg(long, default_value_t = 5)]
    sel: u32,

    /// Contour area floor before classification
    #[arg(long, default_value_t = 50.0)]
    min_area: f64,

    /// Lower aspect-ratio bound (exclusive)
    #[arg(long, default_value_t = 3.0)]
    aspect_min: f64,

    /// Upper aspect-ratio bound (exclusive)
    #[arg(long, default_value_t = 3.5)]
    aspect_max: f64,

    /// Lower fill-ratio bound (exclusive)
    #[arg(long, default_value_t = 0.8)]
    fill_min: f64,

    /// Upper fill-ratio bound (inclusive)
    #[arg(long, default_value_t = 1.0)]
    fill_max: f64,

    /// Contour area floor for targets (exclusive)
    #[arg(long, default_value_t = 100.0)]
    target_area_min: f64,
}

impl DetectArgs {
    fn options(&self) -> DetectOptions {
        DetectOptions {
            blur: (self.blur, self.blur),
            threshold: self.threshold,
            sel: (self.sel, self.sel),
            min_area: self.min_area,
            classifier: ClassifierParams {
                aspect_min: self.aspect_min,
                aspect_max: self.aspect_max,
                fill_min: self.fill_min,
                fill_max: self.fill_max,
                target_area_min: self.target_area_min,
            },
            ..DetectOptions::default()
        }
    }
}

pub fn run(args: DetectArgs) -> Result<(), CliError> {
    let image = platefind::io::read_image(&args.input)?;
    info!(
        input = %args.input.display(),
        width = image.width(),
        height = image.height(),
        "loaded image"
    );

    let detection = detect_plates(&image, &args.options())?;

    let sink = ImageSink::new(&args.out_dir)?;
    sink.save(&image, "01_original")?;
    sink.save(&detection.stages.gray, "02_grayscale")?;
    sink.save(&detection.stages.blurred, "03_mean_blur")?;
    sink.save(&detection.stages.binary, "04_binary")?;
    sink.save(&detection.stages.opened, "05_opened")?;
    sink.save(&detection.overlay, "06_detection")?;

    for r in &detection.results {
        println!(
            "region {}: contour_area={:.0} rect_area={:.0} fill={:.2} aspect={:.2}{}",
            r.contour_index,
            r.contour_area,
            r.rect_area,
            r.fill_ratio,
            r.aspect_ratio,
            if r.is_target { "  <- target" } else { "" }
        );
    }
    println!(
        "{} region(s), {} target(s); results in {}",
        detection.results.len(),
        detection.targets().count(),
        sink.dir().display()
    );

    Ok(())
}
