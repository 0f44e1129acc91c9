//! Mask overlay showing which pixels recovery touched

use std::path::Path;

use image::{GrayImage, Rgba, RgbaImage};

use crate::io::configuration::{RECOVERED_COLOR, UNRECOVERED_COLOR};
use crate::io::error::{RecoveryError, Result, invalid_source};
use crate::io::image::ensure_parent_dir;
use crate::recovery::RecoveryReport;
use crate::spatial::Coordinate;

/// Render the recovered image with recovery results highlighted
///
/// Recovered pixels use [`RECOVERED_COLOR`], unrecovered pixels
/// [`UNRECOVERED_COLOR`]; all others show their grey intensity.
///
/// # Errors
///
/// Returns an error if the report was produced for an image of different size
pub fn build_mask_overlay(image: &GrayImage, report: &RecoveryReport) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    if report.recovered.rows() != height as usize || report.recovered.cols() != width as usize {
        return Err(invalid_source(&format!(
            "report covers {}x{} pixels but the image is {height}x{width}",
            report.recovered.rows(),
            report.recovered.cols()
        )));
    }

    let mut overlay = RgbaImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels() {
        let color = Coordinate::from_indices(y as usize, x as usize).map_or(
            [0, 0, 0, 0],
            |coords| {
                if report.unrecovered.contains(coords) {
                    UNRECOVERED_COLOR
                } else if report.recovered.contains(coords) {
                    RECOVERED_COLOR
                } else {
                    let gray = pixel.0[0];
                    [gray, gray, gray, 255]
                }
            },
        );
        overlay.put_pixel(x, y, Rgba(color));
    }
    Ok(overlay)
}

/// Export the mask overlay as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The report does not match the image size
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_mask(image: &GrayImage, report: &RecoveryReport, path: &Path) -> Result<()> {
    let overlay = build_mask_overlay(image, report)?;
    ensure_parent_dir(path)?;
    overlay.save(path).map_err(|e| RecoveryError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
