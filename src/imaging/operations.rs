//! In-memory image transforms.

use super::calculations::fit_within;
use image::DynamicImage;
use image::imageops::FilterType;

/// Produce a copy bounded by `max_edge` on the longest side.
///
/// Aspect ratio is preserved exactly (nearest-pixel rounding on the shorter
/// edge) and sources already within the bound come back as an unscaled copy —
/// never upscaled. The input is untouched, so both derivative sizes can be
/// cut from the same decoded image.
pub fn resize_to_fit(img: &DynamicImage, max_edge: u32) -> DynamicImage {
    let dims = (img.width(), img.height());
    let (w, h) = fit_within(dims, max_edge);
    if (w, h) == dims {
        img.clone()
    } else {
        img.resize_exact(w, h, FilterType::Lanczos3)
    }
}
