//! Pure calculation functions for derivative dimensions.
//!
//! No I/O, no pixels — unit testable in isolation.

/// Fit dimensions within a maximum long-edge size, preserving aspect ratio.
///
/// The longer edge is scaled down to `max_edge` and the shorter edge is
/// rounded to the nearest pixel. Dimensions already within the bound are
/// returned unchanged — derivatives are never upscaled.
///
/// # Examples
/// ```
/// # use thumbgen::imaging::fit_within;
/// // 3000x2000 bounded to 1200 → 1200x800
/// assert_eq!(fit_within((3000, 2000), 1200), (1200, 800));
/// // Already small enough: unchanged
/// assert_eq!(fit_within((500, 300), 1200), (500, 300));
/// ```
pub fn fit_within(dims: (u32, u32), max_edge: u32) -> (u32, u32) {
    let (w, h) = dims;
    let longer = w.max(h);
    if longer <= max_edge || longer == 0 {
        return dims;
    }

    let ratio = max_edge as f64 / longer as f64;
    if w >= h {
        // At least 1px so extreme aspect ratios never collapse to zero height
        (max_edge, ((h as f64 * ratio).round() as u32).max(1))
    } else {
        (((w as f64 * ratio).round() as u32).max(1), max_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_bounded_on_width() {
        assert_eq!(fit_within((3000, 2000), 1200), (1200, 800));
        assert_eq!(fit_within((3000, 2000), 2400), (2400, 1600));
    }

    #[test]
    fn portrait_bounded_on_height() {
        assert_eq!(fit_within((2000, 3000), 1200), (800, 1200));
    }

    #[test]
    fn square_stays_square() {
        assert_eq!(fit_within((2000, 2000), 1200), (1200, 1200));
    }

    #[test]
    fn short_edge_rounds_to_nearest_pixel() {
        // 1000x667 → ratio 0.5 → 500x333.5 → rounds to 334
        assert_eq!(fit_within((1000, 667), 500), (500, 334));
        // 1000x665 → 332.5 rounds to 333 (round-half-up)
        assert_eq!(fit_within((1000, 665), 500), (500, 333));
    }

    #[test]
    fn never_upscales() {
        assert_eq!(fit_within((500, 300), 1200), (500, 300));
        assert_eq!(fit_within((1200, 800), 1200), (1200, 800));
    }

    #[test]
    fn extreme_aspect_keeps_at_least_one_pixel() {
        assert_eq!(fit_within((10000, 2), 100), (100, 1));
        assert_eq!(fit_within((2, 10000), 100), (1, 100));
    }

    #[test]
    fn zero_dimensions_pass_through() {
        assert_eq!(fit_within((0, 0), 100), (0, 0));
    }
}
