//! Raster resizing constrained by a maximum width.
//!
//! Only the width is bounded; height follows the source aspect ratio.
//! Images narrower than the bound are never upscaled.

use super::{DecodeError, FilterType, RgbaRaster};

/// Resize a raster to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target dimension is zero,
/// or `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// raster's dimensions.
pub fn resize(
    raster: &RgbaRaster,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbaRaster, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    if raster.width == width && raster.height == height {
        return Ok(raster.clone());
    }

    let rgba_image = raster
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());

    Ok(RgbaRaster::from_rgba_image(resized))
}

/// Calculate the dimensions needed to fit `width` within `max_width`.
///
/// Returns `None` when the image already fits (no resize). Otherwise the new
/// width is `max_width` and the height is
/// `round(height * max_width / width)`, computed in integer arithmetic so the
/// result is exact, and never less than 1.
pub fn fit_to_width(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width || width == 0 || max_width == 0 {
        return None;
    }

    let (w, h, m) = (u64::from(width), u64::from(height), u64::from(max_width));
    // round(h * m / w) with halves rounded up
    let new_height = (2 * h * m + w) / (2 * w);

    Some((max_width, (new_height as u32).max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_raster(width: u32, height: u32) -> RgbaRaster {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
                pixels.push(255);
            }
        }
        RgbaRaster::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let raster = create_test_raster(100, 50);
        let resized = resize(&raster, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let raster = create_test_raster(100, 50);
        let resized = resize(&raster, 100, 50, FilterType::Bilinear).unwrap();
        assert_eq!(resized, raster);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let raster = create_test_raster(100, 50);

        assert!(resize(&raster, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&raster, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_preserves_alpha() {
        let raster = RgbaRaster::filled(40, 40, [255, 0, 0, 0]);
        let resized = resize(&raster, 10, 10, FilterType::Lanczos3).unwrap();
        assert!(resized.has_transparency());
    }

    #[test]
    fn test_fit_to_width_landscape() {
        assert_eq!(fit_to_width(2000, 1000, 800), Some((800, 400)));
    }

    #[test]
    fn test_fit_to_width_portrait_only_width_bounded() {
        // Tall images keep their full height ratio; only width is capped
        assert_eq!(fit_to_width(1000, 3000, 500), Some((500, 1500)));
    }

    #[test]
    fn test_fit_to_width_rounds_half_up() {
        // 3 * 1 / 2 = 1.5 -> 2
        assert_eq!(fit_to_width(2, 3, 1), Some((1, 2)));
        // 1000 * 800 / 6000 = 133.33 -> 133
        assert_eq!(fit_to_width(6000, 1000, 800), Some((800, 133)));
    }

    #[test]
    fn test_fit_to_width_already_fits() {
        assert_eq!(fit_to_width(800, 600, 800), None);
        assert_eq!(fit_to_width(100, 50, 1920), None);
    }

    #[test]
    fn test_fit_to_width_extreme_ratio_keeps_one_row() {
        assert_eq!(fit_to_width(10_000, 1, 800), Some((800, 1)));
    }

    #[test]
    fn test_resize_to_fitted_width() {
        let raster = create_test_raster(200, 100);

        let (width, height) = fit_to_width(raster.width, raster.height, 50).unwrap();
        let resized = resize(&raster, width, height, FilterType::Bilinear).unwrap();
        assert_eq!((resized.width, resized.height), (50, 25));
    }

    #[test]
    fn test_all_filter_types() {
        let raster = create_test_raster(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&raster, 50, 25, filter).unwrap();
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: narrower-than-bound images are never resized.
        #[test]
        fn prop_fitting_width_is_untouched(
            width in 1u32..=5000,
            height in 1u32..=5000,
            extra in 0u32..=5000,
        ) {
            prop_assert_eq!(fit_to_width(width, height, width + extra), None);
        }

        /// Property: wider images land exactly on the bound with a rounded height.
        #[test]
        fn prop_wide_images_hit_the_bound(
            max_width in 1u32..=4000,
            extra in 1u32..=6000,
            height in 1u32..=8000,
        ) {
            let width = max_width + extra;
            let (w, h) = fit_to_width(width, height, max_width).unwrap();

            let expected = (height as f64 * max_width as f64 / width as f64).round() as u32;
            prop_assert_eq!(w, max_width);
            prop_assert_eq!(h, expected.max(1));
        }
    }
}
