//! Frame binarization.
//!
//! Converts a decoded frame into the fixed-size, two-level raster the bitmap
//! encoder consumes: resize to the target resolution, reduce to single-channel
//! luminance, then threshold against [`LUMA_THRESHOLD`].

use image::{DynamicImage, GrayImage, imageops::FilterType};

/// Luminance cutoff for binarization, inclusive-low.
///
/// Pixels with luminance strictly above this value map to white (255), all
/// others to black (0). Fixed by the output contract, not configurable.
pub const LUMA_THRESHOLD: u8 = 127;

/// Resize a frame to exactly `width × height` and binarize it.
///
/// The returned raster contains only the values `0` and `255`. Resampling
/// uses bilinear (triangle) interpolation; luminance reduction uses the
/// `image` crate's standard RGB-to-gray weighting.
///
/// # Example
///
/// ```
/// use image::DynamicImage;
///
/// let frame = DynamicImage::new_rgb8(320, 240);
/// let mono = framestrip::binarize(&frame, 576, 136);
/// assert_eq!((mono.width(), mono.height()), (576, 136));
/// ```
pub fn binarize(frame: &DynamicImage, width: u32, height: u32) -> GrayImage {
    let resized = frame.resize_exact(width, height, FilterType::Triangle);
    let mut gray = resized.to_luma8();
    for pixel in gray.pixels_mut() {
        pixel.0[0] = if pixel.0[0] > LUMA_THRESHOLD { 255 } else { 0 };
    }
    gray
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage};

    use super::{LUMA_THRESHOLD, binarize};

    fn uniform_frame(value: u8) -> DynamicImage {
        let mut image = RgbImage::new(8, 8);
        for pixel in image.pixels_mut() {
            *pixel = Rgb([value, value, value]);
        }
        DynamicImage::ImageRgb8(image)
    }

    #[test]
    fn output_has_exact_target_dimensions() {
        let mono = binarize(&uniform_frame(200), 576, 136);
        assert_eq!(mono.width(), 576);
        assert_eq!(mono.height(), 136);
    }

    #[test]
    fn threshold_is_inclusive_low() {
        // Grayscale input keeps its luminance exactly, so the boundary is
        // observable: 127 stays black, 128 turns white.
        let at_threshold = binarize(&uniform_frame(LUMA_THRESHOLD), 16, 16);
        assert!(at_threshold.pixels().all(|p| p.0[0] == 0));

        let above_threshold = binarize(&uniform_frame(LUMA_THRESHOLD + 1), 16, 16);
        assert!(above_threshold.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn no_intermediate_gray_values_survive() {
        // A gradient exercises every input luminance at least once.
        let mut image = RgbImage::new(256, 4);
        for (x, _, pixel) in image.enumerate_pixels_mut() {
            let v = x as u8;
            *pixel = Rgb([v, v, v]);
        }
        let mono = binarize(&DynamicImage::ImageRgb8(image), 128, 4);
        assert!(mono.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }
}
