//! Binarization behavior through the public API.

use framestrip::{LUMA_THRESHOLD, binarize};
use image::{DynamicImage, Rgb, RgbImage};

fn solid(color: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 32, Rgb(color)))
}

#[test]
fn output_matches_requested_dimensions_exactly() {
    for (width, height) in [(576, 136), (1, 1), (100, 7)] {
        let mono = binarize(&solid([200, 200, 200]), width, height);
        assert_eq!((mono.width(), mono.height()), (width, height));
    }
}

#[test]
fn threshold_constant_is_127() {
    assert_eq!(LUMA_THRESHOLD, 127);
}

#[test]
fn gray_at_threshold_is_black_above_is_white() {
    let at = binarize(&solid([127, 127, 127]), 16, 16);
    assert!(at.pixels().all(|p| p.0[0] == 0), "127 must map to black");

    let above = binarize(&solid([128, 128, 128]), 16, 16);
    assert!(above.pixels().all(|p| p.0[0] == 255), "128 must map to white");
}

#[test]
fn luminance_uses_standard_weighting() {
    // Pure red has low luminance (~54); pure yellow is bright (~226). A
    // naive channel average would put red and blue on the same side.
    let red = binarize(&solid([255, 0, 0]), 8, 8);
    assert!(red.pixels().all(|p| p.0[0] == 0), "red should threshold to black");

    let yellow = binarize(&solid([255, 255, 0]), 8, 8);
    assert!(
        yellow.pixels().all(|p| p.0[0] == 255),
        "yellow should threshold to white",
    );

    let green = binarize(&solid([0, 255, 0]), 8, 8);
    assert!(
        green.pixels().all(|p| p.0[0] == 255),
        "green carries most luminance and should be white",
    );
}

#[test]
fn only_two_levels_survive() {
    // A horizontal gradient hits every luminance value once.
    let gradient = RgbImage::from_fn(256, 8, |x, _| {
        let v = x as u8;
        Rgb([v, v, v])
    });
    let mono = binarize(&DynamicImage::ImageRgb8(gradient), 256, 8);
    assert!(mono.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}

#[test]
fn downscale_and_upscale_both_supported() {
    let frame = solid([255, 255, 255]);
    let down = binarize(&frame, 8, 8);
    assert_eq!((down.width(), down.height()), (8, 8));
    let up = binarize(&frame, 128, 64);
    assert_eq!((up.width(), up.height()), (128, 64));
}
