//! Bitmap encoding round-trips and writer behavior.

use framestrip::{BitmapWriter, encode_mono_bmp};
use image::{GrayImage, Luma};

/// A small raster with an asymmetric pattern so orientation mistakes show up.
fn checkered(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

#[test]
fn decodes_back_to_the_same_dimensions() {
    for (width, height) in [(576, 136), (1, 1), (7, 3), (33, 2), (64, 64)] {
        let encoded = encode_mono_bmp(&checkered(width, height));
        let decoded = image::load_from_memory(&encoded)
            .unwrap_or_else(|e| panic!("decode failed for {width}x{height}: {e}"));
        assert_eq!(decoded.width(), width);
        assert_eq!(decoded.height(), height);
    }
}

#[test]
fn decodes_back_to_pure_black_and_white() {
    let encoded = encode_mono_bmp(&checkered(576, 136));
    let decoded = image::load_from_memory(&encoded).expect("decode failed");
    let gray = decoded.to_luma8();
    assert!(gray.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}

#[test]
fn pixel_values_survive_the_round_trip() {
    let original = checkered(17, 9);
    let encoded = encode_mono_bmp(&original);
    let decoded = image::load_from_memory(&encoded).expect("decode failed").to_luma8();
    for (x, y, pixel) in original.enumerate_pixels() {
        assert_eq!(
            decoded.get_pixel(x, y),
            pixel,
            "pixel mismatch at ({x}, {y})",
        );
    }
}

#[test]
fn encoding_is_deterministic() {
    let raster = checkered(576, 136);
    assert_eq!(encode_mono_bmp(&raster), encode_mono_bmp(&raster));
}

#[test]
fn writer_creates_numbered_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let writer = BitmapWriter::new(dir.path(), "frame", "bmp");

    let raster = checkered(32, 8);
    let first = writer.write(&raster, 0).expect("write failed");
    let fifth = writer.write(&raster, 4).expect("write failed");

    assert_eq!(first.file_name().unwrap(), "frame_0000.bmp");
    assert_eq!(fifth.file_name().unwrap(), "frame_0004.bmp");
    assert!(first.exists());
    assert!(fifth.exists());
}

#[test]
fn writer_silently_overwrites() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let writer = BitmapWriter::new(dir.path(), "frame", "bmp");

    let all_black = GrayImage::new(8, 8);
    let all_white = GrayImage::from_pixel(8, 8, Luma([255]));

    let path = writer.write(&all_black, 0).expect("first write failed");
    let first_bytes = std::fs::read(&path).expect("read failed");
    writer.write(&all_white, 0).expect("second write failed");
    let second_bytes = std::fs::read(&path).expect("read failed");

    assert_ne!(first_bytes, second_bytes, "second write should replace the file");
}

#[test]
fn writer_fails_on_missing_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("does_not_exist");
    let writer = BitmapWriter::new(&missing, "frame", "bmp");

    let result = writer.write(&GrayImage::new(8, 8), 0);
    assert!(result.is_err(), "writing into a missing directory should fail");
}

#[test]
fn custom_prefix_and_extension() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let writer = BitmapWriter::new(dir.path(), "still", "bin");
    let path = writer.write(&GrayImage::new(4, 4), 7).expect("write failed");
    assert_eq!(path.file_name().unwrap(), "still_0007.bin");
}
