//! Internal frame-to-raster conversion helpers.
//!
//! Decoded FFmpeg frames frequently carry per-row padding (stride greater
//! than `width × 3` for RGB24). The helpers here strip that padding so the
//! pixel data can be handed to the `image` crate as a tightly-packed buffer.

use ffmpeg_next::frame::Video as VideoFrame;
use image::{DynamicImage, RgbImage};

use crate::error::FramestripError;

const RGB24_BYTES_PER_PIXEL: usize = 3;

/// Copy pixel data from an RGB24 video frame into a tightly-packed buffer.
pub(crate) fn frame_to_rgb_buffer(video_frame: &VideoFrame, width: u32, height: u32) -> Vec<u8> {
    let stride = video_frame.stride(0);
    let packed_stride = (width as usize) * RGB24_BYTES_PER_PIXEL;
    let plane = video_frame.data(0);

    if stride == packed_stride {
        // Already tightly packed.
        return plane[..packed_stride * (height as usize)].to_vec();
    }

    // Stride carries padding bytes; copy each row without them.
    let mut buffer = Vec::with_capacity(packed_stride * (height as usize));
    for row in 0..(height as usize) {
        let start = row * stride;
        buffer.extend_from_slice(&plane[start..start + packed_stride]);
    }
    buffer
}

/// Convert a scaled RGB24 video frame to an [`image::DynamicImage`].
pub(crate) fn frame_to_image(
    rgb_frame: &VideoFrame,
    width: u32,
    height: u32,
) -> Result<DynamicImage, FramestripError> {
    let buffer = frame_to_rgb_buffer(rgb_frame, width, height);
    let rgb_image = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        FramestripError::VideoDecode(
            "Failed to construct RGB image from decoded frame data".to_string(),
        )
    })?;
    Ok(DynamicImage::ImageRgb8(rgb_image))
}
