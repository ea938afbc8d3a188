//! Sampler configuration.
//!
//! [`SamplerOptions`] is a builder that carries the five pipeline settings
//! (sample count, filename prefix and extension, output resolution) plus an
//! optional progress callback. A default-constructed value reproduces the
//! stock configuration: 20 frames named `frame_0000.bmp` onward at 576×136.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::progress::{NoOpProgress, ProgressCallback};

/// Configuration for a [`FrameSampler`](crate::FrameSampler) run.
///
/// # Example
///
/// ```
/// use framestrip::SamplerOptions;
///
/// let options = SamplerOptions::new()
///     .with_frames(8)
///     .with_prefix("still")
///     .with_resolution(640, 360);
/// ```
#[derive(Clone)]
pub struct SamplerOptions {
    /// Number of evenly-spaced frames to sample.
    pub(crate) frames: u64,
    /// Output filename prefix.
    pub(crate) prefix: String,
    /// Output filename extension (without the dot).
    pub(crate) extension: String,
    /// Output raster width in pixels.
    pub(crate) width: u32,
    /// Output raster height in pixels.
    pub(crate) height: u32,
    /// Progress callback. Defaults to a no-op.
    pub(crate) progress: Arc<dyn ProgressCallback>,
}

impl Debug for SamplerOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SamplerOptions")
            .field("frames", &self.frames)
            .field("prefix", &self.prefix)
            .field("extension", &self.extension)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplerOptions {
    /// Create options with the stock configuration.
    ///
    /// Defaults: 20 frames, prefix `"frame"`, extension `"bmp"`, 576×136
    /// output, no progress callback.
    pub fn new() -> Self {
        Self {
            frames: 20,
            prefix: "frame".to_string(),
            extension: "bmp".to_string(),
            width: 576,
            height: 136,
            progress: Arc::new(NoOpProgress),
        }
    }

    /// Set the number of evenly-spaced frames to sample.
    ///
    /// Zero is allowed and makes the run a no-op that writes nothing.
    #[must_use]
    pub fn with_frames(mut self, frames: u64) -> Self {
        self.frames = frames;
        self
    }

    /// Set the output filename prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Set the output filename extension (without the dot).
    ///
    /// The file content is always a 1-bit BMP; the extension only affects the
    /// filename.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Set the output raster resolution.
    #[must_use]
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Attach a progress callback, invoked once per saved frame.
    #[must_use]
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = callback;
        self
    }

    /// The configured sample count.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The configured output resolution as `(width, height)`.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
