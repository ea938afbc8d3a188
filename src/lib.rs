//! # framestrip
//!
//! Sample evenly-spaced frames from a video file into numbered 1-bit
//! monochrome bitmaps.
//!
//! `framestrip` decodes a video once, front to back, capturing a fixed number
//! of frames evenly spaced across the stream. Each captured frame is resized,
//! reduced to luminance, thresholded to pure black and white, and written as
//! a genuine 1-bit-per-pixel BMP file (`frame_0000.bmp`, `frame_0001.bmp`,
//! …). Decoding is powered by FFmpeg via the
//! [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate.
//!
//! ## Quick Start
//!
//! ```no_run
//! use framestrip::{FrameSampler, SamplerOptions};
//!
//! let sampler = FrameSampler::new(SamplerOptions::new());
//! let summary = sampler.run("input.mp4", "frames")?;
//! println!("wrote {} bitmaps", summary.extracted);
//! # Ok::<(), framestrip::FramestripError>(())
//! ```
//!
//! ## Custom configuration
//!
//! ```no_run
//! use framestrip::{FrameSampler, SamplerOptions};
//!
//! let options = SamplerOptions::new()
//!     .with_frames(8)
//!     .with_prefix("still")
//!     .with_resolution(640, 360);
//! FrameSampler::new(options).run("input.mp4", "stills")?;
//! # Ok::<(), framestrip::FramestripError>(())
//! ```
//!
//! ## Behavior notes
//!
//! - **Sequential only.** The source is decoded in one forward pass; there is
//!   no seeking. The scan stops as soon as the last planned frame is written.
//! - **Short videos under-deliver.** When the video has fewer frames than
//!   requested, the evenly-spaced plan contains duplicate indices and the run
//!   succeeds with fewer outputs (a warning is logged).
//! - **No partial-failure tolerance.** The first decode or write error aborts
//!   the whole run; FFmpeg resources are released on every exit path.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system for
//! `ffmpeg-sys-next` to link against.

pub mod bitmap;
mod conversion;
pub mod error;
pub mod ffmpeg;
pub mod options;
pub mod plan;
pub mod progress;
pub mod sampler;
pub mod source;
pub mod transform;

pub use bitmap::{BitmapWriter, encode_mono_bmp};
pub use error::FramestripError;
pub use ffmpeg::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use options::SamplerOptions;
pub use plan::SamplingPlan;
pub use progress::{ProgressCallback, ProgressInfo};
pub use sampler::{FrameSampler, SampleSummary};
pub use source::{VideoMetadata, VideoSource};
pub use transform::{LUMA_THRESHOLD, binarize};
