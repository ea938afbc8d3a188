//! Per-frame progress reporting.
//!
//! [`ProgressCallback`] lets callers observe each saved frame as the scan
//! advances — the CLI uses it for its per-frame output and progress bar.
//! Callbacks are observers only: they cannot halt the pipeline, and there is
//! no cancellation mechanism; a run proceeds to natural completion or fatal
//! error.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use framestrip::{FrameSampler, ProgressCallback, ProgressInfo, SamplerOptions};
//!
//! struct PrintProgress;
//!
//! impl ProgressCallback for PrintProgress {
//!     fn on_progress(&self, info: &ProgressInfo) {
//!         println!("{}/{} saved", info.extracted, info.requested);
//!     }
//! }
//!
//! let options = SamplerOptions::new().with_progress(Arc::new(PrintProgress));
//! let summary = FrameSampler::new(options).run("input.mp4", "frames")?;
//! # Ok::<(), framestrip::FramestripError>(())
//! ```

use std::path::PathBuf;

/// A snapshot of the scan, delivered once per saved frame.
#[derive(Debug, Clone)]
pub struct ProgressInfo {
    /// Frames saved so far, including the one just written.
    pub extracted: u64,
    /// The number of frames the plan asked for.
    pub requested: u64,
    /// Zero-based stream position of the captured frame.
    pub frame_index: u64,
    /// Path of the file just written.
    pub output_path: PathBuf,
}

/// Trait for receiving a notification after each frame is saved.
///
/// Implementations must be [`Send`] and [`Sync`] so one callback can be
/// shared across sampler instances.
pub trait ProgressCallback: Send + Sync {
    /// Called after each bitmap file has been written.
    fn on_progress(&self, info: &ProgressInfo);
}

/// A no-op implementation that discards all progress notifications.
///
/// This is the default when no callback is configured.
pub(crate) struct NoOpProgress;

impl ProgressCallback for NoOpProgress {
    fn on_progress(&self, _info: &ProgressInfo) {}
}
