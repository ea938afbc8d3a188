//! The frame-sampling pipeline.
//!
//! [`FrameSampler`] ties the crate together: it opens a [`VideoSource`],
//! validates the frame count, computes a [`SamplingPlan`], and performs one
//! linear decode pass over the stream, binarizing and writing each planned
//! frame as it passes. The scan stops early once the requested number of
//! frames has been written; a stream that runs out first is also a success.

use std::{fs, path::Path};

use crate::{
    bitmap::BitmapWriter,
    error::FramestripError,
    options::SamplerOptions,
    plan::SamplingPlan,
    progress::ProgressInfo,
    source::VideoSource,
    transform::binarize,
};

/// Result of a completed sampling run.
#[derive(Debug, Clone)]
#[must_use]
pub struct SampleSummary {
    /// The number of frames the configuration asked for.
    pub requested: u64,
    /// The number of frames actually written.
    pub extracted: u64,
    /// Total frame count the source reported.
    pub total_frames: u64,
    /// Paths of the written bitmap files, in sequence order.
    pub files: Vec<std::path::PathBuf>,
}

impl SampleSummary {
    /// `true` when the source ran out of frames before the requested count
    /// was reached (short videos with duplicate plan indices).
    pub fn under_delivered(&self) -> bool {
        self.extracted < self.requested
    }
}

/// Samples evenly-spaced frames from a video into 1-bit bitmap files.
///
/// The sampler itself is just configuration; each [`run`](FrameSampler::run)
/// opens its own source and releases it on every exit path, success or error.
///
/// # Example
///
/// ```no_run
/// use framestrip::{FrameSampler, SamplerOptions};
///
/// let sampler = FrameSampler::new(SamplerOptions::new().with_frames(10));
/// let summary = sampler.run("input.mp4", "frames")?;
/// println!("wrote {} of {} frames", summary.extracted, summary.requested);
/// # Ok::<(), framestrip::FramestripError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FrameSampler {
    options: SamplerOptions,
}

impl FrameSampler {
    /// Create a sampler with the given configuration.
    pub fn new(options: SamplerOptions) -> Self {
        Self { options }
    }

    /// Create a sampler with the stock configuration.
    pub fn with_defaults() -> Self {
        Self::new(SamplerOptions::new())
    }

    /// The sampler's configuration.
    pub fn options(&self) -> &SamplerOptions {
        &self.options
    }

    /// Run the pipeline: decode `video_path` once, writing planned frames
    /// into `output_dir`.
    ///
    /// The output directory is created recursively if absent (no error when
    /// it already exists). Existing files with colliding names are silently
    /// overwritten.
    ///
    /// # Errors
    ///
    /// - [`FramestripError::FileOpen`] / [`FramestripError::NoVideoStream`]
    ///   when the source cannot be opened.
    /// - [`FramestripError::UnknownFrameCount`] when the source reports zero
    ///   total frames.
    /// - [`FramestripError::Io`] when the output directory cannot be created
    ///   or a bitmap write fails; the first failure aborts the whole scan.
    ///
    /// Exhausting the stream before reaching the requested count is NOT an
    /// error: the run succeeds with fewer files and a warning is logged.
    pub fn run<P, Q>(&self, video_path: P, output_dir: Q) -> Result<SampleSummary, FramestripError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir)?;

        let mut source = VideoSource::open(video_path)?;
        let total_frames = source.frame_count();
        if total_frames == 0 {
            return Err(FramestripError::UnknownFrameCount {
                path: source.path().to_path_buf(),
            });
        }

        let plan = SamplingPlan::evenly_spaced(total_frames, self.options.frames);
        log::info!(
            "Sampling {} of {} frames at indices {:?}",
            plan.requested(),
            total_frames,
            plan.indices(),
        );

        let writer = BitmapWriter::new(output_dir, &self.options.prefix, &self.options.extension);
        let mut summary = SampleSummary {
            requested: plan.requested(),
            extracted: 0,
            total_frames,
            files: Vec::with_capacity(plan.requested() as usize),
        };

        if plan.is_empty() {
            return Ok(summary);
        }

        // One forward pass. `position` counts every decoded frame; the
        // extraction counter only advances on captures.
        let mut position: u64 = 0;
        while let Some(frame) = source.read_frame()? {
            if plan.contains(position) {
                let raster = binarize(&frame, self.options.width, self.options.height);
                let path = writer.write(&raster, summary.extracted)?;
                log::debug!("Saved frame {} -> {}", position, path.display());

                summary.extracted += 1;
                self.options.progress.on_progress(&ProgressInfo {
                    extracted: summary.extracted,
                    requested: summary.requested,
                    frame_index: position,
                    output_path: path.clone(),
                });
                summary.files.push(path);

                if summary.extracted >= summary.requested {
                    break;
                }
            }
            position += 1;
        }

        if summary.under_delivered() {
            // Duplicate plan indices on short videos collapse to fewer
            // outputs; the run still counts as a success.
            log::warn!(
                "Requested {} frames but the stream yielded {}",
                summary.requested,
                summary.extracted,
            );
        }

        log::info!("Done, {} frame(s) extracted", summary.extracted);
        Ok(summary)
    }
}
