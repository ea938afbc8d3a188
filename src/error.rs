//! Error types for the `framestrip` crate.
//!
//! This module defines [`FramestripError`], the unified error type returned by
//! all fallible operations in the crate. Variants carry enough context (file
//! paths, upstream error messages) to diagnose a failure at the call site.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use thiserror::Error;

/// The unified error type for all `framestrip` operations.
///
/// Every public method that can fail returns `Result<T, FramestripError>`.
/// There are no retries and no per-frame tolerance anywhere in the crate: the
/// first error aborts the whole run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FramestripError {
    /// The video file could not be opened or is not a decodable container.
    #[error("Failed to open video file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::VideoSource::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The container does not hold a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// The source reported a total frame count of zero.
    ///
    /// Zero is treated as "unknown", not "empty": sampling cannot be planned
    /// without a usable frame count, so the whole run fails.
    #[error("Unable to determine total frame count for {path}")]
    UnknownFrameCount {
        /// Path of the offending video file.
        path: PathBuf,
    },

    /// A video frame could not be decoded or converted to a raster.
    #[error("Failed to decode video frame: {0}")]
    VideoDecode(String),

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),

    /// An I/O error occurred while creating the output directory or writing
    /// a bitmap file.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

impl From<FfmpegError> for FramestripError {
    fn from(error: FfmpegError) -> Self {
        FramestripError::Ffmpeg(error.to_string())
    }
}
