//! Sequential video decoding.
//!
//! [`VideoSource`] opens a video container, caches its stream metadata, and
//! exposes a pull-based [`read_frame`](VideoSource::read_frame) that yields
//! decoded frames strictly in presentation order. There is deliberately no
//! seeking: the only way to reach frame K is to have already read frames
//! `0..K-1`, which keeps the sampling scan a single forward pass and behaves
//! identically across container formats.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{
    Error as FfmpegError, Packet,
    codec::context::Context as CodecContext,
    decoder::Video as VideoDecoder,
    format::{Pixel, context::Input},
    frame::Video as VideoFrame,
    media::Type,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::DynamicImage;

use crate::{conversion, error::FramestripError};

/// Metadata for the video stream, cached at open time.
///
/// Extracted once during [`VideoSource::open`] and never re-read.
#[derive(Debug, Clone)]
#[must_use]
pub struct VideoMetadata {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second (may be approximate for variable-frame-rate content).
    pub frames_per_second: f64,
    /// Total number of frames: container-declared when available, otherwise
    /// estimated from duration and frame rate. `0` means unknown.
    pub frame_count: u64,
    /// Codec name (e.g. `"h264"`, `"vp9"`).
    pub codec: String,
    /// Container format name (e.g. `"mp4"`, `"matroska"`).
    pub format: String,
    /// Total duration of the media file.
    pub duration: Duration,
}

/// An opened video file yielding frames in strict sequential order.
///
/// Created via [`VideoSource::open`]. Holds the demuxer context, the video
/// decoder, and a software scaler converting decoded frames to RGB24. All
/// FFmpeg resources are released when the source is dropped, on every exit
/// path.
///
/// # Example
///
/// ```no_run
/// use framestrip::VideoSource;
///
/// let mut source = VideoSource::open("input.mp4")?;
/// println!("{} frames", source.frame_count());
/// while let Some(frame) = source.read_frame()? {
///     // frames arrive in presentation order
/// }
/// # Ok::<(), framestrip::FramestripError>(())
/// ```
pub struct VideoSource {
    input: Input,
    decoder: VideoDecoder,
    scaler: ScalingContext,
    stream_index: usize,
    metadata: VideoMetadata,
    decoded_frame: VideoFrame,
    rgb_frame: VideoFrame,
    eof_sent: bool,
    exhausted: bool,
    file_path: PathBuf,
}

impl Debug for VideoSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("VideoSource")
            .field("metadata", &self.metadata)
            .field("stream_index", &self.stream_index)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl VideoSource {
    /// Open a video file for sequential decoding.
    ///
    /// Initializes FFmpeg (idempotent), opens the container, locates the best
    /// video stream, builds the decoder and RGB24 scaler, and caches the
    /// stream metadata.
    ///
    /// # Errors
    ///
    /// Returns [`FramestripError::FileOpen`] if the file cannot be opened or
    /// decoded, and [`FramestripError::NoVideoStream`] if the container holds
    /// no video stream.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FramestripError> {
        let path = path.as_ref();
        let file_path = path.to_path_buf();

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| FramestripError::FileOpen {
            path: file_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input = ffmpeg_next::format::input(&path).map_err(|error| {
            FramestripError::FileOpen {
                path: file_path.clone(),
                reason: error.to_string(),
            }
        })?;

        let stream = input
            .streams()
            .best(Type::Video)
            .ok_or(FramestripError::NoVideoStream)?;
        let stream_index = stream.index();

        let codec_parameters = stream.parameters();
        let decoder_context =
            CodecContext::from_parameters(codec_parameters).map_err(|error| {
                FramestripError::FileOpen {
                    path: file_path.clone(),
                    reason: format!("Failed to read video codec parameters: {error}"),
                }
            })?;
        let decoder = decoder_context
            .decoder()
            .video()
            .map_err(|error| FramestripError::FileOpen {
                path: file_path.clone(),
                reason: format!("Failed to create video decoder: {error}"),
            })?;

        // Compute frames per second from the stream's average frame rate,
        // falling back to the raw rate field.
        let frame_rate = stream.avg_frame_rate();
        let frames_per_second = if frame_rate.denominator() != 0 {
            frame_rate.numerator() as f64 / frame_rate.denominator() as f64
        } else {
            let rate = stream.rate();
            if rate.denominator() != 0 {
                rate.numerator() as f64 / rate.denominator() as f64
            } else {
                0.0
            }
        };

        let duration_microseconds = input.duration();
        let duration = if duration_microseconds > 0 {
            Duration::from_micros(duration_microseconds as u64)
        } else {
            Duration::ZERO
        };

        // Prefer the container-declared frame count; estimate from duration
        // and frame rate when the container does not carry one.
        let declared_frames = stream.frames();
        let frame_count = if declared_frames > 0 {
            declared_frames as u64
        } else if frames_per_second > 0.0 {
            (duration.as_secs_f64() * frames_per_second) as u64
        } else {
            0
        };

        let codec = decoder
            .codec()
            .map(|codec| codec.name().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let format = input.format().name().to_string();

        let metadata = VideoMetadata {
            width: decoder.width(),
            height: decoder.height(),
            frames_per_second,
            frame_count,
            codec,
            format,
            duration,
        };

        // Decoded frames are converted to RGB24 at the source resolution;
        // resizing happens downstream in the transformer.
        let scaler = ScalingContext::get(
            decoder.format(),
            decoder.width(),
            decoder.height(),
            Pixel::RGB24,
            decoder.width(),
            decoder.height(),
            ScalingFlags::BILINEAR,
        )?;

        log::debug!(
            "Opened {}: {}x{} @ {:.2} fps, ~{} frames [{}]",
            file_path.display(),
            metadata.width,
            metadata.height,
            metadata.frames_per_second,
            metadata.frame_count,
            metadata.codec,
        );

        Ok(Self {
            input,
            decoder,
            scaler,
            stream_index,
            metadata,
            decoded_frame: VideoFrame::empty(),
            rgb_frame: VideoFrame::empty(),
            eof_sent: false,
            exhausted: false,
            file_path,
        })
    }

    /// Get a reference to the cached stream metadata.
    pub fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    /// Total frame count reported by the container, or estimated from the
    /// duration and frame rate. `0` means the count could not be determined.
    pub fn frame_count(&self) -> u64 {
        self.metadata.frame_count
    }

    /// Path of the opened video file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Decode and return the next frame in presentation order.
    ///
    /// Returns `Ok(None)` once the stream is exhausted and the decoder has
    /// been drained. Every frame in the stream is decoded exactly once; the
    /// caller decides which ones to keep.
    ///
    /// # Errors
    ///
    /// Returns [`FramestripError::Ffmpeg`] if the decoder rejects a packet,
    /// or [`FramestripError::VideoDecode`] if a decoded frame cannot be
    /// converted to a raster.
    pub fn read_frame(&mut self) -> Result<Option<DynamicImage>, FramestripError> {
        if self.exhausted {
            return Ok(None);
        }

        loop {
            // Drain any frame the decoder has already produced.
            if self.decoder.receive_frame(&mut self.decoded_frame).is_ok() {
                self.scaler.run(&self.decoded_frame, &mut self.rgb_frame)?;
                let image = conversion::frame_to_image(
                    &self.rgb_frame,
                    self.metadata.width,
                    self.metadata.height,
                )?;
                return Ok(Some(image));
            }

            if self.eof_sent {
                // EOF already sent and the decoder is drained.
                self.exhausted = true;
                return Ok(None);
            }

            // Feed the decoder more packets.
            let mut packet = Packet::empty();
            match packet.read(&mut self.input) {
                Ok(()) => {
                    if packet.stream() == self.stream_index {
                        self.decoder.send_packet(&packet)?;
                    }
                    // Packets from other streams are silently skipped.
                }
                Err(FfmpegError::Eof) => {
                    self.decoder.send_eof()?;
                    self.eof_sent = true;
                }
                Err(_) => {
                    // Non-fatal read error — try the next packet.
                }
            }
        }
    }
}
