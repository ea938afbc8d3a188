use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use colored::Colorize;
use framestrip::{
    FfmpegLogLevel, FrameSampler, ProgressCallback, ProgressInfo, SamplerOptions, VideoSource,
};
use indicatif::{ProgressBar, ProgressStyle};

const CLI_AFTER_HELP: &str = "Examples:\n  framestrip input.mp4 frames\n  framestrip input.mp4 frames --frames 40 --width 640 --height 360\n  framestrip input.mp4 frames --progress --log-level quiet";

#[derive(Debug, Parser)]
#[command(
    name = "framestrip",
    version,
    about = "Sample evenly-spaced video frames into numbered 1-bit monochrome bitmaps",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Input video path.
    video_file: PathBuf,

    /// Output directory for the bitmap files (created if absent).
    output_folder: PathBuf,

    /// Number of evenly-spaced frames to sample.
    #[arg(long, default_value_t = 20)]
    frames: u64,

    /// Output filename prefix.
    #[arg(long, default_value = "frame")]
    prefix: String,

    /// Output filename extension.
    #[arg(long, default_value = "bmp")]
    ext: String,

    /// Output width in pixels.
    #[arg(long, default_value_t = 576)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 136)]
    height: u32,

    /// Show a progress bar instead of per-frame lines.
    #[arg(long)]
    progress: bool,

    /// Print video stream details before sampling.
    #[arg(long)]
    verbose: bool,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_log_level(value: &str) -> Option<FfmpegLogLevel> {
    match value.to_ascii_lowercase().as_str() {
        "quiet" => Some(FfmpegLogLevel::Quiet),
        "panic" => Some(FfmpegLogLevel::Panic),
        "fatal" => Some(FfmpegLogLevel::Fatal),
        "error" => Some(FfmpegLogLevel::Error),
        "warning" | "warn" => Some(FfmpegLogLevel::Warning),
        "info" => Some(FfmpegLogLevel::Info),
        "verbose" => Some(FfmpegLogLevel::Verbose),
        "debug" => Some(FfmpegLogLevel::Debug),
        "trace" => Some(FfmpegLogLevel::Trace),
        _ => None,
    }
}

/// Prints one line per saved frame (the default output mode).
struct FrameLines;

impl ProgressCallback for FrameLines {
    fn on_progress(&self, info: &ProgressInfo) {
        println!(
            "saved frame {} -> {}",
            info.frame_index,
            info.output_path.display(),
        );
    }
}

/// Drives an indicatif bar from the sampler's callback.
struct BarLines {
    bar: ProgressBar,
}

impl ProgressCallback for BarLines {
    fn on_progress(&self, info: &ProgressInfo) {
        self.bar.set_position(info.extracted);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        let parsed = parse_log_level(level).ok_or(format!("unsupported --log-level: {level}"))?;
        framestrip::set_ffmpeg_log_level(parsed);
    }

    if cli.verbose {
        let source = VideoSource::open(&cli.video_file)?;
        let metadata = source.metadata();
        eprintln!(
            "Video: {}x{} @ {:.2} fps, ~{} frames [{}] ({})",
            metadata.width,
            metadata.height,
            metadata.frames_per_second,
            metadata.frame_count,
            metadata.codec,
            metadata.format,
        );
    }

    let mut options = SamplerOptions::new()
        .with_frames(cli.frames)
        .with_prefix(&cli.prefix)
        .with_extension(&cli.ext)
        .with_resolution(cli.width, cli.height);

    let progress_bar = if cli.progress {
        let bar = ProgressBar::new(cli.frames);
        let style =
            ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}")?;
        bar.set_style(style.progress_chars("##-"));
        options = options.with_progress(Arc::new(BarLines { bar: bar.clone() }));
        Some(bar)
    } else {
        options = options.with_progress(Arc::new(FrameLines));
        None
    };

    let summary = FrameSampler::new(options).run(&cli.video_file, &cli.output_folder)?;

    if let Some(bar) = progress_bar {
        bar.finish_with_message("done");
    }

    if summary.under_delivered() {
        eprintln!(
            "{} {}",
            "warning:".yellow().bold(),
            format!(
                "requested {} frames but the video only yielded {}",
                summary.requested, summary.extracted,
            )
            .yellow()
        );
    }

    println!(
        "{} {}",
        "success:".green().bold(),
        format!(
            "Extracted {} frame(s) to {}",
            summary.extracted,
            cli.output_folder.display(),
        )
        .green()
    );

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}
