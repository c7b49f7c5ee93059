use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::PlayerConfig;
use super::controller::PlaybackController;
use crate::decoder::{FrameSource, SourceInfo, VideoDecoder};
use crate::renderer::{HighGuiDisplay, PngWriter};
use crate::shared::constants;
use crate::sync::{SleepPacer, TimingModel};
use crate::utils::logger;

/// Opens the video and the window, then plays until the user quits.
pub fn run(config: &PlayerConfig) -> Result<()> {
    config.validate()?;

    let interrupt = Arc::new(AtomicBool::new(false));
    let flag = interrupt.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .context("installing Ctrl-C handler")?;

    let source = VideoDecoder::open(&config.video_path)?;
    let display = HighGuiDisplay::open(constants::WINDOW_NAME, interrupt.clone())?;

    let mut controller = PlaybackController::new(
        source,
        display,
        PngWriter,
        SleepPacer::default(),
        config,
        interrupt,
    )?;

    println!("space: pause/resume | a/d: step back/forward | enter: save frame | q: quit");
    if let Some(dir) = &config.save_dir {
        println!("Saving frames to {}", dir.display());
    }

    let stats = controller.run()?;
    println!(
        "Stopped at frame {}: {} frames shown, {} saved",
        controller.index(),
        stats.frames_displayed,
        stats.frames_saved
    );
    Ok(())
}

/// What `-probe` prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub source: SourceInfo,
    pub native_fps: u32,
    pub video_speed: f64,
    pub playback_speed: f64,
    pub seconds_per_frame_real: f64,
    pub total_real_duration: f64,
    pub display_wait_seconds: f64,
}

impl ProbeReport {
    pub fn new(source: SourceInfo, config: &PlayerConfig) -> Self {
        let timing = TimingModel::new(
            config.native_fps,
            config.video_speed,
            config.playback_speed,
            source.total_frames,
        );
        Self {
            source,
            native_fps: config.native_fps,
            video_speed: config.video_speed,
            playback_speed: config.playback_speed,
            seconds_per_frame_real: timing.seconds_per_frame_real(),
            total_real_duration: timing.total_real_duration(),
            display_wait_seconds: timing.display_wait_seconds(),
        }
    }
}

/// Opens the source without a window and reports its timing.
pub fn probe(config: &PlayerConfig) -> Result<ProbeReport> {
    config.validate()?;

    let mut source = VideoDecoder::open(&config.video_path)?;
    let report = ProbeReport::new(source.info(), config);
    source.release()?;

    logger::info(&format!("Probed {}", report.source.path));
    Ok(report)
}
