mod core;
mod decoder;
mod error;
mod renderer;
mod shared;
mod sync;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::{PlayerConfig, StepLimit};

/// Video player for analysis of experiment videos
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to video file
    #[arg(long = "video_path")]
    video_path: PathBuf,
    /// Speed of video (0.25, 1.0, 3.0, etc.)
    #[arg(long = "video_speed", default_value_t = 1.0)]
    video_speed: f64,
    /// Frames per second the video was recorded at
    #[arg(long = "fps", default_value_t = 30)]
    fps: u32,
    /// Playback speed (0.25, 1.0, 3.0, etc.)
    #[arg(long = "playback_speed", default_value_t = 1.0)]
    playback_speed: f64,
    /// Location to save frames [default: <video dir>/frames]
    #[arg(long = "save_location")]
    save_location: Option<PathBuf>,
    /// What stepping forward does at the last frame
    #[arg(long = "step_limit", value_enum, default_value_t = StepLimit::Unchecked)]
    step_limit: StepLimit,
    /// Print the video's frame count and timing as JSON, then exit
    #[arg(long = "probe", default_value_t = false)]
    probe: bool,
}

impl Cli {
    fn config(&self) -> PlayerConfig {
        PlayerConfig {
            video_speed: self.video_speed,
            native_fps: self.fps,
            playback_speed: self.playback_speed,
            save_dir: self.save_location.clone(),
            step_limit: self.step_limit,
            ..PlayerConfig::new(self.video_path.clone())
        }
    }
}

fn main() -> Result<()> {
    crate::utils::logger::init();

    let cli = Cli::parse_from(crate::utils::args::normalize(std::env::args()));
    let mut config = cli.config();

    if cli.probe {
        let report = crate::core::player::probe(&config)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    config.save_dir = Some(crate::utils::file_utils::prepare_save_dir(
        &config.video_path,
        config.save_dir.as_deref(),
    )?);

    crate::core::player::run(&config)
}
