use std::path::PathBuf;

use crate::error::PlayerError;
use crate::sync::TimingModel;

/// Forward stepping policy while paused.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StepLimit {
    /// Seek wherever asked; a step that lands past the end reads nothing and is undone.
    #[default]
    Unchecked,
    /// Never step beyond the last frame the container reports.
    Clamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub video_path: PathBuf,
    pub video_speed: f64,
    pub native_fps: u32,
    pub playback_speed: f64,
    pub save_dir: Option<PathBuf>,
    pub step_limit: StepLimit,
}

impl PlayerConfig {
    pub fn new(video_path: impl Into<PathBuf>) -> Self {
        Self {
            video_path: video_path.into(),
            video_speed: 1.0,
            native_fps: 30,
            playback_speed: 1.0,
            save_dir: None,
            step_limit: StepLimit::default(),
        }
    }

    pub fn validate(&self) -> Result<(), PlayerError> {
        if self.native_fps == 0 {
            return Err(PlayerError::InvalidConfig("fps must be greater than zero".into()));
        }
        if !(self.video_speed.is_finite() && self.video_speed > 0.0) {
            return Err(PlayerError::InvalidConfig(format!(
                "video speed must be a positive number, got {}",
                self.video_speed
            )));
        }
        if !(self.playback_speed.is_finite() && self.playback_speed > 0.0) {
            return Err(PlayerError::InvalidConfig(format!(
                "playback speed must be a positive number, got {}",
                self.playback_speed
            )));
        }

        let timing = TimingModel::new(self.native_fps, self.video_speed, self.playback_speed, 0);
        if timing.checked_display_wait().is_none() {
            return Err(PlayerError::InvalidConfig(format!(
                "video speed {} and playback speed {} give an unusable frame wait of {}s",
                self.video_speed,
                self.playback_speed,
                timing.display_wait_seconds()
            )));
        }
        Ok(())
    }
}
