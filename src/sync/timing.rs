use std::time::Duration;

/// Frame-to-real-time bookkeeping, fixed once the source is open.
///
/// `video_speed` says how much faster the footage runs than the event it
/// recorded (3.0 for a 3x timelapse); `playback_speed` scales how fast the
/// viewer walks through that footage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingModel {
    seconds_per_frame_real: f64,
    total_real_duration: f64,
    display_wait_seconds: f64,
}

impl TimingModel {
    pub fn new(native_fps: u32, video_speed: f64, playback_speed: f64, total_frames: u64) -> Self {
        let video_seconds_per_frame = 1.0 / native_fps as f64;
        let seconds_per_frame_real = video_seconds_per_frame * video_speed;
        let speed = video_speed * playback_speed;

        Self {
            seconds_per_frame_real,
            total_real_duration: total_frames as f64 * seconds_per_frame_real,
            display_wait_seconds: (1.0 / speed) * video_seconds_per_frame,
        }
    }

    pub fn seconds_per_frame_real(&self) -> f64 {
        self.seconds_per_frame_real
    }

    pub fn total_real_duration(&self) -> f64 {
        self.total_real_duration
    }

    pub fn display_wait_seconds(&self) -> f64 {
        self.display_wait_seconds
    }

    /// Sleep between displayed frames while running. Saturates when the
    /// wait does not fit a `Duration`; `PlayerConfig::validate` rejects those.
    pub fn display_wait(&self) -> Duration {
        self.checked_display_wait().unwrap_or(Duration::MAX)
    }

    /// `None` when the wait is infinite, NaN or too large for a `Duration`.
    pub fn checked_display_wait(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.display_wait_seconds).ok()
    }

    /// Real elapsed time represented by the frame at `index`.
    pub fn real_time_at(&self, index: u64) -> f64 {
        index as f64 * self.seconds_per_frame_real
    }
}
