use std::time::Duration;

/// Throttles playback between frames.
pub trait Pacer {
    /// Block for `wait` after a frame has been shown.
    fn pace(&mut self, wait: Duration);

    fn stats(&self) -> PacerStats;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PacerStats {
    pub frames_paced: u64,
    pub total_wait: Duration,
}

/// Wall-clock pacer backed by `thread::sleep`.
#[derive(Debug, Default)]
pub struct SleepPacer {
    stats: PacerStats,
}

impl Pacer for SleepPacer {
    fn pace(&mut self, wait: Duration) {
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.stats.frames_paced += 1;
        self.stats.total_wait += wait;
    }

    fn stats(&self) -> PacerStats {
        self.stats
    }
}
