use anyhow::Result;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::{PlayerConfig, StepLimit};
use super::input::Command;
use super::state::{self, Action, Event, PlaybackState};
use crate::decoder::FrameSource;
use crate::renderer::{FrameDisplay, FrameWriter, KeyPoll, KeyWait, Overlay};
use crate::sync::{Pacer, TimingModel};
use crate::utils::{file_utils, logger};

/// Result of a save request. None of these stop playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    NoLocation,
    NoFrame,
    Failed(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames_displayed: u64,
    pub frames_saved: u64,
}

/// Owns the source and the display for the whole session and drives them
/// through the playback state machine.
pub struct PlaybackController<S, D, W, P>
where
    S: FrameSource,
    D: FrameDisplay<S::Frame>,
    W: FrameWriter<S::Frame>,
    P: Pacer,
{
    source: S,
    display: D,
    writer: W,
    pacer: P,
    timing: TimingModel,
    total_frames: u64,
    index: u64,
    state: PlaybackState,
    current: Option<S::Frame>,
    save_dir: Option<PathBuf>,
    step_limit: StepLimit,
    interrupt: Arc<AtomicBool>,
    stats: SessionStats,
    released: bool,
}

impl<S, D, W, P> PlaybackController<S, D, W, P>
where
    S: FrameSource,
    D: FrameDisplay<S::Frame>,
    W: FrameWriter<S::Frame>,
    P: Pacer,
{
    pub fn new(
        source: S,
        display: D,
        writer: W,
        pacer: P,
        config: &PlayerConfig,
        interrupt: Arc<AtomicBool>,
    ) -> Result<Self> {
        config.validate()?;

        let total_frames = source.total_frames();
        let timing = TimingModel::new(
            config.native_fps,
            config.video_speed,
            config.playback_speed,
            total_frames,
        );

        logger::info(&format!(
            "Playback: {} frames, {:.6}s real per frame, {:.4}s real total, {:.6}s wait",
            total_frames,
            timing.seconds_per_frame_real(),
            timing.total_real_duration(),
            timing.display_wait_seconds()
        ));

        Ok(Self {
            source,
            display,
            writer,
            pacer,
            timing,
            total_frames,
            index: 0,
            state: PlaybackState::Running,
            current: None,
            save_dir: config.save_dir.clone(),
            step_limit: config.step_limit,
            interrupt,
            stats: SessionStats::default(),
            released: false,
        })
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timing(&self) -> &TimingModel {
        &self.timing
    }

    /// Plays until quit, end of source or interrupt. The source and the
    /// display are released on every exit path, errors included.
    pub fn run(&mut self) -> Result<SessionStats> {
        let outcome = self.run_loop();
        let teardown = self.shutdown();
        outcome?;
        teardown?;
        Ok(self.stats)
    }

    fn run_loop(&mut self) -> Result<()> {
        while self.state != PlaybackState::Terminated {
            self.tick()?;
        }
        Ok(())
    }

    /// One pass of the playback loop.
    pub fn tick(&mut self) -> Result<()> {
        let event = match self.state {
            PlaybackState::Terminated => return Ok(()),
            PlaybackState::Running => self.next_running_event()?,
            PlaybackState::Paused => self.poll(KeyWait::Forever)?,
        };

        let transition = state::transition(self.state, event, self.index);
        if self.state != transition.next {
            logger::debug(&format!(
                "{:?} -> {:?} on {:?} at frame {}",
                self.state, transition.next, event, self.index
            ));
        }

        self.apply(transition.action)?;
        self.state = transition.next;

        if transition.advances() {
            self.index += 1;
            self.pacer.pace(self.timing.display_wait());
        }
        Ok(())
    }

    fn next_running_event(&mut self) -> Result<Event> {
        if self.interrupted() {
            return Ok(Event::Interrupted);
        }
        match self.source.read_frame()? {
            None => {
                logger::info(&format!("End of source at frame {}", self.index));
                Ok(Event::EndOfSource)
            }
            Some(frame) => {
                self.current = Some(frame);
                self.render()?;
                self.poll(KeyWait::Immediate)
            }
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupt.load(Ordering::SeqCst)
    }

    fn poll(&mut self, wait: KeyWait) -> Result<Event> {
        if self.interrupted() {
            return Ok(Event::Interrupted);
        }
        Ok(match self.display.poll_key(wait)? {
            KeyPoll::Pressed(code) => Event::Key(Command::from_key_code(code)),
            KeyPoll::Idle => Event::Idle,
            KeyPoll::Closed => Event::Interrupted,
        })
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::None => {}
            Action::StepBack => self.step_to(self.index.saturating_sub(1))?,
            Action::StepForward => {
                let target = self.index + 1;
                if self.step_limit == StepLimit::Clamp && target >= self.total_frames {
                    logger::debug(&format!("Step to {} refused: past last frame", target));
                } else {
                    self.step_to(target)?;
                }
            }
            Action::SaveFrame => {
                let outcome = self.save_current();
                self.report_save(&outcome);
            }
            Action::Shutdown => self.shutdown()?,
        }
        Ok(())
    }

    /// Seeks to `target` and shows it. A seek that yields no frame leaves
    /// the index and the displayed frame as they were.
    fn step_to(&mut self, target: u64) -> Result<()> {
        let previous = self.index;
        self.source.seek(target)?;

        match self.source.read_frame()? {
            Some(frame) => {
                self.index = target;
                self.current = Some(frame);
                self.render()
            }
            None => {
                logger::warn(&format!(
                    "No frame at index {} (source reports {}); staying on {}",
                    target, self.total_frames, previous
                ));
                self.source.seek(previous + 1)
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let overlay = Overlay::new(self.index, self.total_frames, &self.timing);
        if let Some(frame) = self.current.as_mut() {
            self.display.show(frame, &overlay)?;
            self.stats.frames_displayed += 1;
        }
        Ok(())
    }

    /// Writes the frame on screen to the save location. Never fatal.
    pub fn save_current(&mut self) -> SaveOutcome {
        let Some(dir) = self.save_dir.as_ref() else {
            return SaveOutcome::NoLocation;
        };
        let Some(frame) = self.current.as_ref() else {
            return SaveOutcome::NoFrame;
        };

        let real_time = self.timing.real_time_at(self.index);
        let path = file_utils::frame_path(dir, self.index, real_time);

        match self.writer.write(frame, &path) {
            Ok(()) => {
                self.stats.frames_saved += 1;
                SaveOutcome::Saved(path)
            }
            Err(e) => SaveOutcome::Failed(format!("{}: {}", path.display(), e)),
        }
    }

    fn report_save(&self, outcome: &SaveOutcome) {
        match outcome {
            SaveOutcome::Saved(path) => {
                println!("Frame saved as {}", path.display());
                logger::info(&format!("Saved frame {} to {}", self.index, path.display()));
            }
            SaveOutcome::NoLocation => {
                println!("No save location specified!");
                logger::error("Save requested but no save location is configured");
            }
            SaveOutcome::NoFrame => logger::warn("Save requested before any frame was shown"),
            SaveOutcome::Failed(reason) => {
                eprintln!("Failed to save frame {}: {}", self.index, reason);
                logger::error(&format!("Failed to save frame {}: {}", self.index, reason));
            }
        }
    }

    /// Releases the source and closes the display. Safe to call repeatedly.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.state = PlaybackState::Terminated;
        self.current = None;

        let source = self.source.release();
        let display = self.display.close();

        let pacing = self.pacer.stats();
        logger::info(&format!(
            "Session ended at frame {}/{}: displayed {}, saved {}, throttled {:.3}s over {} frames",
            self.index,
            self.total_frames,
            self.stats.frames_displayed,
            self.stats.frames_saved,
            pacing.total_wait.as_secs_f64(),
            pacing.frames_paced
        ));

        source?;
        display?;
        Ok(())
    }
}

impl<S, D, W, P> Drop for PlaybackController<S, D, W, P>
where
    S: FrameSource,
    D: FrameDisplay<S::Frame>,
    W: FrameWriter<S::Frame>,
    P: Pacer,
{
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            logger::error(&format!("Teardown failed: {}", e));
        }
    }
}

#[cfg(test)]
impl<S, D, W, P> PlaybackController<S, D, W, P>
where
    S: FrameSource,
    D: FrameDisplay<S::Frame>,
    W: FrameWriter<S::Frame>,
    P: Pacer,
{
    pub(crate) fn state(&self) -> PlaybackState {
        self.state
    }

    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    pub(crate) fn display(&self) -> &D {
        &self.display
    }

    pub(crate) fn writer(&self) -> &W {
        &self.writer
    }

    pub(crate) fn pacer(&self) -> &P {
        &self.pacer
    }
}
