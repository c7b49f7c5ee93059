//! In-memory stand-ins for the controller's collaborators. Frames are
//! their own index so tests can check what was shown where.

use anyhow::{bail, Result};
use std::cell::Cell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use super::config::PlayerConfig;
use super::controller::PlaybackController;
use crate::decoder::FrameSource;
use crate::renderer::{FrameDisplay, FrameWriter, KeyPoll, KeyWait, Overlay};
use crate::sync::pacer::{Pacer, PacerStats};

pub type FakeController = PlaybackController<FakeSource, FakeDisplay, FakeWriter, FakePacer>;

pub fn key(c: char) -> KeyPoll {
    KeyPoll::Pressed(c as i32)
}

pub fn idle(n: usize) -> Vec<KeyPoll> {
    vec![KeyPoll::Idle; n]
}

pub struct FakeSource {
    total: u64,
    readable: u64,
    position: u64,
    pub seeks: Vec<u64>,
    pub releases: Rc<Cell<u32>>,
}

impl FakeSource {
    pub fn new(total: u64) -> Self {
        Self::with_readable(total, total)
    }

    /// Reports `total` frames but can actually decode `readable` of them.
    pub fn with_readable(total: u64, readable: u64) -> Self {
        Self {
            total,
            readable,
            position: 0,
            seeks: Vec::new(),
            releases: Rc::new(Cell::new(0)),
        }
    }
}

impl FrameSource for FakeSource {
    type Frame = u64;

    fn total_frames(&self) -> u64 {
        self.total
    }

    fn read_frame(&mut self) -> Result<Option<u64>> {
        if self.releases.get() > 0 || self.position >= self.readable {
            return Ok(None);
        }
        let frame = self.position;
        self.position += 1;
        Ok(Some(frame))
    }

    fn seek(&mut self, index: u64) -> Result<()> {
        self.seeks.push(index);
        self.position = index;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        self.releases.set(self.releases.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeDisplay {
    keys: VecDeque<KeyPoll>,
    pub shown: Vec<(u64, Overlay)>,
    pub waits: Vec<KeyWait>,
    pub closes: Rc<Cell<u32>>,
    pub fail_on_show: Option<usize>,
}

impl FakeDisplay {
    /// Polls beyond the scripted keys return `Idle` while running and
    /// 'q' while paused, so every script ends.
    pub fn with_keys(keys: impl IntoIterator<Item = KeyPoll>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn shown_frames(&self) -> Vec<u64> {
        self.shown.iter().map(|(frame, _)| *frame).collect()
    }
}

impl FrameDisplay<u64> for FakeDisplay {
    fn show(&mut self, frame: &mut u64, overlay: &Overlay) -> Result<()> {
        if self.fail_on_show == Some(self.shown.len()) {
            bail!("display lost");
        }
        self.shown.push((*frame, overlay.clone()));
        Ok(())
    }

    fn poll_key(&mut self, wait: KeyWait) -> Result<KeyPoll> {
        self.waits.push(wait);
        Ok(self.keys.pop_front().unwrap_or(match wait {
            KeyWait::Immediate => KeyPoll::Idle,
            KeyWait::Forever => key('q'),
        }))
    }

    fn close(&mut self) -> Result<()> {
        self.closes.set(self.closes.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeWriter {
    pub written: Vec<(u64, PathBuf)>,
    pub fail: bool,
}

impl FrameWriter<u64> for FakeWriter {
    fn write(&mut self, frame: &u64, path: &Path) -> Result<()> {
        if self.fail {
            bail!("disk full");
        }
        self.written.push((*frame, path.to_path_buf()));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakePacer {
    pub waits: Vec<Duration>,
}

impl Pacer for FakePacer {
    fn pace(&mut self, wait: Duration) {
        self.waits.push(wait);
    }

    fn stats(&self) -> PacerStats {
        PacerStats {
            frames_paced: self.waits.len() as u64,
            total_wait: self.waits.iter().sum(),
        }
    }
}

pub fn controller(source: FakeSource, display: FakeDisplay, config: &PlayerConfig) -> FakeController {
    PlaybackController::new(
        source,
        display,
        FakeWriter::default(),
        FakePacer::default(),
        config,
        Arc::new(AtomicBool::new(false)),
    )
    .unwrap()
}
