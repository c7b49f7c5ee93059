use anyhow::Result;
use opencv::{core::Size, highgui, imgproc, prelude::*};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::overlay::{self, Overlay};
use crate::shared::constants;
use crate::utils::logger;

/// How long a key poll may block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyWait {
    /// Return almost immediately (running playback).
    Immediate,
    /// Block until a key arrives or the session is interrupted (paused).
    Forever,
}

/// Outcome of one key poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPoll {
    /// Low byte of the key code.
    Pressed(i32),
    Idle,
    /// Window closed or Ctrl-C received.
    Closed,
}

/// Surface the controller renders frames onto and polls keys from.
pub trait FrameDisplay<F> {
    /// Draws `overlay` into `frame` and presents it.
    fn show(&mut self, frame: &mut F, overlay: &Overlay) -> Result<()>;

    fn poll_key(&mut self, wait: KeyWait) -> Result<KeyPoll>;

    fn close(&mut self) -> Result<()>;
}

/// On-screen size for a `width`x`height` frame: fixed display width,
/// height scaled to keep the aspect ratio.
pub fn scaled_size(width: i32, height: i32) -> (i32, i32) {
    if width <= 0 || height <= 0 {
        return (constants::DISPLAY_WIDTH, 0);
    }
    let scaled_height = (height as f64 * constants::DISPLAY_WIDTH as f64 / width as f64) as i32;
    (constants::DISPLAY_WIDTH, scaled_height.max(1))
}

/// highgui window. Destroyed on `close` or drop, whichever comes first.
pub struct HighGuiDisplay {
    window: String,
    interrupt: Arc<AtomicBool>,
    scaled: Mat,
    open: bool,
}

impl HighGuiDisplay {
    pub fn open(window: &str, interrupt: Arc<AtomicBool>) -> Result<Self> {
        highgui::named_window(window, highgui::WINDOW_AUTOSIZE)?;
        logger::debug(&format!("Window '{}' opened", window));
        Ok(Self {
            window: window.to_string(),
            interrupt,
            scaled: Mat::default(),
            open: true,
        })
    }

    fn interrupted(&self) -> bool {
        self.interrupt.load(Ordering::SeqCst)
    }

    fn window_closed(&self) -> bool {
        match highgui::get_window_property(&self.window, highgui::WND_PROP_VISIBLE) {
            Ok(visible) => visible < 1.0,
            Err(_) => true,
        }
    }

    fn wait_once(&mut self, delay_ms: i32) -> Result<KeyPoll> {
        let code = highgui::wait_key(delay_ms)?;
        if code >= 0 {
            return Ok(KeyPoll::Pressed(code & 0xFF));
        }
        if self.interrupted() || self.window_closed() {
            return Ok(KeyPoll::Closed);
        }
        Ok(KeyPoll::Idle)
    }
}

impl FrameDisplay<Mat> for HighGuiDisplay {
    fn show(&mut self, frame: &mut Mat, overlay: &Overlay) -> Result<()> {
        overlay::draw(frame, overlay)?;

        let (width, height) = scaled_size(frame.cols(), frame.rows());
        imgproc::resize(
            &*frame,
            &mut self.scaled,
            Size::new(width, height),
            0.0,
            0.0,
            imgproc::INTER_CUBIC,
        )?;
        highgui::imshow(&self.window, &self.scaled)?;
        Ok(())
    }

    fn poll_key(&mut self, wait: KeyWait) -> Result<KeyPoll> {
        match wait {
            KeyWait::Immediate => self.wait_once(constants::IMMEDIATE_WAIT_MS),
            // Sliced so Ctrl-C and window close are noticed while paused
            KeyWait::Forever => loop {
                match self.wait_once(constants::BLOCKING_WAIT_SLICE_MS)? {
                    KeyPoll::Idle => continue,
                    other => return Ok(other),
                }
            },
        }
    }

    fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        highgui::destroy_window(&self.window)?;
        // Lets the GUI backend process the destroy event
        if let Err(e) = highgui::wait_key(1) {
            logger::debug(&format!("wait_key after closing '{}' failed: {}", self.window, e));
        }
        logger::debug(&format!("Window '{}' closed", self.window));
        Ok(())
    }
}

impl Drop for HighGuiDisplay {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            logger::error(&format!("Failed to close window: {}", e));
        }
    }
}
