use anyhow::{Context, Result};
use opencv::{prelude::*, videoio};
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::source::{FrameSource, SourceInfo};
use crate::error::PlayerError;
use crate::shared::constants;
use crate::utils::logger;

/// OpenCV-backed video source. Frames are BGR `Mat`s at native resolution.
pub struct VideoDecoder {
    capture: videoio::VideoCapture,
    path: PathBuf,
    total_frames: u64,
    container_fps: f64,
    width: u32,
    height: u32,
    released: bool,
}

impl VideoDecoder {
    pub fn open(path: &Path) -> Result<Self> {
        logger::debug(&format!("Opening video with OpenCV: {}", path.display()));

        let source_open = || PlayerError::SourceOpen {
            path: path.to_path_buf(),
        };
        let name = path.to_str().ok_or_else(source_open)?;

        // CAP_ANY lets OpenCV pick the backend for the platform
        let capture = match videoio::VideoCapture::from_file(name, videoio::CAP_ANY) {
            Ok(capture) => capture,
            Err(e) => {
                logger::error(&format!("VideoCapture::from_file failed: {}", e));
                return Err(source_open().into());
            }
        };

        if !capture.is_opened()? {
            logger::error(&format!("Failed to open video file: {}", path.display()));
            return Err(source_open().into());
        }

        let total_frames = capture
            .get(videoio::CAP_PROP_FRAME_COUNT)
            .context("reading frame count")?
            .max(0.0) as u64;
        let container_fps = capture.get(videoio::CAP_PROP_FPS)?;
        let width = capture.get(videoio::CAP_PROP_FRAME_WIDTH)? as u32;
        let height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT)? as u32;

        logger::info(&format!(
            "Opened {}: {} frames, {}x{}, container fps {:.3}",
            path.display(),
            total_frames,
            width,
            height,
            container_fps
        ));

        Ok(Self {
            capture,
            path: path.to_path_buf(),
            total_frames,
            container_fps,
            width,
            height,
            released: false,
        })
    }

    pub fn info(&self) -> SourceInfo {
        SourceInfo {
            path: self.path.display().to_string(),
            total_frames: self.total_frames,
            container_fps: self.container_fps,
            width: self.width,
            height: self.height,
        }
    }
}

impl FrameSource for VideoDecoder {
    type Frame = Mat;

    fn total_frames(&self) -> u64 {
        self.total_frames
    }

    fn read_frame(&mut self) -> Result<Option<Mat>> {
        if self.released {
            return Ok(None);
        }

        let start = Instant::now();
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }

        let decode_time = start.elapsed();
        if decode_time.as_millis() > constants::SLOW_DECODE_MS {
            logger::debug(&format!("Slow decode: {}us", decode_time.as_micros()));
        }

        Ok(Some(frame))
    }

    fn seek(&mut self, index: u64) -> Result<()> {
        let accepted = self
            .capture
            .set(videoio::CAP_PROP_POS_FRAMES, index as f64)
            .with_context(|| format!("seeking to frame {}", index))?;
        if !accepted {
            logger::warn(&format!("Backend refused seek to frame {}", index));
        }
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.capture.release()?;
        logger::debug("Video source released");
        Ok(())
    }
}
