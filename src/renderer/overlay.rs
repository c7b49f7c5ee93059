use opencv::{
    core::{Point, Scalar},
    imgproc,
    prelude::*,
};

use crate::shared::constants;
use crate::sync::TimingModel;

/// The two status lines drawn on every displayed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub real_time: String,
    pub frame_info: String,
}

impl Overlay {
    pub fn new(index: u64, total_frames: u64, timing: &TimingModel) -> Self {
        Self {
            real_time: format!(
                "Real-time: {:.4} seconds/{:.4} seconds",
                timing.real_time_at(index),
                timing.total_real_duration()
            ),
            frame_info: format!("Frame: {}/{}", index, total_frames),
        }
    }
}

fn white() -> Scalar {
    Scalar::new(255.0, 255.0, 255.0, 0.0)
}

/// Burns the overlay into `frame` at source resolution.
pub fn draw(frame: &mut Mat, overlay: &Overlay) -> opencv::Result<()> {
    let lines = [
        (&overlay.real_time, constants::REAL_TIME_TEXT_ORIGIN),
        (&overlay.frame_info, constants::FRAME_TEXT_ORIGIN),
    ];
    for (text, (x, y)) in lines {
        imgproc::put_text(
            frame,
            text,
            Point::new(x, y),
            imgproc::FONT_HERSHEY_SIMPLEX,
            constants::OVERLAY_FONT_SCALE,
            white(),
            constants::OVERLAY_THICKNESS,
            imgproc::LINE_8,
            false,
        )?;
    }
    Ok(())
}
