use anyhow::Result;
use serde::Serialize;

/// A seekable, decodable video resource.
pub trait FrameSource {
    type Frame;

    /// Frame count reported by the container when the source was opened.
    fn total_frames(&self) -> u64;

    /// Decodes the frame at the current position and moves past it.
    /// `None` means nothing more can be read from here.
    fn read_frame(&mut self) -> Result<Option<Self::Frame>>;

    /// Positions the source so the next read returns frame `index`.
    fn seek(&mut self, index: u64) -> Result<()>;

    /// Releases the underlying handle. Further reads return `None`.
    fn release(&mut self) -> Result<()>;
}

/// Static properties of an opened source, as reported by the container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceInfo {
    pub path: String,
    pub total_frames: u64,
    pub container_fps: f64,
    pub width: u32,
    pub height: u32,
}
