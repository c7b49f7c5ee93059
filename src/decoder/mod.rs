pub mod source;
pub mod video;

pub use source::{FrameSource, SourceInfo};
pub use video::VideoDecoder;
