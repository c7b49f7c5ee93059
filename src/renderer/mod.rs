pub mod display;
pub mod overlay;
pub mod writer;

pub use display::{FrameDisplay, HighGuiDisplay, KeyPoll, KeyWait};
pub use overlay::Overlay;
pub use writer::{FrameWriter, PngWriter};
