use anyhow::{anyhow, bail, Result};
use opencv::{core::Vector, imgcodecs, prelude::*};
use std::path::Path;

/// Encodes a frame to disk; the format follows the file extension.
pub trait FrameWriter<F> {
    fn write(&mut self, frame: &F, path: &Path) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct PngWriter;

impl FrameWriter<Mat> for PngWriter {
    fn write(&mut self, frame: &Mat, path: &Path) -> Result<()> {
        let name = path
            .to_str()
            .ok_or_else(|| anyhow!("Save path is not valid UTF-8: {:?}", path))?;
        if !imgcodecs::imwrite(name, frame, &Vector::new())? {
            bail!("Encoder could not write {}", name);
        }
        Ok(())
    }
}
