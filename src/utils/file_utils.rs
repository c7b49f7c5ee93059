use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlayerError;
use crate::shared::constants;

/// `frame_<index>_time_<seconds>.png`, seconds to four decimals.
pub fn frame_file_name(index: u64, real_time: f64) -> String {
    format!(
        "frame_{}_time_{:.4}.{}",
        index,
        real_time,
        constants::SAVED_FRAME_EXTENSION
    )
}

pub fn frame_path(dir: &Path, index: u64, real_time: f64) -> PathBuf {
    dir.join(frame_file_name(index, real_time))
}

/// `<video_dir>/frames`; a bare file name resolves against the working directory.
pub fn default_save_dir(video_path: &Path) -> PathBuf {
    let parent = video_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    parent.join(constants::DEFAULT_SAVE_DIR_NAME)
}

/// Resolves the save location (explicit or default) and makes sure it exists.
pub fn prepare_save_dir(video_path: &Path, requested: Option<&Path>) -> Result<PathBuf> {
    let dir = match requested {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => default_save_dir(video_path),
    };

    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|source| PlayerError::SaveDirectory {
            path: dir.clone(),
            source,
        })?;
        crate::utils::logger::info(&format!("Created save location {}", dir.display()));
    }

    Ok(dir)
}
