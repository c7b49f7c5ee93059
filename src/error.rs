//! Domain errors surfaced by the player.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Failed to open video source: {}", path.display())]
    SourceOpen { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to prepare save location {}: {source}", path.display())]
    SaveDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
