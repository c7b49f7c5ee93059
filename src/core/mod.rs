pub mod config;
pub mod controller;
pub mod input;
pub mod player;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{PlayerConfig, StepLimit};
