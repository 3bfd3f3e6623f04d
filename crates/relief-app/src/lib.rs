//! Caller layer around the terrain generator: configuration wiring,
//! regeneration debouncing, and scripted parameter sweeps.

pub mod regen;
pub mod setup;
pub mod sweep;

pub use regen::RegenGate;
pub use setup::{AppError, build_generator, build_terrain, grid_config, noise_params};
pub use sweep::{FRAME_TIME, SweepReport, sweep_offset};
