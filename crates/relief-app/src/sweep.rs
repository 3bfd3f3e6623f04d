//! Scripted parameter drags for exercising regeneration without a UI.

use std::time::{Duration, Instant};

use relief_mesh::{MeshError, NoiseParams, Terrain};
use tracing::debug;

use crate::regen::RegenGate;

/// Frame time of the simulated input loop (60 Hz).
pub const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Outcome of a simulated drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepReport {
    /// Input frames simulated.
    pub frames: u32,
    /// Times the terrain was actually regenerated.
    pub regenerations: u64,
}

/// Drag the noise offset from `base.offset` to `base.offset + distance` over
/// `frames` simulated frames, regenerating whenever `gate` releases.
///
/// The final value is flushed after the last frame so the terrain always
/// ends on it.
///
/// # Errors
///
/// Returns the first [`MeshError`] raised by a regeneration.
pub fn sweep_offset(
    terrain: &mut Terrain,
    gate: &mut RegenGate,
    base: NoiseParams,
    distance: f32,
    frames: u32,
    start: Instant,
) -> Result<SweepReport, MeshError> {
    let mut regenerations = 0;
    let mut now = start;

    for frame in 1..=frames {
        let t = frame as f32 / frames as f32;
        gate.request(NoiseParams {
            offset: base.offset + distance * t,
            ..base
        });
        now = start + FRAME_TIME * frame;

        if let Some(params) = gate.poll(now) {
            terrain.regenerate(&params)?;
            regenerations += 1;
            debug!(frame, offset = params.offset, "Sweep regenerated terrain");
        }
    }

    if let Some(params) = gate.flush(now) {
        terrain.regenerate(&params)?;
        regenerations += 1;
    }

    Ok(SweepReport {
        frames,
        regenerations,
    })
}
