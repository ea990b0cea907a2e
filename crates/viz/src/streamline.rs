//! Per-axis streamlines through a force field.
//!
//! For each axis the sweep starts one full extent before the volume center
//! and walks two extents along that axis in fixed steps. Every vertex is the
//! sample point displaced by the force there, with the swept axis' component
//! removed so the line only bends sideways.

use glam::DVec3;
use serde::Serialize;
use turbulence_core::{FieldError, FieldParameters, FieldVolume, ForceSource};

use crate::Axis;

/// Default distance between consecutive streamline samples.
pub const DEFAULT_PLOT_STEP: f64 = 0.01;

/// Upper bound on samples per streamline, so a tiny step cannot exhaust memory.
pub const MAX_PLOT_STEPS: usize = 1_000_000;

/// A polyline sweeping one axis of the field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Streamline {
    pub axis: Axis,
    pub points: Vec<DVec3>,
}

impl Streamline {
    /// Consecutive point pairs, ready for line drawing.
    pub fn segments(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Samples one streamline per axis at `time`.
///
/// Returns `FieldError::InvalidStep` if `step` is not finite and positive or
/// if an axis would need more than [`MAX_PLOT_STEPS`] samples. An axis with
/// zero extent yields a streamline with no points.
pub fn streamlines<S>(
    source: &S,
    volume: &FieldVolume,
    params: &FieldParameters,
    time: f64,
    step: f64,
) -> Result<Vec<Streamline>, FieldError>
where
    S: ForceSource + ?Sized,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(FieldError::InvalidStep(step));
    }
    let extent = volume.half_extents(params) * 2.0;

    Axis::ALL
        .iter()
        .map(|&axis| {
            let size = extent[axis.index()];
            let count = (2.0 * size / step).ceil();
            if !count.is_finite() || count > MAX_PLOT_STEPS as f64 {
                return Err(FieldError::InvalidStep(step));
            }
            let count = count as usize;
            let dir = axis.unit();
            let start = volume.center - dir * size;

            let points = if count == 0 {
                Vec::new()
            } else {
                (0..=count)
                    .map(|i| {
                        let pos = start + dir * (step * i as f64);
                        let mut force = source.sample(pos, time);
                        force[axis.index()] = 0.0;
                        pos + force
                    })
                    .collect()
            };
            Ok(Streamline { axis, points })
        })
        .collect()
}
