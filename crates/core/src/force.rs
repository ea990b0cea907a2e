//! The turbulence force kernel.
//!
//! [`compute_force`] turns a position and a time into a bounded force vector
//! by sampling three decorrelated slices of 2D coherent noise. It is pure and
//! total.

use glam::DVec3;

use crate::coherent::CoherentNoise;
use crate::field::FieldParameters;

/// Time offsets applied to the x, y and z noise samples.
///
/// Distinct offsets keep the three components from collapsing onto one
/// noise value.
pub const AXIS_TIME_OFFSETS: [f64; 3] = [0.0, 0.3, 0.6];

/// A source of 3D force vectors that can be sampled anywhere in space and time.
///
/// All implementations must be deterministic: same inputs = same output.
pub trait ForceSource: Send + Sync {
    /// Sample the force at `position` at the given time.
    fn sample(&self, position: DVec3, time: f64) -> DVec3;
}

/// Computes the turbulent force at `position` and `time`.
///
/// Each component lies in `[-amplitude, amplitude]` provided `params` is
/// non-negative, which [`FieldParameters`] guarantees.
pub fn compute_force<N>(position: DVec3, time: f64, params: &FieldParameters, noise: &N) -> DVec3
where
    N: CoherentNoise + ?Sized,
{
    let p = position * params.spatial_frequency();
    let [tx, ty, tz] = AXIS_TIME_OFFSETS;
    let unit = DVec3::new(
        noise.sample(p.y + p.z, time + tx),
        noise.sample(p.z + p.x, time + ty),
        noise.sample(p.x + p.y, time + tz),
    );
    (2.0 * unit - DVec3::ONE) * params.amplitude()
}
