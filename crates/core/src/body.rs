//! The seam between a turbulence field and the physics engine integrating bodies.

use glam::DVec3;

/// A body owned by an external physics engine that accepts additive forces.
///
/// The field only reads the position and pushes forces; integrating those
/// forces into motion is the engine's job.
pub trait RigidBody {
    /// Display name used in log output.
    fn name(&self) -> &str;

    /// Current world-space position.
    fn position(&self) -> DVec3;

    /// Accumulates `force` for the engine's next integration step.
    fn add_force(&mut self, force: DVec3);
}

impl<T: RigidBody + ?Sized> RigidBody for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn position(&self) -> DVec3 {
        (**self).position()
    }

    fn add_force(&mut self, force: DVec3) {
        (**self).add_force(force);
    }
}
