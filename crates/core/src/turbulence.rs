//! A placed turbulence field that pushes the rigid bodies inside it.
//!
//! [`TurbulenceField`] bundles parameters, a trigger volume and a noise
//! source, and plays the role of the engine callback that fires while a
//! body stays inside the trigger.

use glam::DVec3;
use log::{debug, trace};

use crate::body::RigidBody;
use crate::coherent::{CoherentNoise, PerlinNoise};
use crate::config::FieldConfig;
use crate::field::FieldParameters;
use crate::force::{compute_force, ForceSource};
use crate::volume::FieldVolume;

/// A turbulence field placed in the world.
#[derive(Debug, Clone)]
pub struct TurbulenceField<N = PerlinNoise> {
    params: FieldParameters,
    volume: FieldVolume,
    noise: N,
}

impl TurbulenceField<PerlinNoise> {
    /// Builds a field from a config, seeding Perlin noise with `noise_seed`.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(
            config.params,
            config.volume(),
            PerlinNoise::new(config.noise_seed),
        )
    }
}

impl<N: CoherentNoise> TurbulenceField<N> {
    pub fn new(params: FieldParameters, volume: FieldVolume, noise: N) -> Self {
        Self {
            params,
            volume,
            noise,
        }
    }

    pub fn params(&self) -> &FieldParameters {
        &self.params
    }

    /// Replaces the parameters. `FieldParameters` is clamped on construction.
    pub fn set_params(&mut self, params: FieldParameters) {
        self.params = params;
    }

    pub fn params_mut(&mut self) -> &mut FieldParameters {
        &mut self.params
    }

    pub fn volume(&self) -> &FieldVolume {
        &self.volume
    }

    pub fn set_volume(&mut self, volume: FieldVolume) {
        self.volume = volume;
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Whether `point` is inside the field's trigger volume.
    pub fn contains(&self, point: DVec3) -> bool {
        self.volume.contains(point, &self.params)
    }

    /// The force this field exerts at `position` and `time`, ignoring the volume.
    pub fn force_at(&self, position: DVec3, time: f64) -> DVec3 {
        compute_force(position, time, &self.params, &self.noise)
    }

    /// Pushes `body` if it is inside the volume and returns the applied force.
    ///
    /// Returns `None` without touching the body when it is outside.
    pub fn on_trigger_stay<B>(&self, body: &mut B, time: f64) -> Option<DVec3>
    where
        B: RigidBody + ?Sized,
    {
        let position = body.position();
        if !self.contains(position) {
            trace!("{} at {position} is outside the field", body.name());
            return None;
        }
        let force = self.force_at(position, time);
        debug!("add turbulent force {force} to {}", body.name());
        body.add_force(force);
        Some(force)
    }

    /// Runs [`on_trigger_stay`](Self::on_trigger_stay) over every body and
    /// returns how many were pushed.
    pub fn apply_to_bodies<B: RigidBody>(&self, bodies: &mut [B], time: f64) -> usize {
        bodies
            .iter_mut()
            .filter_map(|body| self.on_trigger_stay(body, time))
            .count()
    }
}

impl<N: CoherentNoise> ForceSource for TurbulenceField<N> {
    fn sample(&self, position: DVec3, time: f64) -> DVec3 {
        self.force_at(position, time)
    }
}
