//! Turbulence field parameters with non-negative clamping.
//!
//! Every way of producing or changing a [`FieldParameters`] value (the
//! constructor, the setters, JSON extraction, and deserialization) clamps
//! each component to a finite non-negative value. The force function relies
//! on that and performs no checks of its own.

use glam::DVec3;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::params::{param_f64, param_vec3, vec3_to_json};

/// Default force amplitude.
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
/// Default spatial frequency on every axis.
pub const DEFAULT_SPATIAL_FREQUENCY: DVec3 = DVec3::ONE;
/// Default full extents of a box-shaped field.
pub const DEFAULT_EFFECTIVE_SIZE: DVec3 = DVec3::ONE;
/// Default radius of a spherical field.
pub const DEFAULT_EFFECTIVE_RADIUS: f64 = 1.0;

/// Clamps `value` to finite non-negative. NaN and infinities become 0.
fn non_negative(name: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("clamping {name} = {value} to 0");
        0.0
    }
}

fn non_negative_vec3(name: &str, v: DVec3) -> DVec3 {
    DVec3::new(
        non_negative(&format!("{name}.x"), v.x),
        non_negative(&format!("{name}.y"), v.y),
        non_negative(&format!("{name}.z"), v.z),
    )
}

/// Tunable inputs of the turbulence force.
///
/// All four fields are guaranteed non-negative. Use [`Default`] for unit
/// amplitude, unit frequency, a unit box and a unit radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "UncheckedParameters")]
pub struct FieldParameters {
    amplitude: f64,
    spatial_frequency: DVec3,
    effective_size: DVec3,
    effective_radius: f64,
}

/// Wire form of [`FieldParameters`] before clamping.
#[derive(Deserialize)]
#[serde(default)]
struct UncheckedParameters {
    amplitude: f64,
    spatial_frequency: DVec3,
    effective_size: DVec3,
    effective_radius: f64,
}

impl Default for UncheckedParameters {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            spatial_frequency: DEFAULT_SPATIAL_FREQUENCY,
            effective_size: DEFAULT_EFFECTIVE_SIZE,
            effective_radius: DEFAULT_EFFECTIVE_RADIUS,
        }
    }
}

impl From<UncheckedParameters> for FieldParameters {
    fn from(raw: UncheckedParameters) -> Self {
        Self::new(
            raw.amplitude,
            raw.spatial_frequency,
            raw.effective_size,
            raw.effective_radius,
        )
    }
}

impl Default for FieldParameters {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            spatial_frequency: DEFAULT_SPATIAL_FREQUENCY,
            effective_size: DEFAULT_EFFECTIVE_SIZE,
            effective_radius: DEFAULT_EFFECTIVE_RADIUS,
        }
    }
}

impl FieldParameters {
    /// Creates parameters, clamping every component to a finite non-negative value.
    pub fn new(
        amplitude: f64,
        spatial_frequency: DVec3,
        effective_size: DVec3,
        effective_radius: f64,
    ) -> Self {
        Self {
            amplitude: non_negative("amplitude", amplitude),
            spatial_frequency: non_negative_vec3("spatial_frequency", spatial_frequency),
            effective_size: non_negative_vec3("effective_size", effective_size),
            effective_radius: non_negative("effective_radius", effective_radius),
        }
    }

    /// Extracts parameters from a JSON object, falling back to defaults per key.
    ///
    /// Vectors are read as `[x, y, z]` arrays. The result is clamped.
    pub fn from_json(params: &Value) -> Self {
        Self::new(
            param_f64(params, "amplitude", DEFAULT_AMPLITUDE),
            param_vec3(params, "spatial_frequency", DEFAULT_SPATIAL_FREQUENCY),
            param_vec3(params, "effective_size", DEFAULT_EFFECTIVE_SIZE),
            param_f64(params, "effective_radius", DEFAULT_EFFECTIVE_RADIUS),
        )
    }

    /// Current values as a JSON object in the layout read by [`from_json`](Self::from_json).
    pub fn to_json(&self) -> Value {
        json!({
            "amplitude": self.amplitude,
            "spatial_frequency": vec3_to_json(self.spatial_frequency),
            "effective_size": vec3_to_json(self.effective_size),
            "effective_radius": self.effective_radius,
        })
    }

    /// Schema describing every parameter, its type, lower bound and default.
    pub fn param_schema() -> Value {
        json!({
            "amplitude": {
                "type": "number",
                "default": DEFAULT_AMPLITUDE,
                "min": 0.0,
                "description": "Maximum magnitude of each force component"
            },
            "spatial_frequency": {
                "type": "vec3",
                "default": vec3_to_json(DEFAULT_SPATIAL_FREQUENCY),
                "min": 0.0,
                "description": "Per-axis scale applied to positions before sampling noise"
            },
            "effective_size": {
                "type": "vec3",
                "default": vec3_to_json(DEFAULT_EFFECTIVE_SIZE),
                "min": 0.0,
                "description": "Full extents of a box-shaped field"
            },
            "effective_radius": {
                "type": "number",
                "default": DEFAULT_EFFECTIVE_RADIUS,
                "min": 0.0,
                "description": "Radius of a spherical field"
            }
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn spatial_frequency(&self) -> DVec3 {
        self.spatial_frequency
    }

    pub fn effective_size(&self) -> DVec3 {
        self.effective_size
    }

    pub fn effective_radius(&self) -> f64 {
        self.effective_radius
    }

    /// Sets the amplitude, clamped to finite non-negative.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = non_negative("amplitude", amplitude);
    }

    /// Sets the spatial frequency, each component clamped to finite non-negative.
    pub fn set_spatial_frequency(&mut self, spatial_frequency: DVec3) {
        self.spatial_frequency = non_negative_vec3("spatial_frequency", spatial_frequency);
    }

    /// Sets the box extents, each component clamped to finite non-negative.
    pub fn set_effective_size(&mut self, effective_size: DVec3) {
        self.effective_size = non_negative_vec3("effective_size", effective_size);
    }

    /// Sets the sphere radius, clamped to finite non-negative.
    pub fn set_effective_radius(&mut self, effective_radius: f64) {
        self.effective_radius = non_negative("effective_radius", effective_radius);
    }
}
