//! Trigger volume geometry: which points a field acts on.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::field::FieldParameters;

/// Shape of the region a turbulence field acts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldShape {
    /// Axis-aligned box whose full extents are `effective_size`.
    #[default]
    Box,
    /// Sphere of radius `effective_radius`.
    Spherical,
}

impl FieldShape {
    /// All shape names accepted by [`FromStr`].
    pub fn list_names() -> &'static [&'static str] {
        &["box", "spherical"]
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldShape::Box => f.write_str("box"),
            FieldShape::Spherical => f.write_str("spherical"),
        }
    }
}

impl FromStr for FieldShape {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "box" => Ok(FieldShape::Box),
            "spherical" | "sphere" => Ok(FieldShape::Spherical),
            _ => Err(FieldError::UnknownShape(s.to_string())),
        }
    }
}

/// A positioned trigger region.
///
/// The extents come from [`FieldParameters`] so that resizing the field
/// through its parameters resizes the volume too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldVolume {
    pub center: DVec3,
    pub shape: FieldShape,
}

impl FieldVolume {
    pub fn new(center: DVec3, shape: FieldShape) -> Self {
        Self { center, shape }
    }

    /// Whether `point` lies inside the volume. Boundaries count as inside.
    pub fn contains(&self, point: DVec3, params: &FieldParameters) -> bool {
        let offset = point - self.center;
        match self.shape {
            FieldShape::Box => {
                let half = params.effective_size() * 0.5;
                offset.abs().cmple(half).all()
            }
            FieldShape::Spherical => {
                let r = params.effective_radius();
                offset.length_squared() <= r * r
            }
        }
    }

    /// Half extents of the axis-aligned bounds enclosing the volume.
    pub fn half_extents(&self, params: &FieldParameters) -> DVec3 {
        match self.shape {
            FieldShape::Box => params.effective_size() * 0.5,
            FieldShape::Spherical => DVec3::splat(params.effective_radius()),
        }
    }
}
