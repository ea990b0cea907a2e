//! Serializable description of one turbulence field.
//!
//! A [`FieldConfig`] captures everything needed to recreate a field: its
//! parameters, volume, noise seed and debug-drawing switches. Two identical
//! configs produce bit-identical forces.

use std::fs;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::coherent::PerlinNoise;
use crate::error::FieldError;
use crate::field::FieldParameters;
use crate::volume::{FieldShape, FieldVolume};

/// Reproducible specification of a turbulence field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub params: FieldParameters,
    pub shape: FieldShape,
    pub center: DVec3,
    pub noise_seed: u32,
    /// Draw the volume outline.
    pub enable_gizmos: bool,
    /// Draw streamlines through the field.
    pub visualize_field: bool,
    /// Outline color as linear RGBA in [0, 1].
    pub gizmo_color: [f64; 4],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            params: FieldParameters::default(),
            shape: FieldShape::Box,
            center: DVec3::ZERO,
            noise_seed: PerlinNoise::DEFAULT_SEED,
            enable_gizmos: true,
            visualize_field: false,
            gizmo_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl FieldConfig {
    /// Checks the parts of the config that clamping cannot repair.
    ///
    /// Returns `FieldError::InvalidCenter` for a non-finite center and
    /// `FieldError::InvalidColor` for a gizmo color component outside [0, 1].
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.center.is_finite() {
            return Err(FieldError::InvalidCenter);
        }
        if let Some(c) = self
            .gizmo_color
            .iter()
            .find(|c| !(0.0..=1.0).contains(*c))
        {
            return Err(FieldError::InvalidColor(format!(
                "gizmo color component {c} outside [0, 1]"
            )));
        }
        Ok(())
    }

    /// The trigger volume described by this config.
    pub fn volume(&self) -> FieldVolume {
        FieldVolume::new(self.center, self.shape)
    }

    /// Parses and validates a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, FieldError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: &Path) -> Result<Self, FieldError> {
        let text = fs::read_to_string(path)
            .map_err(|e| FieldError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Writes the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), FieldError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|e| FieldError::Io(format!("{}: {e}", path.display())))
    }
}
