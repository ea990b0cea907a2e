#![deny(unsafe_code)]
//! Core types for the turbulence field.
//!
//! Provides `FieldParameters` (non-negative by construction), the
//! `CoherentNoise` seam with a seeded `PerlinNoise`, the pure
//! `compute_force` kernel, trigger-volume geometry, the `RigidBody` seam and
//! the `TurbulenceField` adapter that pushes bodies, plus `FieldConfig` files.

pub mod body;
pub mod coherent;
pub mod config;
pub mod error;
pub mod field;
pub mod force;
pub mod params;
pub mod turbulence;
pub mod volume;

pub use body::RigidBody;
pub use coherent::{CoherentNoise, PerlinNoise};
pub use config::FieldConfig;
pub use error::FieldError;
pub use field::FieldParameters;
pub use force::{compute_force, ForceSource, AXIS_TIME_OFFSETS};
pub use turbulence::TurbulenceField;
pub use volume::{FieldShape, FieldVolume};
