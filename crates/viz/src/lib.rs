#![deny(unsafe_code)]
//! Debug visualization for the turbulence field.
//!
//! Everything here samples a [`ForceSource`](turbulence_core::ForceSource)
//! and produces plain geometry (polylines, segments, colored samples) or
//! pixels. Nothing here mutates simulation state; drawing the output is the
//! caller's concern.

pub mod grid;
pub mod outline;
pub mod pixel;
pub mod streamline;

#[cfg(feature = "png")]
pub mod snapshot;

use std::fmt;

use glam::DVec3;
use serde::Serialize;

pub use grid::{direction_color, grid_samples, GridSample, MAX_GRID_SAMPLES};
pub use outline::{outline, wire_box, wire_sphere, Segment};
pub use pixel::{slice_to_rgba, Plane, SliceSpec};
pub use streamline::{streamlines, Streamline, DEFAULT_PLOT_STEP};

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a vector.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}
