//! Wireframe outlines of a field's trigger volume.

use std::f64::consts::TAU;

use glam::DVec3;
use serde::Serialize;
use turbulence_core::{FieldParameters, FieldShape, FieldVolume};

/// Segments per great circle when outlining a sphere.
pub const SPHERE_SEGMENTS: usize = 32;

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: DVec3,
    pub end: DVec3,
}

impl Segment {
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// The 12 edges of an axis-aligned box with full extents `size`.
pub fn wire_box(center: DVec3, size: DVec3) -> Vec<Segment> {
    let h = size * 0.5;
    let corner = |sx: f64, sy: f64, sz: f64| center + DVec3::new(sx, sy, sz) * h;
    let signs = [-1.0, 1.0];

    let mut edges = Vec::with_capacity(12);
    for &a in &signs {
        for &b in &signs {
            edges.push(Segment::new(corner(-1.0, a, b), corner(1.0, a, b)));
            edges.push(Segment::new(corner(a, -1.0, b), corner(a, 1.0, b)));
            edges.push(Segment::new(corner(a, b, -1.0), corner(a, b, 1.0)));
        }
    }
    edges
}

/// Three axis-aligned great circles, `segments` edges each.
///
/// Returns no segments when `segments` is below 3.
pub fn wire_sphere(center: DVec3, radius: f64, segments: usize) -> Vec<Segment> {
    if segments < 3 {
        return Vec::new();
    }
    let planes = [(DVec3::X, DVec3::Y), (DVec3::Y, DVec3::Z), (DVec3::Z, DVec3::X)];
    let point = |u: DVec3, v: DVec3, i: usize| {
        let theta = TAU * i as f64 / segments as f64;
        center + (u * theta.cos() + v * theta.sin()) * radius
    };

    planes
        .iter()
        .flat_map(|&(u, v)| {
            (0..segments).map(move |i| Segment::new(point(u, v, i), point(u, v, i + 1)))
        })
        .collect()
}

/// Outline of `volume` with the extents from `params`.
pub fn outline(volume: &FieldVolume, params: &FieldParameters) -> Vec<Segment> {
    match volume.shape {
        FieldShape::Box => wire_box(volume.center, params.effective_size()),
        FieldShape::Spherical => {
            wire_sphere(volume.center, params.effective_radius(), SPHERE_SEGMENTS)
        }
    }
}
