//! Lattice of force samples across a field's volume.

use glam::DVec3;
use serde::Serialize;
use turbulence_core::{FieldError, FieldParameters, FieldVolume, ForceSource};

/// Upper bound on lattice samples, so a large resolution cannot exhaust memory.
pub const MAX_GRID_SAMPLES: usize = 1_000_000;

/// One sampled point of the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridSample {
    pub point: DVec3,
    pub force: DVec3,
    /// Direction color in [0, 1] per channel.
    pub color: [f64; 3],
}

/// Maps a force direction to RGB: `0.5 * (normalize(force) + 1)`.
///
/// A zero force maps to mid-grey.
pub fn direction_color(force: DVec3) -> [f64; 3] {
    (0.5 * (force.normalize_or_zero() + DVec3::ONE))
        .clamp(DVec3::ZERO, DVec3::ONE)
        .to_array()
}

/// Samples an `n x n x n` lattice over the volume's bounds.
///
/// Lattice offsets run from `-0.5` to just under `0.5` of the bounds on each
/// axis, in steps of `1 / n`. Returns `FieldError::InvalidResolution` when
/// `resolution` is zero or its cube exceeds [`MAX_GRID_SAMPLES`].
pub fn grid_samples<S>(
    source: &S,
    volume: &FieldVolume,
    params: &FieldParameters,
    time: f64,
    resolution: usize,
) -> Result<Vec<GridSample>, FieldError>
where
    S: ForceSource + ?Sized,
{
    if resolution == 0 {
        return Err(FieldError::InvalidResolution);
    }
    let count = resolution
        .checked_pow(3)
        .filter(|&count| count <= MAX_GRID_SAMPLES)
        .ok_or(FieldError::InvalidResolution)?;
    let bounds = volume.half_extents(params) * 2.0;
    let n = resolution as f64;
    let offset = |i: usize| (i as f64 - n / 2.0) / n;

    let mut samples = Vec::with_capacity(count);
    for i in 0..resolution {
        for j in 0..resolution {
            for k in 0..resolution {
                let point = volume.center + DVec3::new(offset(i), offset(j), offset(k)) * bounds;
                let force = source.sample(point, time);
                samples.push(GridSample {
                    point,
                    force,
                    color: direction_color(force),
                });
            }
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbulence_core::{FieldConfig, TurbulenceField};

    #[test]
    fn resolution_cubed_samples() {
        let field = TurbulenceField::from_config(&FieldConfig::default());
        let samples = grid_samples(&field, field.volume(), field.params(), 0.5, 4).unwrap();
        assert_eq!(samples.len(), 64);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let field = TurbulenceField::from_config(&FieldConfig::default());
        let result = grid_samples(&field, field.volume(), field.params(), 0.0, 0);
        assert!(matches!(result, Err(FieldError::InvalidResolution)));
    }

    #[test]
    fn oversized_resolutions_are_rejected() {
        let field = TurbulenceField::from_config(&FieldConfig::default());
        for resolution in [101, 10_000, 1_000_000, usize::MAX] {
            let result = grid_samples(&field, field.volume(), field.params(), 0.0, resolution);
            assert!(
                matches!(result, Err(FieldError::InvalidResolution)),
                "resolution {resolution} accepted"
            );
        }
    }

    #[test]
    fn ten_step_lattice_spans_minus_half_to_four_tenths() {
        let field = TurbulenceField::from_config(&FieldConfig::default());
        let samples = grid_samples(&field, field.volume(), field.params(), 0.0, 10).unwrap();
        let min_x = samples.iter().map(|s| s.point.x).fold(f64::INFINITY, f64::min);
        let max_x = samples.iter().map(|s| s.point.x).fold(f64::NEG_INFINITY, f64::max);
        assert!((min_x + 0.5).abs() < 1e-12);
        assert!((max_x - 0.4).abs() < 1e-12);
    }

    #[test]
    fn samples_carry_the_field_force() {
        let field = TurbulenceField::from_config(&FieldConfig::default());
        let samples = grid_samples(&field, field.volume(), field.params(), 2.0, 3).unwrap();
        for s in &samples {
            assert_eq!(s.force, field.sample(s.point, 2.0));
        }
    }

    #[test]
    fn direction_color_maps_axes_and_zero() {
        assert_eq!(direction_color(DVec3::ZERO), [0.5, 0.5, 0.5]);
        assert_eq!(direction_color(DVec3::new(3.0, 0.0, 0.0)), [1.0, 0.5, 0.5]);
        assert_eq!(direction_color(DVec3::new(0.0, -2.0, 0.0)), [0.5, 0.0, 0.5]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn direction_color_in_unit_cube(
                x in -1e3_f64..1e3,
                y in -1e3_f64..1e3,
                z in -1e3_f64..1e3,
            ) {
                for c in direction_color(DVec3::new(x, y, z)) {
                    prop_assert!((0.0..=1.0).contains(&c), "channel {c} out of range");
                }
            }
        }
    }
}
