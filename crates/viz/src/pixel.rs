//! Pure-computation RGBA rendering of a force field slice.
//!
//! This module is always available (no feature gate) so that the `png`
//! snapshot path and any other image sink share the same conversion.

use std::str::FromStr;

use glam::DVec3;
use turbulence_core::{FieldError, FieldParameters, FieldVolume, ForceSource};

use crate::grid::direction_color;

/// An axis-aligned plane through the volume center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Plane {
    /// Horizontal axis x, vertical axis y.
    #[default]
    Xy,
    /// Horizontal axis y, vertical axis z.
    Yz,
    /// Horizontal axis z, vertical axis x.
    Zx,
}

impl Plane {
    /// Unit vectors of the image's horizontal and vertical directions.
    pub fn basis(self) -> (DVec3, DVec3) {
        match self {
            Plane::Xy => (DVec3::X, DVec3::Y),
            Plane::Yz => (DVec3::Y, DVec3::Z),
            Plane::Zx => (DVec3::Z, DVec3::X),
        }
    }
}

impl FromStr for Plane {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xy" => Ok(Plane::Xy),
            "yz" => Ok(Plane::Yz),
            "zx" | "xz" => Ok(Plane::Zx),
            _ => Err(FieldError::UnknownPlane(s.to_string())),
        }
    }
}

/// Image size and orientation of a rendered slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSpec {
    pub width: usize,
    pub height: usize,
    pub plane: Plane,
}

impl SliceSpec {
    /// Validates non-zero dimensions and returns the RGBA buffer length.
    pub fn buffer_len(&self) -> Result<usize, FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(FieldError::InvalidDimensions)
    }
}

/// Renders the force on a plane through the volume center as RGBA8.
///
/// The image covers the volume's bounds on the plane's two axes, sampling
/// pixel centers; the top row is the positive end of the vertical axis.
/// Each pixel is the force's [`direction_color`] with full alpha.
pub fn slice_to_rgba<S>(
    source: &S,
    volume: &FieldVolume,
    params: &FieldParameters,
    time: f64,
    slice: SliceSpec,
) -> Result<Vec<u8>, FieldError>
where
    S: ForceSource + ?Sized,
{
    let len = slice.buffer_len()?;
    let bounds = volume.half_extents(params) * 2.0;
    let (u, v) = slice.plane.basis();
    let span_u = u * bounds;
    let span_v = v * bounds;
    let (w, h) = (slice.width as f64, slice.height as f64);

    let mut rgba = Vec::with_capacity(len);
    for row in 0..slice.height {
        let fv = 0.5 - (row as f64 + 0.5) / h;
        for col in 0..slice.width {
            let fu = (col as f64 + 0.5) / w - 0.5;
            let point = volume.center + span_u * fu + span_v * fv;
            let [r, g, b] = direction_color(source.sample(point, time));
            rgba.extend_from_slice(&[to_byte(r), to_byte(g), to_byte(b), 255]);
        }
    }
    Ok(rgba)
}

fn to_byte(c: f64) -> u8 {
    (c * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbulence_core::{FieldConfig, TurbulenceField};

    struct Uniform(DVec3);

    impl ForceSource for Uniform {
        fn sample(&self, _position: DVec3, _time: f64) -> DVec3 {
            self.0
        }
    }

    /// Pushes along +x right of the center and -x left of it.
    struct SignOfX;

    impl ForceSource for SignOfX {
        fn sample(&self, position: DVec3, _time: f64) -> DVec3 {
            DVec3::new(position.x.signum(), 0.0, 0.0)
        }
    }

    fn slice(width: usize, height: usize) -> SliceSpec {
        SliceSpec {
            width,
            height,
            plane: Plane::Xy,
        }
    }

    #[test]
    fn rgba_correct_length() {
        let buf = slice_to_rgba(
            &Uniform(DVec3::ZERO),
            &FieldVolume::default(),
            &FieldParameters::default(),
            0.0,
            slice(8, 4),
        )
        .unwrap();
        assert_eq!(buf.len(), 8 * 4 * 4);
    }

    #[test]
    fn zero_force_renders_mid_grey() {
        let buf = slice_to_rgba(
            &Uniform(DVec3::ZERO),
            &FieldVolume::default(),
            &FieldParameters::default(),
            0.0,
            slice(2, 2),
        )
        .unwrap();
        for px in buf.chunks(4) {
            assert_eq!(px, [128, 128, 128, 255]);
        }
    }

    #[test]
    fn left_and_right_halves_differ_in_red() {
        let buf = slice_to_rgba(
            &SignOfX,
            &FieldVolume::default(),
            &FieldParameters::default(),
            0.0,
            slice(4, 1),
        )
        .unwrap();
        let reds: Vec<u8> = buf.chunks(4).map(|px| px[0]).collect();
        assert_eq!(reds, vec![0, 0, 255, 255]);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let field = TurbulenceField::from_config(&FieldConfig::default());
        for (w, h) in [(0, 4), (4, 0)] {
            let result = slice_to_rgba(&field, field.volume(), field.params(), 0.0, slice(w, h));
            assert!(matches!(result, Err(FieldError::InvalidDimensions)));
        }
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(matches!(
            slice(usize::MAX, 2).buffer_len(),
            Err(FieldError::InvalidDimensions)
        ));
    }

    #[test]
    fn alpha_is_always_opaque() {
        let field = TurbulenceField::from_config(&FieldConfig::default());
        let buf = slice_to_rgba(&field, field.volume(), field.params(), 3.0, slice(16, 16)).unwrap();
        assert!(buf.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn plane_basis_vectors_are_orthogonal() {
        for plane in [Plane::Xy, Plane::Yz, Plane::Zx] {
            let (u, v) = plane.basis();
            assert_eq!(u.dot(v), 0.0);
        }
    }

    #[test]
    fn plane_parses_known_names() {
        assert_eq!("xy".parse::<Plane>().unwrap(), Plane::Xy);
        assert_eq!("YZ".parse::<Plane>().unwrap(), Plane::Yz);
        assert_eq!("xz".parse::<Plane>().unwrap(), Plane::Zx);
    }

    #[test]
    fn unknown_plane_is_an_error() {
        let err = "xw".parse::<Plane>().unwrap_err();
        assert!(matches!(err, FieldError::UnknownPlane(ref s) if s == "xw"));
    }
}
