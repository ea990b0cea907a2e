//! PNG output of a rendered field slice.
//!
//! This module is feature-gated behind `png` (default on) so that consumers
//! needing only geometry do not pull in the `image` crate. The pixel
//! conversion itself lives in [`crate::pixel`] (always available).

use std::path::Path;

use turbulence_core::{FieldError, FieldParameters, FieldVolume, ForceSource};

use crate::pixel::{slice_to_rgba, SliceSpec};

/// Renders a slice of the field and writes it as a PNG image.
///
/// Returns `FieldError::InvalidDimensions` if the dimensions are zero or
/// overflow `u32`, or `FieldError::Io` on write failure.
pub fn write_png<S>(
    source: &S,
    volume: &FieldVolume,
    params: &FieldParameters,
    time: f64,
    slice: SliceSpec,
    path: &Path,
) -> Result<(), FieldError>
where
    S: ForceSource + ?Sized,
{
    let w = u32::try_from(slice.width).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(slice.height).map_err(|_| FieldError::InvalidDimensions)?;
    let rgba = slice_to_rgba(source, volume, params, time, slice)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}
