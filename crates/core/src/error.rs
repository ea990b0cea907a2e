//! Error types for the turbulence field.
//!
//! `compute_force` itself never fails. These errors come from the edges:
//! sampling configuration, config files, and output.

use thiserror::Error;

/// Errors produced by field configuration, sampling, and output.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A streamline plot step was zero, negative, or not finite.
    #[error("invalid plot step {0}: must be finite and greater than zero")]
    InvalidStep(f64),

    /// A grid sampling resolution was zero.
    #[error("invalid resolution: grid resolution must be non-zero")]
    InvalidResolution,

    /// Width or height of a rendered slice was zero or overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A gizmo color component was outside [0, 1] or not finite.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The volume center had a non-finite component.
    #[error("invalid center: all components must be finite")]
    InvalidCenter,

    /// A shape name did not match any known field shape.
    #[error("unknown field shape: {0}")]
    UnknownShape(String),

    /// A plane name did not match any axis-aligned plane.
    #[error("unknown plane: {0}")]
    UnknownPlane(String),

    /// A config file could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for FieldError {
    fn from(e: serde_json::Error) -> Self {
        FieldError::Config(e.to_string())
    }
}

impl From<std::io::Error> for FieldError {
    fn from(e: std::io::Error) -> Self {
        FieldError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_step_includes_value() {
        let err = FieldError::InvalidStep(-0.5);
        let msg = format!("{err}");
        assert!(msg.contains("-0.5"), "missing step value in: {msg}");
    }

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = FieldError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn unknown_shape_includes_name() {
        let msg = FieldError::UnknownShape("torus".into()).to_string();
        assert!(msg.contains("torus"), "missing shape name in: {msg}");
    }

    #[test]
    fn unknown_plane_includes_name() {
        let msg = FieldError::UnknownPlane("xw".into()).to_string();
        assert!(msg.contains("xw"), "missing plane name in: {msg}");
    }

    #[test]
    fn serde_json_error_becomes_config_error() {
        let bad = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = FieldError::from(bad);
        assert!(matches!(err, FieldError::Config(_)));
    }

    #[test]
    fn io_error_becomes_io_variant() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = FieldError::from(io);
        match err {
            FieldError::Io(msg) => assert!(msg.contains("no such file")),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn field_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldError>();
    }

    #[test]
    fn field_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<FieldError>();
    }
}
