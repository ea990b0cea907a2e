//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: field error (bad step, resolution, dimensions)
//! - 11: I/O error (config read, PNG write)
//! - 12: input error (malformed or invalid config file)
//! - 13: serialization error

use std::fmt;

use turbulence_core::FieldError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A field-level error (bad step, resolution, or image dimensions).
    Field(FieldError),
    /// An I/O error (config read, PNG write).
    Io(String),
    /// A user input error (malformed or invalid config file).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Field(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Field(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<FieldError> for CliError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::Io(msg) => CliError::Io(msg),
            FieldError::Config(msg) => CliError::Input(format!("invalid config: {msg}")),
            e @ (FieldError::InvalidColor(_) | FieldError::InvalidCenter) => {
                CliError::Input(format!("invalid config: {e}"))
            }
            other => CliError::Field(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_exit_code_is_10() {
        let err = CliError::Field(FieldError::InvalidResolution);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad config".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_field_error_io_routes_to_cli_io() {
        let cli_err = CliError::from(FieldError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_field_error_config_routes_to_input() {
        let cli_err = CliError::from(FieldError::Config("expected value".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("expected value"));
    }

    #[test]
    fn from_invalid_color_routes_to_input() {
        let cli_err = CliError::from(FieldError::InvalidColor("too bright".into()));
        assert_eq!(cli_err.exit_code(), 12);
    }

    #[test]
    fn from_field_error_step_routes_to_cli_field() {
        let cli_err = CliError::from(FieldError::InvalidStep(0.0));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("step"));
    }

    #[test]
    fn debug_names_the_variant() {
        let err = CliError::Input("bad config".into());
        assert_eq!(format!("{err:?}"), "Input(\"bad config\")");
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
