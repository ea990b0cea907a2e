//! Logger setup for the CLI.
//!
//! The library crates log through the `log` facade; this installs
//! `env_logger` as the backend. The default level is `warn`, raised one step
//! per `-v`. Setting `RUST_LOG` replaces the default filter entirely:
//!
//! ```sh
//! $> RUST_LOG=turbulence_core=debug turbulence force --position 0,0,0
//! ```

use log::LevelFilter;

/// Crates whose log output the default filter covers.
const CRATES: &[&str] = &["turbulence", "turbulence_core", "turbulence_viz"];

/// Maps the number of `-v` flags to a level, starting from `warn`.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Builds the filter string that would otherwise be set in `RUST_LOG`.
pub fn filter_string(level: LevelFilter) -> String {
    let level = level.as_str().to_ascii_lowercase();
    CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the logger. Later calls are ignored.
pub fn init(verbose: u8) {
    let filter = filter_string(level_for_verbosity(verbose));
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init();
}
