//! Configuration for detection runs
//!
//! Settings are loaded from `PYSTACK_*` environment variables with defaults
//! matching a stock Python installation:
//!
//! - `PYSTACK_INTERPRETERS`: comma-separated interpreter executables probed
//!   for a version banner, in order - default: "python3,python"
//! - `PYSTACK_VENV_MARKER`: path segment identifying virtual environments
//!   skipped during source tree walks - default: ".venv"

use std::env;

const DEFAULT_INTERPRETERS: [&str; 2] = ["python3", "python"];
const DEFAULT_VENV_MARKER: &str = ".venv";

/// Banner assumed when no interpreter on the PATH responds to a version
/// query. Keeps detection usable on hosts without Python installed.
pub const FALLBACK_BANNER: &str = "Python 3.12.0";

/// Knobs for a single detection pass.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Interpreter executables probed for a version banner, in order.
    pub interpreters: Vec<String>,
    /// Path segment identifying virtual environments to skip.
    pub venv_marker: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interpreters: DEFAULT_INTERPRETERS.iter().map(|s| s.to_string()).collect(),
            venv_marker: DEFAULT_VENV_MARKER.to_string(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("PYSTACK_INTERPRETERS") {
            let interpreters: Vec<String> = raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !interpreters.is_empty() {
                config.interpreters = interpreters;
            }
        }

        if let Ok(marker) = env::var("PYSTACK_VENV_MARKER") {
            if !marker.is_empty() {
                config.venv_marker = marker;
            }
        }

        config
    }
}
