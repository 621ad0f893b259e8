//! Interpreter probe capability
//!
//! The only side-effecting external call in the detector is asking a live
//! interpreter for its version banner. It sits behind a narrow trait so
//! tests (and offline runs) can substitute a fixed banner without touching
//! detector logic.

use std::process::Command;

/// Capability to run a named interpreter executable and capture its
/// combined output.
pub trait InterpreterProbe: Send + Sync {
    /// Run `exe --version` and return its combined stdout and stderr.
    ///
    /// Returns `None` when the executable cannot be spawned or exits with
    /// a failure status. Old interpreters print the banner to stderr, which
    /// is why both streams are captured.
    fn version_banner(&self, exe: &str) -> Option<String>;
}

/// Probe backed by the real process environment.
///
/// Spawns a short-lived child process and waits for completion with no
/// timeout; a hung interpreter blocks the detection.
#[derive(Debug, Default)]
pub struct SystemProbe;

impl InterpreterProbe for SystemProbe {
    fn version_banner(&self, exe: &str) -> Option<String> {
        let output = Command::new(exe).arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        let mut banner = String::from_utf8_lossy(&output.stdout).into_owned();
        banner.push_str(&String::from_utf8_lossy(&output.stderr));
        Some(banner)
    }
}

/// Probe that always answers with a fixed banner (or nothing at all).
/// Used by tests and available for offline detection runs.
#[derive(Debug, Clone)]
pub struct StaticProbe {
    banner: Option<String>,
}

impl StaticProbe {
    pub fn new(banner: impl Into<String>) -> Self {
        Self {
            banner: Some(banner.into()),
        }
    }

    /// A probe behaving as if no interpreter is installed.
    pub fn unavailable() -> Self {
        Self { banner: None }
    }
}

impl InterpreterProbe for StaticProbe {
    fn version_banner(&self, _exe: &str) -> Option<String> {
        self.banner.clone()
    }
}
