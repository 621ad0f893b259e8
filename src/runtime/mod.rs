//! Python runtime version resolution
//!
//! Resolution is tiered: a version pinned by lockfile metadata wins, then a
//! live interpreter is probed, then a fixed fallback banner stands in. Only
//! the final banner parse can fail hard.

mod probe;

pub use probe::{InterpreterProbe, StaticProbe, SystemProbe};

use crate::config::{ScanConfig, FALLBACK_BANNER};
use crate::scan::ScanError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Banner pattern: `Python 3.11.2` or `Python 3.12.0b4`.
const VERSION_PATTERN: &str = r"Python ([0-9]+\.[0-9]+\.[0-9]+(?:[a-zA-Z]+[0-9]+)?)";

/// A resolved Python runtime version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonVersion {
    pub version: String,
    /// True when the version string carries anything beyond digits and
    /// dots, i.e. a prerelease suffix like `3.12.0b4`.
    pub pinned: bool,
}

impl PythonVersion {
    pub fn from_string(version: impl Into<String>) -> Self {
        let version = version.into();
        let pinned = version.chars().any(|c| !c.is_ascii_digit() && c != '.');
        Self { version, pinned }
    }
}

/// Subset of Pipfile.lock consulted for a declared interpreter version.
#[derive(Debug, Default, Deserialize)]
struct PipfileLock {
    #[serde(default, rename = "_meta")]
    meta: PipfileLockMeta,
}

#[derive(Debug, Default, Deserialize)]
struct PipfileLockMeta {
    #[serde(default)]
    requires: PipfileLockRequires,
}

#[derive(Debug, Default, Deserialize)]
struct PipfileLockRequires {
    #[serde(default)]
    python_version: String,
}

/// Resolve the runtime version for a source tree.
///
/// Tier 1 reads `Pipfile.lock` metadata; tier 2 probes the configured
/// interpreters in order; tier 3 assumes the fallback banner. Whatever
/// banner is obtained must match [`VERSION_PATTERN`] or resolution fails.
pub fn resolve(
    source_dir: &Path,
    config: &ScanConfig,
    probe: &dyn InterpreterProbe,
) -> Result<PythonVersion, ScanError> {
    if let Some(version) = lockfile_version(source_dir) {
        debug!(version = %version, "python version declared in Pipfile.lock");
        return Ok(PythonVersion::from_string(version));
    }

    let mut banner = FALLBACK_BANNER.to_string();
    for exe in &config.interpreters {
        if let Some(output) = probe.version_banner(exe) {
            debug!(exe = %exe, "obtained version banner from interpreter");
            banner = output;
            break;
        }
    }

    let version = Regex::new(VERSION_PATTERN)
        .ok()
        .and_then(|re| re.captures(&banner))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(ScanError::VersionNotFound)?;

    Ok(PythonVersion::from_string(version))
}

/// Read `_meta.requires.python_version` from Pipfile.lock, if present.
/// Read and parse failures fall through to the probe tier.
fn lockfile_version(source_dir: &Path) -> Option<String> {
    let contents = fs::read_to_string(source_dir.join("Pipfile.lock")).ok()?;
    let lock: PipfileLock = serde_json::from_str(&contents).ok()?;
    let version = lock.meta.requires.python_version;
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn resolve_with_banner(banner: &str) -> Result<PythonVersion, ScanError> {
        let dir = tempfile::tempdir().unwrap();
        let probe = StaticProbe::new(banner);
        resolve(dir.path(), &ScanConfig::default(), &probe)
    }

    #[test]
    fn test_release_banner_is_unpinned() {
        let version = resolve_with_banner("Python 3.11.2\n").unwrap();
        assert_eq!(version.version, "3.11.2");
        assert!(!version.pinned);
    }

    #[test]
    fn test_prerelease_banner_is_pinned() {
        let version = resolve_with_banner("Python 3.12.0b4").unwrap();
        assert_eq!(version.version, "3.12.0b4");
        assert!(version.pinned);
    }

    #[test]
    fn test_unparseable_banner_is_a_hard_error() {
        let err = resolve_with_banner("Pyston 2.3").unwrap_err();
        assert!(matches!(err, ScanError::VersionNotFound));
    }

    #[test]
    fn test_no_interpreter_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let probe = StaticProbe::unavailable();
        let version = resolve(dir.path(), &ScanConfig::default(), &probe).unwrap();
        assert_eq!(version.version, "3.12.0");
        assert!(!version.pinned);
    }

    #[test]
    fn test_lockfile_metadata_wins_over_probe() {
        let dir = tempfile::tempdir().unwrap();
        let mut lock = File::create(dir.path().join("Pipfile.lock")).unwrap();
        write!(lock, r#"{{"_meta": {{"requires": {{"python_version": "3.9"}}}}}}"#).unwrap();

        let probe = StaticProbe::new("Python 3.12.0");
        let version = resolve(dir.path(), &ScanConfig::default(), &probe).unwrap();
        assert_eq!(version.version, "3.9");
        assert!(!version.pinned);
    }

    #[test]
    fn test_malformed_lockfile_falls_through_to_probe() {
        let dir = tempfile::tempdir().unwrap();
        let mut lock = File::create(dir.path().join("Pipfile.lock")).unwrap();
        write!(lock, "not json at all").unwrap();

        let probe = StaticProbe::new("Python 3.10.7");
        let version = resolve(dir.path(), &ScanConfig::default(), &probe).unwrap();
        assert_eq!(version.version, "3.10.7");
    }

    #[test]
    fn test_from_string_pinned_rule() {
        assert!(!PythonVersion::from_string("3.11.2").pinned);
        assert!(PythonVersion::from_string("3.12.0b4").pinned);
        assert!(PythonVersion::from_string("3.12.0rc1").pinned);
    }
}
