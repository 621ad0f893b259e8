//! Poetry project scanner
//!
//! Applies when both `poetry.lock` and `pyproject.toml` exist. Dependencies
//! come from the `[tool.poetry.dependencies]` table; the runtime version
//! from the table's `python` pseudo-package entry.

use super::{ManifestScanner, PyProjectToml, ScanContext, ScanError};
use crate::deps::canonicalize;
use crate::descriptor::{DepStyle, StackConfig};
use crate::runtime::PythonVersion;
use tracing::info;

pub struct PoetryScanner;

impl ManifestScanner for PoetryScanner {
    fn name(&self) -> &'static str {
        "poetry"
    }

    fn scan(&self, ctx: &ScanContext<'_>) -> Result<Option<StackConfig>, ScanError> {
        if !ctx.manifest_exists("poetry.lock") || !ctx.manifest_exists("pyproject.toml") {
            return Ok(None);
        }
        info!("Detected Poetry project");

        let pyproject: PyProjectToml = ctx.parse_manifest("pyproject.toml")?;
        let Some(deps) = pyproject.tool.poetry.dependencies else {
            return Err(ScanError::NoDependencies {
                manifest: "pyproject.toml",
            });
        };

        let py_version = match deps.get("python").and_then(|v| v.as_str()) {
            Some(raw) => {
                let raw = raw.strip_prefix('^').unwrap_or(raw);
                PythonVersion::from_string(canonicalize(raw))
            }
            None => return Err(ScanError::NoPythonRequirement),
        };

        Ok(Some(StackConfig::new(
            py_version,
            pyproject.tool.poetry.name,
            deps.keys(),
            DepStyle::Poetry,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::runtime::StaticProbe;
    use std::fs;
    use tempfile::TempDir;

    fn scan(dir: &TempDir) -> Result<Option<StackConfig>, ScanError> {
        let config = ScanConfig::default();
        let probe = StaticProbe::unavailable();
        let ctx = ScanContext::new(dir.path(), &config, &probe);
        PoetryScanner.scan(&ctx)
    }

    #[test]
    fn test_absent_without_lockfile() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), "[tool.poetry]\n").unwrap();
        assert!(scan(&dir).unwrap().is_none());
    }

    #[test]
    fn test_absent_without_pyproject() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("poetry.lock"), "").unwrap();
        assert!(scan(&dir).unwrap().is_none());
    }

    #[test]
    fn test_reads_poetry_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("poetry.lock"), "").unwrap();
        fs::write(
            dir.path().join("pyproject.toml"),
            r#"
[tool.poetry]
name = "dashboard"

[tool.poetry.dependencies]
python = "^3.11"
fastapi = "^0.104"
boto3 = { version = "*" }
"#,
        )
        .unwrap();

        let cfg = scan(&dir).unwrap().unwrap();
        assert_eq!(cfg.app_name(), "dashboard");
        assert_eq!(cfg.dep_style(), DepStyle::Poetry);
        assert_eq!(cfg.python_version().version, "3.11");
        assert!(!cfg.python_version().pinned);
        assert!(cfg.has_dep("fastapi"));
        assert!(cfg.has_dep("boto3"));
        assert!(cfg.has_dep("python"));
    }

    #[test]
    fn test_missing_dependency_table_is_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("poetry.lock"), "").unwrap();
        fs::write(
            dir.path().join("pyproject.toml"),
            "[tool.poetry]\nname = \"x\"\n",
        )
        .unwrap();

        assert!(matches!(
            scan(&dir).unwrap_err(),
            ScanError::NoDependencies { .. }
        ));
    }

    #[test]
    fn test_missing_python_entry_is_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("poetry.lock"), "").unwrap();
        fs::write(
            dir.path().join("pyproject.toml"),
            "[tool.poetry.dependencies]\nflask = \"^2.3\"\n",
        )
        .unwrap();

        assert!(matches!(
            scan(&dir).unwrap_err(),
            ScanError::NoPythonRequirement
        ));
    }

    #[test]
    fn test_malformed_pyproject_is_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("poetry.lock"), "").unwrap();
        fs::write(dir.path().join("pyproject.toml"), "[tool.poetry\n").unwrap();

        assert!(matches!(scan(&dir).unwrap_err(), ScanError::Parse { .. }));
    }
}
