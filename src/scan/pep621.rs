//! PEP 621 pyproject scanner
//!
//! Applies when `pyproject.toml` exists and the poetry scanner has already
//! passed on the tree. Dependencies come from the `[project]` table's flat
//! string list; `requires-python` supplies the runtime version when set.

use super::{ManifestScanner, PyProjectToml, ScanContext, ScanError};
use crate::descriptor::{DepStyle, StackConfig};
use crate::runtime::PythonVersion;
use tracing::info;

pub struct Pep621Scanner;

impl ManifestScanner for Pep621Scanner {
    fn name(&self) -> &'static str {
        "pep621"
    }

    fn scan(&self, ctx: &ScanContext<'_>) -> Result<Option<StackConfig>, ScanError> {
        if !ctx.manifest_exists("pyproject.toml") {
            return Ok(None);
        }
        info!("Detected pyproject.toml");

        let pyproject: PyProjectToml = ctx.parse_manifest("pyproject.toml")?;
        let deps = match pyproject.project.dependencies {
            Some(deps) if !deps.is_empty() => deps,
            _ => {
                return Err(ScanError::NoDependencies {
                    manifest: "pyproject.toml",
                })
            }
        };

        let requires_python = pyproject.project.requires_python;
        let py_version = if requires_python.is_empty() {
            ctx.resolve_version()?
        } else {
            // ">=3.10" carries the version inside constraint syntax; keep
            // only the digits-and-dots core.
            let trimmed = requires_python.trim_matches(|c: char| !c.is_ascii_digit() && c != '.');
            PythonVersion::from_string(trimmed)
        };

        Ok(Some(StackConfig::new(
            py_version,
            pyproject.project.name,
            deps,
            DepStyle::Pep621,
        )))
    }
}
