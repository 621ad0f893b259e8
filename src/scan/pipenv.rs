//! Pipenv project scanner
//!
//! Applies when both `Pipfile` and `Pipfile.lock` exist. Package names come
//! from the `[packages]` table keys; declared constraint values are
//! ignored. The Pipfile declares no application name, so the source tree's
//! directory name stands in, and the runtime version always goes through
//! the resolver (which reads the lockfile metadata first).

use super::{ManifestScanner, ScanContext, ScanError};
use crate::descriptor::{DepStyle, StackConfig};
use serde::Deserialize;
use tracing::info;

/// Subset of the Pipfile read by this scanner.
#[derive(Debug, Default, Deserialize)]
struct Pipfile {
    #[serde(default)]
    packages: Option<toml::Table>,
}

pub struct PipenvScanner;

impl ManifestScanner for PipenvScanner {
    fn name(&self) -> &'static str {
        "pipenv"
    }

    fn scan(&self, ctx: &ScanContext<'_>) -> Result<Option<StackConfig>, ScanError> {
        if !ctx.manifest_exists("Pipfile") || !ctx.manifest_exists("Pipfile.lock") {
            return Ok(None);
        }
        info!("Detected Pipfile");

        let pipfile: Pipfile = ctx.parse_manifest("Pipfile")?;
        let Some(packages) = pipfile.packages else {
            return Err(ScanError::NoDependencies { manifest: "Pipfile" });
        };

        let py_version = ctx.resolve_version()?;

        Ok(Some(StackConfig::new(
            py_version,
            ctx.dir_name(),
            packages.keys(),
            DepStyle::Pipenv,
        )))
    }
}
