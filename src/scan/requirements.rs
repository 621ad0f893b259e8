//! Flat requirements-file scanner
//!
//! The lowest-priority convention: a newline-delimited list of raw
//! dependency tokens. `requirements.txt` is tried before `requirements.in`;
//! whichever exists first is read alone, never merged with the other.

use super::{ManifestScanner, ScanContext, ScanError};
use crate::descriptor::{DepStyle, StackConfig};
use tracing::info;

const CANDIDATES: [&str; 2] = ["requirements.txt", "requirements.in"];

pub struct RequirementsScanner;

impl ManifestScanner for RequirementsScanner {
    fn name(&self) -> &'static str {
        "requirements"
    }

    fn scan(&self, ctx: &ScanContext<'_>) -> Result<Option<StackConfig>, ScanError> {
        let Some(manifest) = CANDIDATES
            .into_iter()
            .find(|name| ctx.manifest_exists(name))
        else {
            return Ok(None);
        };
        info!("Detected {manifest}");

        let doc = ctx.read_manifest(manifest)?;
        // Leading whitespace is stripped before canonicalization so an
        // indented token still yields a dependency name rather than an
        // empty string.
        let tokens: Vec<&str> = doc
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if tokens.is_empty() {
            return Err(ScanError::NoDependencies { manifest });
        }

        let py_version = ctx.resolve_version()?;

        Ok(Some(StackConfig::new(
            py_version,
            ctx.dir_name(),
            tokens,
            DepStyle::Pip,
        )))
    }
}
