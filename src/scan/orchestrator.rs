//! The detection chain
//!
//! Scanners run in fixed priority order and the chain stops at the first
//! definitive outcome: a stack configuration moves on to descriptor
//! construction, a hard error propagates immediately, absence falls through
//! to the next scanner. Trees where no scanner applies but Python marker
//! files exist get a generic descriptor instead.

use super::{
    ManifestScanner, Pep621Scanner, PipenvScanner, PoetryScanner, RequirementsScanner,
    ScanContext, ScanError,
};
use crate::descriptor::{DeploymentDescriptor, StackOutcome};
use tracing::{debug, info};

/// Marker files that identify a Python project even when no scanner can
/// produce a full stack configuration.
const PYTHON_MARKERS: [&str; 6] = [
    "requirements.txt",
    "environment.yml",
    "poetry.lock",
    "Pipfile",
    "setup.py",
    "setup.cfg",
];

/// Runs the manifest scanners over a source tree and builds the deployment
/// descriptor for the first one that applies.
pub struct Orchestrator {
    scanners: Vec<Box<dyn ManifestScanner>>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            scanners: vec![
                Box::new(PoetryScanner),
                Box::new(Pep621Scanner),
                Box::new(PipenvScanner),
                Box::new(RequirementsScanner),
            ],
        }
    }

    /// Detect the stack of one source tree.
    ///
    /// `Ok(None)` means either the tree is not a Python project, or the
    /// matched framework requires an entrypoint that could not be located.
    /// A scan with no unambiguous framework match falls through to the
    /// marker-file check and the generic descriptor.
    pub fn detect(
        &self,
        ctx: &ScanContext<'_>,
    ) -> Result<Option<DeploymentDescriptor>, ScanError> {
        for scanner in &self.scanners {
            debug!(scanner = scanner.name(), "running manifest scanner");
            if let Some(cfg) = scanner.scan(ctx)? {
                match DeploymentDescriptor::from_stack(&cfg, ctx.source_dir, ctx.config) {
                    StackOutcome::Built(descriptor) => return Ok(Some(descriptor)),
                    StackOutcome::NoFramework => break,
                    StackOutcome::MissingEntrypoint => return Ok(None),
                }
            }
        }

        if !PYTHON_MARKERS.iter().any(|m| ctx.manifest_exists(m)) {
            debug!("no Python marker files; not a Python project");
            return Ok(None);
        }

        info!("Python project without a usable manifest; generating generic configuration");
        let py_version = ctx.resolve_version()?;
        Ok(Some(DeploymentDescriptor::generic(&py_version)))
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_priority_order() {
        let orchestrator = Orchestrator::new();
        let names: Vec<&str> = orchestrator.scanners.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["poetry", "pep621", "pipenv", "requirements"]);
    }
}
