//! Manifest scanners and the detection chain
//!
//! Each dependency-management convention gets one [`ManifestScanner`]. A
//! scanner answers one of three ways: `Ok(None)` - its files are not
//! present, try the next one; `Ok(Some(_))` - the convention applies and
//! produced a stack configuration; `Err(_)` - the convention's files exist
//! but are malformed, abort the whole chain.

mod orchestrator;
mod pep621;
mod pipenv;
mod poetry;
mod requirements;

pub use orchestrator::Orchestrator;
pub use pep621::Pep621Scanner;
pub use pipenv::PipenvScanner;
pub use poetry::PoetryScanner;
pub use requirements::RequirementsScanner;

use crate::config::ScanConfig;
use crate::descriptor::StackConfig;
use crate::runtime::{self, InterpreterProbe, PythonVersion};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Hard errors: a manifest convention was positively identified but its
/// files are unusable. These abort the detection chain; "does not apply"
/// is expressed as `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No dependencies found in {manifest}")]
    NoDependencies { manifest: &'static str },

    #[error("No python version requirement found in pyproject.toml")]
    NoPythonRequirement,

    #[error("Could not find Python version")]
    VersionNotFound,
}

/// Inputs shared by every scanner: the source tree under inspection, the
/// run configuration, and the interpreter probe. The source directory is
/// threaded explicitly; no scanner consults the process working directory.
pub struct ScanContext<'a> {
    pub source_dir: &'a Path,
    pub config: &'a ScanConfig,
    pub probe: &'a dyn InterpreterProbe,
}

impl<'a> ScanContext<'a> {
    pub fn new(
        source_dir: &'a Path,
        config: &'a ScanConfig,
        probe: &'a dyn InterpreterProbe,
    ) -> Self {
        Self {
            source_dir,
            config,
            probe,
        }
    }

    /// Application name used when no manifest declares one.
    pub fn dir_name(&self) -> String {
        self.source_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "app".to_string())
    }

    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.source_dir.join(name)
    }

    pub fn manifest_exists(&self, name: &str) -> bool {
        self.manifest_path(name).is_file()
    }

    pub(crate) fn read_manifest(&self, name: &'static str) -> Result<String, ScanError> {
        fs::read_to_string(self.manifest_path(name)).map_err(|source| ScanError::Io {
            path: self.manifest_path(name),
            source,
        })
    }

    pub(crate) fn parse_manifest<T: serde::de::DeserializeOwned>(
        &self,
        name: &'static str,
    ) -> Result<T, ScanError> {
        let doc = self.read_manifest(name)?;
        toml::from_str(&doc).map_err(|source| ScanError::Parse {
            path: self.manifest_path(name),
            source,
        })
    }

    /// Resolve the runtime version for scanners whose manifests do not
    /// declare one.
    pub(crate) fn resolve_version(&self) -> Result<PythonVersion, ScanError> {
        runtime::resolve(self.source_dir, self.config, self.probe)
    }
}

/// One dependency-management convention.
pub trait ManifestScanner: Send + Sync {
    fn name(&self) -> &'static str;

    /// Read the convention's manifests out of the source tree.
    ///
    /// `Ok(None)` when the convention's files are not present; `Err` when
    /// they are present but malformed or missing required data.
    fn scan(&self, ctx: &ScanContext<'_>) -> Result<Option<StackConfig>, ScanError>;
}

/// Subset of pyproject.toml read by the poetry and PEP 621 scanners.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PyProjectToml {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub tool: ToolSection,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProjectSection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
    #[serde(default, rename = "requires-python")]
    pub requires_python: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ToolSection {
    #[serde(default)]
    pub poetry: PoetrySection,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PoetrySection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dependencies: Option<toml::Table>,
}
