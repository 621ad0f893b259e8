//! Stack configuration and deployment descriptor schema
//!
//! A [`StackConfig`] is the normalized result of reading one manifest
//! convention; a [`DeploymentDescriptor`] is the terminal, write-once value
//! handed to the template renderer. Both live and die inside a single
//! detection call.

use crate::config::ScanConfig;
use crate::deps::canonicalize;
use crate::entrypoint::find_entrypoint;
use crate::frameworks::{Classification, FrameworkRegistry};
use crate::runtime::PythonVersion;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::path::Path;

/// Dependency identifiers that imply object-storage support.
const OBJECT_STORAGE_CLIENTS: [&str; 2] = ["boto3", "boto"];

const GENERIC_PORT: u16 = 8080;

/// Dependency management convention detected for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepStyle {
    Poetry,
    Pep621,
    Pipenv,
    Pip,
}

impl DepStyle {
    /// Template variable toggled on for this style.
    pub fn template_flag(self) -> &'static str {
        match self {
            DepStyle::Poetry => "poetry",
            DepStyle::Pep621 => "pep621",
            DepStyle::Pipenv => "pipenv",
            DepStyle::Pip => "pip",
        }
    }
}

/// Normalized result of reading one manifest convention.
///
/// Built by exactly one scanner per successful run; immutable afterwards.
#[derive(Debug, Clone)]
pub struct StackConfig {
    py_version: PythonVersion,
    app_name: String,
    deps: Vec<String>,
    dep_style: DepStyle,
}

impl StackConfig {
    /// Build a config from raw dependency tokens. Tokens are canonicalized
    /// and deduplicated, preserving first-seen order.
    pub fn new<I, S>(
        py_version: PythonVersion,
        app_name: impl Into<String>,
        raw_deps: I,
        dep_style: DepStyle,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut deps = Vec::new();
        for raw in raw_deps {
            let dep = canonicalize(raw.as_ref());
            if seen.insert(dep.clone()) {
                deps.push(dep);
            }
        }
        Self {
            py_version,
            app_name: app_name.into(),
            deps,
            dep_style,
        }
    }

    pub fn python_version(&self) -> &PythonVersion {
        &self.py_version
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Canonical dependency names, first-seen order.
    pub fn deps(&self) -> &[String] {
        &self.deps
    }

    pub fn dep_style(&self) -> DepStyle {
        self.dep_style
    }

    pub fn has_dep(&self, name: &str) -> bool {
        self.deps.iter().any(|d| d == name)
    }
}

/// Runtime section of the deployment descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeDescriptor {
    pub language: String,
    pub version: String,
    pub pinned: bool,
}

impl RuntimeDescriptor {
    pub fn python(version: &PythonVersion) -> Self {
        Self {
            language: "python".to_string(),
            version: version.version.clone(),
            pinned: version.pinned,
        }
    }
}

/// Terminal output of a detection: everything the template renderer needs
/// to produce containerization artifacts for one source tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentDescriptor {
    /// Key-value mapping consumed by the template renderer.
    pub template_vars: Map<String, Value>,
    /// Family label, e.g. "FastAPI".
    pub family: String,
    /// Network port the application serves on.
    pub port: u16,
    /// True when the dependency set implies an object-storage client.
    pub object_storage: bool,
    pub runtime: RuntimeDescriptor,
    /// Follow-up guidance for configurations needing manual review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Outcome of descriptor construction for a scanned stack.
pub enum StackOutcome {
    /// Descriptor built for a uniquely classified framework.
    Built(DeploymentDescriptor),
    /// Zero or conflicting framework matches; non-fatal, the caller falls
    /// back to the generic path.
    NoFramework,
    /// A framework requiring an entrypoint had none; the source tree
    /// stays undescribed, with no fallback.
    MissingEntrypoint,
}

impl DeploymentDescriptor {
    /// Build the descriptor for a classified stack.
    pub fn from_stack(
        cfg: &StackConfig,
        source_dir: &Path,
        config: &ScanConfig,
    ) -> StackOutcome {
        let registry = FrameworkRegistry::new();
        let framework = match registry.classify(cfg.deps()) {
            Classification::Match(framework) => framework,
            Classification::None | Classification::Conflict => return StackOutcome::NoFramework,
        };

        let mut vars = Map::new();
        vars.insert("pyVersion".into(), json!(cfg.python_version().version));
        vars.insert("appName".into(), json!(cfg.app_name()));
        vars.insert(cfg.dep_style().template_flag().into(), json!(true));
        vars.insert(framework.template_flag().into(), json!(true));

        if framework.needs_entrypoint() {
            let Some(entrypoint) =
                find_entrypoint(source_dir, framework.dependency(), &config.venv_marker)
            else {
                return StackOutcome::MissingEntrypoint;
            };
            vars.insert("entrypoint".into(), json!(entrypoint.to_string_lossy()));
        }

        let object_storage = OBJECT_STORAGE_CLIENTS.iter().any(|c| cfg.has_dep(c));

        StackOutcome::Built(Self {
            template_vars: vars,
            family: framework.name().to_string(),
            port: framework.port(),
            object_storage,
            runtime: RuntimeDescriptor::python(cfg.python_version()),
            notes: None,
        })
    }

    /// Generic descriptor for trees carrying Python markers but no stack
    /// configuration any scanner could produce.
    pub fn generic(py_version: &PythonVersion) -> Self {
        let mut vars = Map::new();
        vars.insert("pyVersion".into(), json!(py_version.version));

        Self {
            template_vars: vars,
            family: "Python".to_string(),
            port: GENERIC_PORT,
            object_storage: false,
            runtime: RuntimeDescriptor::python(py_version),
            notes: Some(
                "No supported framework detected; review the generated configuration before deploying."
                    .to_string(),
            ),
        }
    }
}
