//! pystack - Python project stack detection for container deployment
//!
//! Given an arbitrary source tree, this library determines which
//! dependency-management convention the project uses (poetry, PEP 621,
//! pipenv, or flat requirements files), which supported application
//! framework it targets (FastAPI, Flask, or Streamlit), the Python runtime
//! version it should be deployed with, and whether its dependencies imply
//! object-storage support. The result is a [`DeploymentDescriptor`]
//! consumed by an external template renderer that turns it into
//! containerization artifacts.
//!
//! # Core Concepts
//!
//! - **Manifest scanners**: one per convention, tried in fixed priority
//!   order; the first that applies wins, and malformed manifests abort the
//!   chain instead of falling through
//! - **Canonicalization**: free-form dependency tokens are reduced to bare
//!   lowercase package identifiers before any comparison
//! - **Version resolution**: declared version, then lockfile metadata, then
//!   a live interpreter probe, then a fixed default
//!
//! # Example
//!
//! ```no_run
//! use pystack::{Orchestrator, ScanConfig, ScanContext, SystemProbe};
//! use std::path::Path;
//!
//! fn detect(path: &Path) -> anyhow::Result<()> {
//!     let config = ScanConfig::from_env();
//!     let probe = SystemProbe;
//!     let ctx = ScanContext::new(path, &config, &probe);
//!
//!     if let Some(descriptor) = Orchestrator::new().detect(&ctx)? {
//!         println!("{} on port {}", descriptor.family, descriptor.port);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod deps;
pub mod descriptor;
pub mod entrypoint;
pub mod frameworks;
pub mod runtime;
pub mod scan;
pub mod util;

// Re-export key types for convenient access
pub use config::ScanConfig;
pub use descriptor::{DepStyle, DeploymentDescriptor, RuntimeDescriptor, StackConfig, StackOutcome};
pub use frameworks::{Classification, Framework, FrameworkRegistry};
pub use runtime::{InterpreterProbe, PythonVersion, StaticProbe, SystemProbe};
pub use scan::{ManifestScanner, Orchestrator, ScanContext, ScanError};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
