//! Supported Python application frameworks

mod fastapi;
mod flask;
mod registry;
mod streamlit;

pub use fastapi::FastApi;
pub use flask::Flask;
pub use registry::{Classification, FrameworkRegistry};
pub use streamlit::Streamlit;

/// A supported application framework, identified by the canonical
/// dependency name that pulls it in.
pub trait Framework: Send + Sync {
    /// Family label used in the deployment descriptor, e.g. "FastAPI".
    fn name(&self) -> &'static str;

    /// Canonical dependency name identifying this framework.
    fn dependency(&self) -> &'static str;

    /// Network port the framework serves on by default.
    fn port(&self) -> u16;

    /// Template variable toggled on when this framework is detected.
    fn template_flag(&self) -> &'static str {
        self.dependency()
    }

    /// Whether descriptor construction requires a located entrypoint file.
    fn needs_entrypoint(&self) -> bool {
        false
    }
}
