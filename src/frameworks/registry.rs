//! Framework registry and classification

use super::{FastApi, Flask, Framework, Streamlit};
use tracing::warn;

/// Outcome of scanning a canonical dependency set for supported frameworks.
#[derive(Clone, Copy)]
pub enum Classification<'a> {
    /// No supported framework dependency present.
    None,
    /// Exactly one supported framework matched.
    Match(&'a dyn Framework),
    /// More than one supported framework present; ambiguous.
    Conflict,
}

/// Registry of all supported frameworks.
pub struct FrameworkRegistry {
    frameworks: Vec<Box<dyn Framework>>,
}

impl FrameworkRegistry {
    pub fn new() -> Self {
        Self {
            frameworks: vec![Box::new(FastApi), Box::new(Flask), Box::new(Streamlit)],
        }
    }

    /// Classify a canonical dependency set.
    ///
    /// Zero matches and multiple matches are both non-fatal outcomes,
    /// logged as warnings; the caller falls back or gives up.
    pub fn classify(&self, deps: &[String]) -> Classification<'_> {
        let mut found: Option<&dyn Framework> = None;
        for dep in deps {
            if let Some(framework) = self.get_by_dependency(dep) {
                if found.is_some() {
                    warn!("Multiple supported Python frameworks found");
                    return Classification::Conflict;
                }
                found = Some(framework);
            }
        }
        match found {
            Some(framework) => Classification::Match(framework),
            None => {
                warn!("No supported Python frameworks found");
                Classification::None
            }
        }
    }

    /// Look up a framework by its identifying dependency name.
    pub fn get_by_dependency(&self, dep: &str) -> Option<&dyn Framework> {
        self.frameworks
            .iter()
            .find(|f| f.dependency() == dep)
            .map(|f| f.as_ref())
    }

    /// All registered frameworks.
    pub fn all_frameworks(&self) -> &[Box<dyn Framework>] {
        &self.frameworks
    }
}

impl Default for FrameworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_classify_single_match() {
        let registry = FrameworkRegistry::new();
        let result = registry.classify(&deps(&["requests", "fastapi", "uvicorn"]));
        match result {
            Classification::Match(framework) => {
                assert_eq!(framework.name(), "FastAPI");
                assert_eq!(framework.port(), 8000);
            }
            _ => panic!("expected a single match"),
        }
    }

    #[test]
    fn test_classify_no_match() {
        let registry = FrameworkRegistry::new();
        assert!(matches!(
            registry.classify(&deps(&["requests", "numpy"])),
            Classification::None
        ));
    }

    #[test]
    fn test_classify_conflict() {
        let registry = FrameworkRegistry::new();
        assert!(matches!(
            registry.classify(&deps(&["fastapi", "flask"])),
            Classification::Conflict
        ));
    }

    #[test]
    fn test_classify_empty_set() {
        let registry = FrameworkRegistry::new();
        assert!(matches!(registry.classify(&[]), Classification::None));
    }

    #[test]
    fn test_get_by_dependency() {
        let registry = FrameworkRegistry::new();
        assert_eq!(
            registry.get_by_dependency("streamlit").map(|f| f.port()),
            Some(8501)
        );
        assert!(registry.get_by_dependency("django").is_none());
    }

    #[test]
    fn test_registry_holds_three_frameworks() {
        let registry = FrameworkRegistry::new();
        assert_eq!(registry.all_frameworks().len(), 3);
    }
}
