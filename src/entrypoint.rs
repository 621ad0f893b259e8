//! Entrypoint location for frameworks launched by file path
//!
//! Walks the whole source tree looking for a Python file that imports the
//! target dependency. The walk is lexicographic and never short-circuits:
//! every qualifying file overwrites the previous result, so the last match
//! in walk order wins. This mirrors the long-standing scanner behavior that
//! downstream templates depend on.

use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the Python file that imports `dep`, relative to `source_dir`.
///
/// Paths containing `venv_marker` are skipped. A line qualifies when it
/// contains both `import` and the dependency name. Returns `None` when no
/// file in the tree qualifies.
pub fn find_entrypoint(source_dir: &Path, dep: &str, venv_marker: &str) -> Option<PathBuf> {
    let mut entrypoint = None;

    let mut builder = WalkBuilder::new(source_dir);
    builder
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b));

    for entry in builder.build().flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("py")
            || path.to_string_lossy().contains(venv_marker)
        {
            continue;
        }
        let Ok(contents) = fs::read_to_string(path) else {
            continue;
        };
        if contents
            .lines()
            .any(|line| line.contains("import") && line.contains(dep))
        {
            debug!(path = %path.display(), "entrypoint candidate");
            entrypoint = Some(
                path.strip_prefix(source_dir)
                    .unwrap_or(path)
                    .to_path_buf(),
            );
        }
    }

    entrypoint
}
