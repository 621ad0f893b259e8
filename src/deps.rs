//! Dependency token canonicalization
//!
//! Manifest conventions declare dependencies as free-form strings that mix
//! the package identifier with version constraints, extras, and environment
//! markers. Canonicalization reduces any such token to the bare lowercase
//! package identifier so detectors can compare names across conventions.

/// Strip version constraints, extras, and environment markers from a raw
/// dependency token.
///
/// ```
/// use pystack::deps::canonicalize;
///
/// assert_eq!(canonicalize("fastapi>=0.1.0"), "fastapi");
/// assert_eq!(canonicalize("uvicorn[standard]"), "uvicorn");
/// assert_eq!(canonicalize("django>2.1; os_name != 'nt'"), "django");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let mut dep = raw.to_lowercase();
    // Marker and space stripping must run before the operator splits:
    // some constraint spellings combine an operator with a trailing
    // space-separated clause ("pytest < 5.0.0").
    for delimiter in [";", " ", "[", "==", ">", "<", "~="] {
        if let Some(idx) = dep.find(delimiter) {
            dep.truncate(idx);
        }
    }
    dep
}
