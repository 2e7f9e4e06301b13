//! Version string logged at startup.

/// Returns the package version followed by the commit it was built from,
/// e.g. `0.1.0 (a1b2c3d)` or `0.1.0 (a1b2c3d, modified)`.
#[must_use]
pub fn build_version() -> String {
    format_version(
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA"),
        option_env!("VERGEN_GIT_DIRTY"),
    )
}

// Builds outside a git checkout have no commit to report.
fn format_version(pkg_version: &str, sha: Option<&str>, dirty: Option<&str>) -> String {
    match (sha, dirty) {
        (Some(sha), Some("true")) => format!("{pkg_version} ({sha}, modified)"),
        (Some(sha), _) => format!("{pkg_version} ({sha})"),
        (None, _) => format!("{pkg_version} (no git info)"),
    }
}
