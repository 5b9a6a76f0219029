//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Crate version plus commit, e.g. `0.1.0 (abc1234)`.
pub fn version_string() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), BUILD_COMMIT)
}
