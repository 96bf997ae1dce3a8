//! Identity of the running binary

use std::fmt;

use axum::response::Json;
use serde::Serialize;

/// Compile-time build identity, stamped by `build.rs`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    /// `git describe` output; carries a `-dirty` suffix for uncommitted trees
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
}

impl BuildInfo {
    pub const CURRENT: BuildInfo = BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("GIT_HASH"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        build_profile: env!("BUILD_PROFILE"),
    };
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{} [{}] built {} ({})",
            self.version, self.git_hash, self.build_timestamp, self.build_profile
        )
    }
}

/// GET /api/buildinfo
pub async fn get_build_info() -> Json<BuildInfo> {
    Json(BuildInfo::CURRENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_leads_with_version() {
        let line = BuildInfo::CURRENT.to_string();
        assert!(line.starts_with(&format!("v{} [", env!("CARGO_PKG_VERSION"))));
        assert!(line.ends_with(&format!("({})", BuildInfo::CURRENT.build_profile)));
    }
}
