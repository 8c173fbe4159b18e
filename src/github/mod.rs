//! GitHub, the platform repositories are mirrored from.
pub(crate) mod config;
pub(crate) mod repo;

/// GitHub URL
pub const GITHUB_URL: &str = "github.com";

/// Service identifier Gitea uses for GitHub migrations
pub const GITHUB_SERVICE: &str = "github";
