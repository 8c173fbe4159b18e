//! Gitea, the platform repositories are mirrored into.
pub(crate) mod client;
pub(crate) mod config;
pub(crate) mod request;

/// Migration endpoint, relative to the Gitea base URL
const GITEA_MIGRATE_PATH: &str = "/api/v1/repos/migrate";
