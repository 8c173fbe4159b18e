//! Github configuration
use serde::{Deserialize, Serialize};

/// Github configuration
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GithubConfig {
    /// Github token handed to Gitea so it can read the source repository
    pub token: String,
}
