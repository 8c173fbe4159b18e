//! Gitea configuration
use serde::{Deserialize, Serialize};

/// Gitea configuration
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GiteaConfig {
    /// Gitea base URL, e.g. `https://gitea.example.com`
    pub url: String,

    /// Gitea token
    pub token: String,

    /// Organization owning the mirrors
    pub organization: String,
}
