//! Gitea migration request
use serde::Serialize;

use crate::{
    config::MirrorConfig,
    errors::ValidationError,
    github::{repo::RepoGithub, GITHUB_SERVICE},
};

/// Body of `POST /api/v1/repos/migrate`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    /// Token Gitea uses to read the source
    pub auth_token: String,

    /// Source URL, verbatim
    pub clone_addr: String,

    /// Source service identifier
    pub service: String,

    /// Always true: a pull mirror, not a one-shot import
    pub mirror: bool,

    /// Re-sync interval
    pub mirror_interval: String,

    /// Visibility of the mirror
    pub private: bool,

    /// `<owner>__<repo>`
    pub repo_name: String,

    /// Target organization
    pub repo_owner: String,

    /// Migrate issues
    pub issues: bool,

    /// Migrate labels
    pub labels: bool,

    /// Migrate LFS objects
    pub lfs: bool,

    /// Migrate milestones
    pub milestones: bool,

    /// Migrate pull requests
    pub pull_requests: bool,

    /// Migrate releases
    pub releases: bool,

    /// Migrate the wiki
    pub wiki: bool,
}

impl MigrationRequest {
    /// Build the request mirroring `url` into the configured organization
    /// # Errors
    /// Why `url` can't be mirrored
    pub fn build(url: &str, config: &MirrorConfig) -> Result<Self, ValidationError> {
        let repo = RepoGithub::parse(url)?;
        let options = &config.mirror;
        Ok(Self {
            auth_token: config.github.token.clone(),
            clone_addr: repo.clone_url.to_string(),
            service: GITHUB_SERVICE.to_string(),
            mirror: true,
            mirror_interval: options.interval.clone(),
            private: options.private,
            repo_name: repo.mirror_name(),
            repo_owner: config.gitea.organization.clone(),
            issues: options.issues,
            labels: options.labels,
            lfs: options.lfs,
            milestones: options.milestones,
            pull_requests: options.pull_requests,
            releases: options.releases,
            wiki: options.wiki,
        })
    }

    /// Copy safe to log, with the source token masked
    pub fn redacted(&self) -> Self {
        let mut request = self.clone();
        if !request.auth_token.is_empty() {
            request.auth_token = "***".to_string();
        }
        request
    }
}
