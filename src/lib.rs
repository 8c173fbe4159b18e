//! # gitea-mirror
//!
//! Register GitHub repositories as pull mirrors in a Gitea organization
//!
//! ## Usage
//!
//! ```txt
//! Usage: gitea-mirror [OPTIONS]
//!
//! Options:
//!   -c, --config <CONFIG>   Custom configuration file path
//!   -r, --repos <REPOS>     File listing one GitHub repository URL per line [default: repos.txt]
//!       --dry-run           Validate the list and show what would be mirrored, without calling Gitea
//!       --show-config-path  Show the current config path
//!   -v, --verbose...        Verbose mode (-v, -vv)
//!   -h, --help              Print help
//! ```
//!
//! Every line of the list is handled on its own: a rejected URL or a failed
//! request is logged and the next line is processed.

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::missing_docs_in_private_items))]
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod migrate;
pub(crate) mod platform;
pub(crate) mod repos;

mod gitea;
mod github;

pub use cli::{gitea_mirror_main, MirrorCli};
pub use config::{MirrorConfig, MirrorOptions, DEFAULT_MIRROR_INTERVAL};
pub use errors::{MigrationOutcome, MirrorError, MirrorErrorKind, ValidationError};
pub use gitea::{client::GiteaClient, config::GiteaConfig, request::MigrationRequest};
pub use github::{config::GithubConfig, repo::RepoGithub, GITHUB_SERVICE, GITHUB_URL};
pub use migrate::{migrate_repos, MigrationReport};
pub use platform::{MigrateFuture, Target};
pub use repos::{read_repo_list, split_repo_list, DEFAULT_REPOS_FILE};
