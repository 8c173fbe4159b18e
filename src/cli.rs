//! Command line options for the gitea-mirror tool
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};

use crate::{
    config::MirrorConfig,
    errors::MirrorError,
    gitea::client::GiteaClient,
    migrate::migrate_repos,
    platform::Target,
    repos::{read_repo_list, DEFAULT_REPOS_FILE},
};

/// gitea-mirror - Mirror GitHub repositories into a Gitea organization
#[derive(Parser, Default, Clone, Debug)]
pub struct MirrorCli {
    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File listing one GitHub repository URL per line
    #[arg(short, long, default_value = DEFAULT_REPOS_FILE)]
    pub repos: PathBuf,

    /// Validate the list and show what would be mirrored, without calling Gitea
    #[arg(long)]
    pub dry_run: bool,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl MirrorCli {
    /// Log level matching the verbosity
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Run the gitea-mirror tool with the provided command line options
/// # Errors
/// Error if the configuration or the repository list can't be loaded,
/// failures of single repositories are only logged
pub async fn gitea_mirror_main(args: MirrorCli) -> Result<(), MirrorError> {
    let config_path = MirrorConfig::get_config_path(args.config.clone())?;
    if args.show_config_path {
        println!("{}", config_path.display());
        return Ok(());
    }
    dotenv::dotenv().ok();
    let config = MirrorConfig::load(&config_path, |key| std::env::var(key).ok())?;

    let urls = read_repo_list(&args.repos)?;
    let target = GiteaClient::new(&config.gitea, config.mirror.timeout)?;
    info!(
        "Mirroring {} lines of {} into {}/{}",
        urls.len(),
        args.repos.display(),
        target.get_remote_url(),
        config.gitea.organization
    );
    migrate_repos(&config, &target, &urls, args.dry_run).await;
    Ok(())
}
