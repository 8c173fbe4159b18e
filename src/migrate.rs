//! Mirror a list of repositories, one after the other
use log::{error, info};

use crate::{
    config::MirrorConfig,
    errors::{MigrationOutcome, MirrorError},
    gitea::request::MigrationRequest,
    platform::Target,
};

/// Outcome of a whole run, in input order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Each input line with its outcome
    pub outcomes: Vec<(String, MigrationOutcome)>,

    /// Nothing was sent to the target
    pub dry_run: bool,
}

impl MigrationReport {
    /// Number of lines processed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of repositories registered
    pub fn migrated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_success())
            .count()
    }

    /// Number of lines that failed
    pub fn failed(&self) -> usize {
        self.total() - self.migrated()
    }

    /// One line summary of the run
    pub fn summary(&self) -> String {
        if self.dry_run {
            format!(
                "{} repositories processed, {} would be migrated, {} failed (dry run)",
                self.total(),
                self.migrated(),
                self.failed()
            )
        } else {
            format!(
                "{} repositories processed, {} migrated, {} failed",
                self.total(),
                self.migrated(),
                self.failed()
            )
        }
    }
}

/// Build and send the request for one line
async fn migrate_one(
    config: &MirrorConfig,
    target: &dyn Target,
    url: &str,
    dry_run: bool,
) -> Result<(), MirrorError> {
    let request = MigrationRequest::build(url, config)?;
    if dry_run {
        info!(
            "would migrate {url:?} to {}/{}",
            request.repo_owner, request.repo_name
        );
        return Ok(());
    }
    target.migrate(request).await
}

/// Log message for one line, `None` for a dry-run success
fn outcome_message(url: &str, outcome: &MigrationOutcome, dry_run: bool) -> Option<String> {
    match outcome {
        MigrationOutcome::Success if dry_run => None,
        MigrationOutcome::Success => Some(format!("{url:?} imported")),
        MigrationOutcome::ValidationFailure(e) => {
            Some(format!("unable to create import request for {url:?}: {e}"))
        }
        other => Some(format!("unable to send import request for {url:?}: {other}")),
    }
}

/// Mirror every URL of `urls` into `target`.
///
/// A failing line is logged and skipped, the run always goes through the
/// whole list.
pub async fn migrate_repos<S: AsRef<str>>(
    config: &MirrorConfig,
    target: &dyn Target,
    urls: &[S],
    dry_run: bool,
) -> MigrationReport {
    let mut report = MigrationReport {
        outcomes: Vec::with_capacity(urls.len()),
        dry_run,
    };
    for url in urls {
        let url = url.as_ref();
        let outcome = MigrationOutcome::from(migrate_one(config, target, url, dry_run).await);
        if let Some(message) = outcome_message(url, &outcome, dry_run) {
            if outcome.is_success() {
                info!("{message}");
            } else {
                error!("{message}");
            }
        }
        report.outcomes.push((url.to_string(), outcome));
    }
    info!("{}", report.summary());
    report
}
