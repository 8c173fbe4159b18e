//! Platform repositories are mirrored into
use std::{future::Future, pin::Pin};

use crate::{errors::MirrorError, gitea::request::MigrationRequest};

/// Future returned by [`Target::migrate`]
pub type MigrateFuture<'a> = Pin<Box<dyn Future<Output = Result<(), MirrorError>> + Send + 'a>>;

/// A platform accepting migration requests
pub trait Target: Sync + Send {
    /// Ask the platform to create the mirror described by `request`
    fn migrate(&self, request: MigrationRequest) -> MigrateFuture<'_>;

    /// Base URL of the platform
    fn get_remote_url(&self) -> &str;
}
