//! Error handling for the gitea-mirror crate.
use std::{error::Error as StdError, fmt};

/// Error type for the gitea-mirror crate.
#[derive(Debug)]
pub struct MirrorError {
    /// Inner error.
    inner: Box<Inner>,
}

impl MirrorError {
    /// Create a new error.
    pub(crate) fn new(kind: MirrorErrorKind) -> Self {
        Self {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    /// Create a new error with a source.
    pub(crate) fn new_with_source<E>(kind: MirrorErrorKind, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            inner: Box::new(Inner {
                kind,
                source: Some(source.into()),
            }),
        }
    }

    /// Attach a text message as the error source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text.to_string())));
        self
    }

    /// Kind of the error
    pub fn kind(&self) -> &MirrorErrorKind {
        &self.inner.kind
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the gitea-mirror crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: MirrorErrorKind,

    /// Source error.
    source: Option<BoxError>,
}

/// Error kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorErrorKind {
    /// Missing or invalid configuration, fatal before any URL is processed.
    Config,

    /// Error reading a file.
    Io,

    /// A repository URL was rejected by the request builder.
    Validation(ValidationError),

    /// Network-level failure talking to the target.
    Transport,

    /// The target answered with something other than `201 Created`.
    Server(String),
}

impl fmt::Display for MirrorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            MirrorErrorKind::Validation(e) => write!(f, "{e}")?,
            MirrorErrorKind::Server(status) => write!(f, "wrong status {status}")?,
            kind => write!(f, "{kind:?}")?,
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for MirrorError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<ValidationError> for MirrorError {
    fn from(e: ValidationError) -> Self {
        Self::new(MirrorErrorKind::Validation(e))
    }
}

impl From<reqwest::Error> for MirrorError {
    fn from(e: reqwest::Error) -> Self {
        Self::new_with_source(MirrorErrorKind::Transport, e)
    }
}

impl From<std::io::Error> for MirrorError {
    fn from(e: std::io::Error) -> Self {
        Self::new_with_source(MirrorErrorKind::Io, e)
    }
}

impl From<toml::de::Error> for MirrorError {
    fn from(e: toml::de::Error) -> Self {
        Self::new_with_source(MirrorErrorKind::Config, e)
    }
}

impl From<&str> for MirrorError {
    fn from(text: &str) -> Self {
        Self::new(MirrorErrorKind::Config).with_text(text)
    }
}

/// Reasons a source repository URL is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The line is empty (e.g. the trailing newline of the list)
    EmptyUrl,

    /// The URL does not split into exactly `scheme://host/owner/repo`
    MalformedUrl,

    /// The host is not the source platform
    WrongHost,

    /// The owner segment is empty
    EmptyOwner,

    /// The repository segment is empty
    EmptyRepo,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ValidationError::EmptyUrl => "empty repo url",
            ValidationError::MalformedUrl => "malformed github url",
            ValidationError::WrongHost => "not a github url",
            ValidationError::EmptyOwner => "empty owner name",
            ValidationError::EmptyRepo => "empty repo name",
        };
        f.write_str(reason)
    }
}

impl StdError for ValidationError {}

/// Result of processing one line of the repository list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The target answered `201 Created`
    Success,

    /// The line was rejected before anything was sent
    ValidationFailure(ValidationError),

    /// The request never got a response
    TransportFailure(String),

    /// The target answered with another status line
    RejectedByServer(String),
}

impl MigrationOutcome {
    /// Whether the repository was registered
    pub fn is_success(&self) -> bool {
        matches!(self, MigrationOutcome::Success)
    }
}

impl From<Result<(), MirrorError>> for MigrationOutcome {
    fn from(result: Result<(), MirrorError>) -> Self {
        let err = match result {
            Ok(()) => return MigrationOutcome::Success,
            Err(err) => err,
        };
        match err.kind() {
            MirrorErrorKind::Validation(e) => MigrationOutcome::ValidationFailure(*e),
            MirrorErrorKind::Server(status) => MigrationOutcome::RejectedByServer(status.clone()),
            _ => MigrationOutcome::TransportFailure(err.to_string()),
        }
    }
}

impl fmt::Display for MigrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationOutcome::Success => write!(f, "imported"),
            MigrationOutcome::ValidationFailure(e) => write!(f, "{e}"),
            MigrationOutcome::TransportFailure(e) => write!(f, "{e}"),
            MigrationOutcome::RejectedByServer(status) => write!(f, "wrong status {status}"),
        }
    }
}
