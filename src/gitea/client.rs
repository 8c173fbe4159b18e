//! Gitea migration client
use std::time::Duration;

use hyper::ext::ReasonPhrase;
use log::debug;
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Response, StatusCode,
};

use super::{config::GiteaConfig, request::MigrationRequest, GITEA_MIGRATE_PATH};
use crate::{
    errors::{MirrorError, MirrorErrorKind},
    platform::{MigrateFuture, Target},
};

/// Gitea client
#[derive(Debug, Clone)]
pub struct GiteaClient {
    /// Gitea base URL, without trailing slash
    url: String,

    /// Gitea token
    token: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl GiteaClient {
    /// Create a new Gitea client, `timeout` in seconds
    /// # Errors
    /// Error if the HTTP client can't be built
    pub fn new(config: &GiteaConfig, timeout: Option<u64>) -> Result<Self, MirrorError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let url = config.url.strip_suffix('/').unwrap_or(&config.url);
        Ok(Self {
            url: url.to_string(),
            token: config.token.clone(),
            client: builder.build()?,
        })
    }

    /// Full URL of the migration endpoint
    pub fn migrate_url(&self) -> String {
        format!("{}{GITEA_MIGRATE_PATH}", self.url)
    }
}

/// Status line as sent by the server, e.g. `409 Conflict`.
///
/// hyper only keeps the reason phrase when it differs from the canonical one.
fn status_line(response: &Response) -> String {
    let status = response.status();
    let reason = response
        .extensions()
        .get::<ReasonPhrase>()
        .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
        .or_else(|| status.canonical_reason());
    match reason {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

impl Target for GiteaClient {
    fn get_remote_url(&self) -> &str {
        &self.url
    }

    fn migrate(&self, request: MigrationRequest) -> MigrateFuture<'_> {
        Box::pin(async move {
            let url = self.migrate_url();
            debug!("POST {url} {:?}", request.redacted());
            let response = self
                .client
                .post(&url)
                .header(AUTHORIZATION, format!("token {}", self.token))
                .header(CONTENT_TYPE, "application/json")
                .json(&request)
                .send()
                .await?;
            if response.status() != StatusCode::CREATED {
                return Err(MirrorError::new(MirrorErrorKind::Server(status_line(
                    &response,
                ))));
            }
            Ok(())
        })
    }
}
