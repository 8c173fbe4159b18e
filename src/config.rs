//! Configuration handling
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use home::home_dir;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    errors::{MirrorError, MirrorErrorKind},
    gitea::config::GiteaConfig,
    github::config::GithubConfig,
};

/// Config file looked up in the working directory
const LOCAL_CONFIG_FILE: &str = "application.toml";

/// Default mirror interval, in Go duration notation as Gitea expects it
pub const DEFAULT_MIRROR_INTERVAL: &str = "24h0m0s";

/// Configuration data
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq)]
pub struct MirrorConfig {
    /// Source platform configuration
    #[serde(default)]
    pub github: GithubConfig,

    /// Target platform configuration
    #[serde(default)]
    pub gitea: GiteaConfig,

    /// Options copied into every migration request
    #[serde(default)]
    pub mirror: MirrorOptions,
}

/// Mirroring options
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MirrorOptions {
    /// How often Gitea re-syncs the mirror
    pub interval: String,

    /// Create the mirrors as private repositories
    pub private: bool,

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

    /// Per-request timeout in seconds, transport default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_MIRROR_INTERVAL.to_string(),
            private: false,
            issues: false,
            labels: false,
            lfs: false,
            milestones: false,
            pull_requests: false,
            releases: false,
            wiki: false,
            timeout: None,
        }
    }
}

impl MirrorConfig {
    /// Parse configuration from a TOML string
    /// # Errors
    /// Error if the TOML is invalid
    pub fn from_toml(contents: &str) -> Result<Self, MirrorError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a file
    /// # Errors
    /// Error if the file can't be read or parsed
    pub fn from_path(path: &Path) -> Result<Self, MirrorError> {
        let contents = read_to_string(path).map_err(|e| {
            MirrorError::new(MirrorErrorKind::Io)
                .with_text(&format!("unable to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&contents)
    }

    /// Load the file at `path`, override it with `lookup` and validate it
    /// # Errors
    /// Error if the file can't be read or parsed, or a required value is missing
    pub fn load(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, MirrorError> {
        let mut config = Self::from_path(path)?;
        config.apply_env_with(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Override values with `GITHUB_TOKEN`, `GITEA_TOKEN`, `GITEA_URL` and
    /// `GITEA_ORGANIZATION` taken from `lookup`, ignoring empty values
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        if let Some(token) = get("GITHUB_TOKEN") {
            self.github.token = token;
        }
        if let Some(token) = get("GITEA_TOKEN") {
            self.gitea.token = token;
        }
        if let Some(url) = get("GITEA_URL") {
            self.gitea.url = url;
        }
        if let Some(organization) = get("GITEA_ORGANIZATION") {
            self.gitea.organization = organization;
        }
    }

    /// Check everything the target needs is present
    /// # Errors
    /// Error naming the first missing or invalid value
    pub fn validate(&self) -> Result<(), MirrorError> {
        if self.gitea.token.is_empty() {
            return Err("empty gitea token".into());
        }
        if self.gitea.url.is_empty() {
            return Err("empty gitea url".into());
        }
        if self.gitea.organization.is_empty() {
            return Err("empty gitea organization".into());
        }
        let url = Url::parse(&self.gitea.url).map_err(|e| {
            MirrorError::new(MirrorErrorKind::Config)
                .with_text(&format!("invalid gitea url '{}': {e}", self.gitea.url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(MirrorError::new(MirrorErrorKind::Config)
                .with_text(&format!("unsupported gitea url scheme '{}'", url.scheme())));
        }
        Ok(())
    }

    /// Get the path to the config file
    ///
    /// Uses `custom` when given, then `./application.toml`, then
    /// `~/.config/gitea-mirror/config.toml`
    /// # Errors
    /// Error if the home directory can't be found
    pub fn get_config_path(custom: Option<PathBuf>) -> Result<PathBuf, MirrorError> {
        if let Some(path) = custom {
            return Ok(path);
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Ok(local);
        }
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err("Unable to get your home dir! home::home_dir() isn't working".into()),
        };
        Ok(home_dir
            .join(".config")
            .join("gitea-mirror")
            .join("config.toml"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn valid_config() -> MirrorConfig {
        let mut config = MirrorConfig::default();
        config.gitea.token = "gitea-token".to_string();
        config.gitea.url = "https://gitea.example.com".to_string();
        config.gitea.organization = "mirrors".to_string();
        config
    }

    #[test]
    fn parse_full_config() {
        let config = MirrorConfig::from_toml(
            r#"
            [github]
            token = "gh"

            [gitea]
            token = "gt"
            url = "https://gitea.example.com"
            organization = "mirrors"

            [mirror]
            interval = "8h0m0s"
            private = true
            wiki = true
            timeout = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.github.token, "gh");
        assert_eq!(config.gitea.organization, "mirrors");
        assert_eq!(config.mirror.interval, "8h0m0s");
        assert!(config.mirror.private);
        assert!(config.mirror.wiki);
        assert!(!config.mirror.issues);
        assert_eq!(config.mirror.timeout, Some(30));
        config.validate().unwrap();
    }

    #[test]
    fn mirror_defaults() {
        let config = MirrorConfig::from_toml("[gitea]\ntoken = \"t\"\n").unwrap();
        assert_eq!(config.mirror, MirrorOptions::default());
        assert_eq!(config.mirror.interval, DEFAULT_MIRROR_INTERVAL);
        assert_eq!(config.mirror.timeout, None);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = MirrorConfig::from_toml("[gitea\n").unwrap_err();
        assert_eq!(err.kind(), &MirrorErrorKind::Config);
    }

    #[test]
    fn validate_missing_values() {
        let mut config = valid_config();
        config.gitea.token.clear();
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Config: empty gitea token"
        );

        let mut config = valid_config();
        config.gitea.url.clear();
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Config: empty gitea url"
        );

        let mut config = valid_config();
        config.gitea.organization.clear();
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Config: empty gitea organization"
        );
    }

    #[test]
    fn validate_gitea_url() {
        let mut config = valid_config();
        config.gitea.url = "gitea.example.com".to_string();
        assert_eq!(config.validate().unwrap_err().kind(), &MirrorErrorKind::Config);

        config.gitea.url = "ftp://gitea.example.com".to_string();
        assert_eq!(config.validate().unwrap_err().kind(), &MirrorErrorKind::Config);

        config.gitea.url = "http://localhost:3000/".to_string();
        config.validate().unwrap();
    }

    #[test]
    fn github_token_is_optional() {
        let config = valid_config();
        assert!(config.github.token.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn env_overrides() {
        let mut config = valid_config();
        config.apply_env_with(|key| match key {
            "GITHUB_TOKEN" => Some("from-env".to_string()),
            "GITEA_URL" => Some(String::new()),
            "GITEA_ORGANIZATION" => Some("other".to_string()),
            _ => None,
        });
        assert_eq!(config.github.token, "from-env");
        assert_eq!(config.gitea.token, "gitea-token");
        assert_eq!(config.gitea.url, "https://gitea.example.com");
        assert_eq!(config.gitea.organization, "other");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[gitea]\ntoken = \"t\"\nurl = \"http://localhost:3000\"\norganization = \"o\""
        )
        .unwrap();
        let path = file.path().to_path_buf();
        let config = MirrorConfig::from_path(&path).unwrap();
        config.validate().unwrap();
        assert_eq!(
            MirrorConfig::get_config_path(Some(path.clone())).unwrap(),
            path
        );
    }

    #[test]
    fn load_requires_gitea_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[gitea]\nurl = \"http://localhost:3000\"\norganization = \"o\"\n",
        )
        .unwrap();

        let err = MirrorConfig::load(&path, |_| None).unwrap_err();
        assert_eq!(err.to_string(), "Config: empty gitea token");

        let config = MirrorConfig::load(&path, |key| {
            (key == "GITEA_TOKEN").then(|| "from-env".to_string())
        })
        .unwrap();
        assert_eq!(config.gitea.token, "from-env");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MirrorConfig::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert_eq!(err.kind(), &MirrorErrorKind::Io);
    }
}
