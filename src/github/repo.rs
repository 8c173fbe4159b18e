//! Github repository reference parsed from one line of the input list
use super::GITHUB_URL;
use crate::errors::ValidationError;

/// A repository on GitHub, as `https://github.com/<owner>/<name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoGithub<'a> {
    /// The URL exactly as given
    pub clone_url: &'a str,

    /// Repository owner (user or organization)
    pub owner: &'a str,

    /// Repository name
    pub name: &'a str,
}

impl<'a> RepoGithub<'a> {
    /// Parse a repository URL.
    ///
    /// Only `scheme://github.com/owner/repo` is accepted: no trailing slash
    /// and no extra path segment. Anything else after the owner ends up in
    /// the repository name.
    /// # Errors
    /// The first failing check of the validation pipeline
    pub fn parse(url: &'a str) -> Result<Self, ValidationError> {
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        let parts: Vec<&str> = url.split('/').collect();
        let [_scheme, _, host, owner, name] = parts[..] else {
            return Err(ValidationError::MalformedUrl);
        };
        if host != GITHUB_URL {
            return Err(ValidationError::WrongHost);
        }
        if owner.is_empty() {
            return Err(ValidationError::EmptyOwner);
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyRepo);
        }
        Ok(Self {
            clone_url: url,
            owner,
            name,
        })
    }

    /// Name of the mirror on the target, unique across owners
    pub fn mirror_name(&self) -> String {
        format!("{}__{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_valid() {
        let repo = RepoGithub::parse("https://github.com/acme/widgets").unwrap();
        assert_eq!(repo.owner, "acme");
        assert_eq!(repo.name, "widgets");
        assert_eq!(repo.clone_url, "https://github.com/acme/widgets");
        assert_eq!(repo.mirror_name(), "acme__widgets");
    }

    #[test]
    fn empty_url() {
        assert_eq!(RepoGithub::parse(""), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn malformed_urls() {
        for url in [
            "github.com/acme/widgets",
            "https://github.com/acme",
            "https://github.com/acme/widgets/",
            "https://github.com/acme/widgets/tree/main",
            "https://github.com",
            "not a url",
            "/",
        ] {
            assert_eq!(
                RepoGithub::parse(url),
                Err(ValidationError::MalformedUrl),
                "{url}"
            );
        }
    }

    #[test]
    fn lenient_tails_are_kept() {
        // `.git` suffixes and query strings stay inside the repo segment
        let repo = RepoGithub::parse("https://github.com/acme/widgets.git").unwrap();
        assert_eq!(repo.mirror_name(), "acme__widgets.git");
        let repo = RepoGithub::parse("https://github.com/acme/widgets?tab=readme").unwrap();
        assert_eq!(repo.name, "widgets?tab=readme");
    }

    #[test]
    fn wrong_host() {
        for url in [
            "https://gitlab.com/acme/widgets",
            "https://www.github.com/acme/widgets",
            "https://GitHub.com/acme/widgets",
            "https://github.com:443/acme/widgets",
        ] {
            assert_eq!(RepoGithub::parse(url), Err(ValidationError::WrongHost), "{url}");
        }
    }

    #[test]
    fn host_checked_before_owner() {
        assert_eq!(
            RepoGithub::parse("https://gitlab.com//widgets"),
            Err(ValidationError::WrongHost)
        );
    }

    #[test]
    fn empty_segments() {
        assert_eq!(
            RepoGithub::parse("https://github.com//widgets"),
            Err(ValidationError::EmptyOwner)
        );
        assert_eq!(
            RepoGithub::parse("https://github.com/acme/"),
            Err(ValidationError::EmptyRepo)
        );
        assert_eq!(
            RepoGithub::parse("https://github.com//"),
            Err(ValidationError::EmptyOwner)
        );
    }

    #[test]
    fn scheme_is_not_checked() {
        let repo = RepoGithub::parse("git://github.com/acme/widgets").unwrap();
        assert_eq!(repo.mirror_name(), "acme__widgets");
    }
}
