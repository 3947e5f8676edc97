//! Repository identity wrappers.

use std::fmt;
use std::str::FromStr;

use crate::error::RepoKeeperError;

/// Accepts a non-empty owner or name made of ASCII alphanumerics, `.`, `-`
/// and `_`, excluding the relative components `.` and `..`.
fn validate_segment(value: &str, raw: &str) -> Result<String, RepoKeeperError> {
    let allowed = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_'));
    if value.is_empty() || !allowed || matches!(value, "." | "..") {
        return Err(RepoKeeperError::InvalidRepository(raw.to_owned()));
    }
    Ok(value.to_owned())
}

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    fn new(value: &str, raw: &str) -> Result<Self, RepoKeeperError> {
        validate_segment(value, raw).map(Self)
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    fn new(value: &str, raw: &str) -> Result<Self, RepoKeeperError> {
        validate_segment(value, raw).map(Self)
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A GitHub repository identified as `owner/repo`.
///
/// # Example
///
/// ```
/// use repokeeper::RepositorySlug;
///
/// let slug = RepositorySlug::parse("octocat/hello-world").expect("valid slug");
/// assert_eq!(slug.owner().as_str(), "octocat");
/// assert_eq!(slug.to_string(), "octocat/hello-world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    owner: RepositoryOwner,
    name: RepositoryName,
}

impl RepositorySlug {
    /// Parses an `owner/repo` identifier, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::InvalidRepository`] when either segment is
    /// empty, contains characters outside `[A-Za-z0-9._-]`, is `.` or `..`,
    /// or when more than two segments are present.
    pub fn parse(raw: &str) -> Result<Self, RepoKeeperError> {
        let trimmed = raw.trim();
        let mut segments = trimmed.split('/');
        let (Some(owner), Some(name), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Err(RepoKeeperError::InvalidRepository(raw.to_owned()));
        };

        Ok(Self {
            owner: RepositoryOwner::new(owner, raw)?,
            name: RepositoryName::new(name, raw)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn name(&self) -> &RepositoryName {
        &self.name
    }
}

impl FromStr for RepositorySlug {
    type Err = RepoKeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner.as_str(), self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::RepositorySlug;
    use crate::error::RepoKeeperError;

    #[rstest]
    fn parses_owner_and_name() {
        let slug = RepositorySlug::parse(" octocat/hello-world ").expect("slug should parse");

        assert_eq!(slug.owner().as_str(), "octocat");
        assert_eq!(slug.name().as_str(), "hello-world");
        assert_eq!(slug.to_string(), "octocat/hello-world");
    }

    #[rstest]
    #[case::no_separator("octocat")]
    #[case::empty_owner("/hello-world")]
    #[case::empty_name("octocat/")]
    #[case::too_many_segments("octocat/hello/world")]
    #[case::blank("")]
    #[case::query_delimiter("octo/wid?gets")]
    #[case::fragment_delimiter("octo/wid#gets")]
    #[case::parent_name("octo/..")]
    #[case::current_owner("./widgets")]
    #[case::inner_space("octo/wid gets")]
    #[case::percent_escape("octo/wid%2Fgets")]
    #[case::non_ascii("octo/widgé")]
    fn rejects_malformed_identifiers(#[case] raw: &str) {
        let error = RepositorySlug::parse(raw).expect_err("identifier should be rejected");

        assert_eq!(error, RepoKeeperError::InvalidRepository(raw.to_owned()));
    }

    #[rstest]
    #[case::dotted_name("octo/widgets.js")]
    #[case::underscored_owner("octo_org/widgets")]
    #[case::dot_prefixed_name("octo/.github")]
    fn accepts_github_name_characters(#[case] raw: &str) {
        let slug = RepositorySlug::parse(raw).expect("slug should parse");

        assert_eq!(slug.to_string(), raw);
    }
}
