//! Review records returned by the review history service.
//!
//! Types prefixed with `Api` are deserialisation targets that convert into
//! the public domain types.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// A single review event for a pull request.
///
/// Several records may share a pull request number; the number is a grouping
/// key, not an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewRecord {
    /// Pull request the review belongs to.
    #[serde(deserialize_with = "deserialize_pr_number")]
    pub pull_request_number: u64,
    /// Review summary text, when the service produced one.
    #[serde(default)]
    pub summary: Option<String>,
    /// Review timestamp as reported by the service (RFC 3339).
    pub created_at: String,
    /// Files touched by the reviewed change, in service order.
    #[serde(default)]
    pub affected_files: Option<Vec<String>>,
}

impl ReviewRecord {
    /// Returns the summary when it is present and non-empty.
    #[must_use]
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|summary| !summary.is_empty())
    }

    /// Returns the affected files when the list is present and non-empty.
    #[must_use]
    pub fn listed_files(&self) -> Option<&[String]> {
        self.affected_files
            .as_deref()
            .filter(|files| !files.is_empty())
    }
}

/// Response envelope of the review history endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiReviewHistory {
    #[serde(default)]
    pub(crate) reviews: Option<Vec<ReviewRecord>>,
}

impl From<ApiReviewHistory> for Vec<ReviewRecord> {
    fn from(value: ApiReviewHistory) -> Self {
        value.reviews.unwrap_or_default()
    }
}

/// Accepts pull request numbers encoded as JSON integers or numeric strings.
fn deserialize_pr_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct PrNumberVisitor;

    impl Visitor<'_> for PrNumberVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a pull request number as an integer or numeric string")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
            u64::try_from(value).map_err(|_| E::custom("pull request number must not be negative"))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
            value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid pull request number '{value}'")))
        }
    }

    deserializer.deserialize_any(PrNumberVisitor)
}
