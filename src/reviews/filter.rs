//! Selection of review records by pull request number.

use std::fmt;
use std::str::FromStr;

use crate::error::RepoKeeperError;

use super::model::ReviewRecord;

/// Pull request number used to narrow the exported reviews.
///
/// Both the CLI value and the remote record are normalised to `u64`, and
/// matching is exact integer equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestFilter(u64);

impl PullRequestFilter {
    /// Creates a filter for the given pull request number.
    #[must_use]
    pub const fn new(number: u64) -> Self {
        Self(number)
    }

    /// Returns the pull request number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true when `record` belongs to the filtered pull request.
    #[must_use]
    pub const fn matches(self, record: &ReviewRecord) -> bool {
        record.pull_request_number == self.0
    }
}

impl FromStr for PullRequestFilter {
    type Err = RepoKeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| RepoKeeperError::InvalidArgument {
                argument: format!("pull request number must be a non-negative integer: {s}"),
            })
    }
}

impl fmt::Display for PullRequestFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Selects the records matching `filter`, preserving input order.
///
/// Without a filter every record is returned. An empty result is not an
/// error; callers treat it as a no-op.
#[must_use]
pub fn select_reviews(
    records: &[ReviewRecord],
    filter: Option<PullRequestFilter>,
) -> Vec<&ReviewRecord> {
    records
        .iter()
        .filter(|record| filter.is_none_or(|wanted| wanted.matches(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{PullRequestFilter, select_reviews};
    use crate::error::RepoKeeperError;
    use crate::reviews::model::ReviewRecord;

    fn record(number: u64, created_at: &str) -> ReviewRecord {
        ReviewRecord {
            pull_request_number: number,
            summary: Some(format!("summary {number}")),
            created_at: created_at.to_owned(),
            affected_files: None,
        }
    }

    #[fixture]
    fn records() -> Vec<ReviewRecord> {
        vec![
            record(123, "2025-05-01T12:00:00Z"),
            record(456, "2025-05-01T13:00:00Z"),
            record(123, "2025-05-02T09:00:00Z"),
        ]
    }

    #[rstest]
    fn no_filter_returns_everything_in_order(records: Vec<ReviewRecord>) {
        let selected = select_reviews(&records, None);

        let numbers: Vec<u64> = selected.iter().map(|r| r.pull_request_number).collect();
        assert_eq!(numbers, vec![123, 456, 123]);
    }

    #[rstest]
    fn filter_keeps_only_matching_records(records: Vec<ReviewRecord>) {
        let selected = select_reviews(&records, Some(PullRequestFilter::new(123)));

        let timestamps: Vec<&str> = selected.iter().map(|r| r.created_at.as_str()).collect();
        assert_eq!(
            timestamps,
            vec!["2025-05-01T12:00:00Z", "2025-05-02T09:00:00Z"]
        );
    }

    #[rstest]
    fn unmatched_filter_yields_empty_selection(records: Vec<ReviewRecord>) {
        assert!(select_reviews(&records, Some(PullRequestFilter::new(999))).is_empty());
    }

    #[rstest]
    #[case::plain("123", 123)]
    #[case::padded(" 123\n", 123)]
    #[case::leading_zero("0123", 123)]
    fn filter_parses_numeric_strings(#[case] raw: &str, #[case] expected: u64) {
        let filter: PullRequestFilter = raw.parse().expect("filter should parse");

        assert_eq!(filter.get(), expected);
    }

    #[rstest]
    #[case::text("abc")]
    #[case::negative("-1")]
    #[case::fraction("12.5")]
    #[case::blank("")]
    fn filter_rejects_non_numeric_values(#[case] raw: &str) {
        let error = raw
            .parse::<PullRequestFilter>()
            .expect_err("filter should be rejected");

        assert!(matches!(error, RepoKeeperError::InvalidArgument { .. }));
    }
}
