//! Stable grouping and ordering of review records.
//!
//! Groups are keyed by pull request number and emitted highest number first.
//! Within a group, records are ordered newest first by `created_at`; records
//! with equal timestamps keep their input order, and timestamps that do not
//! parse as RFC 3339 sort last.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use super::model::ReviewRecord;

/// Records of one pull request, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewGroup<'a> {
    /// Pull request number shared by every record in the group.
    pub pull_request_number: u64,
    /// Records for the pull request, newest first.
    pub records: Vec<&'a ReviewRecord>,
}

impl<'a> ReviewGroup<'a> {
    /// Returns the most recent record of the group.
    #[must_use]
    pub fn latest(&self) -> Option<&'a ReviewRecord> {
        self.records.first().copied()
    }
}

/// Groups records by pull request number in descending numeric order.
#[must_use]
pub fn group_reviews<'a>(records: &[&'a ReviewRecord]) -> Vec<ReviewGroup<'a>> {
    let mut groups: BTreeMap<u64, Vec<&'a ReviewRecord>> = BTreeMap::new();
    for &record in records {
        groups
            .entry(record.pull_request_number)
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .rev()
        .map(|(pull_request_number, mut group)| {
            group.sort_by(|a, b| compare_newest_first(a, b));
            ReviewGroup {
                pull_request_number,
                records: group,
            }
        })
        .collect()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

/// Compares two records so that the most recent one sorts first.
fn compare_newest_first(a: &ReviewRecord, b: &ReviewRecord) -> Ordering {
    match (parse_timestamp(&a.created_at), parse_timestamp(&b.created_at)) {
        (Some(a_time), Some(b_time)) => b_time.cmp(&a_time),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::group_reviews;
    use crate::reviews::model::ReviewRecord;

    fn record(number: u64, created_at: &str, summary: &str) -> ReviewRecord {
        ReviewRecord {
            pull_request_number: number,
            summary: Some(summary.to_owned()),
            created_at: created_at.to_owned(),
            affected_files: None,
        }
    }

    fn summaries(records: &[&ReviewRecord]) -> Vec<String> {
        records
            .iter()
            .filter_map(|r| r.summary.clone())
            .collect()
    }

    #[rstest]
    fn groups_are_ordered_by_descending_pr_number() {
        let input = [
            record(123, "2025-05-01T12:00:00Z", "a"),
            record(9, "2025-05-01T12:00:00Z", "b"),
            record(456, "2025-05-01T13:00:00Z", "c"),
        ];
        let refs: Vec<&ReviewRecord> = input.iter().collect();

        let numbers: Vec<u64> = group_reviews(&refs)
            .iter()
            .map(|group| group.pull_request_number)
            .collect();

        assert_eq!(numbers, vec![456, 123, 9]);
    }

    #[rstest]
    fn records_within_group_are_newest_first() {
        let input = [
            record(123, "2025-05-01T12:00:00Z", "older"),
            record(123, "2025-05-01T13:00:00Z", "newer"),
        ];
        let refs: Vec<&ReviewRecord> = input.iter().collect();

        let groups = group_reviews(&refs);
        let group = groups.first().expect("one group expected");

        assert_eq!(summaries(&group.records), vec!["newer", "older"]);
        assert_eq!(
            group.latest().and_then(|r| r.summary.as_deref()),
            Some("newer")
        );
    }

    #[rstest]
    fn equal_timestamps_keep_input_order() {
        let input = [
            record(7, "2025-05-01T12:00:00Z", "first"),
            record(7, "2025-05-01T14:00:00+02:00", "second"),
            record(7, "2025-05-01T12:00:00Z", "third"),
        ];
        let refs: Vec<&ReviewRecord> = input.iter().collect();

        let groups = group_reviews(&refs);
        let group = groups.first().expect("one group expected");

        assert_eq!(summaries(&group.records), vec!["first", "second", "third"]);
    }

    #[rstest]
    fn unparseable_timestamps_sort_last() {
        let input = [
            record(7, "yesterday", "unknown"),
            record(7, "2025-05-01T12:00:00Z", "known"),
        ];
        let refs: Vec<&ReviewRecord> = input.iter().collect();

        let groups = group_reviews(&refs);
        let group = groups.first().expect("one group expected");

        assert_eq!(summaries(&group.records), vec!["known", "unknown"]);
    }
}
