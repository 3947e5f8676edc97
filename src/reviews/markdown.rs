//! Markdown rendering of review summaries.
//!
//! Rendering is pure: the same records always produce the same text, except
//! for the generation timestamp of the consolidated document, which callers
//! pass in explicitly.

use std::fmt::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};

use super::model::ReviewRecord;
use super::ordering::group_reviews;

/// Placeholder emitted when a review has no summary text.
pub const NO_SUMMARY_PLACEHOLDER: &str = "_No summary available._";

/// Title of the consolidated document.
pub const CONSOLIDATED_TITLE: &str = "# CodeRabbit Review Summaries";

/// Renders a single review as a standalone Markdown document.
#[must_use]
pub fn format_individual(record: &ReviewRecord) -> String {
    render(|output| write_individual(output, record))
}

/// Renders every record into one document grouped by pull request.
///
/// Groups appear in descending pull request order and records within a group
/// newest first. Each record ends with a horizontal rule.
#[must_use]
pub fn format_consolidated(records: &[&ReviewRecord], generated_at: DateTime<Utc>) -> String {
    render(|output| write_consolidated(output, records, generated_at))
}

fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut output = String::new();
    // Formatting into a `String` never fails.
    match write(&mut output) {
        Ok(()) | Err(fmt::Error) => output,
    }
}

fn write_individual<W: Write>(output: &mut W, record: &ReviewRecord) -> fmt::Result {
    writeln!(
        output,
        "# CodeRabbit Review Summary \u{2013} PR #{}",
        record.pull_request_number
    )?;
    writeln!(output)?;
    writeln!(output, "**Date:** {}", record.created_at)?;
    writeln!(output)?;
    writeln!(output, "---")?;
    writeln!(output)?;
    writeln!(output, "{}", summary_or_placeholder(record))
}

fn write_consolidated<W: Write>(
    output: &mut W,
    records: &[&ReviewRecord],
    generated_at: DateTime<Utc>,
) -> fmt::Result {
    writeln!(output, "{CONSOLIDATED_TITLE}")?;
    writeln!(output)?;
    writeln!(
        output,
        "_Generated: {}_",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(output)?;

    for group in group_reviews(records) {
        writeln!(output, "## PR #{}", group.pull_request_number)?;
        writeln!(output)?;
        for record in group.records {
            write_review_section(output, record)?;
        }
    }

    Ok(())
}

fn write_review_section<W: Write>(output: &mut W, record: &ReviewRecord) -> fmt::Result {
    writeln!(output, "### Review from {}", record.created_at)?;
    writeln!(output)?;
    writeln!(output, "{}", summary_or_placeholder(record))?;
    writeln!(output)?;

    if let Some(files) = record.listed_files() {
        writeln!(output, "#### Affected files")?;
        writeln!(output)?;
        for file in files {
            writeln!(output, "- `{file}`")?;
        }
        writeln!(output)?;
    }

    writeln!(output, "---")?;
    writeln!(output)
}

fn summary_or_placeholder(record: &ReviewRecord) -> &str {
    record.summary_text().unwrap_or(NO_SUMMARY_PLACEHOLDER)
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
