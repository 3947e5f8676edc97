//! Desired-state label catalog.
//!
//! The catalog is an immutable, ordered list of label descriptors. The
//! synchronizer receives it explicitly, so alternate catalogs can be loaded
//! from a JSON file or built inline in tests.

use std::collections::HashSet;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::RepoKeeperError;
use crate::fs::read_optional;

/// One label the repository should carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDescriptor {
    /// Label name, conventionally `<category>/<value>`.
    pub name: String,
    /// Six hex digits, without a leading `#`.
    pub color: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

impl LabelDescriptor {
    /// Builds a descriptor from borrowed parts.
    #[must_use]
    pub fn new(name: &str, color: &str, description: &str) -> Self {
        Self {
            name: name.to_owned(),
            color: color.to_owned(),
            description: description.to_owned(),
        }
    }
}

const STANDARD_LABELS: [(&str, &str, &str); 9] = [
    ("type/action", "1d76db", "Task or actionable item"),
    ("type/concept", "006b75", "Concept or knowledge item"),
    ("priority/now", "b60205", "Urgent or current priority"),
    ("priority/next", "fbca04", "Near-term priority"),
    ("priority/later", "c2e0c6", "Deferred or backlog"),
    ("status/untriaged", "d4c5f9", "Needs triage"),
    ("status/today", "0052cc", "Active today"),
    ("status/done", "d1d5da", "Completed or resolved"),
    ("status/needs-input", "e99695", "Requires input or feedback"),
];

/// Ordered, validated collection of label descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCatalog {
    labels: Vec<LabelDescriptor>,
}

impl LabelCatalog {
    /// The built-in taxonomy of type, priority, and status labels.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            labels: STANDARD_LABELS
                .iter()
                .map(|&(name, color, description)| LabelDescriptor::new(name, color, description))
                .collect(),
        }
    }

    /// Validates and wraps the given descriptors.
    ///
    /// Colors may carry a leading `#`, which is stripped.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::Configuration`] when a name is blank or
    /// repeated, or a color is not six hex digits.
    pub fn new(labels: Vec<LabelDescriptor>) -> Result<Self, RepoKeeperError> {
        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(labels.len());

        for label in labels {
            let name = label.name.trim();
            if name.is_empty() {
                return Err(invalid("label name must not be empty"));
            }
            if !seen.insert(name.to_owned()) {
                return Err(invalid(&format!("duplicate label '{name}'")));
            }

            let color = label.color.trim().trim_start_matches('#');
            if color.len() != 6 || !color.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid(&format!(
                    "label '{name}' has invalid color '{}'",
                    label.color
                )));
            }

            validated.push(LabelDescriptor::new(name, color, &label.description));
        }

        Ok(Self { labels: validated })
    }

    /// Parses a JSON array of `{name, color, description}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::Configuration`] when the JSON is malformed
    /// or a descriptor fails validation.
    pub fn from_json(raw: &str) -> Result<Self, RepoKeeperError> {
        let labels: Vec<LabelDescriptor> = serde_json::from_str(raw)
            .map_err(|error| invalid(&format!("label catalog is not valid JSON: {error}")))?;
        Self::new(labels)
    }

    /// Loads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::Configuration`] when the file is missing or
    /// its content is invalid, and [`RepoKeeperError::Io`] when it cannot be
    /// read.
    pub fn load(path: &Utf8Path) -> Result<Self, RepoKeeperError> {
        let raw = read_optional(path)?
            .ok_or_else(|| invalid(&format!("label catalog '{path}' does not exist")))?;
        Self::from_json(&raw)
    }

    /// Iterates descriptors in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, LabelDescriptor> {
        self.labels.iter()
    }

    /// Number of descriptors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true when the catalog holds no descriptors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a LabelCatalog {
    type Item = &'a LabelDescriptor;
    type IntoIter = std::slice::Iter<'a, LabelDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn invalid(message: &str) -> RepoKeeperError {
    RepoKeeperError::Configuration {
        message: message.to_owned(),
    }
}
