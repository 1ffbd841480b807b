// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date_key::DateKey;
use crate::recurrence::RecurrencePattern;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A status identifier.
///
/// Statuses are user-defined, so this is an open set of keys rather than an
/// enum. Keys are normalized on construction: trimmed, lowercased, and with
/// whitespace runs replaced by a single hyphen. `"In Progress"` and
/// `"in-progress"` are the same status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StatusId(String);

impl StatusId {
    /// The status new stories start in.
    pub const BACKLOG: &'static str = "backlog";

    /// Creates a normalized status identifier.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(normalize_key(value))
    }

    /// Returns the normalized key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StatusId {
    fn default() -> Self {
        Self::new(Self::BACKLOG)
    }
}

impl From<String> for StatusId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for StatusId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<StatusId> for String {
    fn from(status: StatusId) -> Self {
        status.0
    }
}

impl std::fmt::Display for StatusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a settings or status key for comparison.
///
/// Lowercases, trims, and collapses each whitespace run into one hyphen.
#[must_use]
pub fn normalize_key(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<String>>()
        .join("-")
}

/// A story record.
///
/// When `repeat` carries a recurring pattern the story is a template: its
/// fields are the source of truth for every occurrence, and per-date deltas
/// live in `repeat.instances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// The story identifier.
    pub id: String,
    /// The story title.
    pub title: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// The goal this story advances, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    /// Priority key (resolved through the settings mirror).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Story type key (resolved through the settings mirror).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub story_type: Option<String>,
    /// Size key (resolved through the settings mirror).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Current status of the template.
    #[serde(default)]
    pub status: StatusId,
    /// Calendar day the story was created; anchors recurrence.
    #[serde(
        default,
        deserialize_with = "deserialize_created_on",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateKey>,
    /// Recurrence rule, when the story repeats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RecurrencePattern>,
}

impl Story {
    /// Creates a non-recurring story in the default status.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            goal_id: None,
            priority: None,
            story_type: None,
            size: None,
            status: StatusId::default(),
            created_at: None,
            repeat: None,
        }
    }

    /// Returns the recurrence pattern if the story actually repeats.
    #[must_use]
    pub fn recurrence(&self) -> Option<&RecurrencePattern> {
        self.repeat.as_ref().filter(|pattern| pattern.is_recurring())
    }

    /// Returns whether the story repeats.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        self.recurrence().is_some()
    }
}

/// Accepts either a bare `YYYY-MM-DD` date or an RFC 3339 timestamp and
/// keeps only the calendar day.
fn deserialize_created_on<'de, D>(deserializer: D) -> Result<Option<DateKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    if let Ok(key) = raw.parse::<DateKey>() {
        return Ok(Some(key));
    }

    chrono::DateTime::parse_from_rfc3339(&raw)
        .map(|timestamp| Some(DateKey::new(timestamp.date_naive())))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw.get(..10).unwrap_or_default(), "%Y-%m-%d")
                .map(|date| Some(DateKey::new(date)))
        })
        .map_err(serde::de::Error::custom)
}
