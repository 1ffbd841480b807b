// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurrence rules attached to story templates.

use crate::calendar::WeekdaySet;
use crate::date_key::DateKey;
use crate::story::StatusId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How often a story repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// Not recurring.
    #[default]
    None,
    /// Every `interval` days.
    Daily,
    /// Every `interval` weeks on the selected weekdays.
    Weekly,
    /// Every `2 × interval` weeks on the selected weekdays.
    Biweekly,
    /// Every `interval` months.
    Monthly,
    /// Every `interval` years.
    Yearly,
}

impl Cadence {
    /// Returns the persisted name of this cadence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Returns whether this cadence selects days through `days_of_week`.
    #[must_use]
    pub const fn uses_weekdays(&self) -> bool {
        matches!(self, Self::Weekly | Self::Biweekly)
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects one complete Monday–Sunday week of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekOfMonth {
    /// The first complete week.
    First,
    /// The second complete week.
    Second,
    /// The third complete week.
    Third,
    /// The fourth complete week. Some months have only three.
    Fourth,
    /// The last complete week.
    Last,
}

impl WeekOfMonth {
    /// Picks this week's Monday out of a month's complete-week Mondays.
    ///
    /// Returns `None` when the month has too few complete weeks.
    #[must_use]
    pub fn select<T: Copy>(&self, mondays: &[T]) -> Option<T> {
        match self {
            Self::First => mondays.first().copied(),
            Self::Second => mondays.get(1).copied(),
            Self::Third => mondays.get(2).copied(),
            Self::Fourth => mondays.get(3).copied(),
            Self::Last => mondays.last().copied(),
        }
    }

    /// Returns the persisted name of this ordinal.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }
}

/// A per-date delta layered over a story template.
///
/// Only fields that differ from the template are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceOverride {
    /// Status for this occurrence, replacing the template status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusId>,
    /// Whether this occurrence has been completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Whether this occurrence has been skipped (deleted from view).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
}

impl InstanceOverride {
    /// Returns whether this override carries no delta at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && !matches!(self.completed, Some(true))
            && !matches!(self.skipped, Some(true))
    }
}

const fn default_interval() -> u32 {
    1
}

/// A recurrence rule attached to a story template.
///
/// `days_of_week` is only consulted for weekly and biweekly cadences and
/// `week_of_month` only for monthly. `count` and `end_date` may both be set;
/// generation stops at whichever bound is reached first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    /// The repeat cadence.
    #[serde(default)]
    pub cadence: Cadence,
    /// Cadence multiplier ("every N units"). Zero is read as one.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Selected weekdays for weekly and biweekly cadences.
    #[serde(default, skip_serializing_if = "WeekdaySet::is_empty")]
    pub days_of_week: WeekdaySet,
    /// Selected complete week for monthly cadences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_of_month: Option<WeekOfMonth>,
    /// Inclusive last date on which an occurrence may fall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateKey>,
    /// Maximum number of occurrences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Per-date overrides, keyed by occurrence date.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub instances: BTreeMap<DateKey, InstanceOverride>,
}

impl Default for RecurrencePattern {
    fn default() -> Self {
        Self::new(Cadence::None)
    }
}

impl RecurrencePattern {
    /// Creates a pattern with the given cadence, an interval of one and no
    /// bounds or overrides.
    #[must_use]
    pub const fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            interval: 1,
            days_of_week: WeekdaySet::EMPTY,
            week_of_month: None,
            end_date: None,
            count: None,
            instances: BTreeMap::new(),
        }
    }

    /// Returns the interval, reading zero as one.
    #[must_use]
    pub fn effective_interval(&self) -> u32 {
        self.interval.max(1)
    }

    /// Returns whether this pattern produces occurrences at all.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        self.cadence != Cadence::None
    }

    /// Returns the override stored for a date, if any.
    #[must_use]
    pub fn instance(&self, date: DateKey) -> Option<&InstanceOverride> {
        self.instances.get(&date)
    }
}
