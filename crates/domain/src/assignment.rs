// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classes, their meeting schedules, and recurring assignments.

use crate::calendar::{DayCode, WeekdaySet};
use crate::date_key::DateKey;
use serde::{Deserialize, Serialize};

/// How a recurring assignment repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentRecurrenceType {
    /// Due the day before every class meeting.
    BeforeClass,
    /// Due every week on the selected weekdays.
    Weekly,
    /// Due every other week on the selected weekdays.
    Biweekly,
    /// Due every `interval` weeks on the selected weekdays.
    Custom,
}

impl AssignmentRecurrenceType {
    /// Returns the persisted name of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeClass => "before-class",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Custom => "custom",
        }
    }
}

const fn default_interval() -> u32 {
    1
}

/// Recurrence rule for an assignment.
///
/// `days_of_week`, `interval` and `end_date` are consulted only for the
/// weekday-driven types; `before-class` derives its dates from the owning
/// class's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecurrencePattern {
    /// The recurrence type.
    #[serde(rename = "type")]
    pub kind: AssignmentRecurrenceType,
    /// Selected weekdays.
    #[serde(default, skip_serializing_if = "WeekdaySet::is_empty")]
    pub days_of_week: WeekdaySet,
    /// Week multiplier for the `custom` type. Zero is read as one.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Due time of day (`HH:MM`), carried through to each occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Inclusive last date on which an occurrence may fall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateKey>,
}

impl AssignmentRecurrencePattern {
    /// Creates a pattern of the given type with no days, time or end date.
    #[must_use]
    pub const fn new(kind: AssignmentRecurrenceType) -> Self {
        Self {
            kind,
            days_of_week: WeekdaySet::EMPTY,
            interval: 1,
            time: None,
            end_date: None,
        }
    }

    /// Returns how many weeks separate active weeks for weekday-driven
    /// types, or `None` for `before-class`.
    #[must_use]
    pub fn week_step(&self) -> Option<u32> {
        match self.kind {
            AssignmentRecurrenceType::BeforeClass => None,
            AssignmentRecurrenceType::Weekly => Some(1),
            AssignmentRecurrenceType::Biweekly => Some(2),
            AssignmentRecurrenceType::Custom => Some(self.interval.max(1)),
        }
    }
}

/// An assignment record belonging to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// The assignment identifier.
    pub id: String,
    /// The owning class identifier.
    pub class_id: String,
    /// The assignment title.
    pub title: String,
    /// First (or only) due date. Anchors the biweekly rhythm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateKey>,
    /// Due time of day for a one-off assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    /// Recurrence rule, when the assignment repeats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<AssignmentRecurrencePattern>,
}

impl Assignment {
    /// Creates a one-off assignment with no due date.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        class_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            class_id: class_id.into(),
            title: title.into(),
            due_date: None,
            due_time: None,
            recurrence_pattern: None,
        }
    }
}

/// One block of a class's meeting schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingBlock {
    /// Days the class meets during this block.
    #[serde(default)]
    pub days: Vec<DayCode>,
    /// First day of the block, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateKey>,
    /// Last day of the block, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateKey>,
}

impl MeetingBlock {
    /// Returns the block's meeting days as a weekday set.
    #[must_use]
    pub fn weekdays(&self) -> WeekdaySet {
        self.days.iter().map(DayCode::weekday).collect()
    }
}

/// A class record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    /// The class identifier.
    pub id: String,
    /// The class name.
    pub name: String,
    /// Meeting schedule blocks.
    #[serde(default)]
    pub schedule: Vec<MeetingBlock>,
}
