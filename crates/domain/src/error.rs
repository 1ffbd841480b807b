// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing or validating planner records.
///
/// Recurrence queries never produce these; they are raised only at the
/// boundaries where user input enters the domain (parsing, form validation,
/// loading persisted data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date key was not a zero-padded `YYYY-MM-DD` calendar date.
    InvalidDateKey {
        /// The rejected input.
        input: String,
    },
    /// A weekday index was outside 0 (Sunday) through 6 (Saturday).
    InvalidWeekdayIndex(u8),
    /// A class-schedule day code was not recognized.
    InvalidDayCode(String),
    /// A recurrence interval must be at least 1.
    InvalidInterval(u32),
    /// A recurrence count must be at least 1.
    InvalidCount(u32),
    /// A weekly or biweekly pattern was configured without any days.
    EmptyWeekdays {
        /// The cadence that requires days.
        cadence: &'static str,
    },
    /// An end date precedes the date it is supposed to bound.
    EndBeforeStart {
        /// The start of the range.
        start: chrono::NaiveDate,
        /// The offending end of the range.
        end: chrono::NaiveDate,
    },
    /// A color was not a `#RGB` or `#RRGGBB` hex string.
    InvalidColor(String),
    /// A clock time was not an `HH:MM` 24-hour time.
    InvalidClockTime(String),
    /// A class schedule block lists no meeting days.
    EmptyMeetingBlock {
        /// Zero-based index of the block within the schedule.
        index: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateKey { input } => {
                write!(f, "Invalid date '{input}': expected YYYY-MM-DD")
            }
            Self::InvalidWeekdayIndex(index) => {
                write!(
                    f,
                    "Invalid weekday index: {index}. Must be between 0 (Sunday) and 6 (Saturday)"
                )
            }
            Self::InvalidDayCode(code) => write!(f, "Invalid day code: '{code}'"),
            Self::InvalidInterval(interval) => {
                write!(f, "Invalid interval: {interval}. Must be at least 1")
            }
            Self::InvalidCount(count) => {
                write!(f, "Invalid occurrence count: {count}. Must be at least 1")
            }
            Self::EmptyWeekdays { cadence } => {
                write!(f, "A {cadence} recurrence must select at least one day")
            }
            Self::EndBeforeStart { start, end } => {
                write!(f, "End date {end} is before start date {start}")
            }
            Self::InvalidColor(color) => {
                write!(f, "Invalid color '{color}': expected #RGB or #RRGGBB")
            }
            Self::InvalidClockTime(time) => {
                write!(f, "Invalid time '{time}': expected HH:MM")
            }
            Self::EmptyMeetingBlock { index } => {
                write!(f, "Schedule block {index} has no meeting days")
            }
        }
    }
}

impl std::error::Error for DomainError {}
