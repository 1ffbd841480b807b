// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary validation for user-edited records.
//!
//! These checks run when records are created, edited or loaded. The
//! recurrence engine itself never calls them: it degrades to "no
//! occurrences" on malformed-but-well-typed input instead of failing.

use crate::assignment::{AssignmentRecurrencePattern, AssignmentRecurrenceType, Class};
use crate::error::DomainError;
use crate::recurrence::RecurrencePattern;
use chrono::NaiveDate;

/// Validates a story recurrence pattern.
///
/// # Arguments
///
/// * `pattern` - The pattern to validate
/// * `start` - The template's anchor date, if known
///
/// # Errors
///
/// Returns an error if:
/// - The interval is zero
/// - The count is zero
/// - A weekly or biweekly cadence selects no days
/// - The end date precedes the anchor date
pub fn validate_recurrence_pattern(
    pattern: &RecurrencePattern,
    start: Option<NaiveDate>,
) -> Result<(), DomainError> {
    if pattern.interval == 0 {
        return Err(DomainError::InvalidInterval(pattern.interval));
    }

    if let Some(count) = pattern.count
        && count == 0
    {
        return Err(DomainError::InvalidCount(count));
    }

    // Rule: weekday cadences need at least one day
    if pattern.cadence.uses_weekdays() && pattern.days_of_week.is_empty() {
        return Err(DomainError::EmptyWeekdays {
            cadence: pattern.cadence.as_str(),
        });
    }

    if let (Some(start), Some(end)) = (start, pattern.end_date)
        && end.date() < start
    {
        return Err(DomainError::EndBeforeStart {
            start,
            end: end.date(),
        });
    }

    Ok(())
}

/// Validates an assignment recurrence pattern.
///
/// # Errors
///
/// Returns an error if:
/// - A weekday-driven type selects no days
/// - A `custom` pattern has a zero interval
/// - The due time is not `HH:MM`
pub fn validate_assignment_pattern(
    pattern: &AssignmentRecurrencePattern,
) -> Result<(), DomainError> {
    if pattern.week_step().is_some() && pattern.days_of_week.is_empty() {
        return Err(DomainError::EmptyWeekdays {
            cadence: pattern.kind.as_str(),
        });
    }

    if pattern.kind == AssignmentRecurrenceType::Custom && pattern.interval == 0 {
        return Err(DomainError::InvalidInterval(pattern.interval));
    }

    if let Some(time) = &pattern.time {
        validate_clock_time(time)?;
    }

    Ok(())
}

/// Validates a class meeting schedule.
///
/// # Errors
///
/// Returns an error if a block has no days, or ends before it starts.
pub fn validate_class_schedule(class: &Class) -> Result<(), DomainError> {
    for (index, block) in class.schedule.iter().enumerate() {
        if block.days.is_empty() {
            return Err(DomainError::EmptyMeetingBlock { index });
        }

        if let (Some(start), Some(end)) = (block.start_date, block.end_date)
            && end < start
        {
            return Err(DomainError::EndBeforeStart {
                start: start.date(),
                end: end.date(),
            });
        }
    }

    Ok(())
}

/// Validates a `#RGB` or `#RRGGBB` hex color.
///
/// # Errors
///
/// Returns an error if the color is not a short or long hex color.
pub fn validate_color(color: &str) -> Result<(), DomainError> {
    let valid: bool = color.strip_prefix('#').is_some_and(|hex| {
        (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidColor(color.to_string()))
    }
}

/// Validates an `HH:MM` 24-hour clock time.
///
/// # Errors
///
/// Returns an error if the value is not a valid `HH:MM` time.
pub fn validate_clock_time(time: &str) -> Result<(), DomainError> {
    let valid: bool = time.len() == 5 && chrono::NaiveTime::parse_from_str(time, "%H:%M").is_ok();

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidClockTime(time.to_string()))
    }
}
