// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assignment;
mod calendar;
mod date_key;
mod error;
mod recurrence;
mod story;
mod validation;

#[cfg(test)]
mod tests;

pub use assignment::{
    Assignment, AssignmentRecurrencePattern, AssignmentRecurrenceType, Class, MeetingBlock,
};
pub use calendar::{
    DayCode, WEEKDAYS_FROM_MONDAY, WeekdaySet, add_days, add_months_clamped, add_years_clamped,
    complete_weeks, last_day_of_month, monday_of_week, short_weekday_name, sunday_index,
    weekday_from_sunday_index, weeks_between,
};
pub use date_key::DateKey;
pub use error::DomainError;
pub use recurrence::{Cadence, InstanceOverride, RecurrencePattern, WeekOfMonth};
pub use story::{StatusId, Story, normalize_key};
pub use validation::{
    validate_assignment_pattern, validate_class_schedule, validate_clock_time, validate_color,
    validate_recurrence_pattern,
};
