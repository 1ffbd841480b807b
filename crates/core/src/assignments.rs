// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurring assignments tied to a class meeting schedule.
//!
//! The owning class is always passed in by the caller; nothing here looks
//! a class up by id.
//!
//! ## Modes
//!
//! - `before-class`: the assignment is due the day before each meeting of
//!   the class, so the schedule's meeting dates minus one day are the due
//!   dates.
//! - `weekly` / `biweekly` / `custom`: due on the pattern's weekdays in
//!   every active week. Active weeks repeat every 1, 2 or `interval`
//!   weeks counted from the week of the assignment's first due date, or
//!   from the first day a query can return when the assignment has none.

use chrono::{Datelike, NaiveDate};
use lifeplan_domain::{
    Assignment, AssignmentRecurrencePattern, AssignmentRecurrenceType, Class, DateKey, WeekdaySet,
    add_days, weeks_between,
};
use serde::Serialize;
use tracing::debug;

/// Days searched past the start date when a meeting range has no end.
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 90;

/// Upper bound on the number of upcoming instances returned at once.
pub const MAX_UPCOMING_INSTANCES: usize = 100;

/// One upcoming occurrence of a recurring assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentInstance {
    /// The occurrence date: the class meeting for `before-class`, otherwise
    /// the selected weekday.
    pub date: DateKey,
    /// The day the work is due.
    pub due_date: DateKey,
    /// Due time of day, when the pattern specifies one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
}

/// Lists the days a class meets within a range.
///
/// Every schedule block contributes the days matching its day codes inside
/// the intersection of the block's own range and `[start, end]`. The
/// union is sorted and deduplicated.
///
/// # Arguments
///
/// * `class` - The class whose schedule to expand
/// * `start` - First day of the range, inclusive
/// * `end` - Last day of the range, inclusive; defaults to
///   [`DEFAULT_LOOKAHEAD_DAYS`] after `start`
#[must_use]
pub fn get_class_meeting_dates(
    class: &Class,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Vec<NaiveDate> {
    let end: NaiveDate = end
        .or_else(|| add_days(start, DEFAULT_LOOKAHEAD_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let mut dates: Vec<NaiveDate> = Vec::new();

    for block in &class.schedule {
        let weekdays: WeekdaySet = block.weekdays();
        if weekdays.is_empty() {
            continue;
        }

        let from: NaiveDate = block
            .start_date
            .map_or(start, |block_start| block_start.date().max(start));
        let to: NaiveDate = block
            .end_date
            .map_or(end, |block_end| block_end.date().min(end));

        dates.extend(
            from.iter_days()
                .take_while(|day| *day <= to)
                .filter(|day| weekdays.contains(day.weekday())),
        );
    }

    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Finds the next due date of a recurring assignment strictly after
/// `after`.
///
/// # Arguments
///
/// * `assignment` - The assignment template
/// * `class` - The class the assignment belongs to
/// * `after` - Reference day; the result is always later
///
/// # Returns
///
/// `None` when the assignment does not recur, the class is not the
/// assignment's class, the class has no upcoming meetings within the
/// lookahead, the pattern selects no days, or the pattern's end date has
/// passed.
#[must_use]
pub fn get_next_assignment_occurrence(
    assignment: &Assignment,
    class: &Class,
    after: NaiveDate,
) -> Option<NaiveDate> {
    let pattern: &AssignmentRecurrencePattern = assignment.recurrence_pattern.as_ref()?;

    if assignment.class_id != class.id {
        debug!(
            assignment_id = %assignment.id,
            expected_class = %assignment.class_id,
            given_class = %class.id,
            "class does not own assignment; no occurrence"
        );
        return None;
    }

    let anchor: NaiveDate = weekday_anchor(assignment, add_days(after, 1)?);
    next_occurrence_after(pattern, class, anchor, after).map(|(_, due)| due)
}

/// Lists up to `count` upcoming occurrences of a recurring assignment,
/// starting with any due on `from` itself.
///
/// `count` is capped at [`MAX_UPCOMING_INSTANCES`].
#[must_use]
pub fn get_upcoming_assignment_instances(
    assignment: &Assignment,
    class: &Class,
    count: usize,
    from: NaiveDate,
) -> Vec<AssignmentInstance> {
    let Some(pattern) = assignment.recurrence_pattern.as_ref() else {
        return Vec::new();
    };
    if assignment.class_id != class.id {
        return Vec::new();
    }
    let Some(mut cursor) = from.pred_opt() else {
        return Vec::new();
    };

    let anchor: NaiveDate = weekday_anchor(assignment, from);
    let count: usize = count.min(MAX_UPCOMING_INSTANCES);
    let mut instances: Vec<AssignmentInstance> = Vec::with_capacity(count);

    while instances.len() < count {
        let Some((date, due)) = next_occurrence_after(pattern, class, anchor, cursor) else {
            break;
        };

        instances.push(AssignmentInstance {
            date: DateKey::new(date),
            due_date: DateKey::new(due),
            due_time: pattern.time.clone(),
        });
        cursor = due;
    }

    instances
}

/// Day whose week is the first active week of a weekday-driven pattern.
///
/// The assignment's own due date when set, otherwise `first_day`, the
/// earliest day the query can return. The anchor stays fixed for a whole
/// query so the active-week rhythm never drifts.
fn weekday_anchor(assignment: &Assignment, first_day: NaiveDate) -> NaiveDate {
    assignment.due_date.map_or(first_day, |due| due.date())
}

/// Returns the next `(occurrence, due)` pair with `due > after`.
fn next_occurrence_after(
    pattern: &AssignmentRecurrencePattern,
    class: &Class,
    anchor: NaiveDate,
    after: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    match pattern.week_step() {
        None => next_meeting_due(class, after),
        Some(step) => next_weekday_due(pattern, step, anchor, after).map(|date| (date, date)),
    }
}

/// Next class meeting whose preceding day is after `after`.
fn next_meeting_due(class: &Class, after: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    // The meeting must be at least two days out for its eve to be later
    let search_from: NaiveDate = add_days(after, 2)?;
    let meeting: NaiveDate = *get_class_meeting_dates(class, search_from, None).first()?;
    Some((meeting, meeting.pred_opt()?))
}

/// Next selected weekday in an active week after `after`.
fn next_weekday_due(
    pattern: &AssignmentRecurrencePattern,
    step: u32,
    anchor: NaiveDate,
    after: NaiveDate,
) -> Option<NaiveDate> {
    if pattern.days_of_week.is_empty() {
        return None;
    }

    let step: i64 = i64::from(step.max(1));
    let end: Option<NaiveDate> = pattern.end_date.map(|end| end.date());

    // An active week is always reached within `step` weeks
    for offset in 1..=7 * (step + 1) {
        let day: NaiveDate = add_days(after, offset)?;

        if end.is_some_and(|end| day > end) {
            return None;
        }

        let active_week: bool = weeks_between(anchor, day).rem_euclid(step) == 0;
        if active_week && pattern.days_of_week.contains(day.weekday()) {
            return Some(day);
        }
    }

    None
}

/// Returns whether the pattern is the class-schedule-driven kind.
#[must_use]
pub fn is_before_class(pattern: &AssignmentRecurrencePattern) -> bool {
    pattern.kind == AssignmentRecurrenceType::BeforeClass
}
