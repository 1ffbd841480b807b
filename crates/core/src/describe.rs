// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable summaries of recurrence rules.

use crate::assignments::is_before_class;
use lifeplan_domain::{
    AssignmentRecurrencePattern, Cadence, RecurrencePattern, WeekdaySet, short_weekday_name,
};

/// Summarizes a story recurrence pattern.
///
/// # Example
///
/// ```text
/// Every 2 weeks on Mon, Wed, 10 times, until 2024-06-30
/// Every month in the first full week
/// Does not repeat
/// ```
#[must_use]
pub fn describe_pattern(pattern: &RecurrencePattern) -> String {
    let interval: u32 = pattern.effective_interval();

    let mut summary: String = match pattern.cadence {
        Cadence::None => return String::from("Does not repeat"),
        Cadence::Daily => every(interval, "day"),
        Cadence::Weekly => with_days(every(interval, "week"), pattern.days_of_week),
        Cadence::Biweekly => with_days(
            every(interval.saturating_mul(2), "week"),
            pattern.days_of_week,
        ),
        Cadence::Monthly => {
            let base: String = every(interval, "month");
            match pattern.week_of_month {
                Some(week) => format!("{base} in the {} full week", week.as_str()),
                None => base,
            }
        }
        Cadence::Yearly => every(interval, "year"),
    };

    match pattern.count {
        Some(1) => summary.push_str(", once"),
        Some(count) => summary.push_str(&format!(", {count} times")),
        None => {}
    }

    if let Some(end) = pattern.end_date {
        summary.push_str(&format!(", until {end}"));
    }

    summary
}

/// Summarizes an assignment recurrence pattern.
#[must_use]
pub fn describe_assignment_pattern(pattern: &AssignmentRecurrencePattern) -> String {
    let mut summary: String = if is_before_class(pattern) {
        String::from("Due the day before each class")
    } else {
        let weeks: u32 = pattern.week_step().unwrap_or(1);
        format!(
            "Due {}",
            with_days(every(weeks, "week"), pattern.days_of_week).to_lowercase()
        )
    };

    if let Some(time) = &pattern.time {
        summary.push_str(&format!(" at {time}"));
    }

    if !is_before_class(pattern)
        && let Some(end) = pattern.end_date
    {
        summary.push_str(&format!(", until {end}"));
    }

    summary
}

fn every(interval: u32, unit: &str) -> String {
    if interval == 1 {
        format!("Every {unit}")
    } else {
        format!("Every {interval} {unit}s")
    }
}

fn with_days(base: String, days: WeekdaySet) -> String {
    if days.is_empty() {
        return format!("{base} (no days selected)");
    }

    let names: Vec<&str> = days.iter().map(short_weekday_name).collect();
    format!("{base} on {}", names.join(", "))
}
