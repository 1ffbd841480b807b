// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occurrence calculation for story recurrence patterns.
//!
//! Occurrences are generated cycle by cycle from an anchor date (the
//! template's creation day). Each cycle advances the cadence by `interval`
//! units measured from the anchor, never from the previous cycle, so month
//! and year stepping keep their original day of month.
//!
//! ## Cadences
//!
//! - Daily: one date per cycle, `interval` days apart
//! - Weekly / biweekly: cycles are Monday-anchored weeks, `interval` (or
//!   `2 × interval`) weeks apart; each cycle yields the selected weekdays.
//!   An empty day set yields nothing.
//! - Monthly: one date per cycle on the anchor's day of month (clamped to
//!   the month's end). With `week_of_month`, the date is the anchor's
//!   weekday inside the selected complete week, and months without that
//!   week are skipped.
//! - Yearly: one date per cycle on the anchor's month and day (February 29
//!   clamps to February 28).
//!
//! ## Invariants
//!
//! - Dates are strictly ascending and never precede the anchor
//! - `count` and `end_date` bound the whole sequence from the anchor
//! - At most [`MAX_OCCURRENCES`] dates are returned per call

use chrono::{Datelike, NaiveDate};
use lifeplan_domain::{
    Cadence, RecurrencePattern, WeekOfMonth, add_days, add_months_clamped, add_years_clamped,
    complete_weeks, monday_of_week,
};
use std::collections::VecDeque;
use tracing::debug;

/// Maximum number of occurrences returned by a single calculation.
pub const MAX_OCCURRENCES: usize = 1000;

/// Maximum number of cadence cycles examined by one generator.
///
/// Bounds the work spent skipping cycles that produce nothing (months
/// without a fourth complete week) or that fall before a display window.
const MAX_CYCLES: u32 = 100_000;

/// Calculates every occurrence of a pattern starting at `start`.
///
/// Generation is bounded by the pattern's `count` and `end_date`, and
/// silently truncated at [`MAX_OCCURRENCES`].
///
/// # Arguments
///
/// * `pattern` - The recurrence rule
/// * `start` - The anchor date (the template's creation day)
///
/// # Returns
///
/// Occurrence dates in ascending order. Empty for non-recurring patterns.
#[must_use]
pub fn calculate_occurrences(pattern: &RecurrencePattern, start: NaiveDate) -> Vec<NaiveDate> {
    occurrences_in_window(pattern, start, start, NaiveDate::MAX)
}

/// Calculates the occurrences of a pattern that fall inside a window.
///
/// Cadence parity and `count` are measured from `anchor`, so moving the
/// window never shifts a biweekly rhythm or restarts a count. No date
/// before `window_start` or after `window_end` is returned.
///
/// # Arguments
///
/// * `pattern` - The recurrence rule
/// * `anchor` - The template's creation day
/// * `window_start` - First visible day, inclusive
/// * `window_end` - Last visible day, inclusive
#[must_use]
pub fn occurrences_in_window(
    pattern: &RecurrencePattern,
    anchor: NaiveDate,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<NaiveDate> {
    if window_end < window_start {
        return Vec::new();
    }

    let mut dates: Vec<NaiveDate> = Occurrences::new(pattern, anchor)
        .skip_while(|date| *date < window_start)
        .take_while(|date| *date <= window_end)
        .take(MAX_OCCURRENCES + 1)
        .collect();

    if dates.len() > MAX_OCCURRENCES {
        debug!(
            cadence = %pattern.cadence,
            %anchor,
            %window_start,
            "occurrence cap of {MAX_OCCURRENCES} reached; truncating"
        );
        dates.truncate(MAX_OCCURRENCES);
    }

    dates
}

/// Returns whether `date` is an occurrence of the pattern anchored at
/// `anchor`.
#[must_use]
pub fn is_occurrence(pattern: &RecurrencePattern, anchor: NaiveDate, date: NaiveDate) -> bool {
    !occurrences_in_window(pattern, anchor, date, date).is_empty()
}

/// Lazily generates the occurrences of a pattern in ascending order.
///
/// Unlike [`calculate_occurrences`], the iterator is not capped at
/// [`MAX_OCCURRENCES`]; it stops at the pattern's bounds, on calendar
/// overflow, or after an internal cycle limit.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    pattern: &'a RecurrencePattern,
    anchor: NaiveDate,
    cycle: u32,
    emitted: u32,
    pending: VecDeque<NaiveDate>,
    finished: bool,
}

impl<'a> Occurrences<'a> {
    /// Creates a generator for `pattern` anchored at `anchor`.
    #[must_use]
    pub fn new(pattern: &'a RecurrencePattern, anchor: NaiveDate) -> Self {
        Self {
            pattern,
            anchor,
            cycle: 0,
            emitted: 0,
            pending: VecDeque::new(),
            finished: !pattern.is_recurring(),
        }
    }

    /// Produces the candidate dates of one cadence cycle.
    ///
    /// `None` means no later cycle can produce anything.
    fn cycle_dates(&self, cycle: u32) -> Option<Vec<NaiveDate>> {
        let interval: u32 = self.pattern.effective_interval();
        let steps: u32 = cycle.checked_mul(interval)?;

        match self.pattern.cadence {
            Cadence::None => None,
            Cadence::Daily => Some(vec![add_days(self.anchor, i64::from(steps))?]),
            Cadence::Weekly => self.week_dates(i64::from(steps)),
            Cadence::Biweekly => self.week_dates(i64::from(steps) * 2),
            Cadence::Monthly => match self.pattern.week_of_month {
                Some(week) => self.week_of_month_dates(steps, week),
                None => Some(vec![add_months_clamped(self.anchor, steps)?]),
            },
            Cadence::Yearly => Some(vec![add_years_clamped(self.anchor, steps)?]),
        }
    }

    /// Selected weekdays of the week `weeks` after the anchor's week.
    fn week_dates(&self, weeks: i64) -> Option<Vec<NaiveDate>> {
        // Rule: a weekday cadence with no days selected never occurs
        if self.pattern.days_of_week.is_empty() {
            return None;
        }

        let week_start: NaiveDate = add_days(monday_of_week(self.anchor), weeks.checked_mul(7)?)?;

        self.pattern
            .days_of_week
            .iter()
            .map(|weekday| add_days(week_start, i64::from(weekday.num_days_from_monday())))
            .filter(|date| date.is_none_or(|date| date >= self.anchor))
            .collect()
    }

    /// The anchor's weekday inside the selected complete week of the month
    /// `months` after the anchor's month.
    fn week_of_month_dates(&self, months: u32, week: WeekOfMonth) -> Option<Vec<NaiveDate>> {
        let month_start: NaiveDate = add_months_clamped(self.anchor.with_day(1)?, months)?;
        let mondays: Vec<NaiveDate> = complete_weeks(month_start.year(), month_start.month());

        let Some(monday) = week.select(&mondays) else {
            return Some(Vec::new());
        };

        let date: NaiveDate = add_days(
            monday,
            i64::from(self.anchor.weekday().num_days_from_monday()),
        )?;

        if date < self.anchor {
            Some(Vec::new())
        } else {
            Some(vec![date])
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if let Some(date) = self.pending.pop_front() {
                let past_end: bool = self
                    .pattern
                    .end_date
                    .is_some_and(|end| date > end.date());
                let count_reached: bool = self
                    .pattern
                    .count
                    .is_some_and(|count| self.emitted >= count);

                if past_end || count_reached {
                    self.finished = true;
                    return None;
                }

                self.emitted += 1;
                return Some(date);
            }

            if self.cycle >= MAX_CYCLES {
                debug!(
                    cadence = %self.pattern.cadence,
                    anchor = %self.anchor,
                    "cycle limit reached; stopping occurrence generation"
                );
                self.finished = true;
                return None;
            }

            match self.cycle_dates(self.cycle) {
                Some(dates) => self.pending.extend(dates),
                None => self.finished = true,
            }
            self.cycle += 1;
        }
    }
}
