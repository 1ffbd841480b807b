// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar arithmetic and weekday handling.
//!
//! `chrono::Weekday` is the only weekday representation used by shared
//! logic. The two persisted conventions are translated here, at the edge:
//!
//! - Recurrence patterns store Sunday-based indices (`0` = Sunday .. `6` =
//!   Saturday), handled by [`WeekdaySet`].
//! - Class schedules store short day codes (`M`, `T`, `W`, `TH`, `F`, `S`,
//!   `SU`), handled by [`DayCode`].
//!
//! Neither representation leaks past its conversion.

use crate::error::DomainError;
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// All weekdays in Monday-first order.
pub const WEEKDAYS_FROM_MONDAY: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Converts a Sunday-based index (`0` = Sunday) into a weekday.
///
/// # Errors
///
/// Returns an error if the index is greater than 6.
pub fn weekday_from_sunday_index(index: u8) -> Result<Weekday, DomainError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(DomainError::InvalidWeekdayIndex(other)),
    }
}

/// Converts a weekday into its Sunday-based index (`0` = Sunday).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn sunday_index(weekday: Weekday) -> u8 {
    // Always 0..=6
    weekday.num_days_from_sunday() as u8
}

/// Returns a three-letter label for a weekday ("Mon", "Tue", ...).
#[must_use]
pub const fn short_weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// A set of weekdays.
///
/// Persisted as a list of Sunday-based indices, e.g. `[1, 3]` for Monday
/// and Wednesday. Iteration is always Monday-first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeekdaySet {
    /// Bit `n` is set when the weekday `n` days from Monday is present.
    bits: u8,
}

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Builds a set from the given weekdays.
    #[must_use]
    pub fn from_weekdays(weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set: Self = Self::EMPTY;
        for weekday in weekdays {
            set.insert(weekday);
        }
        set
    }

    /// Builds a set from Sunday-based indices.
    ///
    /// # Errors
    ///
    /// Returns an error if any index is greater than 6.
    pub fn from_sunday_indices(indices: &[u8]) -> Result<Self, DomainError> {
        let mut set: Self = Self::EMPTY;
        for index in indices {
            set.insert(weekday_from_sunday_index(*index)?);
        }
        Ok(set)
    }

    /// Adds a weekday to the set.
    pub fn insert(&mut self, weekday: Weekday) {
        self.bits |= Self::bit(weekday);
    }

    /// Returns whether the weekday is in the set.
    #[must_use]
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.bits & Self::bit(weekday) != 0
    }

    /// Returns whether the set has no weekdays.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of weekdays in the set.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Iterates the weekdays in the set, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEKDAYS_FROM_MONDAY
            .into_iter()
            .filter(|weekday| self.contains(*weekday))
    }

    fn bit(weekday: Weekday) -> u8 {
        1 << weekday.num_days_from_monday()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::from_weekdays(iter)
    }
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = DomainError;

    fn try_from(indices: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_sunday_indices(&indices)
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        let mut indices: Self = set.iter().map(sunday_index).collect();
        indices.sort_unstable();
        indices
    }
}

/// A class-schedule day code.
///
/// Codes follow the academic convention `M T W TH F S SU`. Parsing is
/// case-insensitive and accepts the common alternates `TU`, `R`, `SA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCode {
    /// Monday (`M`).
    Monday,
    /// Tuesday (`T`).
    Tuesday,
    /// Wednesday (`W`).
    Wednesday,
    /// Thursday (`TH`).
    Thursday,
    /// Friday (`F`).
    Friday,
    /// Saturday (`S`).
    Saturday,
    /// Sunday (`SU`).
    Sunday,
}

impl DayCode {
    /// Returns the canonical code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "M",
            Self::Tuesday => "T",
            Self::Wednesday => "W",
            Self::Thursday => "TH",
            Self::Friday => "F",
            Self::Saturday => "S",
            Self::Sunday => "SU",
        }
    }

    /// Returns the weekday this code names.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Tuesday => Weekday::Tue,
            Self::Wednesday => Weekday::Wed,
            Self::Thursday => Weekday::Thu,
            Self::Friday => Weekday::Fri,
            Self::Saturday => Weekday::Sat,
            Self::Sunday => Weekday::Sun,
        }
    }
}

impl FromStr for DayCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" | "MO" | "MON" => Ok(Self::Monday),
            "T" | "TU" | "TUE" => Ok(Self::Tuesday),
            "W" | "WE" | "WED" => Ok(Self::Wednesday),
            "TH" | "R" | "THU" => Ok(Self::Thursday),
            "F" | "FR" | "FRI" => Ok(Self::Friday),
            "S" | "SA" | "SAT" => Ok(Self::Saturday),
            "SU" | "SUN" => Ok(Self::Sunday),
            _ => Err(DomainError::InvalidDayCode(s.to_string())),
        }
    }
}

impl TryFrom<String> for DayCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCode> for String {
    fn from(code: DayCode) -> Self {
        code.as_str().to_string()
    }
}

impl std::fmt::Display for DayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the Monday on or before the given date.
#[must_use]
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Returns the number of whole weeks between the Mondays of two dates.
///
/// Negative when `later` falls in an earlier week than `earlier`.
#[must_use]
pub fn weeks_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (monday_of_week(later) - monday_of_week(earlier)).num_days() / 7
}

/// Adds whole days, returning `None` on calendar overflow.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Adds calendar months, clamping the day to the end of the target month.
///
/// `2024-01-31` plus one month is `2024-02-29`.
#[must_use]
pub fn add_months_clamped(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Adds calendar years, clamping February 29 to February 28.
#[must_use]
pub fn add_years_clamped(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    add_months_clamped(date, years.checked_mul(12)?)
}

/// Returns the last day of the given month, or `None` for an invalid month.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month): (i32, u32) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Returns the Mondays starting each complete week of a month.
///
/// A complete week is a Monday–Sunday span whose seven days all fall in the
/// month. Depending on where the month starts, there are three or four.
///
/// # Example
///
/// ```text
/// February 2024 starts on a Thursday:
///   Feb 1-4   incomplete (starts mid-week)
///   Feb 5-11  first
///   Feb 12-18 second
///   Feb 19-25 third
///   Feb 26-   incomplete (runs into March)
/// ```
#[must_use]
pub fn complete_weeks(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(last) = last_day_of_month(year, month) else {
        return Vec::new();
    };

    let offset: u32 = (7 - first.weekday().num_days_from_monday()) % 7;
    let mut mondays: Vec<NaiveDate> = Vec::with_capacity(5);
    let mut monday: Option<NaiveDate> = add_days(first, i64::from(offset));

    while let Some(start) = monday {
        match add_days(start, 6) {
            Some(sunday) if sunday <= last => mondays.push(start),
            _ => break,
        }
        monday = add_days(start, 7);
    }

    mondays
}
