// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, Weekday};
use lifeplan_domain::{
    Assignment, AssignmentRecurrencePattern, AssignmentRecurrenceType, Cadence, Class, DateKey,
    DayCode, MeetingBlock, RecurrencePattern, StatusId, Story, WeekdaySet,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn key(s: &str) -> DateKey {
    s.parse().unwrap()
}

pub fn create_test_pattern(cadence: Cadence) -> RecurrencePattern {
    RecurrencePattern::new(cadence)
}

pub fn create_weekly_pattern(cadence: Cadence, days: &[Weekday]) -> RecurrencePattern {
    let mut pattern: RecurrencePattern = RecurrencePattern::new(cadence);
    pattern.days_of_week = WeekdaySet::from_weekdays(days.iter().copied());
    pattern
}

pub fn create_test_story(pattern: RecurrencePattern, created: &str) -> Story {
    let mut story: Story = Story::new("story-1", "Morning run");
    story.status = StatusId::new("To Do");
    story.priority = Some(String::from("Q2"));
    story.created_at = Some(key(created));
    story.repeat = Some(pattern);
    story
}

pub fn create_test_class(days: &[DayCode]) -> Class {
    Class {
        id: String::from("class-1"),
        name: String::from("Chemistry"),
        schedule: vec![MeetingBlock {
            days: days.to_vec(),
            start_date: None,
            end_date: None,
        }],
    }
}

pub fn create_test_assignment(pattern: AssignmentRecurrencePattern) -> Assignment {
    let mut assignment: Assignment = Assignment::new("assignment-1", "class-1", "Reading");
    assignment.recurrence_pattern = Some(pattern);
    assignment
}

pub fn create_weekday_assignment_pattern(
    kind: AssignmentRecurrenceType,
    days: &[Weekday],
) -> AssignmentRecurrencePattern {
    let mut pattern: AssignmentRecurrencePattern = AssignmentRecurrencePattern::new(kind);
    pattern.days_of_week = WeekdaySet::from_weekdays(days.iter().copied());
    pattern
}
