// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentRecurrencePattern, AssignmentRecurrenceType, Cadence, Class, DateKey, DayCode,
    DomainError, InstanceOverride, RecurrencePattern, StatusId, Story, WeekOfMonth,
};
use chrono::{NaiveDate, Weekday};

fn key(s: &str) -> DateKey {
    s.parse().unwrap()
}

#[test]
fn test_date_key_accepts_canonical_form() {
    let parsed: DateKey = key("2024-03-01");
    assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(parsed.to_string(), "2024-03-01");
}

#[test]
fn test_date_key_rejects_unpadded_form() {
    let result: Result<DateKey, DomainError> = "2024-3-1".parse();
    assert_eq!(
        result,
        Err(DomainError::InvalidDateKey {
            input: String::from("2024-3-1")
        })
    );
}

#[test]
fn test_date_key_rejects_impossible_dates() {
    assert!("2023-02-29".parse::<DateKey>().is_err());
    assert!("2024-13-01".parse::<DateKey>().is_err());
    assert!("2024-01-01T00:00:00Z".parse::<DateKey>().is_err());
    assert!("+2024-01-1".parse::<DateKey>().is_err());
}

#[test]
fn test_status_id_normalizes_labels() {
    assert_eq!(StatusId::new("In Progress").as_str(), "in-progress");
    assert_eq!(StatusId::new("  To   Do ").as_str(), "to-do");
    assert_eq!(StatusId::new("in-progress"), StatusId::new("In Progress"));
}

#[test]
fn test_status_id_defaults_to_backlog() {
    assert_eq!(StatusId::default().as_str(), "backlog");
}

#[test]
fn test_recurrence_pattern_deserializes_persisted_shape() {
    let json: &str = r#"{
        "cadence": "biweekly",
        "interval": 1,
        "daysOfWeek": [1, 3],
        "endDate": "2024-06-30",
        "count": 10,
        "instances": {
            "2024-01-03": { "completed": true },
            "2024-01-15": { "skipped": true, "status": "In Progress" }
        }
    }"#;

    let pattern: RecurrencePattern = serde_json::from_str(json).unwrap();

    assert_eq!(pattern.cadence, Cadence::Biweekly);
    assert!(pattern.days_of_week.contains(Weekday::Mon));
    assert!(pattern.days_of_week.contains(Weekday::Wed));
    assert_eq!(pattern.days_of_week.len(), 2);
    assert_eq!(pattern.end_date, Some(key("2024-06-30")));
    assert_eq!(pattern.count, Some(10));

    let skipped: &InstanceOverride = pattern.instance(key("2024-01-15")).unwrap();
    assert_eq!(skipped.skipped, Some(true));
    assert_eq!(skipped.status, Some(StatusId::new("in-progress")));
}

#[test]
fn test_recurrence_pattern_rejects_malformed_override_key() {
    let json: &str = r#"{ "cadence": "daily", "instances": { "2024-3-1": { "skipped": true } } }"#;
    let result: Result<RecurrencePattern, serde_json::Error> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_recurrence_pattern_defaults_when_fields_absent() {
    let pattern: RecurrencePattern = serde_json::from_str(r#"{ "cadence": "monthly", "weekOfMonth": "last" }"#).unwrap();

    assert_eq!(pattern.interval, 1);
    assert!(pattern.days_of_week.is_empty());
    assert_eq!(pattern.week_of_month, Some(WeekOfMonth::Last));
    assert!(pattern.instances.is_empty());
}

#[test]
fn test_recurrence_pattern_serializes_sparse_overrides() {
    let mut pattern: RecurrencePattern = RecurrencePattern::new(Cadence::Daily);
    pattern.instances.insert(
        key("2024-03-01"),
        InstanceOverride {
            completed: Some(true),
            ..InstanceOverride::default()
        },
    );

    let json: serde_json::Value = serde_json::to_value(&pattern).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "cadence": "daily",
            "interval": 1,
            "instances": { "2024-03-01": { "completed": true } }
        })
    );
}

#[test]
fn test_instance_override_emptiness() {
    assert!(InstanceOverride::default().is_empty());
    assert!(
        InstanceOverride {
            completed: Some(false),
            skipped: Some(false),
            status: None,
        }
        .is_empty()
    );
    assert!(
        !InstanceOverride {
            skipped: Some(true),
            ..InstanceOverride::default()
        }
        .is_empty()
    );
}

#[test]
fn test_story_created_at_accepts_timestamps() {
    let story: Story = serde_json::from_str(
        r#"{ "id": "s1", "title": "Run", "createdAt": "2024-01-05T18:30:00.000Z" }"#,
    )
    .unwrap();

    assert_eq!(story.created_at, Some(key("2024-01-05")));
    assert_eq!(story.status, StatusId::default());
    assert!(!story.is_recurring());
}

#[test]
fn test_story_with_none_cadence_is_not_recurring() {
    let story: Story = serde_json::from_str(
        r#"{ "id": "s1", "title": "Run", "type": "Physical", "repeat": { "cadence": "none" } }"#,
    )
    .unwrap();

    assert_eq!(story.story_type.as_deref(), Some("Physical"));
    assert!(story.repeat.is_some());
    assert!(story.recurrence().is_none());
}

#[test]
fn test_class_schedule_uses_day_codes() {
    let class: Class = serde_json::from_str(
        r#"{
            "id": "c1",
            "name": "Chemistry",
            "schedule": [{ "days": ["T", "TH"], "startDate": "2024-01-08" }]
        }"#,
    )
    .unwrap();

    let block = &class.schedule[0];
    assert_eq!(block.days, vec![DayCode::Tuesday, DayCode::Thursday]);
    assert!(block.weekdays().contains(Weekday::Tue));
    assert!(block.weekdays().contains(Weekday::Thu));
    assert_eq!(block.weekdays().len(), 2);

    let json: serde_json::Value = serde_json::to_value(&class).unwrap();
    assert_eq!(json["schedule"][0]["days"], serde_json::json!(["T", "TH"]));
}

#[test]
fn test_assignment_pattern_type_names() {
    let pattern: AssignmentRecurrencePattern =
        serde_json::from_str(r#"{ "type": "before-class" }"#).unwrap();
    assert_eq!(pattern.kind, AssignmentRecurrenceType::BeforeClass);
    assert_eq!(pattern.week_step(), None);

    let pattern: AssignmentRecurrencePattern =
        serde_json::from_str(r#"{ "type": "custom", "interval": 3, "daysOfWeek": [5] }"#).unwrap();
    assert_eq!(pattern.week_step(), Some(3));
    assert!(pattern.days_of_week.contains(Weekday::Fri));
}
