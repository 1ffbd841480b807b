// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_story, create_weekly_pattern, date, key};
use crate::{
    RecurrenceInstance, VirtualStory, create_virtual_story_instance,
    generate_recurrence_instances, get_instance_override, get_instance_status,
    is_instance_completed, is_instance_skipped, next_occurrence, should_show_instance,
    split_virtual_instance_id, virtual_instance_id, visible_virtual_instances,
};
use chrono::Weekday;
use lifeplan_domain::{Cadence, DateKey, InstanceOverride, RecurrencePattern, StatusId, Story};

fn create_story_with_overrides(overrides: &[(&str, InstanceOverride)]) -> Story {
    let mut pattern: RecurrencePattern = create_weekly_pattern(
        Cadence::Weekly,
        &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
    );
    for (day, entry) in overrides {
        pattern.instances.insert(key(day), entry.clone());
    }
    create_test_story(pattern, "2024-01-01")
}

fn completed() -> InstanceOverride {
    InstanceOverride {
        status: None,
        completed: Some(true),
        skipped: None,
    }
}

fn skipped() -> InstanceOverride {
    InstanceOverride {
        status: None,
        completed: None,
        skipped: Some(true),
    }
}

#[test]
fn test_override_applies_only_to_its_date() {
    let story: Story = create_story_with_overrides(&[("2024-03-01", completed())]);

    assert!(is_instance_completed(&story, key("2024-03-01")));
    assert!(!is_instance_completed(&story, key("2024-03-04")));
    assert_eq!(
        get_instance_status(&story, key("2024-03-01")),
        StatusId::new("to-do")
    );
    assert_eq!(story.status, StatusId::new("to-do"));
}

#[test]
fn test_status_override_takes_precedence() {
    let story: Story = create_story_with_overrides(&[(
        "2024-03-04",
        InstanceOverride {
            status: Some(StatusId::new("done")),
            completed: None,
            skipped: None,
        },
    )]);

    assert_eq!(
        get_instance_status(&story, key("2024-03-04")),
        StatusId::new("done")
    );
    assert_eq!(
        get_instance_status(&story, key("2024-03-06")),
        StatusId::new("to-do")
    );
}

#[test]
fn test_should_show_is_false_exactly_when_skipped() {
    let story: Story = create_story_with_overrides(&[
        ("2024-03-01", completed()),
        ("2024-03-04", skipped()),
        (
            "2024-03-06",
            InstanceOverride {
                status: None,
                completed: None,
                skipped: Some(false),
            },
        ),
    ]);

    assert!(should_show_instance(&story, key("2024-03-01")));
    assert!(!should_show_instance(&story, key("2024-03-04")));
    assert!(should_show_instance(&story, key("2024-03-06")));
    assert!(should_show_instance(&story, key("2024-03-08")));
    assert!(is_instance_skipped(&story, key("2024-03-04")));
}

#[test]
fn test_instance_queries_on_non_recurring_story() {
    let story: Story = Story::new("story-2", "One-off");

    assert!(get_instance_override(&story, key("2024-03-01")).is_none());
    assert!(should_show_instance(&story, key("2024-03-01")));
    assert!(!is_instance_completed(&story, key("2024-03-01")));
    assert_eq!(
        get_instance_status(&story, key("2024-03-01")),
        StatusId::new("backlog")
    );
}

#[test]
fn test_generate_recurrence_instances_resolves_each_date() {
    let story: Story = create_story_with_overrides(&[
        ("2024-03-01", completed()),
        ("2024-03-04", skipped()),
    ]);

    let instances: Vec<RecurrenceInstance> =
        generate_recurrence_instances(&story, date(2024, 3, 1), date(2024, 3, 8));

    let dates: Vec<DateKey> = instances.iter().map(|instance| instance.date).collect();
    assert_eq!(
        dates,
        vec![
            key("2024-03-01"),
            key("2024-03-04"),
            key("2024-03-06"),
            key("2024-03-08")
        ]
    );
    assert!(instances[0].completed);
    assert!(!instances[0].skipped);
    assert!(instances[1].skipped);
    assert!(instances.iter().all(|instance| !instance.is_original));
    assert!(instances.iter().all(|instance| instance.story_id == "story-1"));
}

#[test]
fn test_generate_for_non_recurring_story_is_empty() {
    let story: Story = Story::new("story-2", "One-off");

    let instances: Vec<RecurrenceInstance> =
        generate_recurrence_instances(&story, date(2024, 3, 1), date(2024, 3, 31));

    assert!(instances.is_empty());
}

#[test]
fn test_virtual_story_instance_links_back_to_template() {
    let story: Story = create_story_with_overrides(&[(
        "2024-03-06",
        InstanceOverride {
            status: Some(StatusId::new("in-progress")),
            completed: None,
            skipped: None,
        },
    )]);

    let virtual_story: VirtualStory = create_virtual_story_instance(&story, key("2024-03-06"));

    assert_eq!(virtual_story.story.id, "story-1-2024-03-06");
    assert_eq!(virtual_story.story.status, StatusId::new("in-progress"));
    assert_eq!(virtual_story.story.title, story.title);
    assert_eq!(virtual_story.template_id(), "story-1");
    assert_eq!(virtual_story.date(), key("2024-03-06"));
    assert!(virtual_story.meta.is_recurring_instance);
}

#[test]
fn test_virtual_story_serializes_metadata() {
    let story: Story = create_story_with_overrides(&[]);

    let virtual_story: VirtualStory = create_virtual_story_instance(&story, key("2024-03-06"));
    let value: serde_json::Value = serde_json::to_value(&virtual_story).unwrap();

    assert_eq!(value["id"], "story-1-2024-03-06");
    assert_eq!(value["_isRecurringInstance"], true);
    assert_eq!(value["_instanceDate"], "2024-03-06");
    assert_eq!(value["_originalId"], "story-1");
}

#[test]
fn test_visible_virtual_instances_omit_skipped() {
    let story: Story = create_story_with_overrides(&[("2024-03-04", skipped())]);

    let visible: Vec<VirtualStory> =
        visible_virtual_instances(&story, date(2024, 3, 1), date(2024, 3, 8));

    let ids: Vec<&str> = visible.iter().map(|v| v.story.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "story-1-2024-03-01",
            "story-1-2024-03-06",
            "story-1-2024-03-08"
        ]
    );
}

#[test]
fn test_next_occurrence_is_strictly_after() {
    let story: Story = create_story_with_overrides(&[]);

    assert_eq!(
        next_occurrence(&story, date(2024, 3, 1)),
        Some(date(2024, 3, 4))
    );
    assert_eq!(
        next_occurrence(&story, date(2023, 6, 1)),
        Some(date(2024, 1, 1))
    );
}

#[test]
fn test_next_occurrence_passes_over_skipped() {
    let story: Story = create_story_with_overrides(&[("2024-03-04", skipped())]);

    assert_eq!(
        next_occurrence(&story, date(2024, 3, 1)),
        Some(date(2024, 3, 6))
    );
}

#[test]
fn test_next_occurrence_without_creation_day() {
    let mut story: Story = create_story_with_overrides(&[]);
    story.created_at = None;

    // 2024-03-05 is a Tuesday
    assert_eq!(
        next_occurrence(&story, date(2024, 3, 5)),
        Some(date(2024, 3, 6))
    );
}

#[test]
fn test_next_occurrence_after_end_is_none() {
    let mut story: Story = create_story_with_overrides(&[]);
    if let Some(pattern) = story.repeat.as_mut() {
        pattern.end_date = Some(key("2024-02-01"));
    }

    assert_eq!(next_occurrence(&story, date(2024, 2, 1)), None);
}

#[test]
fn test_virtual_instance_id_round_trip() {
    let id: String = virtual_instance_id("story-1", key("2024-03-04"));

    assert_eq!(id, "story-1-2024-03-04");
    assert_eq!(
        split_virtual_instance_id(&id),
        Some(("story-1", key("2024-03-04")))
    );
}

#[test]
fn test_split_virtual_instance_id_rejects_plain_ids() {
    assert_eq!(split_virtual_instance_id("story-1"), None);
    assert_eq!(split_virtual_instance_id("-2024-03-04"), None);
    assert_eq!(split_virtual_instance_id("story-1-2024-13-04"), None);
    assert_eq!(split_virtual_instance_id("story-1_2024-03-04"), None);
}
