// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_story, create_weekly_pattern, key};
use crate::{
    Command, CoreError, TransitionResult, apply, get_instance_status, is_instance_completed,
    is_instance_skipped, should_show_instance,
};
use chrono::Weekday;
use lifeplan_domain::{Cadence, InstanceOverride, StatusId, Story};

fn create_mwf_story() -> Story {
    create_test_story(
        create_weekly_pattern(
            Cadence::Weekly,
            &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
        ),
        "2024-01-01",
    )
}

#[test]
fn test_complete_instance_returns_new_story() {
    let story: Story = create_mwf_story();
    let command: Command = Command::CompleteInstance {
        date: key("2024-03-01"),
    };

    let result: Result<TransitionResult, CoreError> = apply(&story, command);

    assert!(result.is_ok());
    let transition: TransitionResult = result.unwrap();
    assert_eq!(transition.date, key("2024-03-01"));
    assert!(transition.before.is_none());
    assert_eq!(
        transition.after,
        Some(InstanceOverride {
            status: None,
            completed: Some(true),
            skipped: None,
        })
    );
    assert!(is_instance_completed(
        &transition.new_story,
        key("2024-03-01")
    ));
}

#[test]
fn test_apply_leaves_input_story_unchanged() {
    let story: Story = create_mwf_story();
    let original: Story = story.clone();

    let _transition: TransitionResult = apply(
        &story,
        Command::SkipInstance {
            date: key("2024-03-01"),
        },
    )
    .unwrap();

    assert_eq!(story, original);
}

#[test]
fn test_completing_one_date_does_not_touch_template_or_neighbours() {
    let story: Story = create_mwf_story();

    let transition: TransitionResult = apply(
        &story,
        Command::CompleteInstance {
            date: key("2024-03-01"),
        },
    )
    .unwrap();
    let new_story: Story = transition.new_story;

    assert_eq!(new_story.status, StatusId::new("to-do"));
    assert_eq!(
        get_instance_status(&new_story, key("2024-03-01")),
        StatusId::new("to-do")
    );
    assert!(!is_instance_completed(&new_story, key("2024-03-04")));
    assert!(!is_instance_completed(&new_story, key("2024-02-28")));
    assert_eq!(new_story.repeat.as_ref().unwrap().instances.len(), 1);
}

#[test]
fn test_reopen_removes_empty_override() {
    let story: Story = create_mwf_story();
    let completed: Story = apply(
        &story,
        Command::CompleteInstance {
            date: key("2024-03-01"),
        },
    )
    .unwrap()
    .new_story;

    let transition: TransitionResult = apply(
        &completed,
        Command::ReopenInstance {
            date: key("2024-03-01"),
        },
    )
    .unwrap();

    assert!(transition.before.is_some());
    assert!(transition.after.is_none());
    assert!(
        transition
            .new_story
            .repeat
            .as_ref()
            .unwrap()
            .instances
            .is_empty()
    );
}

#[test]
fn test_skip_hides_instance_and_restore_shows_it() {
    let story: Story = create_mwf_story();

    let skipped: Story = apply(
        &story,
        Command::SkipInstance {
            date: key("2024-03-04"),
        },
    )
    .unwrap()
    .new_story;

    assert!(is_instance_skipped(&skipped, key("2024-03-04")));
    assert!(!should_show_instance(&skipped, key("2024-03-04")));

    let restored: Story = apply(
        &skipped,
        Command::RestoreInstance {
            date: key("2024-03-04"),
        },
    )
    .unwrap()
    .new_story;

    assert!(should_show_instance(&restored, key("2024-03-04")));
    assert!(restored.repeat.as_ref().unwrap().instances.is_empty());
}

#[test]
fn test_set_instance_status_stores_delta() {
    let story: Story = create_mwf_story();

    let transition: TransitionResult = apply(
        &story,
        Command::SetInstanceStatus {
            date: key("2024-03-06"),
            status: StatusId::new("In Progress"),
        },
    )
    .unwrap();

    assert_eq!(
        get_instance_status(&transition.new_story, key("2024-03-06")),
        StatusId::new("in-progress")
    );
    assert_eq!(transition.new_story.status, StatusId::new("to-do"));
}

#[test]
fn test_set_instance_status_to_template_status_clears_delta() {
    let story: Story = create_mwf_story();
    let changed: Story = apply(
        &story,
        Command::SetInstanceStatus {
            date: key("2024-03-06"),
            status: StatusId::new("done"),
        },
    )
    .unwrap()
    .new_story;

    let transition: TransitionResult = apply(
        &changed,
        Command::SetInstanceStatus {
            date: key("2024-03-06"),
            status: StatusId::new("To Do"),
        },
    )
    .unwrap();

    assert!(transition.after.is_none());
    assert!(
        transition
            .new_story
            .repeat
            .as_ref()
            .unwrap()
            .instances
            .is_empty()
    );
}

#[test]
fn test_clear_instance_drops_all_overrides() {
    let story: Story = create_mwf_story();
    let mut edited: Story = story;
    for command in [
        Command::CompleteInstance {
            date: key("2024-03-01"),
        },
        Command::SetInstanceStatus {
            date: key("2024-03-01"),
            status: StatusId::new("done"),
        },
    ] {
        edited = apply(&edited, command).unwrap().new_story;
    }

    let transition: TransitionResult = apply(
        &edited,
        Command::ClearInstance {
            date: key("2024-03-01"),
        },
    )
    .unwrap();

    assert!(transition.after.is_none());
    assert!(
        transition
            .new_story
            .repeat
            .as_ref()
            .unwrap()
            .instances
            .is_empty()
    );
}

#[test]
fn test_apply_to_non_occurrence_fails() {
    let story: Story = create_mwf_story();

    // 2024-03-05 is a Tuesday
    let result: Result<TransitionResult, CoreError> = apply(
        &story,
        Command::CompleteInstance {
            date: key("2024-03-05"),
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::NotAnOccurrence {
            story_id: String::from("story-1"),
            date: key("2024-03-05"),
        }
    );
}

#[test]
fn test_apply_before_creation_fails() {
    let story: Story = create_mwf_story();

    let result: Result<TransitionResult, CoreError> = apply(
        &story,
        Command::CompleteInstance {
            date: key("2023-12-29"),
        },
    );

    assert!(matches!(result, Err(CoreError::NotAnOccurrence { .. })));
}

#[test]
fn test_apply_to_non_recurring_story_fails() {
    let story: Story = Story::new("story-2", "One-off");

    let result: Result<TransitionResult, CoreError> = apply(
        &story,
        Command::CompleteInstance {
            date: key("2024-03-01"),
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::NotRecurring {
            story_id: String::from("story-2"),
        }
    );
}

#[test]
fn test_core_error_display() {
    let err: CoreError = CoreError::NotAnOccurrence {
        story_id: String::from("story-1"),
        date: key("2024-03-05"),
    };

    assert_eq!(
        err.to_string(),
        "2024-03-05 is not an occurrence of story 'story-1'"
    );
}
