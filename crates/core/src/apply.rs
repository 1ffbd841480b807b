// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::occurrences::is_occurrence;
use crate::state::TransitionResult;
use chrono::NaiveDate;
use lifeplan_domain::{DateKey, InstanceOverride, RecurrencePattern, Story};
use tracing::debug;

/// Applies an override command to a story template, producing a new
/// template.
///
/// The input story is never modified. Overrides that end up carrying no
/// delta are removed from the map, so `instances` only ever holds dates that
/// actually differ from the template.
///
/// # Arguments
///
/// * `story` - The current template (immutable)
/// * `command` - The edit to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new template and the override
///   before and after the edit
/// * `Err(CoreError)` if the command cannot apply
///
/// # Errors
///
/// Returns an error if:
/// - The story does not repeat
/// - The date is not an occurrence of the story
pub fn apply(story: &Story, command: Command) -> Result<TransitionResult, CoreError> {
    let date: DateKey = command.date();

    let Some(pattern) = story.recurrence() else {
        return Err(CoreError::NotRecurring {
            story_id: story.id.clone(),
        });
    };

    // Without a creation day, only the weekday and month filters can be
    // checked, so anchor at the date itself.
    let anchor: NaiveDate = story.created_at.map_or(date.date(), |created| created.date());
    if !is_occurrence(pattern, anchor, date.date()) {
        return Err(CoreError::NotAnOccurrence {
            story_id: story.id.clone(),
            date,
        });
    }

    let before: Option<InstanceOverride> = pattern.instance(date).cloned();
    let mut entry: InstanceOverride = before.clone().unwrap_or_default();
    let command_name: &'static str = command.name();

    match command {
        Command::CompleteInstance { .. } => entry.completed = Some(true),
        Command::ReopenInstance { .. } => entry.completed = None,
        Command::SkipInstance { .. } => entry.skipped = Some(true),
        Command::RestoreInstance { .. } => entry.skipped = None,
        Command::SetInstanceStatus { status, .. } => {
            entry.status = (status != story.status).then_some(status);
        }
        Command::ClearInstance { .. } => entry = InstanceOverride::default(),
    }

    let after: Option<InstanceOverride> = (!entry.is_empty()).then_some(entry);

    let mut new_story: Story = story.clone();
    if let Some(new_pattern) = new_story.repeat.as_mut() {
        store_override(new_pattern, date, after.clone());
    }

    debug!(
        story_id = %story.id,
        %date,
        command = command_name,
        "applied instance override"
    );

    Ok(TransitionResult {
        new_story,
        date,
        before,
        after,
    })
}

fn store_override(
    pattern: &mut RecurrencePattern,
    date: DateKey,
    entry: Option<InstanceOverride>,
) {
    match entry {
        Some(entry) => {
            pattern.instances.insert(date, entry);
        }
        None => {
            pattern.instances.remove(&date);
        }
    }
}
