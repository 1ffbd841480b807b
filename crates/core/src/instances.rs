// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-occurrence state resolution and virtual story instances.
//!
//! A recurring story is stored once, as a template. Each occurrence is
//! resolved on demand by layering the template's `instances[date]` override
//! (if any) over the template's own fields. Nothing here writes back to the
//! template; edits go through [`crate::apply`].

use crate::occurrences::{Occurrences, occurrences_in_window};
use chrono::NaiveDate;
use lifeplan_domain::{DateKey, InstanceOverride, StatusId, Story, add_days};
use serde::Serialize;

/// One computed occurrence of a recurring story.
///
/// Instances are generated fresh for every query and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceInstance {
    /// The occurrence date.
    pub date: DateKey,
    /// The template this occurrence belongs to.
    pub story_id: String,
    /// Resolved status.
    pub status: StatusId,
    /// Whether this occurrence has been completed.
    pub completed: bool,
    /// Whether this occurrence has been skipped.
    pub skipped: bool,
    /// Always `false` for computed instances.
    pub is_original: bool,
}

/// Traceability fields attached to a virtual story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceMeta {
    /// Always `true`.
    #[serde(rename = "_isRecurringInstance")]
    pub is_recurring_instance: bool,
    /// The occurrence date this instance represents.
    #[serde(rename = "_instanceDate")]
    pub instance_date: DateKey,
    /// The id of the template the instance was built from.
    #[serde(rename = "_originalId")]
    pub original_id: String,
}

/// A shallow copy of a story template standing in for one occurrence.
///
/// The copy's id is `{template_id}-{date}` so every occurrence can be keyed
/// uniquely in a list, and its status is the resolved per-date status.
/// Serializes as the story's fields plus the `_`-prefixed metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VirtualStory {
    /// The rewritten story copy.
    #[serde(flatten)]
    pub story: Story,
    /// Link back to the template.
    #[serde(flatten)]
    pub meta: InstanceMeta,
}

impl VirtualStory {
    /// Returns the id of the template this instance was built from.
    #[must_use]
    pub fn template_id(&self) -> &str {
        &self.meta.original_id
    }

    /// Returns the occurrence date.
    #[must_use]
    pub const fn date(&self) -> DateKey {
        self.meta.instance_date
    }
}

/// Returns the override stored on a story for a date, if any.
///
/// Returns `None` for non-recurring stories and dates without an override.
#[must_use]
pub fn get_instance_override(story: &Story, date: DateKey) -> Option<&InstanceOverride> {
    story.repeat.as_ref()?.instance(date)
}

/// Returns whether an occurrence should be displayed.
///
/// True unless the occurrence has been explicitly skipped.
#[must_use]
pub fn should_show_instance(story: &Story, date: DateKey) -> bool {
    !is_instance_skipped(story, date)
}

/// Returns whether an occurrence has been skipped.
#[must_use]
pub fn is_instance_skipped(story: &Story, date: DateKey) -> bool {
    get_instance_override(story, date).is_some_and(|entry| entry.skipped == Some(true))
}

/// Returns whether an occurrence has been completed.
///
/// Occurrences without an override are not completed, regardless of the
/// template's own status.
#[must_use]
pub fn is_instance_completed(story: &Story, date: DateKey) -> bool {
    get_instance_override(story, date).is_some_and(|entry| entry.completed == Some(true))
}

/// Returns the effective status of an occurrence.
///
/// The override's status when present, otherwise the template's status.
#[must_use]
pub fn get_instance_status(story: &Story, date: DateKey) -> StatusId {
    get_instance_override(story, date)
        .and_then(|entry| entry.status.clone())
        .unwrap_or_else(|| story.status.clone())
}

/// Returns the date recurrence is anchored to, falling back to `fallback`
/// for stories without a creation day.
fn anchor_of(story: &Story, fallback: NaiveDate) -> NaiveDate {
    story.created_at.map_or(fallback, |created| created.date())
}

/// Expands a story into its occurrences within a window.
///
/// Skipped occurrences are included (with `skipped` set); filter with
/// [`should_show_instance`] or use [`visible_virtual_instances`] for display.
///
/// # Arguments
///
/// * `story` - The template
/// * `window_start` - First visible day, inclusive
/// * `window_end` - Last visible day, inclusive
///
/// # Returns
///
/// Instances in date order. Empty for non-recurring stories or an inverted
/// window.
#[must_use]
pub fn generate_recurrence_instances(
    story: &Story,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<RecurrenceInstance> {
    let Some(pattern) = story.recurrence() else {
        return Vec::new();
    };

    occurrences_in_window(
        pattern,
        anchor_of(story, window_start),
        window_start,
        window_end,
    )
    .into_iter()
    .map(|date| {
        let key: DateKey = DateKey::new(date);
        RecurrenceInstance {
            date: key,
            story_id: story.id.clone(),
            status: get_instance_status(story, key),
            completed: is_instance_completed(story, key),
            skipped: is_instance_skipped(story, key),
            is_original: false,
        }
    })
    .collect()
}

/// Builds the virtual story standing in for one occurrence.
///
/// The result must never be persisted; edits to it are expressed as
/// override commands against the template.
#[must_use]
pub fn create_virtual_story_instance(story: &Story, date: DateKey) -> VirtualStory {
    let mut copy: Story = story.clone();
    copy.id = virtual_instance_id(&story.id, date);
    copy.status = get_instance_status(story, date);

    VirtualStory {
        story: copy,
        meta: InstanceMeta {
            is_recurring_instance: true,
            instance_date: date,
            original_id: story.id.clone(),
        },
    }
}

/// Builds virtual stories for every non-skipped occurrence in a window.
#[must_use]
pub fn visible_virtual_instances(
    story: &Story,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<VirtualStory> {
    generate_recurrence_instances(story, window_start, window_end)
        .into_iter()
        .filter(|instance| !instance.skipped)
        .map(|instance| create_virtual_story_instance(story, instance.date))
        .collect()
}

/// Returns the first non-skipped occurrence strictly after `after`.
///
/// Stories without a creation day are anchored to the day after `after`.
#[must_use]
pub fn next_occurrence(story: &Story, after: NaiveDate) -> Option<NaiveDate> {
    let pattern = story.recurrence()?;
    let anchor: NaiveDate = anchor_of(story, add_days(after, 1)?);

    Occurrences::new(pattern, anchor)
        .find(|date| *date > after && should_show_instance(story, DateKey::new(*date)))
}

/// Returns the id given to the virtual instance of `template_id` on `date`.
#[must_use]
pub fn virtual_instance_id(template_id: &str, date: DateKey) -> String {
    format!("{template_id}-{date}")
}

/// Splits a virtual instance id back into its template id and date.
///
/// Returns `None` when the id does not end in `-YYYY-MM-DD`.
#[must_use]
pub fn split_virtual_instance_id(id: &str) -> Option<(&str, DateKey)> {
    let split: usize = id.len().checked_sub(11)?;
    let (template_id, suffix) = id.split_at_checked(split)?;
    let date: DateKey = suffix.strip_prefix('-')?.parse().ok()?;

    if template_id.is_empty() {
        return None;
    }

    Some((template_id, date))
}
