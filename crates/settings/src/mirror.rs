// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-domain color accessors over the settings bag.
//!
//! A mirror is a borrowed view: it holds no copy of the settings, so every
//! lookup reads the bag as it is right now. Lookups never fail; unknown
//! keys, absent categories and empty lists all resolve to
//! [`DEFAULT_COLOR`].

use crate::defaults::{DEFAULT_COLOR, DefaultColor, defaults_for};
use crate::model::{Category, NamedColor, Settings};
use lifeplan_domain::normalize_key;
use tracing::trace;

/// Resolves the color of `key` within a category.
///
/// Keys are compared after normalization, so `"In Progress"`,
/// `"in progress"` and `"in-progress"` all find the same entry. When the
/// category is absent from the bag, the built-in palette is searched
/// instead.
#[must_use]
pub fn resolve_color<'a>(settings: &'a Settings, category: Category, key: &str) -> &'a str {
    let wanted: String = normalize_key(key);

    let found: Option<&'a str> = match settings.entries(category) {
        Some(entries) => entries
            .iter()
            .find(|entry| entry.key() == wanted)
            .map(|entry| entry.color.as_str()),
        None => defaults_for(category)
            .iter()
            .find(|entry| normalize_key(entry.name) == wanted)
            .map(|entry| entry.color),
    };

    found.unwrap_or_else(|| {
        trace!(%category, key, "no color for key; using default");
        DEFAULT_COLOR
    })
}

/// Looks up `key` in a free-form color map.
///
/// Map keys are ids, not display names, and are matched exactly.
#[must_use]
pub fn color_from_map<'a>(settings: &'a Settings, map: &str, key: &str) -> &'a str {
    settings
        .color_maps
        .as_ref()
        .and_then(|maps| maps.get(map))
        .and_then(|colors| colors.get(key))
        .map_or(DEFAULT_COLOR, String::as_str)
}

/// Returns the configured entries of a category, or the built-in palette
/// when the category is absent.
fn entries_or_defaults(settings: &Settings, category: Category) -> Vec<NamedColor> {
    settings.entries(category).map_or_else(
        || {
            defaults_for(category)
                .iter()
                .copied()
                .map(DefaultColor::to_named)
                .collect()
        },
        <[NamedColor]>::to_vec,
    )
}

/// Story and task colors.
#[derive(Debug, Clone, Copy)]
pub struct StorySettings<'a> {
    settings: &'a Settings,
}

impl<'a> StorySettings<'a> {
    /// Creates a story view over `settings`.
    #[must_use]
    pub const fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Returns the priority palette, or the built-in one when unset.
    #[must_use]
    pub fn priorities(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::Priorities)
    }

    /// Returns the status palette, or the built-in one when unset.
    #[must_use]
    pub fn statuses(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::Statuses)
    }

    /// Returns the story type palette, or the built-in one when unset.
    #[must_use]
    pub fn story_types(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::StoryTypes)
    }

    /// Returns the size palette, or the built-in one when unset.
    #[must_use]
    pub fn sizes(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::Sizes)
    }

    /// Returns the task category palette, or the built-in one when unset.
    #[must_use]
    pub fn task_categories(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::TaskCategories)
    }

    /// Resolves a story priority color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_priority_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::Priorities, key)
    }

    /// Resolves a status color. Accepts both display names and status ids.
    #[must_use]
    pub fn get_status_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::Statuses, key)
    }

    /// Resolves a story type color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_type_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::StoryTypes, key)
    }

    /// Resolves a story size color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_size_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::Sizes, key)
    }

    /// Resolves a story task category color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_task_category_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::TaskCategories, key)
    }
}

/// Goal colors.
#[derive(Debug, Clone, Copy)]
pub struct GoalSettings<'a> {
    settings: &'a Settings,
}

impl<'a> GoalSettings<'a> {
    /// Creates a goal view over `settings`.
    #[must_use]
    pub const fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Returns the goal type palette, or the built-in one when unset.
    #[must_use]
    pub fn goal_types(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::GoalTypes)
    }

    /// Returns the goal status palette, or the built-in one when unset.
    #[must_use]
    pub fn goal_statuses(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::GoalStatuses)
    }

    /// Resolves a goal type color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_type_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::GoalTypes, key)
    }

    /// Resolves a goal status color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_status_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::GoalStatuses, key)
    }

    /// Goals share the story priority scale.
    #[must_use]
    pub fn get_priority_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::Priorities, key)
    }
}

/// Project colors.
#[derive(Debug, Clone, Copy)]
pub struct ProjectSettings<'a> {
    settings: &'a Settings,
}

impl<'a> ProjectSettings<'a> {
    /// Creates a project view over `settings`.
    #[must_use]
    pub const fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Returns the project status palette, or the built-in one when unset.
    #[must_use]
    pub fn project_statuses(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::ProjectStatuses)
    }

    /// Resolves a project status color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_status_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::ProjectStatuses, key)
    }

    /// Resolves a project priority color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_priority_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::Priorities, key)
    }

    /// Resolves the color assigned to one project id.
    #[must_use]
    pub fn get_project_color(&self, project_id: &str) -> &'a str {
        color_from_map(self.settings, "projects", project_id)
    }
}

/// Tradition colors.
#[derive(Debug, Clone, Copy)]
pub struct TraditionSettings<'a> {
    settings: &'a Settings,
}

impl<'a> TraditionSettings<'a> {
    /// Creates a tradition view over `settings`.
    #[must_use]
    pub const fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Returns the tradition type palette, or the built-in one when unset.
    #[must_use]
    pub fn tradition_types(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::TraditionTypes)
    }

    /// Returns the tradition category palette, or the built-in one when unset.
    #[must_use]
    pub fn traditional_categories(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::TraditionalCategories)
    }

    /// Resolves a tradition type color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_type_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::TraditionTypes, key)
    }

    /// Resolves a tradition category color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_category_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::TraditionalCategories, key)
    }
}

/// Bucketlist colors.
#[derive(Debug, Clone, Copy)]
pub struct BucketlistSettings<'a> {
    settings: &'a Settings,
}

impl<'a> BucketlistSettings<'a> {
    /// Creates a bucketlist view over `settings`.
    #[must_use]
    pub const fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Returns the bucketlist category palette, or the built-in one when unset.
    #[must_use]
    pub fn bucketlist_categories(&self) -> Vec<NamedColor> {
        entries_or_defaults(self.settings, Category::BucketlistCategories)
    }

    /// Resolves a bucketlist category color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn get_category_color(&self, key: &str) -> &'a str {
        resolve_color(self.settings, Category::BucketlistCategories, key)
    }
}
