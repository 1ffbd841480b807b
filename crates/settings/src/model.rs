// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SettingsError;
use lifeplan_domain::{normalize_key, validate_color};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

/// Free-form color maps: map name to (key to color).
pub type ColorMaps = BTreeMap<String, BTreeMap<String, String>>;

/// A named category entry with its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    /// Display name; also the lookup key once normalized.
    pub name: String,
    /// `#RGB` or `#RRGGBB`.
    pub color: String,
}

impl NamedColor {
    /// Creates an entry.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Returns the normalized lookup key of this entry.
    #[must_use]
    pub fn key(&self) -> String {
        normalize_key(&self.name)
    }
}

/// A named-color category of the settings bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    StoryTypes,
    GoalTypes,
    Priorities,
    Statuses,
    Sizes,
    TaskCategories,
    GoalStatuses,
    ProjectStatuses,
    TraditionTypes,
    TraditionalCategories,
    BucketlistCategories,
}

impl Category {
    /// Every category, in persisted field order.
    pub const ALL: [Self; 11] = [
        Self::StoryTypes,
        Self::GoalTypes,
        Self::Priorities,
        Self::Statuses,
        Self::Sizes,
        Self::TaskCategories,
        Self::GoalStatuses,
        Self::ProjectStatuses,
        Self::TraditionTypes,
        Self::TraditionalCategories,
        Self::BucketlistCategories,
    ];

    /// Returns the persisted field name of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StoryTypes => "storyTypes",
            Self::GoalTypes => "goalTypes",
            Self::Priorities => "priorities",
            Self::Statuses => "statuses",
            Self::Sizes => "sizes",
            Self::TaskCategories => "taskCategories",
            Self::GoalStatuses => "goalStatuses",
            Self::ProjectStatuses => "projectStatuses",
            Self::TraditionTypes => "traditionTypes",
            Self::TraditionalCategories => "traditionalCategories",
            Self::BucketlistCategories => "bucketlistCategories",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = SettingsError;

    /// Accepts the persisted name (`goalTypes`) or its kebab form
    /// (`goal-types`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().replace(['-', '_'], "").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| SettingsError::UnknownCategory(s.to_string()))
    }
}

/// The user-editable settings bag.
///
/// Every category is optional; an absent category falls back to the
/// built-in defaults when read through a mirror. Unknown JSON fields are
/// ignored so newer files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_types: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_types: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priorities: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_categories: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_statuses: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_statuses: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tradition_types: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traditional_categories: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucketlist_categories: Option<Vec<NamedColor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_maps: Option<ColorMaps>,
}

impl Settings {
    /// Returns the configured entries of a category, if the category is
    /// present.
    #[must_use]
    pub fn entries(&self, category: Category) -> Option<&[NamedColor]> {
        self.slot(category).as_deref()
    }

    /// Returns a mutable handle on a category's storage.
    pub const fn slot_mut(&mut self, category: Category) -> &mut Option<Vec<NamedColor>> {
        match category {
            Category::StoryTypes => &mut self.story_types,
            Category::GoalTypes => &mut self.goal_types,
            Category::Priorities => &mut self.priorities,
            Category::Statuses => &mut self.statuses,
            Category::Sizes => &mut self.sizes,
            Category::TaskCategories => &mut self.task_categories,
            Category::GoalStatuses => &mut self.goal_statuses,
            Category::ProjectStatuses => &mut self.project_statuses,
            Category::TraditionTypes => &mut self.tradition_types,
            Category::TraditionalCategories => &mut self.traditional_categories,
            Category::BucketlistCategories => &mut self.bucketlist_categories,
        }
    }

    const fn slot(&self, category: Category) -> &Option<Vec<NamedColor>> {
        match category {
            Category::StoryTypes => &self.story_types,
            Category::GoalTypes => &self.goal_types,
            Category::Priorities => &self.priorities,
            Category::Statuses => &self.statuses,
            Category::Sizes => &self.sizes,
            Category::TaskCategories => &self.task_categories,
            Category::GoalStatuses => &self.goal_statuses,
            Category::ProjectStatuses => &self.project_statuses,
            Category::TraditionTypes => &self.tradition_types,
            Category::TraditionalCategories => &self.traditional_categories,
            Category::BucketlistCategories => &self.bucketlist_categories,
        }
    }

    /// Cleans a freshly loaded bag so readers can trust it.
    ///
    /// For every category list:
    /// - names are trimmed
    /// - entries with an empty name or a malformed color are dropped
    /// - entries whose normalized key repeats an earlier one are dropped
    /// - hex digits are uppercased
    ///
    /// Color-map entries with malformed colors are dropped the same way.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for category in Category::ALL {
            if let Some(entries) = self.slot_mut(category).take() {
                *self.slot_mut(category) = Some(normalize_entries(category, entries));
            }
        }

        if let Some(maps) = self.color_maps.as_mut() {
            for (map_name, map) in maps {
                map.retain(|key, color| {
                    if validate_color(color).is_err() {
                        warn!(map = %map_name, %key, %color, "dropping color with invalid hex");
                        return false;
                    }
                    *color = color.to_ascii_uppercase();
                    true
                });
            }
        }

        self
    }
}

fn normalize_entries(category: Category, entries: Vec<NamedColor>) -> Vec<NamedColor> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<NamedColor> = Vec::with_capacity(entries.len());

    for entry in entries {
        let name: &str = entry.name.trim();
        if name.is_empty() {
            warn!(%category, "dropping entry with empty name");
            continue;
        }
        if validate_color(&entry.color).is_err() {
            warn!(%category, name, color = %entry.color, "dropping entry with invalid color");
            continue;
        }
        if !seen.insert(normalize_key(name)) {
            warn!(%category, name, "dropping duplicate entry");
            continue;
        }

        kept.push(NamedColor::new(name, entry.color.to_ascii_uppercase()));
    }

    kept
}
