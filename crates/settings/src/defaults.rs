// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Built-in category palettes.
//!
//! Used whenever a category is missing from the settings bag. A present
//! but empty list is the user's choice and does not fall back here.

use crate::model::{Category, NamedColor};

/// Neutral gray returned for any key no category knows.
pub const DEFAULT_COLOR: &str = "#6B7280";

/// A built-in category entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultColor {
    pub name: &'static str,
    pub color: &'static str,
}

impl DefaultColor {
    const fn new(name: &'static str, color: &'static str) -> Self {
        Self { name, color }
    }

    /// Returns an owned settings entry with the same name and color.
    #[must_use]
    pub fn to_named(self) -> NamedColor {
        NamedColor::new(self.name, self.color)
    }
}

const LIFE_AREAS: &[DefaultColor] = &[
    DefaultColor::new("Spiritual", "#8B5CF6"),
    DefaultColor::new("Physical", "#EF4444"),
    DefaultColor::new("Intellectual", "#3B82F6"),
    DefaultColor::new("Social", "#10B981"),
    DefaultColor::new("Financial", "#F59E0B"),
    DefaultColor::new("Protector", "#6366F1"),
];

const PRIORITIES: &[DefaultColor] = &[
    DefaultColor::new("Q1", "#EF4444"),
    DefaultColor::new("Q2", "#F59E0B"),
    DefaultColor::new("Q3", "#3B82F6"),
    DefaultColor::new("Q4", "#6B7280"),
];

const STATUSES: &[DefaultColor] = &[
    DefaultColor::new("Icebox", "#9CA3AF"),
    DefaultColor::new("Backlog", "#6B7280"),
    DefaultColor::new("To Do", "#3B82F6"),
    DefaultColor::new("In Progress", "#F59E0B"),
    DefaultColor::new("Review", "#8B5CF6"),
    DefaultColor::new("Done", "#10B981"),
];

const SIZES: &[DefaultColor] = &[
    DefaultColor::new("XS", "#10B981"),
    DefaultColor::new("S", "#3B82F6"),
    DefaultColor::new("M", "#F59E0B"),
    DefaultColor::new("L", "#F97316"),
    DefaultColor::new("XL", "#EF4444"),
];

const TASK_CATEGORIES: &[DefaultColor] = &[
    DefaultColor::new("Decisions", "#8B5CF6"),
    DefaultColor::new("Actions", "#3B82F6"),
    DefaultColor::new("Involve Others", "#10B981"),
];

const GOAL_STATUSES: &[DefaultColor] = &[
    DefaultColor::new("Icebox", "#9CA3AF"),
    DefaultColor::new("Backlog", "#6B7280"),
    DefaultColor::new("In Progress", "#F59E0B"),
    DefaultColor::new("Done", "#10B981"),
];

const PROJECT_STATUSES: &[DefaultColor] = &[
    DefaultColor::new("Planning", "#6B7280"),
    DefaultColor::new("Active", "#3B82F6"),
    DefaultColor::new("On Hold", "#F59E0B"),
    DefaultColor::new("Completed", "#10B981"),
];

const TRADITION_TYPES: &[DefaultColor] = &[
    DefaultColor::new("Holiday", "#EF4444"),
    DefaultColor::new("Birthday", "#EC4899"),
    DefaultColor::new("Anniversary", "#8B5CF6"),
    DefaultColor::new("Seasonal", "#10B981"),
];

const TRADITIONAL_CATEGORIES: &[DefaultColor] = &[
    DefaultColor::new("Family", "#3B82F6"),
    DefaultColor::new("Faith", "#8B5CF6"),
    DefaultColor::new("Food", "#F59E0B"),
    DefaultColor::new("Travel", "#10B981"),
];

const BUCKETLIST_CATEGORIES: &[DefaultColor] = &[
    DefaultColor::new("Adventure", "#EF4444"),
    DefaultColor::new("Travel", "#3B82F6"),
    DefaultColor::new("Learning", "#8B5CF6"),
    DefaultColor::new("Experience", "#10B981"),
];

/// Returns the built-in palette of a category.
#[must_use]
pub const fn defaults_for(category: Category) -> &'static [DefaultColor] {
    match category {
        Category::StoryTypes | Category::GoalTypes => LIFE_AREAS,
        Category::Priorities => PRIORITIES,
        Category::Statuses => STATUSES,
        Category::Sizes => SIZES,
        Category::TaskCategories => TASK_CATEGORIES,
        Category::GoalStatuses => GOAL_STATUSES,
        Category::ProjectStatuses => PROJECT_STATUSES,
        Category::TraditionTypes => TRADITION_TYPES,
        Category::TraditionalCategories => TRADITIONAL_CATEGORIES,
        Category::BucketlistCategories => BUCKETLIST_CATEGORIES,
    }
}
