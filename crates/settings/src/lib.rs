// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Settings for the life planner.
//!
//! The persisted settings bag is partial by nature: every category is
//! optional, and entries typed by the user may use keys no accessor knows.
//! This crate turns that bag into color lookups that always succeed.
//!
//! - [`Settings`] is the typed bag, cleaned once at load by
//!   [`Settings::normalized`].
//! - The mirrors ([`StorySettings`], [`GoalSettings`], ...) borrow the bag
//!   and resolve colors on every call, so edits are visible on the next
//!   read without invalidation.
//! - [`SettingsStore`] owns the bag, persists it as JSON and exposes the
//!   administrative resets.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod defaults;
mod error;
mod mirror;
mod model;
mod store;

#[cfg(test)]
mod tests;

pub use defaults::{DEFAULT_COLOR, DefaultColor, defaults_for};
pub use error::SettingsError;
pub use mirror::{
    BucketlistSettings, GoalSettings, ProjectSettings, StorySettings, TraditionSettings,
    color_from_map, resolve_color,
};
pub use model::{Category, ColorMaps, NamedColor, Settings};
pub use store::SettingsStore;
