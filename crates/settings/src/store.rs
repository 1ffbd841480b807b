// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SettingsError;
use crate::mirror::{
    BucketlistSettings, GoalSettings, ProjectSettings, StorySettings, TraditionSettings,
};
use crate::model::{Category, Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Owns the settings bag and its JSON file.
///
/// Writes are whole-file and last-writer-wins. The store is meant for a
/// single user; concurrent writers to the same file overwrite each other.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    settings: Settings,
}

impl SettingsStore {
    /// Creates an in-memory store with no backing file.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            path: None,
            settings: settings.normalized(),
        }
    }

    /// Opens the settings file at `path`.
    ///
    /// A missing file yields empty settings; the file is created on the
    /// first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid settings JSON.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path: PathBuf = path.into();

        let settings: Settings = if path.exists() {
            let raw: String = std::fs::read_to_string(&path).map_err(|source| {
                SettingsError::Read {
                    path: path.clone(),
                    source,
                }
            })?;
            let parsed: Settings =
                serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), "loaded settings");
            parsed.normalized()
        } else {
            info!(path = %path.display(), "no settings file; using defaults");
            Settings::default()
        };

        Ok(Self {
            path: Some(path),
            settings,
        })
    }

    /// Returns the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn story(&self) -> StorySettings<'_> {
        StorySettings::new(&self.settings)
    }

    #[must_use]
    pub const fn goal(&self) -> GoalSettings<'_> {
        GoalSettings::new(&self.settings)
    }

    #[must_use]
    pub const fn project(&self) -> ProjectSettings<'_> {
        ProjectSettings::new(&self.settings)
    }

    #[must_use]
    pub const fn tradition(&self) -> TraditionSettings<'_> {
        TraditionSettings::new(&self.settings)
    }

    #[must_use]
    pub const fn bucketlist(&self) -> BucketlistSettings<'_> {
        BucketlistSettings::new(&self.settings)
    }

    /// Edits the settings in place, then re-normalizes them.
    pub fn update(&mut self, edit: impl FnOnce(&mut Settings)) {
        edit(&mut self.settings);
        self.settings = std::mem::take(&mut self.settings).normalized();
        debug!("settings updated");
    }

    /// Restores the built-in goal types.
    pub fn reset_goal_types(&mut self) {
        self.reset_category(Category::GoalTypes);
    }

    /// Removes a category so its built-in palette applies again.
    pub fn reset_category(&mut self, category: Category) {
        *self.settings.slot_mut(category) = None;
        info!(%category, "reset settings category to defaults");
    }

    /// Removes every free-form color map.
    pub fn reset_color_maps(&mut self) {
        self.settings.color_maps = None;
        info!("reset color maps");
    }

    /// Restores every category and drops all color maps.
    pub fn reset_all(&mut self) {
        self.settings = Settings::default();
        info!("reset all settings to defaults");
    }

    /// Writes the settings to the backing file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the store has no backing file, or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path: &Path = self.path.as_deref().ok_or(SettingsError::NoBackingFile)?;
        self.save_to(path)
    }

    /// Writes the settings to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be encoded or the file
    /// cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json: String = serde_json::to_string_pretty(&self.settings)?;
        std::fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved settings");
        Ok(())
    }
}
