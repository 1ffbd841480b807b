// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, saving or editing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file could not be written.
    #[error("Failed to write settings to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file is not valid settings JSON.
    #[error("Invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The settings could not be encoded.
    #[error("Failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),

    /// `save` was called on a store that was not opened from a file.
    #[error("Settings store has no backing file")]
    NoBackingFile,

    /// A category name did not match any settings category.
    #[error("Unknown settings category: '{0}'")]
    UnknownCategory(String),
}
