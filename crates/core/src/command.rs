// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lifeplan_domain::{DateKey, StatusId};

/// An edit to one occurrence of a recurring story, as data only.
///
/// Edits made to a virtual instance are expressed as commands and applied
/// to the template with [`crate::apply`]; they never touch the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mark the occurrence completed.
    CompleteInstance {
        /// The occurrence date.
        date: DateKey,
    },
    /// Clear the occurrence's completed flag.
    ReopenInstance {
        /// The occurrence date.
        date: DateKey,
    },
    /// Hide the occurrence (the "delete this occurrence" action).
    SkipInstance {
        /// The occurrence date.
        date: DateKey,
    },
    /// Undo a skip.
    RestoreInstance {
        /// The occurrence date.
        date: DateKey,
    },
    /// Give the occurrence its own status.
    SetInstanceStatus {
        /// The occurrence date.
        date: DateKey,
        /// The new status. Setting the template's status clears the delta.
        status: StatusId,
    },
    /// Drop every override for the occurrence.
    ClearInstance {
        /// The occurrence date.
        date: DateKey,
    },
}

impl Command {
    /// Returns the occurrence date the command targets.
    #[must_use]
    pub fn date(&self) -> DateKey {
        match self {
            Self::CompleteInstance { date }
            | Self::ReopenInstance { date }
            | Self::SkipInstance { date }
            | Self::RestoreInstance { date }
            | Self::SetInstanceStatus { date, .. }
            | Self::ClearInstance { date } => *date,
        }
    }

    /// Returns the command name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CompleteInstance { .. } => "CompleteInstance",
            Self::ReopenInstance { .. } => "ReopenInstance",
            Self::SkipInstance { .. } => "SkipInstance",
            Self::RestoreInstance { .. } => "RestoreInstance",
            Self::SetInstanceStatus { .. } => "SetInstanceStatus",
            Self::ClearInstance { .. } => "ClearInstance",
        }
    }
}
