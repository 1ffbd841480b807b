// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lifeplan_domain::{DateKey, DomainError};

/// Errors that can occur while applying override commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The story has no recurring pattern to hold overrides.
    NotRecurring {
        /// The story identifier.
        story_id: String,
    },
    /// The date is not one of the story's occurrences.
    NotAnOccurrence {
        /// The story identifier.
        story_id: String,
        /// The rejected date.
        date: DateKey,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::NotRecurring { story_id } => {
                write!(f, "Story '{story_id}' does not repeat")
            }
            Self::NotAnOccurrence { story_id, date } => {
                write!(f, "{date} is not an occurrence of story '{story_id}'")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
