// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurrence engine for repeating stories and recurring assignments.
//!
//! Every query here is a pure function of its arguments: there is no clock,
//! no shared state and no lookup of related records. Callers pass the
//! template, the owning class and the date window explicitly, and persist
//! any resulting edit themselves.

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

mod apply;
mod assignments;
mod command;
mod describe;
mod error;
mod instances;
mod occurrences;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use assignments::{
    AssignmentInstance, DEFAULT_LOOKAHEAD_DAYS, MAX_UPCOMING_INSTANCES, get_class_meeting_dates,
    get_next_assignment_occurrence, get_upcoming_assignment_instances, is_before_class,
};
pub use command::Command;
pub use describe::{describe_assignment_pattern, describe_pattern};
pub use error::CoreError;
pub use instances::{
    InstanceMeta, RecurrenceInstance, VirtualStory, create_virtual_story_instance,
    generate_recurrence_instances, get_instance_override, get_instance_status,
    is_instance_completed, is_instance_skipped, next_occurrence, should_show_instance,
    split_virtual_instance_id, virtual_instance_id, visible_virtual_instances,
};
pub use occurrences::{
    MAX_OCCURRENCES, Occurrences, calculate_occurrences, is_occurrence, occurrences_in_window,
};
pub use state::TransitionResult;
