// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lifeplan_domain::{DateKey, InstanceOverride, Story};

/// The result of applying a command to a story template.
///
/// Carries the override before and after the edit so callers can offer an
/// undo or log the delta without diffing whole stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The template with the edit applied.
    pub new_story: Story,
    /// The occurrence date that was edited.
    pub date: DateKey,
    /// The override stored before the edit.
    pub before: Option<InstanceOverride>,
    /// The override stored after the edit. `None` when the edit left no
    /// delta behind.
    pub after: Option<InstanceOverride>,
}
