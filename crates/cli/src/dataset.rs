// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The JSON file holding stories, assignments and classes.

use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use lifeplan_domain::{
    Assignment, Class, Story, validate_assignment_pattern, validate_class_schedule,
    validate_recurrence_pattern,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Every record the CLI reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl Dataset {
    /// Loads a dataset and reports records that fail validation.
    ///
    /// Invalid records are kept; the engine treats them leniently (an
    /// empty weekly day set simply never occurs).
    pub fn load(path: &Path) -> Result<Self> {
        let raw: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read data file {}", path.display()))?;
        let dataset: Self = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("Invalid data file {}", path.display()))?;

        dataset.report_invalid();
        info!(
            stories = dataset.stories.len(),
            assignments = dataset.assignments.len(),
            classes = dataset.classes.len(),
            "loaded data"
        );
        Ok(dataset)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json: String = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .wrap_err_with(|| format!("Failed to write data file {}", path.display()))?;
        info!(path = %path.display(), "saved data");
        Ok(())
    }

    fn report_invalid(&self) {
        for story in &self.stories {
            if let Some(pattern) = &story.repeat
                && let Err(err) =
                    validate_recurrence_pattern(pattern, story.created_at.map(|day| day.date()))
            {
                warn!(story_id = %story.id, "{err}");
            }
        }

        for assignment in &self.assignments {
            if let Some(pattern) = &assignment.recurrence_pattern
                && let Err(err) = validate_assignment_pattern(pattern)
            {
                warn!(assignment_id = %assignment.id, "{err}");
            }
        }

        for class in &self.classes {
            if let Err(err) = validate_class_schedule(class) {
                warn!(class_id = %class.id, "{err}");
            }
        }
    }

    pub fn story(&self, id: &str) -> Result<&Story> {
        self.stories
            .iter()
            .find(|story| story.id == id)
            .ok_or_else(|| eyre!("No story with id '{id}'"))
    }

    pub fn story_mut(&mut self, id: &str) -> Result<&mut Story> {
        self.stories
            .iter_mut()
            .find(|story| story.id == id)
            .ok_or_else(|| eyre!("No story with id '{id}'"))
    }

    pub fn assignment(&self, id: &str) -> Result<&Assignment> {
        self.assignments
            .iter()
            .find(|assignment| assignment.id == id)
            .ok_or_else(|| eyre!("No assignment with id '{id}'"))
    }

    /// Finds the class an assignment belongs to.
    pub fn class_of(&self, assignment: &Assignment) -> Result<&Class> {
        self.class(&assignment.class_id)
    }

    pub fn class(&self, id: &str) -> Result<&Class> {
        self.classes
            .iter()
            .find(|class| class.id == id)
            .ok_or_else(|| eyre!("No class with id '{id}'"))
    }
}
