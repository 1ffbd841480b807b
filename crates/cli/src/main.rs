// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod dataset;

use crate::dataset::Dataset;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::eyre};
use lifeplan::{
    AssignmentInstance, Command as InstanceCommand, RecurrenceInstance, TransitionResult, apply,
    describe_assignment_pattern, describe_pattern, generate_recurrence_instances,
    get_class_meeting_dates, get_upcoming_assignment_instances, next_occurrence,
};
use lifeplan_domain::{Assignment, Class, DateKey, StatusId, Story};
use lifeplan_settings::{
    BucketlistSettings, GoalSettings, ProjectSettings, Settings, SettingsStore, StorySettings,
    TraditionSettings,
};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli: Cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(cli.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    cli.run()
}

/// Life planner - preview recurring stories, assignments and colors
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (JSON). A missing file means built-in defaults.
    #[arg(
        long,
        env = "LIFEPLAN_SETTINGS",
        default_value = "settings.json",
        global = true
    )]
    settings: PathBuf,

    /// Data file (JSON) with stories, assignments and classes
    #[arg(long, env = "LIFEPLAN_DATA", default_value = "lifeplan.json", global = true)]
    data: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the occurrences of a recurring story in a date window
    #[command(visible_alias = "o")]
    Occurrences {
        #[arg(long)]
        story: String,
        #[arg(long)]
        from: DateKey,
        #[arg(long)]
        to: DateKey,
        /// Include skipped occurrences
        #[arg(long)]
        all: bool,
    },

    /// Show the first visible occurrence of a story after a date
    Next {
        #[arg(long)]
        story: String,
        #[arg(long)]
        after: DateKey,
    },

    /// List upcoming due dates of a recurring assignment
    #[command(visible_alias = "u")]
    Upcoming {
        #[arg(long)]
        assignment: String,
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long)]
        from: DateKey,
    },

    /// List the meeting dates of a class
    #[command(visible_alias = "m")]
    Meetings {
        #[arg(long)]
        class: String,
        #[arg(long)]
        from: DateKey,
        /// Last day to list; defaults to 90 days after --from
        #[arg(long)]
        to: Option<DateKey>,
    },

    /// Resolve a settings color
    Color {
        #[arg(long, value_enum)]
        domain: ColorDomain,
        /// Which palette of the domain: priority, status, type, size,
        /// task-category or category
        #[arg(long)]
        kind: String,
        /// Entry name or id to resolve
        key: String,
    },

    /// Summarize a story's recurrence (or an assignment's with --assignment)
    Describe {
        #[arg(long, required_unless_present = "assignment")]
        story: Option<String>,
        #[arg(long, conflicts_with = "story")]
        assignment: Option<String>,
    },

    /// Edit one occurrence of a recurring story and save the data file
    Instance {
        #[arg(long)]
        story: String,
        #[arg(long)]
        date: DateKey,
        #[command(subcommand)]
        action: InstanceAction,
    },

    /// Restore the built-in goal types and save the settings file
    ResetGoalTypes,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorDomain {
    Story,
    Goal,
    Project,
    Tradition,
    Bucketlist,
}

#[derive(Debug, Clone, Subcommand)]
enum InstanceAction {
    /// Mark the occurrence completed
    Complete,
    /// Clear the completed flag
    Reopen,
    /// Hide the occurrence
    Skip,
    /// Undo a skip
    Restore,
    /// Give the occurrence its own status
    SetStatus { status: String },
    /// Remove every override for the occurrence
    Clear,
}

impl InstanceAction {
    fn into_command(self, date: DateKey) -> InstanceCommand {
        match self {
            Self::Complete => InstanceCommand::CompleteInstance { date },
            Self::Reopen => InstanceCommand::ReopenInstance { date },
            Self::Skip => InstanceCommand::SkipInstance { date },
            Self::Restore => InstanceCommand::RestoreInstance { date },
            Self::SetStatus { status } => InstanceCommand::SetInstanceStatus {
                date,
                status: StatusId::new(&status),
            },
            Self::Clear => InstanceCommand::ClearInstance { date },
        }
    }
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(self) -> Result<()> {
        match self.command {
            Command::Occurrences {
                story,
                from,
                to,
                all,
            } => {
                let dataset: Dataset = Dataset::load(&self.data)?;
                let story: &Story = dataset.story(&story)?;
                let instances: Vec<RecurrenceInstance> =
                    generate_recurrence_instances(story, from.date(), to.date());

                for instance in instances.iter().filter(|i| all || !i.skipped) {
                    println!("{}", format_instance(instance));
                }
            }
            Command::Next { story, after } => {
                let dataset: Dataset = Dataset::load(&self.data)?;
                let story: &Story = dataset.story(&story)?;
                match next_occurrence(story, after.date()) {
                    Some(date) => println!("{}", DateKey::new(date)),
                    None => println!("no further occurrences"),
                }
            }
            Command::Upcoming {
                assignment,
                count,
                from,
            } => {
                let dataset: Dataset = Dataset::load(&self.data)?;
                let assignment: &Assignment = dataset.assignment(&assignment)?;
                let class: &Class = dataset.class_of(assignment)?;
                let instances: Vec<AssignmentInstance> =
                    get_upcoming_assignment_instances(assignment, class, count, from.date());

                for instance in &instances {
                    println!("{}", format_assignment_instance(instance));
                }
            }
            Command::Meetings { class, from, to } => {
                let dataset: Dataset = Dataset::load(&self.data)?;
                let class: &Class = dataset.class(&class)?;
                let dates: Vec<NaiveDate> =
                    get_class_meeting_dates(class, from.date(), to.map(|to| to.date()));

                for date in dates {
                    println!("{}", DateKey::new(date));
                }
            }
            Command::Color { domain, kind, key } => {
                let store: SettingsStore = SettingsStore::open(&self.settings)?;
                println!("{}", resolve_color(&store, domain, &kind, &key)?);
            }
            Command::Describe { story, assignment } => {
                let dataset: Dataset = Dataset::load(&self.data)?;
                let summary: String = match (story, assignment) {
                    (Some(id), _) => dataset
                        .story(&id)?
                        .repeat
                        .as_ref()
                        .map_or_else(|| String::from("Does not repeat"), describe_pattern),
                    (None, Some(id)) => dataset
                        .assignment(&id)?
                        .recurrence_pattern
                        .as_ref()
                        .map_or_else(
                            || String::from("Does not repeat"),
                            describe_assignment_pattern,
                        ),
                    (None, None) => return Err(eyre!("Pass --story or --assignment")),
                };
                println!("{summary}");
            }
            Command::Instance {
                story,
                date,
                action,
            } => {
                let mut dataset: Dataset = Dataset::load(&self.data)?;
                let template: &mut Story = dataset.story_mut(&story)?;
                let transition: TransitionResult = apply(template, action.into_command(date))?;
                *template = transition.new_story;
                dataset.save(&self.data)?;

                match transition.after {
                    Some(entry) => info!(%date, ?entry, "override stored"),
                    None => info!(%date, "override cleared"),
                }
            }
            Command::ResetGoalTypes => {
                let mut store: SettingsStore = SettingsStore::open(&self.settings)?;
                store.reset_goal_types();
                store.save()?;
            }
        }

        Ok(())
    }
}

fn format_instance(instance: &RecurrenceInstance) -> String {
    let mut line: String = format!("{}  {}", instance.date, instance.status);
    if instance.completed {
        line.push_str("  completed");
    }
    if instance.skipped {
        line.push_str("  skipped");
    }
    line
}

fn format_assignment_instance(instance: &AssignmentInstance) -> String {
    let mut line: String = format!("due {}", instance.due_date);
    if let Some(time) = &instance.due_time {
        line.push_str(&format!(" {time}"));
    }
    if instance.date != instance.due_date {
        line.push_str(&format!("  (class {})", instance.date));
    }
    line
}

fn resolve_color<'a>(
    store: &'a SettingsStore,
    domain: ColorDomain,
    kind: &str,
    key: &str,
) -> Result<&'a str> {
    let settings: &'a Settings = store.settings();

    let color: Option<&'a str> = match domain {
        ColorDomain::Story => {
            let story: StorySettings<'a> = StorySettings::new(settings);
            match kind {
                "priority" => Some(story.get_priority_color(key)),
                "status" => Some(story.get_status_color(key)),
                "type" => Some(story.get_type_color(key)),
                "size" => Some(story.get_size_color(key)),
                "task-category" => Some(story.get_task_category_color(key)),
                _ => None,
            }
        }
        ColorDomain::Goal => {
            let goal: GoalSettings<'a> = GoalSettings::new(settings);
            match kind {
                "type" => Some(goal.get_type_color(key)),
                "status" => Some(goal.get_status_color(key)),
                "priority" => Some(goal.get_priority_color(key)),
                _ => None,
            }
        }
        ColorDomain::Project => {
            let project: ProjectSettings<'a> = ProjectSettings::new(settings);
            match kind {
                "status" => Some(project.get_status_color(key)),
                "priority" => Some(project.get_priority_color(key)),
                "project" => Some(project.get_project_color(key)),
                _ => None,
            }
        }
        ColorDomain::Tradition => {
            let tradition: TraditionSettings<'a> = TraditionSettings::new(settings);
            match kind {
                "type" => Some(tradition.get_type_color(key)),
                "category" => Some(tradition.get_category_color(key)),
                _ => None,
            }
        }
        ColorDomain::Bucketlist => match kind {
            "category" => Some(BucketlistSettings::new(settings).get_category_color(key)),
            _ => None,
        },
    };

    color.ok_or_else(|| eyre!("Unknown color kind '{kind}' for {domain:?}"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use lifeplan_settings::NamedColor;

    #[test]
    fn test_cli_parses_occurrences() {
        let cli: Cli = Cli::try_parse_from([
            "lifeplan",
            "--data",
            "data.json",
            "occurrences",
            "--story",
            "story-1",
            "--from",
            "2024-03-01",
            "--to",
            "2024-03-31",
        ])
        .unwrap();

        assert_eq!(cli.data, PathBuf::from("data.json"));
        assert!(matches!(
            cli.command,
            Command::Occurrences { ref story, all: false, .. } if story == "story-1"
        ));
    }

    #[test]
    fn test_cli_rejects_unpadded_dates() {
        let result = Cli::try_parse_from([
            "lifeplan",
            "meetings",
            "--class",
            "class-1",
            "--from",
            "2024-3-1",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_instance_action_maps_to_command() {
        let date: DateKey = "2024-03-01".parse().unwrap();

        let command: InstanceCommand = InstanceAction::SetStatus {
            status: String::from("In Progress"),
        }
        .into_command(date);

        assert_eq!(
            command,
            InstanceCommand::SetInstanceStatus {
                date,
                status: StatusId::new("in-progress"),
            }
        );
    }

    #[test]
    fn test_resolve_color_dispatch() {
        let store: SettingsStore = SettingsStore::new(Settings {
            priorities: Some(vec![NamedColor::new("Q1", "#111111")]),
            ..Settings::default()
        });

        assert_eq!(
            resolve_color(&store, ColorDomain::Story, "priority", "Q1").unwrap(),
            "#111111"
        );
        assert_eq!(
            resolve_color(&store, ColorDomain::Goal, "priority", "Q1").unwrap(),
            "#111111"
        );
        assert!(resolve_color(&store, ColorDomain::Bucketlist, "size", "XL").is_err());
    }
}
