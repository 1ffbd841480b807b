// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - lifeplan automation
//!
//! - `cargo xtask lint` runs clippy with warnings denied, checks nightly
//!   rustfmt, builds the docs of every `lifeplan` crate with docs.rs flags
//!   and runs `typos`.
//! - `cargo xtask test [--package <name>]` runs unit and doc tests, either
//!   for one workspace crate or all of them.
//! - `cargo xtask coverage` writes an lcov report for the `lifeplan` crates
//!   to `target/lcov.info` (`--html` for a browsable report).
//! - `cargo xtask smoke` previews the sample files in `demos/` through the
//!   `lifeplan` binary, read-only.
//! - `cargo xtask ci` chains lint, deny, build, test and smoke.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use duct::{Expression, cmd};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Prefix shared by every package built from `crates/`.
const PACKAGE_PREFIX: &str = "lifeplan";

/// Sample data used by the smoke run.
const DEMO_DATA: &str = "demos/lifeplan.json";
const DEMO_SETTINGS: &str = "demos/settings.json";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Lint, check dependencies, build, test and smoke-run
    CI,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Write a coverage report for the lifeplan crates
    #[command(visible_alias = "cov")]
    Coverage {
        /// Write an HTML report to target/llvm-cov/html instead of lcov
        #[arg(long)]
        html: bool,
    },

    /// Check licenses and advisories with cargo-deny
    #[command(visible_alias = "cd")]
    Deny,

    /// Apply clippy suggestions and rustfmt
    #[command(visible_alias = "f")]
    Fix,

    /// Clippy, rustfmt, rustdoc and typos, failing on any finding
    #[command(visible_alias = "l")]
    Lint,

    /// Preview the demo data through the lifeplan binary
    #[command(visible_alias = "s")]
    Smoke,

    /// Run unit and doc tests
    #[command(visible_alias = "t")]
    Test {
        /// Only test this workspace package (e.g. lifeplan-settings)
        #[arg(long, short)]
        package: Option<String>,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => cargo(&["build", "--all-targets"]).run_with_trace(),
            Self::Check => cargo(&["check", "--all-targets"]).run_with_trace(),
            Self::Coverage { html } => coverage(html),
            Self::Deny => cargo(&["deny", "check"]).run_with_trace(),
            Self::Fix => fix(),
            Self::Lint => lint(),
            Self::Smoke => smoke(),
            Self::Test { package } => test(package.as_deref()),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    Command::Deny.run()?;
    Command::Build.run()?;
    test(None)?;
    smoke()
}

/// Names of the workspace packages built from `crates/`.
fn lifeplan_packages() -> Result<Vec<String>> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to read cargo metadata")?;

    let packages: Vec<String> = meta
        .workspace_packages()
        .into_iter()
        .map(|package| package.name.to_string())
        .filter(|name| name.starts_with(PACKAGE_PREFIX))
        .collect();

    if packages.is_empty() {
        return Err(eyre!("no {PACKAGE_PREFIX} packages in the workspace"));
    }
    Ok(packages)
}

fn lint() -> Result<()> {
    cargo(&["clippy", "--all-targets", "--", "-D", "warnings"]).run_with_trace()?;
    nightly(cargo(&["fmt", "--all", "--check"])).run_with_trace()?;

    for package in lifeplan_packages()? {
        nightly(cargo(&["doc", "--no-deps", "--package", &package]))
            .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
            .run_with_trace()?;
    }

    cmd!("typos").run_with_trace()
}

fn fix() -> Result<()> {
    cargo(&[
        "clippy",
        "--all-targets",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
    ])
    .run_with_trace()?;
    nightly(cargo(&["fmt", "--all"])).run_with_trace()
}

/// Tests one package, or every `lifeplan` package when `package` is `None`.
///
/// Doc tests run after unit tests since they compile each example
/// separately.
fn test(package: Option<&str>) -> Result<()> {
    let packages: Vec<String> = match package {
        Some(name) => vec![name.to_owned()],
        None => lifeplan_packages()?,
    };

    for package in &packages {
        cargo(&["test", "--all-targets", "--package", package]).run_with_trace()?;
    }
    for package in &packages {
        // The binary crate has no doc tests
        if package.ends_with("-cli") {
            continue;
        }
        cargo(&["test", "--doc", "--package", package]).run_with_trace()?;
    }
    Ok(())
}

fn coverage(html: bool) -> Result<()> {
    let mut args: Vec<&str> = vec!["llvm-cov", "--workspace", "--exclude", "xtask"];
    if html {
        args.push("--html");
    } else {
        args.extend(["--lcov", "--output-path", "target/lcov.info"]);
    }

    cargo(&args).run_with_trace()
}

/// Runs the read-only subcommands of `lifeplan` against `demos/`.
///
/// The commands that save (`instance`, `reset-goal-types`) are left out so
/// the sample files stay untouched.
fn smoke() -> Result<()> {
    let previews: [&[&str]; 7] = [
        &[
            "occurrences",
            "--story",
            "story-run",
            "--from",
            "2024-03-01",
            "--to",
            "2024-03-31",
        ],
        &["next", "--story", "story-run", "--after", "2024-03-01"],
        &["describe", "--story", "story-review"],
        &["describe", "--assignment", "assignment-lab"],
        &[
            "upcoming",
            "--assignment",
            "assignment-reading",
            "--from",
            "2024-01-01",
        ],
        &["meetings", "--class", "class-chem", "--from", "2024-01-01"],
        &["color", "--domain", "story", "--kind", "status", "In Progress"],
    ];

    for preview in previews {
        let mut args: Vec<&str> = vec![
            "run",
            "--quiet",
            "--package",
            "lifeplan-cli",
            "--",
            "--data",
            DEMO_DATA,
            "--settings",
            DEMO_SETTINGS,
        ];
        args.extend_from_slice(preview);
        cargo(&args)
            .run_with_trace()
            .wrap_err_with(|| format!("smoke preview failed: {}", preview.join(" ")))?;
    }

    Ok(())
}

fn cargo(args: &[&str]) -> Expression {
    cmd("cargo", args.iter().copied())
}

/// Switches a cargo invocation to the nightly toolchain.
fn nightly(expression: Expression) -> Expression {
    // CARGO is inherited from `cargo xtask` and would pin the stable cargo
    expression
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
}

/// Logs a command before running it and again if it fails.
trait ExpressionExt {
    fn run_with_trace(&self) -> Result<()>;
}

impl ExpressionExt for Expression {
    fn run_with_trace(&self) -> Result<()> {
        tracing::info!("running: {self:?}");
        let output: io::Result<Output> = self.run();
        output
            .map(drop)
            .wrap_err_with(|| format!("command failed: {self:?}"))
    }
}
