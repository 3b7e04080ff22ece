use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use auto_tag::analyzer::VersionAnalyzer;
use auto_tag::cli::{run_release_workflow, ReleaseWorkflowArgs};
use auto_tag::config;
use auto_tag::git::Git2Repository;
use auto_tag::{logging, ui};

// Every flag falls back to its environment variable, so a bare `auto-tag`
// in CI is driven purely by the environment.
#[derive(clap::Parser)]
#[command(
    name = "auto-tag",
    version,
    about = "Create and push semantic version tags from conventional commits"
)]
struct Args {
    #[arg(long, env = "GIT_MESSAGE", help = "Commit message to classify instead of HEAD's")]
    message: Option<String>,

    #[arg(long, env = "GIT_REMOTE", help = "Remote to push the tag to [default: origin]")]
    remote: Option<String>,

    #[arg(
        long,
        env = "AUTO_PUSH",
        help = "Push the tag after creating it; only \"true\" enables [default: true]"
    )]
    auto_push: Option<String>,

    #[arg(long, help = "Show the tag that would be created without changing anything")]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            debug!(error = %e, "repository discovery failed");
            ui::display_error("Not inside a git repository.");
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = config::load_config(args.config.as_deref())
        .context("Error loading config")?
        .with_overrides(args.remote.as_deref(), args.auto_push.as_deref());
    debug!(?config, "resolved configuration");

    let workflow_args = ReleaseWorkflowArgs::from_config(&config, args.message, args.dry_run);
    let outcome = run_release_workflow(&repo, &workflow_args, &VersionAnalyzer::default())
        .context("Release failed")?;

    ui::display_outcome(&outcome);

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
