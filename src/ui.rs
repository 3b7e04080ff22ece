//! User-facing output. Informational results go to stdout, failures to stderr.

use crate::cli::{SkipReason, WorkflowOutcome};
use crate::domain::Tag;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Tell the user how to finish a push by hand
pub fn display_manual_push_instruction(tag: &Tag, remote: &str) {
    eprintln!("Pushing tag failed. You can push manually:");
    eprintln!("  {}", tag.manual_push_command(remote));
}

pub fn skip_message(reason: &SkipReason) -> String {
    match reason {
        SkipReason::NotConventional => "No conventional commit -> skip tagging.".to_string(),
        SkipReason::TagExists(tag) => format!("Tag {} already exists -> skip.", tag),
    }
}

pub fn created_message(tag: &Tag) -> String {
    format!("Created tag {}.", tag)
}

pub fn pushed_message(tag: &Tag, remote: &str) -> String {
    format!("Pushed tag {} to {}.", tag, remote)
}

/// Print the result of a workflow run
pub fn display_outcome(outcome: &WorkflowOutcome) {
    match outcome {
        WorkflowOutcome::Skipped(reason) => display_status(&skip_message(reason)),
        WorkflowOutcome::DryRun { release, push_to } => {
            display_status(&format!(
                "Dry run: would create tag {} ({} bump from {}).",
                release.tag, release.bump, release.current
            ));
            if let Some(remote) = push_to {
                display_status(&format!(
                    "Dry run: would push tag {} to {}.",
                    release.tag, remote
                ));
            }
        }
        WorkflowOutcome::Created { release, pushed_to } => {
            display_success(&created_message(&release.tag));
            if let Some(remote) = pushed_to {
                display_success(&pushed_message(&release.tag, remote));
            }
        }
        WorkflowOutcome::PushFailed {
            release,
            remote,
            reason,
        } => {
            display_success(&created_message(&release.tag));
            display_error(reason);
            display_manual_push_instruction(&release.tag, remote);
        }
    }
}
