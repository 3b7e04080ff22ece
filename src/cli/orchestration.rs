//! Release workflow orchestration
//!
//! Runs the whole decision flow against a [TagRepository]:
//!
//! ```text
//! ReadCommitMessage -> Classify -> {Skip | ComputeNextVersion -> CheckTagExists
//!     -> {Skip | CreateTag -> {Done | PushTag -> {Done | PushFailed}}}}
//! ```
//!
//! The workflow prints nothing itself; callers render the returned
//! [WorkflowOutcome]. Opening the repository happens before this module is
//! reached, so "not a repository" never shows up here.

use crate::analyzer::{NextRelease, VersionAnalyzer, INITIAL_TAG};
use crate::config::{Config, IdentityConfig};
use crate::domain::{CommitMessage, Tag};
use crate::error::Result;
use crate::git::{TagRepository, USER_EMAIL_KEY, USER_NAME_KEY};
use tracing::{debug, info, warn};

/// Arguments for the release workflow
///
/// Decoupled from the CLI so the workflow can be driven programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Commit message to classify instead of the HEAD commit's
    pub message: Option<String>,

    /// Remote to push the tag to
    pub remote: String,

    /// Push after creating the tag
    pub auto_push: bool,

    /// Stop before changing anything
    pub dry_run: bool,

    /// Identity written to the repository config when none is set
    pub identity: IdentityConfig,
}

impl ReleaseWorkflowArgs {
    pub fn from_config(config: &Config, message: Option<String>, dry_run: bool) -> Self {
        ReleaseWorkflowArgs {
            message,
            remote: config.remote.clone(),
            auto_push: config.auto_push,
            dry_run,
            identity: config.identity.clone(),
        }
    }
}

/// Why a run ended without creating a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The commit follows no recognized convention
    NotConventional,
    /// The computed tag is already present
    TagExists(Tag),
}

/// Terminal state of a workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Skipped(SkipReason),
    /// Dry run: nothing was created
    DryRun {
        release: NextRelease,
        push_to: Option<String>,
    },
    Created {
        release: NextRelease,
        pushed_to: Option<String>,
    },
    /// The tag exists locally but could not be pushed
    PushFailed {
        release: NextRelease,
        remote: String,
        reason: String,
    },
}

impl WorkflowOutcome {
    /// Whether the process should exit successfully
    pub fn is_success(&self) -> bool {
        !matches!(self, WorkflowOutcome::PushFailed { .. })
    }

    /// The tag created (or that would be created), if any
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            WorkflowOutcome::Skipped(_) => None,
            WorkflowOutcome::DryRun { release, .. }
            | WorkflowOutcome::Created { release, .. }
            | WorkflowOutcome::PushFailed { release, .. } => Some(&release.tag),
        }
    }
}

/// Main release workflow
pub fn run_release_workflow<R: TagRepository>(
    repo: &R,
    args: &ReleaseWorkflowArgs,
    analyzer: &VersionAnalyzer,
) -> Result<WorkflowOutcome> {
    let message = read_commit_message(repo, args.message.as_deref())?;
    debug!(header = message.header(), "classifying commit");

    let Some(bump) = analyzer.classify(&message) else {
        info!("commit is not conventional");
        return Ok(WorkflowOutcome::Skipped(SkipReason::NotConventional));
    };

    let latest = repo.latest_tag()?;
    debug!(latest = ?latest, bump = %bump, "computing next version");
    let latest = latest.as_deref().unwrap_or(INITIAL_TAG);

    let Some(release) = analyzer.next_tag(latest, &message) else {
        return Ok(WorkflowOutcome::Skipped(SkipReason::NotConventional));
    };

    if repo.tag_exists(&release.tag.name)? {
        info!(tag = %release.tag, "tag already exists");
        return Ok(WorkflowOutcome::Skipped(SkipReason::TagExists(release.tag)));
    }

    let push_to = args.auto_push.then(|| args.remote.clone());

    if args.dry_run {
        return Ok(WorkflowOutcome::DryRun { release, push_to });
    }

    ensure_identity(repo, &args.identity)?;
    repo.create_annotated_tag(&release.tag.name, &release.tag.release_message())?;
    info!(tag = %release.tag, from = %release.current, "created tag");

    let Some(remote) = push_to else {
        return Ok(WorkflowOutcome::Created {
            release,
            pushed_to: None,
        });
    };

    match repo.push_tag(&remote, &release.tag.name) {
        Ok(()) => Ok(WorkflowOutcome::Created {
            release,
            pushed_to: Some(remote),
        }),
        Err(e) => {
            warn!(error = %e, "push failed, local tag kept");
            Ok(WorkflowOutcome::PushFailed {
                release,
                remote,
                reason: e.to_string(),
            })
        }
    }
}

/// Message override if it has content, otherwise the HEAD commit message
fn read_commit_message<R: TagRepository>(
    repo: &R,
    message_override: Option<&str>,
) -> Result<CommitMessage> {
    if let Some(message) = message_override.map(str::trim).filter(|m| !m.is_empty()) {
        debug!("using commit message override");
        return Ok(CommitMessage::new(message));
    }

    let message = repo.last_commit_message()?;
    Ok(CommitMessage::new(message.trim()))
}

/// Fill in a placeholder tagger identity for any missing config key
pub fn ensure_identity<R: TagRepository>(repo: &R, identity: &IdentityConfig) -> Result<()> {
    for (key, value) in [
        (USER_NAME_KEY, identity.name.as_str()),
        (USER_EMAIL_KEY, identity.email.as_str()),
    ] {
        if !repo.has_config(key)? {
            debug!(key, value, "configuring placeholder identity");
            repo.set_config(key, value)?;
        }
    }
    Ok(())
}
