// tests/integration_test.rs
mod common;

use auto_tag::analyzer::VersionAnalyzer;
use auto_tag::cli::{run_release_workflow, ReleaseWorkflowArgs, SkipReason, WorkflowOutcome};
use auto_tag::config::Config;
use auto_tag::domain::Tag;
use auto_tag::git::{Git2Repository, TagRepository};
use common::TestRepo;

fn workflow_args() -> ReleaseWorkflowArgs {
    ReleaseWorkflowArgs::from_config(&Config::default(), None, false)
}

fn run(test_repo: &TestRepo, args: &ReleaseWorkflowArgs) -> WorkflowOutcome {
    let repo = Git2Repository::open(test_repo.path()).expect("Should open repository");
    run_release_workflow(&repo, args, &VersionAnalyzer::default()).expect("Workflow should run")
}

#[test]
fn test_patch_release_pushed_to_origin() {
    let test_repo = TestRepo::new();
    let first = test_repo.commit("chore: initial");
    test_repo.lightweight_tag("v1.4.2", first);
    test_repo.commit("fix: null check");
    let (_remote_dir, bare) = test_repo.add_bare_remote("origin");

    let outcome = run(&test_repo, &workflow_args());

    let WorkflowOutcome::Created { release, pushed_to } = &outcome else {
        panic!("unexpected outcome: {:?}", outcome);
    };
    assert_eq!(release.tag.name, "v1.4.3");
    assert_eq!(pushed_to.as_deref(), Some("origin"));
    assert!(bare.find_reference("refs/tags/v1.4.3").is_ok());
}

#[test]
fn test_created_tag_is_annotated() {
    let test_repo = TestRepo::new();
    let head = test_repo.commit("feat: init");

    let mut args = workflow_args();
    args.auto_push = false;
    let outcome = run(&test_repo, &args);
    assert_eq!(outcome.tag(), Some(&Tag::new("v0.1.0")));

    let reference = test_repo
        .repo
        .find_reference("refs/tags/v0.1.0")
        .expect("Tag should exist");
    let tag = reference.peel_to_tag().expect("Tag should be annotated");
    assert_eq!(tag.message(), Some("chore(release): v0.1.0"));
    assert_eq!(tag.target_id(), head);
}

#[test]
fn test_latest_tag_is_nearest_reachable() {
    let test_repo = TestRepo::new();
    let first = test_repo.commit("chore: initial");
    test_repo.lightweight_tag("v0.9.0", first);
    let second = test_repo.commit("feat: second");
    test_repo.lightweight_tag("v0.10.0", second);
    test_repo.commit("docs: more");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(repo.latest_tag().unwrap(), Some("v0.10.0".to_string()));
}

#[test]
fn test_latest_tag_at_head() {
    let test_repo = TestRepo::new();
    let head = test_repo.commit("feat: only");
    test_repo.lightweight_tag("v3.0.0", head);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(repo.latest_tag().unwrap(), Some("v3.0.0".to_string()));
}

#[test]
fn test_repository_without_tags() {
    let test_repo = TestRepo::new();
    test_repo.commit("fix: first");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(repo.latest_tag().unwrap(), None);
    assert_eq!(repo.last_commit_message().unwrap().trim(), "fix: first");
}

#[test]
fn test_existing_tag_skips_creation() {
    let test_repo = TestRepo::new();
    let first = test_repo.commit("chore: initial");
    test_repo.lightweight_tag("v1.0.0", first);
    let elsewhere = test_repo.detached_commit("feat: on another line", first);
    test_repo.lightweight_tag("v1.1.0", elsewhere);
    let head = test_repo.commit("feat: again");

    let outcome = run(&test_repo, &workflow_args());

    assert_eq!(
        outcome,
        WorkflowOutcome::Skipped(SkipReason::TagExists(Tag::new("v1.1.0")))
    );
    let target = test_repo
        .repo
        .find_reference("refs/tags/v1.1.0")
        .unwrap()
        .peel_to_commit()
        .unwrap()
        .id();
    assert_ne!(target, head);
}

#[test]
fn test_non_conventional_commit_creates_nothing() {
    let test_repo = TestRepo::new();
    test_repo.commit("update readme");

    let outcome = run(&test_repo, &workflow_args());

    assert_eq!(outcome, WorkflowOutcome::Skipped(SkipReason::NotConventional));
    assert!(test_repo.repo.tag_names(None).unwrap().is_empty());
}

#[test]
fn test_breaking_change_footer_from_head() {
    let test_repo = TestRepo::new();
    let first = test_repo.commit("chore: initial");
    test_repo.lightweight_tag("v1.4.2", first);
    test_repo.commit("refactor: storage\n\nBREAKING CHANGE: new on-disk format");

    let mut args = workflow_args();
    args.auto_push = false;
    let outcome = run(&test_repo, &args);

    assert_eq!(outcome.tag(), Some(&Tag::new("v2.0.0")));
    assert!(test_repo.has_tag("v2.0.0"));
}

#[test]
fn test_push_failure_keeps_local_tag() {
    let test_repo = TestRepo::new();
    test_repo.commit("fix: something");
    test_repo.add_broken_remote("origin");

    let outcome = run(&test_repo, &workflow_args());

    let WorkflowOutcome::PushFailed { release, remote, .. } = &outcome else {
        panic!("unexpected outcome: {:?}", outcome);
    };
    assert_eq!(release.tag.name, "v0.0.1");
    assert_eq!(remote, "origin");
    assert!(!outcome.is_success());
    assert!(test_repo.has_tag("v0.0.1"));
}

#[test]
fn test_missing_remote_is_push_failure() {
    let test_repo = TestRepo::new();
    test_repo.commit("fix: something");

    let outcome = run(&test_repo, &workflow_args());

    assert!(matches!(outcome, WorkflowOutcome::PushFailed { .. }));
    assert!(test_repo.has_tag("v0.0.1"));
}

#[test]
fn test_dry_run_leaves_repository_untouched() {
    let test_repo = TestRepo::new();
    test_repo.commit("feat: preview");

    let mut args = workflow_args();
    args.dry_run = true;
    let outcome = run(&test_repo, &args);

    assert!(matches!(outcome, WorkflowOutcome::DryRun { .. }));
    assert!(!test_repo.has_tag("v0.1.0"));
}

#[test]
fn test_push_to_named_remote() {
    let test_repo = TestRepo::new();
    test_repo.commit("perf: faster");
    let (_dir, upstream) = test_repo.add_bare_remote("upstream");

    let mut args = workflow_args();
    args.remote = "upstream".to_string();
    let outcome = run(&test_repo, &args);

    assert!(outcome.is_success());
    assert!(upstream.find_reference("refs/tags/v0.0.1").is_ok());
}
