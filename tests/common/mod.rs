//! Helpers for building throwaway git repositories.

#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Empty repository with a local committer identity
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit a change to README.md on HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        self.commit_with_parent(Some("HEAD"), message, parent.as_ref())
    }

    /// Commit without moving any branch, producing a commit unreachable from HEAD
    pub fn detached_commit(&self, message: &str, parent: Oid) -> Oid {
        let parent = self.repo.find_commit(parent).expect("Could not find parent");
        self.commit_with_parent(None, message, Some(&parent))
    }

    fn commit_with_parent(
        &self,
        update_ref: Option<&str>,
        message: &str,
        parent: Option<&git2::Commit<'_>>,
    ) -> Oid {
        let readme = self.path().join("README.md");
        let previous = fs::read_to_string(&readme).unwrap_or_default();
        fs::write(&readme, format!("{}{}\n", previous, message)).expect("Could not write file");

        let mut index = self.repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");
        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let signature = Signature::now("Test User", "test@example.com").unwrap();
        let parents: Vec<&git2::Commit<'_>> = parent.into_iter().collect();
        self.repo
            .commit(update_ref, &signature, &signature, message, &tree, &parents)
            .expect("Could not create commit")
    }

    pub fn lightweight_tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.repo
            .find_reference(&format!("refs/tags/{}", name))
            .is_ok()
    }

    /// Add a bare repository as a remote and return it
    pub fn add_bare_remote(&self, name: &str) -> (TempDir, Repository) {
        let dir = TempDir::new().expect("Could not create temp dir");
        let bare = Repository::init_bare(dir.path()).expect("Could not init bare repo");
        let url = dir.path().to_str().expect("temp path is utf-8").to_string();
        self.repo
            .remote(name, &url)
            .expect("Could not add remote");
        (dir, bare)
    }

    /// Add a remote whose URL points nowhere
    pub fn add_broken_remote(&self, name: &str) {
        let missing = self.path().join("no-such-remote");
        self.repo
            .remote(name, missing.to_str().unwrap())
            .expect("Could not add remote");
    }
}
