use crate::error::{AutoTagError, Result};
use crate::git::TagRepository;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// A tag recorded by [MockRepository::create_annotated_tag]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTag {
    pub name: String,
    pub message: String,
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    head_message: Option<String>,
    latest_tag: Option<String>,
    tags: RefCell<BTreeSet<String>>,
    config: RefCell<BTreeMap<String, String>>,
    remotes: BTreeSet<String>,
    fail_push: bool,
    created: RefCell<Vec<CreatedTag>>,
    pushed: RefCell<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create an empty mock repository with an `origin` remote
    pub fn new() -> Self {
        let mut remotes = BTreeSet::new();
        remotes.insert("origin".to_string());

        MockRepository {
            head_message: None,
            latest_tag: None,
            tags: RefCell::new(BTreeSet::new()),
            config: RefCell::new(BTreeMap::new()),
            remotes,
            fail_push: false,
            created: RefCell::new(Vec::new()),
            pushed: RefCell::new(Vec::new()),
        }
    }

    /// Set the message of the HEAD commit
    pub fn set_head_message(&mut self, message: impl Into<String>) {
        self.head_message = Some(message.into());
    }

    /// Add a tag and make it the latest one reachable from HEAD
    pub fn set_latest_tag(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.tags.get_mut().insert(name.clone());
        self.latest_tag = Some(name);
    }

    /// Add a tag that is not reachable from HEAD
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.get_mut().insert(name.into());
    }

    /// Set a config value
    pub fn set_config_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.config.get_mut().insert(key.into(), value.into());
    }

    /// Register an additional remote
    pub fn add_remote(&mut self, name: impl Into<String>) {
        self.remotes.insert(name.into());
    }

    /// Make every push fail
    pub fn fail_pushes(&mut self) {
        self.fail_push = true;
    }

    /// Tags created so far, in creation order
    pub fn created_tags(&self) -> Vec<CreatedTag> {
        self.created.borrow().clone()
    }

    /// (remote, tag) pairs pushed so far
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed.borrow().clone()
    }

    /// Current value of a config key
    pub fn config_value(&self, key: &str) -> Option<String> {
        self.config.borrow().get(key).cloned()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TagRepository for MockRepository {
    fn latest_tag(&self) -> Result<Option<String>> {
        Ok(self.latest_tag.clone())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        Ok(self.tags.borrow().contains(name))
    }

    fn last_commit_message(&self) -> Result<String> {
        self.head_message
            .clone()
            .ok_or_else(|| AutoTagError::tag("HEAD has no commit"))
    }

    fn has_config(&self, key: &str) -> Result<bool> {
        Ok(self
            .config
            .borrow()
            .get(key)
            .is_some_and(|value| !value.is_empty()))
    }

    fn set_config(&self, key: &str, value: &str) -> Result<()> {
        self.config
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        if self.head_message.is_none() {
            return Err(AutoTagError::tag("HEAD has no commit"));
        }
        if !self.tags.borrow_mut().insert(name.to_string()) {
            return Err(AutoTagError::tag(format!("Tag '{}' already exists", name)));
        }
        self.created.borrow_mut().push(CreatedTag {
            name: name.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if !self.remotes.contains(remote) {
            return Err(AutoTagError::remote(format!(
                "No remote named '{}' found",
                remote
            )));
        }
        if self.fail_push {
            return Err(AutoTagError::remote(format!(
                "Failed to push tag '{}': connection refused",
                name
            )));
        }
        if !self.tags.borrow().contains(name) {
            return Err(AutoTagError::remote(format!(
                "src refspec {} does not match any",
                name
            )));
        }
        self.pushed
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
