use crate::domain::Version;
use std::fmt;

/// A release tag derived from a version (e.g., `v1.2.3`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a tag from an arbitrary name
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Canonical release tag for a version
    pub fn for_version(version: Version) -> Self {
        Tag::new(version.to_string())
    }

    /// Version encoded in the tag name, read leniently
    pub fn version(&self) -> Version {
        Version::parse(&self.name)
    }

    /// Message stored on the annotated tag object
    pub fn release_message(&self) -> String {
        format!("chore(release): {}", self.name)
    }

    /// Command a user can run to push this tag by hand
    pub fn manual_push_command(&self, remote: &str) -> String {
        format!("git push {} {}", remote, self.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
