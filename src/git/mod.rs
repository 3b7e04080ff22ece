//! Git operations abstraction layer
//!
//! Everything auto-tag needs from version control goes through the
//! [TagRepository] trait, so the release workflow can run against a real
//! repository or an in-memory fake.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use auto_tag::git::TagRepository;
//! # fn example<R: TagRepository>(repo: &R) -> auto_tag::Result<()> {
//! let latest = repo.latest_tag()?.unwrap_or_else(|| "v0.0.0".to_string());
//! if !repo.tag_exists("v1.0.0")? {
//!     repo.create_annotated_tag("v1.0.0", "chore(release): v1.0.0")?;
//! }
//! # let _ = latest;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Config key holding the committer name
pub const USER_NAME_KEY: &str = "user.name";
/// Config key holding the committer email
pub const USER_EMAIL_KEY: &str = "user.email";

/// Version-control operations used by the release workflow
///
/// Every method reports failure through [crate::error::Result] rather than
/// panicking. Conditions the workflow treats as normal (no tag yet, a missing
/// config key) are `Ok` values, not errors.
pub trait TagRepository {
    /// Nearest tag reachable from HEAD, like `git describe --tags --abbrev=0`
    ///
    /// Returns `Ok(None)` when no tag can be found.
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Whether `refs/tags/<name>` exists
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Full message of the commit at HEAD
    fn last_commit_message(&self) -> Result<String>;

    /// Whether a config key (e.g. `user.name`) has a value
    fn has_config(&self, key: &str) -> Result<bool>;

    /// Set a config key in the repository-local configuration
    fn set_config(&self, key: &str, value: &str) -> Result<()>;

    /// Create an annotated tag at HEAD
    ///
    /// Fails if a tag with this name already exists.
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push a single tag to the named remote
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
