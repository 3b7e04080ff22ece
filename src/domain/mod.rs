//! Domain logic - pure business rules independent of git operations

pub mod commit;
pub mod tag;
pub mod version;

pub use commit::CommitMessage;
pub use tag::Tag;
pub use version::{BumpType, Version};
