use crate::conventional::RuleTable;
use crate::domain::{BumpType, CommitMessage, Tag, Version};

/// Tag assumed when the repository has none yet
pub const INITIAL_TAG: &str = "v0.0.0";

/// Outcome of analyzing a commit against the latest tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextRelease {
    pub current: Version,
    pub next: Version,
    pub tag: Tag,
    pub bump: BumpType,
}

/// Decides the next release tag from the latest tag and a commit message
pub struct VersionAnalyzer {
    rules: RuleTable,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(rules: RuleTable) -> Self {
        VersionAnalyzer { rules }
    }

    /// Bump type implied by the commit, `None` if it follows no known convention
    pub fn classify(&self, message: &CommitMessage) -> Option<BumpType> {
        self.rules.classify(message)
    }

    /// Compute the next tag, or `None` when the commit warrants no release
    pub fn next_tag(&self, latest_tag: &str, message: &CommitMessage) -> Option<NextRelease> {
        let bump = self.classify(message)?;
        let current = Version::parse(latest_tag);
        let next = current.bump(bump);

        Some(NextRelease {
            current,
            next,
            tag: Tag::for_version(next),
            bump,
        })
    }
}

impl Default for VersionAnalyzer {
    fn default() -> Self {
        VersionAnalyzer::new(RuleTable::default())
    }
}
