//! Conventional commit classification
//!
//! A commit message is classified by walking an ordered table of rules. Each
//! rule pairs a pattern with the bump it implies; the first rule whose pattern
//! matches decides the bump. Breaking-change rules sit at the top of the
//! default table, so they win over the type-based rules below them.

use crate::domain::{BumpType, CommitMessage};
use regex::Regex;
use std::sync::OnceLock;

/// Commit types recognized in a conventional commit header
pub const COMMIT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// Which part of the commit message a rule is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget {
    /// The first line only
    Header,
    /// The whole message, header included
    FullMessage,
}

/// A single entry of the classification table
#[derive(Debug, Clone)]
pub struct BumpRule {
    pub name: &'static str,
    pub target: MatchTarget,
    pub pattern: Regex,
    pub bump: BumpType,
}

impl BumpRule {
    pub fn new(
        name: &'static str,
        target: MatchTarget,
        pattern: &str,
        bump: BumpType,
    ) -> Result<Self, regex::Error> {
        Ok(BumpRule {
            name,
            target,
            pattern: Regex::new(pattern)?,
            bump,
        })
    }

    /// Whether this rule applies to the message
    pub fn matches(&self, message: &CommitMessage) -> bool {
        let haystack = match self.target {
            MatchTarget::Header => message.header(),
            MatchTarget::FullMessage => message.as_str(),
        };
        self.pattern.is_match(haystack)
    }
}

/// Ordered list of rules; the first match wins
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<BumpRule>,
}

impl RuleTable {
    /// An empty table that classifies nothing
    pub fn empty() -> Self {
        RuleTable { rules: Vec::new() }
    }

    /// Append a rule with the lowest precedence so far
    pub fn push(&mut self, rule: BumpRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[BumpRule] {
        &self.rules
    }

    /// First rule matching the message, if any
    pub fn matching_rule(&self, message: &CommitMessage) -> Option<&BumpRule> {
        self.rules.iter().find(|rule| rule.matches(message))
    }

    /// Bump implied by the message, or `None` for non-conventional commits
    pub fn classify(&self, message: &CommitMessage) -> Option<BumpType> {
        self.matching_rule(message).map(|rule| rule.bump)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        let types = COMMIT_TYPES.join("|");
        let scope = r"(\([A-Za-z0-9_-]+\))?(!)?:";

        let rules = [
            // `!:` anywhere in the header, not only right after type/scope
            ("breaking-marker", MatchTarget::Header, r"!:".to_string(), BumpType::Major),
            (
                "breaking-change-footer",
                MatchTarget::FullMessage,
                r"(?im)^BREAKING CHANGE:".to_string(),
                BumpType::Major,
            ),
            ("feature", MatchTarget::Header, format!("^feat{}", scope), BumpType::Minor),
            (
                "conventional-type",
                MatchTarget::Header,
                format!("^({}){}", types, scope),
                BumpType::Patch,
            ),
        ];

        let mut table = RuleTable::empty();
        for (name, target, pattern, bump) in rules {
            // Patterns above are fixed literals
            let rule = BumpRule::new(name, target, &pattern, bump)
                .expect("built-in classification pattern must compile");
            table.push(rule);
        }
        table
    }
}

fn default_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(RuleTable::default)
}

/// Classify a commit message with the default rule table
pub fn classify_commit(message: &CommitMessage) -> Option<BumpType> {
    default_table().classify(message)
}
