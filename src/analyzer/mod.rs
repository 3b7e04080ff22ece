//! Release analysis - combines commit classification with version bumping

pub mod version_analyzer;

pub use version_analyzer::{NextRelease, VersionAnalyzer, INITIAL_TAG};
