pub mod analyzer;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;

pub use error::{AutoTagError, Result};
