//! Dictionary-backed password strength checking on wordtab tables
//!
//! Provides:
//! - Layered configuration (defaults, TOML file, environment)
//! - Word-list loading into several table instances at once
//! - Strength verdicts with per-instance comparison reports

pub mod error;
pub mod config;
pub mod loader;
pub mod tables;
pub mod checker;

pub use error::CheckError;
pub use crate::config::{
    CheckerConfig, InstanceSpec, LoggingConfig, PolicyConfig, TableSetConfig, WordListConfig,
};
pub use loader::load_word_list;
pub use tables::{Instance, LoadReport, TableSet};
pub use checker::{Assessment, ComparisonReport, InstanceCount, StrengthChecker, Verdict};
