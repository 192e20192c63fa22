//! Checker configuration
//!
//! Deserialized via the `config` crate from, lowest precedence first:
//! built-in defaults, an optional `wordtab.toml` (or an explicit file),
//! and `WORDTAB__SECTION__KEY` environment variables.

use crate::error::CheckError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wordtab_core::{HashVariant, Strategy};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Dictionary source
    #[serde(default)]
    pub wordlist: WordListConfig,
    /// Table instances to build
    #[serde(default)]
    pub tables: TableSetConfig,
    /// Password policy
    #[serde(default)]
    pub checker: PolicyConfig,
    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Word-list location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordListConfig {
    /// Plain text file, one word per line
    #[serde(default = "default_wordlist_path")]
    pub path: PathBuf,
}

/// Which tables to build and how large
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSetConfig {
    /// Buckets per separate chaining table
    #[serde(default = "default_chaining_capacity")]
    pub chaining_capacity: usize,
    /// Slots per linear probing table
    #[serde(default = "default_probing_capacity")]
    pub probing_capacity: usize,
    /// Strategy and hash variant of each instance, in report order
    #[serde(default = "default_instances")]
    pub instances: Vec<InstanceSpec>,
}

/// One table instance: a strategy paired with the hash variant it always uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSpec {
    pub strategy: Strategy,
    pub variant: HashVariant,
}

/// Password policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Shortest acceptable password, in characters
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl CheckerConfig {
    /// Build the layered configuration from the process environment
    ///
    /// With `file` set, that file must exist; otherwise `wordtab.toml` in the
    /// working directory is used when present. The result is not validated,
    /// so later overrides can still repair it; call [`validate`](Self::validate)
    /// once every layer is applied.
    pub fn load(file: Option<&Path>) -> Result<Self, CheckError> {
        Self::load_from(file, None)
    }

    /// Like [`load`](Self::load), reading `WORDTAB__*` variables from `env`
    /// instead of the process environment when given
    pub fn load_from(
        file: Option<&Path>,
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self, CheckError> {
        let file_source = match file {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name("wordtab").required(false),
        };

        let config = ::config::Config::builder()
            .add_source(file_source)
            .add_source(
                ::config::Environment::with_prefix("WORDTAB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Reject settings no table set could be built from
    pub fn validate(&self) -> Result<(), CheckError> {
        self.tables.validate()?;
        if self.checker.min_length == 0 {
            return Err(CheckError::InvalidConfig(
                "checker.min_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl TableSetConfig {
    /// Capacity used for every instance of `strategy`
    pub fn capacity_for(&self, strategy: Strategy) -> usize {
        match strategy {
            Strategy::Chaining => self.chaining_capacity,
            Strategy::LinearProbing => self.probing_capacity,
        }
    }

    pub fn validate(&self) -> Result<(), CheckError> {
        if self.instances.is_empty() {
            return Err(CheckError::InvalidConfig(
                "tables.instances must name at least one table".to_string(),
            ));
        }
        if self.chaining_capacity == 0 || self.probing_capacity == 0 {
            return Err(CheckError::InvalidConfig(
                "table capacities must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            path: default_wordlist_path(),
        }
    }
}

impl Default for TableSetConfig {
    fn default() -> Self {
        Self {
            chaining_capacity: default_chaining_capacity(),
            probing_capacity: default_probing_capacity(),
            instances: default_instances(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_wordlist_path() -> PathBuf {
    PathBuf::from("wordlist10000.txt")
}

fn default_chaining_capacity() -> usize {
    1000
}

fn default_probing_capacity() -> usize {
    20000
}

fn default_instances() -> Vec<InstanceSpec> {
    [Strategy::Chaining, Strategy::LinearProbing]
        .into_iter()
        .flat_map(|strategy| {
            HashVariant::ALL
                .into_iter()
                .map(move |variant| InstanceSpec { strategy, variant })
        })
        .collect()
}

fn default_min_length() -> usize {
    8
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}
