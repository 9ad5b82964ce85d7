//! Configuration file support for bug-portal.
//!
//! Provides YAML-based configuration through `bug-portal.config.yml` files,
//! including data structures, defaults, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::adapters::outbound::build_system::KojiUrlBuilder;
use crate::adapters::outbound::network::BugzillaClient;
use crate::application::services::{
    DEFAULT_BLACKLIST, DEFAULT_HYDRATION_CHUNK_SIZE, DEFAULT_PAGE_SIZE,
};
use crate::application::use_cases::{BUG_LIST_TTL, DEFAULT_COLLECTION, STATS_TTL};
use crate::bug_tracking::policies::security_classification::DEFAULT_SECURITY_ASSIGNEE;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bug-portal.config.yml";

/// Top-level configuration file schema.
///
/// Every section is optional; missing values fall back to the defaults
/// the portal has always run with.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    #[serde(default)]
    pub bugzilla: BugzillaSection,
    #[serde(default)]
    pub cache: CacheSection,
    #[serde(default)]
    pub stats: StatsSection,
    #[serde(default)]
    pub koji: KojiSection,
    #[serde(default)]
    pub logging: LoggingSection,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Remote bug tracker settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BugzillaSection {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Rows requested per sweep page
    pub page_size: usize,
    /// Bug ids fetched per hydration call
    pub chunk_size: usize,
    pub security_assignee: String,
}

impl Default for BugzillaSection {
    fn default() -> Self {
        Self {
            base_url: BugzillaClient::DEFAULT_BASE_URL.to_string(),
            timeout_secs: BugzillaClient::DEFAULT_TIMEOUT.as_secs(),
            page_size: DEFAULT_PAGE_SIZE,
            chunk_size: DEFAULT_HYDRATION_CHUNK_SIZE,
            security_assignee: DEFAULT_SECURITY_ASSIGNEE.to_string(),
        }
    }
}

impl BugzillaSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    pub bug_list_ttl_secs: u64,
    pub stats_ttl_secs: u64,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            bug_list_ttl_secs: BUG_LIST_TTL.as_secs(),
            stats_ttl_secs: STATS_TTL.as_secs(),
        }
    }
}

impl CacheSection {
    pub fn bug_list_ttl(&self) -> Duration {
        Duration::from_secs(self.bug_list_ttl_secs)
    }

    pub fn stats_ttl(&self) -> Duration {
        Duration::from_secs(self.stats_ttl_secs)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StatsSection {
    /// Collection the stats battery runs against
    pub collection: String,
    /// Packages whose unbounded sub-queries are skipped
    pub blacklist: Vec<String>,
}

impl Default for StatsSection {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            blacklist: DEFAULT_BLACKLIST.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KojiSection {
    pub host: String,
}

impl Default for KojiSection {
    fn default() -> Self {
        Self {
            host: KojiUrlBuilder::DEFAULT_HOST.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.bugzilla.base_url.trim().is_empty() {
        bail!(
            "Invalid config: bugzilla.base_url must not be empty.\n\n\
             💡 Hint: Use the root URL of the Bugzilla instance (e.g., \"{}\").",
            BugzillaClient::DEFAULT_BASE_URL
        );
    }
    if config.bugzilla.page_size == 0 {
        bail!(
            "Invalid config: bugzilla.page_size must be greater than zero.\n\n\
             💡 Hint: The default page size is {}.",
            DEFAULT_PAGE_SIZE
        );
    }
    if config.bugzilla.chunk_size == 0 {
        bail!(
            "Invalid config: bugzilla.chunk_size must be greater than zero.\n\n\
             💡 Hint: The default chunk size is {}.",
            DEFAULT_HYDRATION_CHUNK_SIZE
        );
    }
    if config.stats.collection.trim().is_empty() {
        bail!(
            "Invalid config: stats.collection must not be empty.\n\n\
             💡 Hint: Use a product name such as \"{}\".",
            DEFAULT_COLLECTION
        );
    }
    Ok(())
}

impl ConfigFile {
    /// Warn about unknown fields in the config file.
    ///
    /// Called once logging is set up, since the logging section itself
    /// comes from this file.
    pub fn warn_unknown_fields(&self) {
        for key in self.unknown_fields.keys() {
            warn!(field = %key, "Unknown config field will be ignored");
        }
    }
}
