//! Run configuration: which sheet tabs to read and where the JSON goes.
//!
//! Defaults reproduce the site's fixed setup. Each value can be overridden
//! through an environment variable (a `.env` file is honoured by the binaries).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::fetch::{HttpSheetSource, LocalSheetSource, SheetSource, SheetTab};

pub const DEFAULT_EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";
pub const DEFAULT_SHEET_ID: &str = "1lardxEdOL6BTCCHxjU3uGfWWE30H4kxv5pO5OklLwKs";
pub const DEFAULT_PUBLICATIONS_GID: &str = "0";
pub const DEFAULT_NEWS_GID: &str = "2048258914";
pub const DEFAULT_PUBLICATIONS_PATH: &str = "src/publication_collection/publications.json";
pub const DEFAULT_NEWS_PATH: &str = "src/news_collection/social_news.json";

pub const ENV_SHEET_ID: &str = "SHEET_SYNC_SHEET_ID";
pub const ENV_PUBLICATIONS_GID: &str = "SHEET_SYNC_PUBLICATIONS_GID";
pub const ENV_NEWS_GID: &str = "SHEET_SYNC_NEWS_GID";
pub const ENV_PUBLICATIONS_PATH: &str = "SHEET_SYNC_PUBLICATIONS_PATH";
pub const ENV_NEWS_PATH: &str = "SHEET_SYNC_NEWS_PATH";
pub const ENV_EXPORT_BASE: &str = "SHEET_SYNC_EXPORT_BASE";
pub const ENV_TIMEOUT_SECS: &str = "SHEET_SYNC_TIMEOUT_SECS";
pub const ENV_LOCAL_DIR: &str = "SHEET_SYNC_LOCAL_DIR";

/// One dataset: the tab it is read from and the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub tab: SheetTab,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub export_base: String,
    /// HTTP timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Read `<dir>/<gid>.csv` instead of downloading.
    pub local_dir: Option<PathBuf>,
    pub publications: DatasetConfig,
    pub news: DatasetConfig,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            export_base: DEFAULT_EXPORT_BASE.to_string(),
            timeout: None,
            local_dir: None,
            publications: DatasetConfig {
                tab: SheetTab::new(DEFAULT_SHEET_ID, DEFAULT_PUBLICATIONS_GID),
                output: PathBuf::from(DEFAULT_PUBLICATIONS_PATH),
            },
            news: DatasetConfig {
                tab: SheetTab::new(DEFAULT_SHEET_ID, DEFAULT_NEWS_GID),
                output: PathBuf::from(DEFAULT_NEWS_PATH),
            },
        }
    }
}

impl SyncConfig {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(sheet_id) = get(ENV_SHEET_ID) {
            config.publications.tab.sheet_id = sheet_id.clone();
            config.news.tab.sheet_id = sheet_id;
        }
        if let Some(gid) = get(ENV_PUBLICATIONS_GID) {
            config.publications.tab.gid = gid;
        }
        if let Some(gid) = get(ENV_NEWS_GID) {
            config.news.tab.gid = gid;
        }
        if let Some(path) = get(ENV_PUBLICATIONS_PATH) {
            config.publications.output = PathBuf::from(path);
        }
        if let Some(path) = get(ENV_NEWS_PATH) {
            config.news.output = PathBuf::from(path);
        }
        if let Some(base) = get(ENV_EXPORT_BASE) {
            config.export_base = base;
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got `{secs}`"))?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(dir) = get(ENV_LOCAL_DIR) {
            config.local_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// The source this configuration reads from.
    pub fn source(&self) -> Result<Box<dyn SheetSource>> {
        match &self.local_dir {
            Some(dir) => {
                anyhow::ensure!(dir.is_dir(), "Local directory does not exist: {}", dir.display());
                Ok(Box::new(LocalSheetSource::new(dir.clone())))
            }
            None => {
                let source = HttpSheetSource::new(self.export_base.clone(), self.timeout)
                    .context("Failed to set up HTTP client")?;
                Ok(Box::new(source))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SyncConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SyncConfig::default());
        assert_eq!(
            config.publications.tab.export_url(&config.export_base),
            "https://docs.google.com/spreadsheets/d/1lardxEdOL6BTCCHxjU3uGfWWE30H4kxv5pO5OklLwKs/export?format=csv&gid=0"
        );
        assert_eq!(config.news.tab.gid, "2048258914");
        assert_eq!(config.news.output, PathBuf::from("src/news_collection/social_news.json"));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_overrides() {
        let config = SyncConfig::from_lookup(lookup(&[
            (ENV_SHEET_ID, "other"),
            (ENV_NEWS_GID, "9"),
            (ENV_PUBLICATIONS_PATH, "out/pubs.json"),
            (ENV_TIMEOUT_SECS, " 15 "),
            (ENV_LOCAL_DIR, "fixtures"),
        ]))
        .unwrap();

        assert_eq!(config.publications.tab, SheetTab::new("other", "0"));
        assert_eq!(config.news.tab, SheetTab::new("other", "9"));
        assert_eq!(config.publications.output, PathBuf::from("out/pubs.json"));
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.local_dir, Some(PathBuf::from("fixtures")));
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = SyncConfig::from_lookup(lookup(&[(ENV_SHEET_ID, "  ")])).unwrap();
        assert_eq!(config.publications.tab.sheet_id, DEFAULT_SHEET_ID);
    }

    #[test]
    fn test_bad_timeout() {
        let err = SyncConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }

    #[test]
    fn test_missing_local_dir_rejected() {
        let config = SyncConfig {
            local_dir: Some(PathBuf::from("/definitely/not/here")),
            ..SyncConfig::default()
        };
        assert!(config.source().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(ENV_PUBLICATIONS_GID, "123");
        let config = SyncConfig::from_env();
        std::env::remove_var(ENV_PUBLICATIONS_GID);

        assert_eq!(config.unwrap().publications.tab.gid, "123");
    }
}
