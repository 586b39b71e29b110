#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use sheet_sync::fetch::parse_csv;
use sheet_sync::{DatasetConfig, FetchError, SheetSource, SheetTab, SyncConfig, Table};

pub const PUBLICATIONS_GID: &str = "0";
pub const NEWS_GID: &str = "2048258914";

pub const PUBLICATIONS_CSV: &str = "\
Paper Title,Venue,Type,DOI,Authors,Publication Date,People,Project
Entangled Widgets,Nature,Journal,https://doi.org/10.1000/a,\"Alice Smith, Bob Jones; Carol White\",2024-05-01,alice@example.org bob@example.org,Widgets
,,,,,,,
Noisy Channels,QIP,Conference,https://doi.org/10.1000/b,\"Dan Brown;\nEve Black\",2023-01-15,dan@example.org,
";

pub const NEWS_CSV: &str = "\
Title,Date,Source,URL,Notes
Lab opening,2024-03-01,Web,https://example.org/opening,
Missing link,2024-03-02,Twitter,,dropped
New grant,2024-04-10,LinkedIn,https://example.org/grant,Three years
";

/// Serves CSV bodies keyed by gid, parsed the same way as a download.
#[derive(Debug, Default)]
pub struct MemorySource {
    tabs: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(mut self, gid: &str, csv: &str) -> Self {
        self.tabs.insert(gid.to_string(), csv.to_string());
        self
    }

    pub fn fixtures() -> Self {
        Self::new()
            .with_tab(PUBLICATIONS_GID, PUBLICATIONS_CSV)
            .with_tab(NEWS_GID, NEWS_CSV)
    }
}

impl SheetSource for MemorySource {
    fn fetch(&self, tab: &SheetTab) -> Result<Table, FetchError> {
        let body = self.tabs.get(&tab.gid).ok_or_else(|| FetchError::Io {
            path: format!("memory/{}.csv", tab.gid).into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such tab"),
        })?;
        parse_csv(&format!("memory:{}", tab.gid), body)
    }
}

/// Default tabs, with both outputs redirected under `root`.
pub fn config_in(root: &Path) -> SyncConfig {
    let defaults = SyncConfig::default();
    SyncConfig {
        publications: DatasetConfig {
            tab: defaults.publications.tab.clone(),
            output: root.join(&defaults.publications.output),
        },
        news: DatasetConfig {
            tab: defaults.news.tab.clone(),
            output: root.join(&defaults.news.output),
        },
        ..defaults
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("output file should exist");
    serde_json::from_str(&text).expect("output should be valid JSON")
}
