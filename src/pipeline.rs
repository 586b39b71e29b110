//! Fetch → transform → write, once per dataset.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::{DatasetConfig, SyncConfig};
use crate::error::TransformError;
use crate::fetch::SheetSource;
use crate::models::{Record, Table, DEFAULT_PREVIEW_ROWS};
use crate::output::write_records;
use crate::transform::{transform_news, transform_publications};

/// What one dataset sync did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub dataset: &'static str,
    /// Data rows in the fetched tab.
    pub fetched: usize,
    /// Records written.
    pub kept: usize,
    pub output: PathBuf,
}

impl SyncReport {
    pub fn dropped(&self) -> usize {
        self.fetched - self.kept
    }
}

type Transform = fn(&Table) -> Result<Vec<Record>, TransformError>;

fn sync_dataset(
    name: &'static str,
    source: &dyn SheetSource,
    dataset: &DatasetConfig,
    transform: Transform,
) -> Result<SyncReport> {
    let table = source
        .fetch(&dataset.tab)
        .with_context(|| format!("Failed to fetch {name} sheet (gid {})", dataset.tab.gid))?;
    info!("{}:\n{}", name, table.preview(DEFAULT_PREVIEW_ROWS));

    let records = transform(&table).with_context(|| format!("Failed to transform {name}"))?;
    write_records(&dataset.output, &records)
        .with_context(|| format!("Failed to write {}", dataset.output.display()))?;

    let report = SyncReport {
        dataset: name,
        fetched: table.len(),
        kept: records.len(),
        output: dataset.output.clone(),
    };
    info!(
        "Wrote {} {} records to {} ({} rows dropped)",
        report.kept,
        name,
        report.output.display(),
        report.dropped()
    );
    Ok(report)
}

/// Fetch the publications tab, reshape it and write the JSON file.
pub fn sync_publications(source: &dyn SheetSource, dataset: &DatasetConfig) -> Result<SyncReport> {
    sync_dataset("publications", source, dataset, transform_publications)
}

/// Fetch the news tab, reshape it and write the JSON file.
pub fn sync_news(source: &dyn SheetSource, dataset: &DatasetConfig) -> Result<SyncReport> {
    sync_dataset("news", source, dataset, transform_news)
}

/// Publications first, then news. Stops at the first failure; a file
/// already written stays in place.
pub fn run_all(config: &SyncConfig, source: &dyn SheetSource) -> Result<Vec<SyncReport>> {
    info!("Syncing publications data...");
    let publications = sync_publications(source, &config.publications)?;

    info!("Syncing news data...");
    let news = sync_news(source, &config.news)?;

    let reports = vec![publications, news];
    info!("Data sync complete.");
    info!("Summary: {}", summary_json(&reports)?);
    Ok(reports)
}

/// One-line JSON rendering of the reports, for the run log.
pub fn summary_json(reports: &[SyncReport]) -> Result<String> {
    serde_json::to_string(reports).context("Failed to serialize sync summary")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_json() {
        let reports = vec![SyncReport {
            dataset: "news",
            fetched: 3,
            kept: 2,
            output: PathBuf::from("out/social_news.json"),
        }];

        let value: serde_json::Value = serde_json::from_str(&summary_json(&reports).unwrap()).unwrap();
        assert_eq!(
            value,
            json!([{
                "dataset": "news",
                "fetched": 3,
                "kept": 2,
                "output": "out/social_news.json"
            }])
        );
        assert_eq!(reports[0].dropped(), 1);
    }
}
