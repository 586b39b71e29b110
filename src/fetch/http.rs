use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use super::{parse_csv_bytes, SheetSource, SheetTab};
use crate::error::FetchError;
use crate::models::Table;

/// Downloads tabs through the spreadsheet's CSV export endpoint.
#[derive(Debug, Clone)]
pub struct HttpSheetSource {
    client: Client,
    export_base: String,
}

impl HttpSheetSource {
    /// `timeout` of `None` waits for the server indefinitely.
    pub fn new(export_base: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            export_base: export_base.into(),
        })
    }
}

impl SheetSource for HttpSheetSource {
    fn fetch(&self, tab: &SheetTab) -> Result<Table, FetchError> {
        let url = tab.export_url(&self.export_base);
        info!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        // Undecodable bytes must fail the parse, never be replaced
        let body = response.bytes().map_err(|source| FetchError::Http {
            url: url.clone(),
            source,
        })?;
        debug!("{} returned {} bytes", url, body.len());

        parse_csv_bytes(&url, &body)
    }
}
