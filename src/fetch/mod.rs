//! Obtaining sheet tabs as [`Table`]s.
//!
//! The transforms never see where a table came from. A [`SheetSource`] hides
//! that: [`HttpSheetSource`] downloads the CSV export of a tab, while
//! [`LocalSheetSource`] reads `<dir>/<gid>.csv` from disk.

pub mod http;
pub mod local;
pub mod parse;

pub use http::HttpSheetSource;
pub use local::{read_csv_file, LocalSheetSource};
pub use parse::{parse_csv, parse_csv_bytes, read_table};

use crate::error::FetchError;
use crate::models::Table;

/// Identifies one tab of a published spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTab {
    pub sheet_id: String,
    pub gid: String,
}

impl SheetTab {
    pub fn new(sheet_id: impl Into<String>, gid: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            gid: gid.into(),
        }
    }

    /// CSV export URL of this tab under `export_base`
    /// (normally `https://docs.google.com/spreadsheets/d`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sheet_sync::fetch::SheetTab;
    ///
    /// let tab = SheetTab::new("abc123", "42");
    /// assert_eq!(
    ///     tab.export_url("https://docs.google.com/spreadsheets/d"),
    ///     "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=42"
    /// );
    /// ```
    pub fn export_url(&self, export_base: &str) -> String {
        format!(
            "{}/{}/export?format=csv&gid={}",
            export_base.trim_end_matches('/'),
            self.sheet_id,
            self.gid
        )
    }
}

/// Anything that can produce the table behind a sheet tab.
pub trait SheetSource {
    fn fetch(&self, tab: &SheetTab) -> Result<Table, FetchError>;
}

impl<S: SheetSource + ?Sized> SheetSource for Box<S> {
    fn fetch(&self, tab: &SheetTab) -> Result<Table, FetchError> {
        (**self).fetch(tab)
    }
}
