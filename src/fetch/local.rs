use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{parse_csv_bytes, SheetSource, SheetTab};
use crate::error::FetchError;
use crate::models::Table;

/// Reads previously exported tabs from `<dir>/<gid>.csv`.
#[derive(Debug, Clone)]
pub struct LocalSheetSource {
    dir: PathBuf,
}

impl LocalSheetSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, tab: &SheetTab) -> PathBuf {
        self.dir.join(format!("{}.csv", tab.gid))
    }
}

impl SheetSource for LocalSheetSource {
    fn fetch(&self, tab: &SheetTab) -> Result<Table, FetchError> {
        let path = self.path_for(tab);
        info!("Reading local file: {}", path.display());
        read_csv_file(&path)
    }
}

/// Load one CSV file as a table.
pub fn read_csv_file(path: &Path) -> Result<Table, FetchError> {
    let body = fs::read(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv_bytes(&path.display().to_string(), &body)
}
