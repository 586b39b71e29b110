pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod transform;
pub mod utils;

// Re-export commonly used items
pub use config::{DatasetConfig, SyncConfig};
pub use error::{FetchError, TransformError};
pub use fetch::{HttpSheetSource, LocalSheetSource, SheetSource, SheetTab};
pub use models::{Record, Row, Table};
pub use pipeline::{run_all, sync_news, sync_publications, SyncReport};
pub use transform::{transform_news, transform_publications};
pub use utils::{normalize_column_name, split_authors, split_people};
