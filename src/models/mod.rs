pub mod news;
pub mod publication;
pub mod schema;
pub mod table;

pub use news::NEWS;
pub use publication::PUBLICATIONS;
pub use schema::{DatasetSchema, HeaderForm, OptionalColumn};
pub use table::{parse_cell, Cell, Row, Table, TablePreview, DEFAULT_PREVIEW_ROWS, MISSING_TOKENS};

/// One output object: normalized column name to JSON value, in column order.
pub type Record = serde_json::Map<String, serde_json::Value>;
