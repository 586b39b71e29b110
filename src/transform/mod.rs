//! Dataset-specific reshaping of a fetched [`Table`](crate::models::Table)
//! into output records. Every function here is pure: no I/O, no logging.

pub mod news;
pub mod publications;

pub use news::transform_news;
pub use publications::transform_publications;

use serde_json::Value;

use crate::models::{DatasetSchema, Record};

/// Add each optional column the sheet did not provide, then number the
/// records 1..=n in their current order. An existing `id` column is
/// overwritten in place.
pub(crate) fn finish_records(schema: &DatasetSchema, names: &[String], records: &mut [Record]) {
    let absent: Vec<_> = schema.absent_optional(names).collect();
    for (i, record) in records.iter_mut().enumerate() {
        for opt in &absent {
            record.insert(opt.name.to_string(), Value::String(opt.default.to_string()));
        }
        record.insert("id".to_string(), Value::from(i as u64 + 1));
    }
}
