use serde_json::Value;

use super::finish_records;
use crate::error::TransformError;
use crate::models::{Record, Table, NEWS};

/// Reshape the social news tab.
///
/// Rows missing `Title`, `Date` or `URL` (header spelled exactly so) are
/// dropped, every remaining empty cell becomes `""`, headers are normalized
/// and `id` is assigned from the position among kept rows.
pub fn transform_news(table: &Table) -> Result<Vec<Record>, TransformError> {
    NEWS.check_headers(&table.headers)?;
    let names = NEWS.normalize_headers(&table.headers)?;

    let required: Vec<usize> = NEWS
        .required
        .iter()
        .filter_map(|column| table.column_index(column))
        .collect();

    let mut records: Vec<Record> = table
        .rows
        .iter()
        .filter(|row| required.iter().all(|&i| row.get(i).is_some()))
        .map(|row| {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let text = row.get(i).unwrap_or_default().to_string();
                    (name.clone(), Value::String(text))
                })
                .collect()
        })
        .collect();

    finish_records(&NEWS, &names, &mut records);
    Ok(records)
}
