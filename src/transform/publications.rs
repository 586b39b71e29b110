use serde_json::Value;

use super::finish_records;
use crate::error::TransformError;
use crate::models::publication::{AUTHORS_COLUMN, PEOPLE_COLUMN};
use crate::models::{Record, Row, Table, PUBLICATIONS};
use crate::utils::{split_authors, split_people};

/// Reshape the publications tab.
///
/// Blank rows are dropped, headers normalized, `authors` and `people` turned
/// into string lists, and `id` assigned from the position among kept rows.
/// Other empty cells are written as `null`.
pub fn transform_publications(table: &Table) -> Result<Vec<Record>, TransformError> {
    PUBLICATIONS.check_headers(&table.headers)?;
    let names = PUBLICATIONS.normalize_headers(&table.headers)?;

    let mut records = table
        .rows
        .iter()
        .filter(|row| !row.is_blank())
        .map(|row| publication_record(&names, row))
        .collect::<Result<Vec<_>, _>>()?;

    finish_records(&PUBLICATIONS, &names, &mut records);
    Ok(records)
}

fn publication_record(names: &[String], row: &Row) -> Result<Record, TransformError> {
    let mut record = Record::new();
    for (i, name) in names.iter().enumerate() {
        let cell = row.get(i);
        let value = match name.as_str() {
            AUTHORS_COLUMN => list_value(split_authors(required_cell(cell, AUTHORS_COLUMN, row)?)),
            PEOPLE_COLUMN => list_value(split_people(required_cell(cell, PEOPLE_COLUMN, row)?)),
            _ => cell.map_or(Value::Null, |s| Value::String(s.to_string())),
        };
        record.insert(name.clone(), value);
    }
    Ok(record)
}

fn required_cell<'a>(
    cell: Option<&'a str>,
    column: &'static str,
    row: &Row,
) -> Result<&'a str, TransformError> {
    cell.ok_or(TransformError::MissingCell {
        dataset: PUBLICATIONS.name,
        column,
        line: row.line,
    })
}

fn list_value(items: Vec<String>) -> Value {
    Value::Array(items.into_iter().map(Value::String).collect())
}
