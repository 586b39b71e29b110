use super::schema::{DatasetSchema, HeaderForm};

/// Column holding the free-text author list.
pub const AUTHORS_COLUMN: &str = "authors";
/// Column holding whitespace-separated group member handles.
pub const PEOPLE_COLUMN: &str = "people";

/// Publications tab.
///
/// Every row becomes one record; besides the two list columns below, columns
/// such as `paper_title`, `venue`, `type`, `doi`, `publication_date` and
/// `project` pass through as strings, with empty cells written as `null`.
pub const PUBLICATIONS: DatasetSchema = DatasetSchema {
    name: "publications",
    required: &[AUTHORS_COLUMN, PEOPLE_COLUMN],
    required_form: HeaderForm::Normalized,
    optional: &[],
};
