use super::schema::{DatasetSchema, HeaderForm, OptionalColumn};

/// Social news tab.
///
/// Required names are matched against the header row as typed; a row lacking
/// any of them is dropped. `thumbnail` and `embed` are optional on the site
/// and default to empty strings when the tab has no such column.
pub const NEWS: DatasetSchema = DatasetSchema {
    name: "news",
    required: &["Title", "Date", "URL"],
    required_form: HeaderForm::Original,
    optional: &[
        OptionalColumn {
            name: "thumbnail",
            default: "",
        },
        OptionalColumn {
            name: "embed",
            default: "",
        },
    ],
};
