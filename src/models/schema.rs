use crate::error::TransformError;
use crate::utils::normalize_column_name;

/// Which spelling of the header row a schema's required names refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderForm {
    /// Exactly as typed in the sheet.
    Original,
    /// After [`normalize_column_name`].
    Normalized,
}

/// A column added to every record, with a fixed value, when the sheet lacks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalColumn {
    pub name: &'static str,
    pub default: &'static str,
}

/// Column contract for one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSchema {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub required_form: HeaderForm,
    /// Named in normalized form.
    pub optional: &'static [OptionalColumn],
}

impl DatasetSchema {
    /// Fail with the first required column that `headers` (as read from the
    /// sheet) does not provide.
    pub fn check_headers(&self, headers: &[String]) -> Result<(), TransformError> {
        let present: Vec<String> = match self.required_form {
            HeaderForm::Original => headers.to_vec(),
            HeaderForm::Normalized => headers.iter().map(|h| normalize_column_name(h)).collect(),
        };

        match self
            .required
            .iter()
            .find(|column| !present.iter().any(|p| p == *column))
        {
            Some(column) => Err(TransformError::MissingColumn {
                dataset: self.name,
                column: *column,
                found: headers.join(", "),
            }),
            None => Ok(()),
        }
    }

    /// Normalize `headers`, rejecting two headers that collapse to the same key.
    pub fn normalize_headers(&self, headers: &[String]) -> Result<Vec<String>, TransformError> {
        let mut names: Vec<String> = Vec::with_capacity(headers.len());
        for header in headers {
            let name = normalize_column_name(header);
            if let Some(i) = names.iter().position(|n| *n == name) {
                return Err(TransformError::DuplicateColumn {
                    dataset: self.name,
                    first: headers[i].clone(),
                    second: header.clone(),
                    normalized: name,
                });
            }
            names.push(name);
        }
        Ok(names)
    }

    /// Optional columns not covered by the already-normalized `names`.
    pub fn absent_optional<'a>(
        &'a self,
        names: &'a [String],
    ) -> impl Iterator<Item = &'a OptionalColumn> + 'a {
        self.optional
            .iter()
            .filter(move |opt| !names.iter().any(|n| n == opt.name))
    }
}
