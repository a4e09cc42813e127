//! Structural and size checks for individual snippet records.

use crate::config::LauncherConfig;
use crate::models::{FieldValue, SnippetField, SnippetRecord};
use crate::selection::error::ValidationError;

#[derive(Debug, Clone, Copy)]
pub struct SelectionValidator {
    max_title_length: usize,
    max_content_length: usize,
}

impl SelectionValidator {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            max_title_length: config.max_title_length,
            max_content_length: config.max_content_length,
        }
    }

    /// True iff the record exists and carries string `title` and `content` fields
    pub fn is_valid_structure<R: SnippetRecord + ?Sized>(&self, record: &R) -> bool {
        matches!(record.field(SnippetField::Title), FieldValue::Text(_))
            && matches!(record.field(SnippetField::Content), FieldValue::Text(_))
    }

    /// Structure plus length limits. Failures are logged with the entry index and rule.
    pub fn is_valid_for_use<R: SnippetRecord + ?Sized>(&self, record: &R, index: usize) -> bool {
        self.check_for_use(record, index).is_ok()
    }

    /// Same checks as [`Self::is_valid_for_use`], keeping the violated rule
    pub fn check_for_use<R: SnippetRecord + ?Sized>(
        &self,
        record: &R,
        index: usize,
    ) -> Result<(), ValidationError> {
        self.check_record(record, index)
            .inspect_err(|err| log::warn!("Dropping snippet ({}): {}", err.rule(), err))
    }

    fn check_record<R: SnippetRecord + ?Sized>(
        &self,
        record: &R,
        index: usize,
    ) -> Result<(), ValidationError> {
        let title = text_field(record, SnippetField::Title, index)?;
        let content = text_field(record, SnippetField::Content, index)?;

        check_length(title, SnippetField::Title, self.max_title_length, index)?;
        check_length(content, SnippetField::Content, self.max_content_length, index)
    }
}

fn text_field<R: SnippetRecord + ?Sized>(
    record: &R,
    field: SnippetField,
    index: usize,
) -> Result<&str, ValidationError> {
    match record.field(field) {
        FieldValue::Text(text) => Ok(text),
        FieldValue::NotARecord => Err(ValidationError::NotARecord { index }),
        FieldValue::Missing => Err(ValidationError::MissingField { index, field }),
        FieldValue::WrongType(found) => Err(ValidationError::WrongType {
            index,
            field,
            found,
        }),
    }
}

fn check_length(
    text: &str,
    field: SnippetField,
    max: usize,
    index: usize,
) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyField { index, field });
    }
    let len = text.chars().count();
    if len > max {
        return Err(ValidationError::TooLong {
            index,
            field,
            len,
            max,
        });
    }
    Ok(())
}
