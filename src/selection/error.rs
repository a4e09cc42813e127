//! Error taxonomy for snippet validation and combination building.

use crate::models::SnippetField;

/// Why a snippet record was dropped while loading a collection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("entry {index}: not a record")]
    NotARecord { index: usize },
    #[error("entry {index}: missing `{field}`")]
    MissingField { index: usize, field: SnippetField },
    #[error("entry {index}: `{field}` must be a string, found {found}")]
    WrongType {
        index: usize,
        field: SnippetField,
        found: &'static str,
    },
    #[error("entry {index}: `{field}` is empty")]
    EmptyField { index: usize, field: SnippetField },
    #[error("entry {index}: `{field}` is {len} characters long (max {max})")]
    TooLong {
        index: usize,
        field: SnippetField,
        len: usize,
        max: usize,
    },
}

impl ValidationError {
    pub fn index(&self) -> usize {
        match self {
            ValidationError::NotARecord { index }
            | ValidationError::MissingField { index, .. }
            | ValidationError::WrongType { index, .. }
            | ValidationError::EmptyField { index, .. }
            | ValidationError::TooLong { index, .. } => *index,
        }
    }

    /// Short name of the violated rule
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::NotARecord { .. } => "not_a_record",
            ValidationError::MissingField { .. } => "missing_field",
            ValidationError::WrongType { .. } => "wrong_type",
            ValidationError::EmptyField { .. } => "empty_field",
            ValidationError::TooLong { .. } => "too_long",
        }
    }
}

/// Rejections from the combination controller. State is never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinationError {
    #[error("snippet is not a valid title/content record")]
    InvalidData,
    #[error("\"{title}\" is already part of the combination")]
    Duplicate { title: String },
    #[error("combined size would be {attempted} characters (limit {max})")]
    SizeLimit { attempted: usize, max: usize },
    #[error("nothing selected to combine")]
    EmptyCombination,
    #[error("combination entry {index} failed validation")]
    ValidationFailure { index: usize },
}

impl CombinationError {
    /// Stable reason code for UI feedback
    pub fn reason_code(&self) -> &'static str {
        match self {
            CombinationError::InvalidData => "invalid_data",
            CombinationError::Duplicate { .. } => "duplicate",
            CombinationError::SizeLimit { .. } => "size_limit",
            CombinationError::EmptyCombination => "empty_combination",
            CombinationError::ValidationFailure { .. } => "validation_failure",
        }
    }
}
