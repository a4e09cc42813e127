use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// A titled block of text that can be injected on commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    title: String,
    content: String,
}

/// Immutable snapshot of the loaded snippets, replaced wholesale on reload
pub type SnippetCollection = Arc<[Snippet]>;

impl Snippet {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content length in characters
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Case-insensitive substring match against title or content.
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }

    pub fn first_line(&self) -> &str {
        self.content.lines().next().unwrap_or_default()
    }

    /// Builds a snippet from any record whose title and content are strings
    pub fn from_record<R: SnippetRecord + ?Sized>(record: &R) -> Option<Self> {
        match (record.field(SnippetField::Title), record.field(SnippetField::Content)) {
            (FieldValue::Text(title), FieldValue::Text(content)) => Some(Self::new(title, content)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetField {
    Title,
    Content,
}

impl SnippetField {
    pub fn name(self) -> &'static str {
        match self {
            SnippetField::Title => "title",
            SnippetField::Content => "content",
        }
    }
}

impl std::fmt::Display for SnippetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a record holds under a given field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// The record itself is null or not a key/value record
    NotARecord,
    Missing,
    /// Present, but not a string; carries the JSON type name
    WrongType(&'static str),
    Text(&'a str),
}

/// Anything that can be inspected as a `{ title, content }` record.
///
/// Typed snippets always answer with text; untyped JSON values read from disk may not.
pub trait SnippetRecord {
    fn field(&self, field: SnippetField) -> FieldValue<'_>;
}

impl SnippetRecord for Snippet {
    fn field(&self, field: SnippetField) -> FieldValue<'_> {
        match field {
            SnippetField::Title => FieldValue::Text(&self.title),
            SnippetField::Content => FieldValue::Text(&self.content),
        }
    }
}

impl SnippetRecord for Value {
    fn field(&self, field: SnippetField) -> FieldValue<'_> {
        let Value::Object(map) = self else {
            return FieldValue::NotARecord;
        };
        match map.get(field.name()) {
            None => FieldValue::Missing,
            Some(Value::String(text)) => FieldValue::Text(text),
            Some(other) => FieldValue::WrongType(json_type_name(other)),
        }
    }
}

impl<R: SnippetRecord> SnippetRecord for Option<R> {
    fn field(&self, field: SnippetField) -> FieldValue<'_> {
        match self {
            Some(record) => record.field(field),
            None => FieldValue::NotARecord,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
