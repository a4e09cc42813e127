pub mod snippet;
pub mod storage;

pub use snippet::{FieldValue, Snippet, SnippetCollection, SnippetField, SnippetRecord};
pub use storage::{LoadedCollection, SnippetStore};
