use crate::models::{Snippet, SnippetCollection};
use crate::selection::{SelectionValidator, ValidationError};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading a snippet file: usable snippets plus the reasons for every dropped entry
#[derive(Debug, Clone)]
pub struct LoadedCollection {
    pub snippets: SnippetCollection,
    pub rejected: Vec<ValidationError>,
}

impl LoadedCollection {
    pub fn empty() -> Self {
        Self {
            snippets: Vec::new().into(),
            rejected: Vec::new(),
        }
    }
}

/// Reads snippet collections from disk
#[derive(Debug, Clone)]
pub struct SnippetStore {
    snippets_file: PathBuf,
}

impl SnippetStore {
    pub fn new(snippets_file: impl Into<PathBuf>) -> Self {
        Self {
            snippets_file: snippets_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.snippets_file
    }

    /// Loads and validates the collection. Invalid entries are dropped, never fatal.
    /// A missing file is an empty collection.
    pub fn load(&self, validator: &SelectionValidator) -> Result<LoadedCollection> {
        if !self.snippets_file.exists() {
            log::info!(
                "Snippet file {:?} does not exist, starting empty",
                self.snippets_file
            );
            return Ok(LoadedCollection::empty());
        }

        let content = fs::read_to_string(&self.snippets_file).with_context(|| {
            format!("Failed to read snippet file {}", self.snippets_file.display())
        })?;

        let loaded = parse_collection(&content, self.format(), validator)
            .with_context(|| format!("Invalid snippet file {}", self.snippets_file.display()))?;

        log::info!(
            "Loaded {} snippets from {:?} ({} rejected)",
            loaded.snippets.len(),
            self.snippets_file,
            loaded.rejected.len()
        );
        Ok(loaded)
    }

    fn format(&self) -> FileFormat {
        match self
            .snippets_file
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            _ => FileFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

/// Parses a document holding an array of `{ title, content }` records
pub fn parse_collection(
    content: &str,
    format: FileFormat,
    validator: &SelectionValidator,
) -> Result<LoadedCollection> {
    let document: Value = match format {
        FileFormat::Json => serde_json::from_str(content).context("Failed to parse snippet JSON")?,
        FileFormat::Yaml => serde_yaml::from_str(content).context("Failed to parse snippet YAML")?,
    };

    let Value::Array(entries) = document else {
        bail!("Snippet file must contain a list of snippets");
    };

    let mut snippets = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match validator.check_for_use(entry, index) {
            Ok(()) => {
                if let Some(snippet) = Snippet::from_record(entry) {
                    snippets.push(snippet);
                }
            }
            Err(err) => rejected.push(err),
        }
    }

    Ok(LoadedCollection {
        snippets: snippets.into(),
        rejected,
    })
}
