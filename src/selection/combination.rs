//! Combination Mode
//!
//! Collects several snippets into one ordered, duplicate-free set whose contents are joined
//! with newlines on commit. The summed content length is tracked on every change and can never
//! exceed the configured limit. Combining mode switches on with the first successful add and
//! off when the set is emptied by removal or by leaving the mode.

use crate::config::LauncherConfig;
use crate::models::{Snippet, SnippetRecord};
use crate::selection::error::CombinationError;
use crate::selection::validator::SelectionValidator;

/// Output of a committed combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedPayload {
    pub text: String,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CombinationController {
    validator: SelectionValidator,
    max_combined_size: usize,
    entries: Vec<Snippet>,
    total_content_length: usize,
    active: bool,
}

impl CombinationController {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            validator: SelectionValidator::new(config),
            max_combined_size: config.max_combined_size,
            entries: Vec::new(),
            total_content_length: 0,
            active: false,
        }
    }

    pub fn entries(&self) -> &[Snippet] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn total_content_length(&self) -> usize {
        self.total_content_length
    }

    pub fn max_combined_size(&self) -> usize {
        self.max_combined_size
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.entries.iter().any(|entry| entry.title() == title)
    }

    pub fn contains(&self, snippet: &Snippet) -> bool {
        self.position_of(snippet).is_some()
    }

    /// Position of the member equal to `snippet` in both title and content
    pub fn position_of(&self, snippet: &Snippet) -> Option<usize> {
        self.entries.iter().position(|entry| entry == snippet)
    }

    /// Appends a snippet. On error the set is left exactly as it was.
    pub fn add_snippet<R: SnippetRecord + ?Sized>(
        &mut self,
        record: &R,
    ) -> Result<(), CombinationError> {
        if !self.validator.is_valid_structure(record) {
            return Err(CombinationError::InvalidData);
        }
        let snippet = Snippet::from_record(record).ok_or(CombinationError::InvalidData)?;

        if self.contains_title(snippet.title()) {
            log::debug!("Rejecting duplicate combination entry {:?}", snippet.title());
            return Err(CombinationError::Duplicate {
                title: snippet.title().to_string(),
            });
        }

        let attempted = self.total_content_length + snippet.content_len();
        if attempted > self.max_combined_size {
            log::debug!(
                "Rejecting {:?}: combined size {} exceeds {}",
                snippet.title(),
                attempted,
                self.max_combined_size
            );
            return Err(CombinationError::SizeLimit {
                attempted,
                max: self.max_combined_size,
            });
        }

        self.entries.push(snippet);
        self.total_content_length = attempted;
        if !self.active {
            log::debug!("Entering combining mode");
            self.active = true;
        }
        Ok(())
    }

    /// Removes the entry at `index`; out-of-range indices are logged and ignored
    pub fn remove_at(&mut self, index: usize) -> Option<Snippet> {
        if index >= self.entries.len() {
            log::warn!(
                "Ignoring combination removal at {} (only {} entries)",
                index,
                self.entries.len()
            );
            return None;
        }

        let removed = self.entries.remove(index);
        self.total_content_length = self.entries.iter().map(Snippet::content_len).sum();
        if self.entries.is_empty() {
            self.active = false;
        }
        Some(removed)
    }

    /// Joins the contents in insertion order. The set itself is not modified.
    pub fn execute_combination(&self) -> Result<CombinedPayload, CombinationError> {
        if self.entries.is_empty() {
            return Err(CombinationError::EmptyCombination);
        }

        // Always passes for entries built by `add_snippet`
        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| !self.validator.is_valid_structure(entry))
        {
            log::warn!("Combination entry {} failed validation", index);
            return Err(CombinationError::ValidationFailure { index });
        }

        let text = self
            .entries
            .iter()
            .map(Snippet::content)
            .collect::<Vec<_>>()
            .join("\n");
        let titles = self
            .entries
            .iter()
            .map(|entry| entry.title().to_string())
            .collect();

        Ok(CombinedPayload { text, titles })
    }

    /// Empties the set but keeps the mode flag as is
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_content_length = 0;
    }

    pub fn exit_combining_mode(&mut self) {
        self.clear();
        if self.active {
            log::debug!("Leaving combining mode");
        }
        self.active = false;
    }
}
