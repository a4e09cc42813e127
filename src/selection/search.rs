//! Search filtering over a snippet collection
//!
//! A `FilteredView` is either the source collection itself (blank term) or an ordered list
//! of indices into it. Views are cheap to clone and compare by identity, which is what the
//! launcher uses to decide when navigation has to be reset.

use crate::models::{Snippet, SnippetCollection};
use std::ops::Range;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FilteredView {
    source: SnippetCollection,
    /// `None` means every source entry, in source order
    matches: Option<Arc<[usize]>>,
}

impl FilteredView {
    /// A view that is identical to `source`
    pub fn identity(source: SnippetCollection) -> Self {
        Self {
            source,
            matches: None,
        }
    }

    pub fn len(&self) -> usize {
        match &self.matches {
            Some(matches) => matches.len(),
            None => self.source.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the view is the unfiltered source collection
    pub fn is_identity(&self) -> bool {
        self.matches.is_none()
    }

    pub fn source(&self) -> &SnippetCollection {
        &self.source
    }

    pub fn get(&self, index: usize) -> Option<&Snippet> {
        match &self.matches {
            Some(matches) => matches.get(index).and_then(|&i| self.source.get(i)),
            None => self.source.get(index),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snippet> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Snippets in `range`, clamped to the view
    pub fn slice(&self, range: Range<usize>) -> Vec<&Snippet> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        (start..end).filter_map(|i| self.get(i)).collect()
    }

    /// Identity comparison: same source snapshot and same filter result
    pub fn same_view(&self, other: &FilteredView) -> bool {
        if !Arc::ptr_eq(&self.source, &other.source) {
            return false;
        }
        match (&self.matches, &other.matches) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Derives the view of `collection` matching `term`, case-insensitively, on title or content
pub fn filter(collection: &SnippetCollection, term: &str) -> FilteredView {
    if term.trim().is_empty() {
        return FilteredView::identity(Arc::clone(collection));
    }

    let needle = term.to_lowercase();
    let matches: Arc<[usize]> = collection
        .iter()
        .enumerate()
        .filter(|(_, snippet)| snippet.matches_lowercase(&needle))
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "Filter {:?} matched {} of {} snippets",
        term,
        matches.len(),
        collection.len()
    );

    FilteredView {
        source: Arc::clone(collection),
        matches: Some(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn collection() -> SnippetCollection {
        vec![
            Snippet::new("Email signature", "Best regards,\nSam"),
            Snippet::new("Shrug", "¯\\_(ツ)_/¯"),
            Snippet::new("Address", "221B Baker Street"),
            Snippet::new("Meeting link", "https://meet.example.com/EMAIL-sync"),
        ]
        .into()
    }

    fn titles(view: &FilteredView) -> Vec<&str> {
        view.iter().map(Snippet::title).collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_term_is_identity(collection: SnippetCollection, #[case] term: &str) {
        let view = filter(&collection, term);
        assert!(view.is_identity());
        assert!(Arc::ptr_eq(view.source(), &collection));
        assert_eq!(view.len(), collection.len());
        assert!(view.iter().eq(collection.iter()));
    }

    #[rstest]
    fn matches_title_or_content_preserving_order(collection: SnippetCollection) {
        let view = filter(&collection, "email");
        assert_eq!(titles(&view), vec!["Email signature", "Meeting link"]);

        let view = filter(&collection, "BAKER");
        assert_eq!(titles(&view), vec!["Address"]);
    }

    #[rstest]
    fn no_matches_gives_empty_view(collection: SnippetCollection) {
        let view = filter(&collection, "zzz");
        assert!(view.is_empty());
        assert!(!view.is_identity());
        assert_eq!(view.get(0), None);
    }

    #[rstest]
    fn recomputation_produces_a_new_identity(collection: SnippetCollection) {
        let first = filter(&collection, "e");
        let second = filter(&collection, "e");
        assert!(first.same_view(&first.clone()));
        assert!(!first.same_view(&second));

        let a = filter(&collection, "");
        let b = filter(&collection, " ");
        assert!(a.same_view(&b));

        let reloaded: SnippetCollection = collection.iter().cloned().collect::<Vec<_>>().into();
        assert!(!a.same_view(&filter(&reloaded, "")));
    }

    #[rstest]
    fn slice_is_clamped(collection: SnippetCollection) {
        let view = filter(&collection, "");
        assert_eq!(view.slice(2..10).len(), 2);
        assert!(view.slice(9..12).is_empty());
    }
}
