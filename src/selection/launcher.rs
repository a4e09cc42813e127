//! Launcher Orchestration
//!
//! `Launcher` owns the collection snapshot, the search term and the derived view, and routes
//! every user command to the navigation or combination controller. After each command that
//! touches the view it recomputes the filter and resets navigation if the view identity changed.
//! Mutations set a changed flag the UI layer polls with [`Launcher::take_changed`].

use crate::config::LauncherConfig;
use crate::models::{Snippet, SnippetCollection};
use crate::selection::combination::{CombinationController, CombinedPayload};
use crate::selection::error::CombinationError;
use crate::selection::navigation::NavigationController;
use crate::selection::search::{self, FilteredView};

/// What a commit resolves to, handed to whoever performs the injection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Single { title: String, content: String },
    Combined(CombinedPayload),
}

impl Payload {
    pub fn text(&self) -> &str {
        match self {
            Payload::Single { content, .. } => content,
            Payload::Combined(combined) => &combined.text,
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        match self {
            Payload::Single { title, .. } => vec![title.as_str()],
            Payload::Combined(combined) => combined.titles.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Combining mode was left; the overlay stays open
    LeftCombiningMode,
    Close,
}

#[derive(Debug)]
pub struct Launcher {
    config: LauncherConfig,
    collection: SnippetCollection,
    search_term: String,
    view: FilteredView,
    navigation: NavigationController,
    combination: CombinationController,
    changed: bool,
}

impl Launcher {
    pub fn new(config: LauncherConfig, collection: SnippetCollection) -> Self {
        let view = search::filter(&collection, "");
        Self {
            navigation: NavigationController::new(config.max_window_size),
            combination: CombinationController::new(&config),
            config,
            collection,
            search_term: String::new(),
            view,
            changed: true,
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn collection(&self) -> &SnippetCollection {
        &self.collection
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn combination(&self) -> &CombinationController {
        &self.combination
    }

    /// Returns whether anything changed since the last call, and clears the flag
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    // Search

    /// Swaps in a freshly loaded collection snapshot
    pub fn replace_collection(&mut self, collection: SnippetCollection) {
        log::info!("Collection replaced ({} snippets)", collection.len());
        self.collection = collection;
        self.refresh_view();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.refresh_view();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
        self.refresh_view();
    }

    pub fn pop_search_char(&mut self) {
        if self.search_term.pop().is_some() {
            self.refresh_view();
        }
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    /// A non-blank search that matched nothing
    pub fn no_matches(&self) -> bool {
        self.view.is_empty() && !self.search_term.trim().is_empty()
    }

    fn refresh_view(&mut self) {
        let view = search::filter(&self.collection, &self.search_term);
        if !view.same_view(&self.view) {
            self.navigation.reset();
        }
        self.view = view;
        self.changed = true;
    }

    // Navigation

    pub fn move_up(&mut self) {
        if !self.view.is_empty() {
            self.navigation.move_up(self.view.len());
            self.changed = true;
        }
    }

    pub fn move_down(&mut self) {
        if !self.view.is_empty() {
            self.navigation.move_down(self.view.len());
            self.changed = true;
        }
    }

    /// Pointer hover over row `local` of the visible window
    pub fn hover(&mut self, local: usize) -> bool {
        let before = self.navigation.state();
        let hit = self.navigation.hover(local, self.view.len());
        if self.navigation.state() != before {
            self.changed = true;
        }
        hit
    }

    pub fn cursor_index(&self) -> usize {
        self.navigation.cursor_index()
    }

    pub fn global_index(&self) -> Option<usize> {
        (!self.view.is_empty()).then(|| self.navigation.global_index())
    }

    pub fn highlighted(&self) -> Option<&Snippet> {
        self.global_index().and_then(|index| self.view.get(index))
    }

    pub fn visible_window(&self) -> Vec<&Snippet> {
        self.view
            .slice(self.navigation.visible_range(self.view.len()))
    }

    // Combination

    /// Adds the highlighted snippet to the combination
    pub fn add_highlighted(&mut self) -> Result<Option<&Snippet>, CombinationError> {
        let Some(snippet) = self.highlighted().cloned() else {
            return Ok(None);
        };
        self.combination.add_snippet(&snippet)?;
        self.changed = true;
        Ok(self.combination.entries().last())
    }

    /// Removes the highlighted snippet from the combination if it is part of it
    pub fn remove_highlighted(&mut self) -> Option<Snippet> {
        let index = self
            .highlighted()
            .and_then(|snippet| self.combination.position_of(snippet))?;
        self.remove_from_combination(index)
    }

    pub fn remove_from_combination(&mut self, index: usize) -> Option<Snippet> {
        let removed = self.combination.remove_at(index);
        if removed.is_some() {
            self.changed = true;
        }
        removed
    }

    pub fn clear_combination(&mut self) {
        if !self.combination.is_empty() {
            self.combination.clear();
            self.changed = true;
        }
    }

    // Commit / cancel

    /// Resolves the payload for injection.
    ///
    /// In combining mode the combined text is returned and the mode is left. Otherwise the
    /// highlighted snippet is used; `Ok(None)` means there is nothing to commit.
    pub fn commit(&mut self) -> Result<Option<Payload>, CombinationError> {
        if self.combination.is_active() {
            let combined = self.combination.execute_combination()?;
            log::info!("Committing combination of {} snippets", combined.titles.len());
            self.combination.exit_combining_mode();
            self.changed = true;
            return Ok(Some(Payload::Combined(combined)));
        }

        Ok(self.highlighted().map(|snippet| {
            log::info!("Committing snippet {:?}", snippet.title());
            Payload::Single {
                title: snippet.title().to_string(),
                content: snippet.content().to_string(),
            }
        }))
    }

    pub fn cancel(&mut self) -> CancelOutcome {
        if self.combination.is_active() {
            self.combination.exit_combining_mode();
            self.changed = true;
            CancelOutcome::LeftCombiningMode
        } else {
            CancelOutcome::Close
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn collection_of(count: usize) -> SnippetCollection {
        (0..count)
            .map(|i| Snippet::new(format!("snippet {i}"), format!("content {i}")))
            .collect::<Vec<_>>()
            .into()
    }

    #[fixture]
    fn launcher() -> Launcher {
        Launcher::new(LauncherConfig::default(), collection_of(8))
    }

    #[rstest]
    fn starts_at_top_with_full_window(launcher: Launcher) {
        assert_eq!(launcher.global_index(), Some(0));
        assert_eq!(launcher.visible_window().len(), 5);
        assert_eq!(launcher.highlighted().unwrap().title(), "snippet 0");
    }

    #[rstest]
    fn new_search_term_resets_navigation(mut launcher: Launcher) {
        launcher.move_up();
        assert_eq!(launcher.global_index(), Some(7));

        launcher.set_search_term("content");
        assert_eq!(launcher.global_index(), Some(0));
        assert_eq!(launcher.navigation().window_start(), 0);
    }

    #[rstest]
    fn unchanged_blank_view_keeps_position(mut launcher: Launcher) {
        launcher.move_down();
        launcher.set_search_term("  ");
        assert_eq!(launcher.global_index(), Some(1));
    }

    #[rstest]
    fn reload_resets_navigation(mut launcher: Launcher) {
        launcher.move_down();
        launcher.move_down();
        launcher.replace_collection(collection_of(3));
        assert_eq!(launcher.global_index(), Some(0));
        assert_eq!(launcher.visible_window().len(), 3);
    }

    #[rstest]
    fn no_matches_disables_navigation_and_commit(mut launcher: Launcher) {
        launcher.set_search_term("zzz");
        assert!(launcher.no_matches());
        assert_eq!(launcher.global_index(), None);

        launcher.take_changed();
        launcher.move_down();
        launcher.move_up();
        assert!(!launcher.take_changed());
        assert!(launcher.visible_window().is_empty());
        assert_eq!(launcher.commit(), Ok(None));
        assert_eq!(launcher.add_highlighted(), Ok(None));
    }

    #[rstest]
    fn commit_single_uses_highlighted(mut launcher: Launcher) {
        launcher.move_down();
        let payload = launcher.commit().unwrap().unwrap();
        assert_eq!(
            payload,
            Payload::Single {
                title: "snippet 1".to_string(),
                content: "content 1".to_string(),
            }
        );
        assert_eq!(payload.text(), "content 1");
    }

    #[rstest]
    fn commit_combination_joins_and_leaves_mode(mut launcher: Launcher) {
        launcher.add_highlighted().unwrap();
        launcher.move_down();
        launcher.add_highlighted().unwrap();
        assert!(launcher.combination().is_active());

        let payload = launcher.commit().unwrap().unwrap();
        assert_eq!(payload.text(), "content 0\ncontent 1");
        assert_eq!(payload.titles(), vec!["snippet 0", "snippet 1"]);
        assert!(!launcher.combination().is_active());
        assert!(launcher.combination().is_empty());
    }

    #[rstest]
    fn adding_highlighted_twice_is_duplicate(mut launcher: Launcher) {
        launcher.add_highlighted().unwrap();
        let err = launcher.add_highlighted().unwrap_err();
        assert_eq!(err.reason_code(), "duplicate");
        assert_eq!(launcher.combination().len(), 1);
    }

    #[rstest]
    fn remove_highlighted_only_touches_members(mut launcher: Launcher) {
        launcher.add_highlighted().unwrap();
        launcher.move_down();
        assert_eq!(launcher.remove_highlighted(), None);

        launcher.move_up();
        let removed = launcher.remove_highlighted().unwrap();
        assert_eq!(removed.title(), "snippet 0");
        assert!(!launcher.combination().is_active());
    }

    #[test]
    fn same_title_with_other_content_is_not_removed() {
        let snippets = vec![Snippet::new("note", "one"), Snippet::new("note", "two")];
        let mut launcher = Launcher::new(LauncherConfig::default(), snippets.into());
        launcher.add_highlighted().unwrap();

        launcher.move_down();
        assert_eq!(launcher.remove_highlighted(), None);
        assert_eq!(launcher.combination().len(), 1);

        launcher.move_up();
        assert_eq!(launcher.remove_highlighted().unwrap().content(), "one");
    }

    #[rstest]
    fn cancel_leaves_combining_mode_before_closing(mut launcher: Launcher) {
        launcher.add_highlighted().unwrap();
        assert_eq!(launcher.cancel(), CancelOutcome::LeftCombiningMode);
        assert!(launcher.combination().is_empty());
        assert_eq!(launcher.cancel(), CancelOutcome::Close);
    }

    #[rstest]
    fn committing_cleared_but_active_combination_fails(mut launcher: Launcher) {
        launcher.add_highlighted().unwrap();
        launcher.clear_combination();
        assert_eq!(launcher.commit(), Err(CombinationError::EmptyCombination));
    }

    #[rstest]
    fn hover_moves_cursor_within_window(mut launcher: Launcher) {
        assert!(launcher.hover(4));
        assert_eq!(launcher.global_index(), Some(4));
        assert!(!launcher.hover(5));
        assert_eq!(launcher.global_index(), Some(4));
    }

    #[rstest]
    fn search_editing_tracks_term(mut launcher: Launcher) {
        for c in "snippet 3".chars() {
            launcher.push_search_char(c);
        }
        assert_eq!(launcher.view().len(), 1);
        launcher.pop_search_char();
        assert_eq!(launcher.search_term(), "snippet ");
        assert_eq!(launcher.view().len(), 8);
        launcher.clear_search();
        assert!(launcher.view().is_identity());
    }
}
