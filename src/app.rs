use crate::selection::{CancelOutcome, Launcher, Payload};
use crate::ui;
use ratatui::Frame;
use ratatui::layout::Rect;

/// Overlay Application State
/// Wraps the launcher core with what only the terminal front end needs: status messages,
/// the on-screen position of the result list for pointer hit-testing, and the committed
/// payload once the user is done.
#[derive(Debug)]
pub struct App {
    pub launcher: Launcher,
    /// Where the snippets came from, shown in the bottom bar
    pub source_label: String,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    /// Inner area of the result list as of the last render
    pub list_area: Option<Rect>,
    /// Window rows scrolled past when the list area is shorter than the window
    pub list_offset: usize,
    pub outcome: Option<Payload>,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(launcher: Launcher, source_label: impl Into<String>) -> Self {
        Self {
            launcher,
            source_label: source_label.into(),
            error_message: None,
            success_message: None,
            list_area: None,
            list_offset: 0,
            outcome: None,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
        self.needs_redraw = true;
    }

    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
        self.needs_redraw = true;
    }

    pub fn clear_messages(&mut self) {
        if self.error_message.is_some() || self.success_message.is_some() {
            self.needs_redraw = true;
        }
        self.error_message = None;
        self.success_message = None;
    }

    /// Adds the highlighted snippet to the combination, reporting the outcome in the status line
    pub fn add_highlighted(&mut self) {
        match self.launcher.add_highlighted() {
            Ok(Some(snippet)) => {
                let message = format!("Added \"{}\" to combination", snippet.title());
                self.set_success_message(message);
            }
            Ok(None) => self.set_error_message("No snippet highlighted".to_string()),
            Err(err) => {
                self.set_error_message(format!("Cannot add ({}): {}", err.reason_code(), err))
            }
        }
    }

    pub fn remove_highlighted(&mut self) {
        match self.launcher.remove_highlighted() {
            Some(snippet) => {
                self.set_success_message(format!(
                    "Removed \"{}\" from combination",
                    snippet.title()
                ));
            }
            None => self.set_error_message("Highlighted snippet is not combined".to_string()),
        }
    }

    pub fn clear_combination(&mut self) {
        self.launcher.clear_combination();
        self.clear_messages();
    }

    /// Resolves the payload; on success the overlay closes
    pub fn commit(&mut self) {
        match self.launcher.commit() {
            Ok(Some(payload)) => {
                self.outcome = Some(payload);
                self.should_quit = true;
            }
            Ok(None) => self.set_error_message("No matches to select".to_string()),
            Err(err) => {
                self.set_error_message(format!("Cannot combine ({}): {}", err.reason_code(), err))
            }
        }
    }

    pub fn cancel(&mut self) {
        self.clear_messages();
        if self.launcher.cancel() == CancelOutcome::Close {
            self.should_quit = true;
        }
    }

    /// Maps a terminal row to a row of the visible window
    pub fn list_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area?;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside.then(|| usize::from(row - area.y) + self.list_offset)
    }

    /// True when anything on screen needs repainting; clears the pending flags
    pub fn take_redraw(&mut self) -> bool {
        let launcher_changed = self.launcher.take_changed();
        std::mem::take(&mut self.needs_redraw) || launcher_changed
    }

    pub fn render(&mut self, frame: &mut Frame) {
        ui::overlay::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;
    use crate::models::Snippet;

    fn app() -> App {
        let snippets = vec![
            Snippet::new("alpha", "first"),
            Snippet::new("beta", "second"),
        ];
        App::new(
            Launcher::new(LauncherConfig::default(), snippets.into()),
            "test",
        )
    }

    #[test]
    fn commit_stores_outcome_and_quits() {
        let mut app = app();
        app.commit();
        assert!(app.should_quit);
        assert_eq!(app.outcome.as_ref().map(Payload::text), Some("first"));
    }

    #[test]
    fn duplicate_add_sets_error_with_reason_code() {
        let mut app = app();
        app.add_highlighted();
        assert!(app.success_message.is_some());
        app.add_highlighted();
        let message = app.error_message.as_deref().unwrap();
        assert!(message.contains("duplicate"));
    }

    #[test]
    fn first_cancel_in_combining_mode_keeps_overlay_open() {
        let mut app = app();
        app.add_highlighted();
        app.cancel();
        assert!(!app.should_quit);
        app.cancel();
        assert!(app.should_quit);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn list_row_hit_testing() {
        let mut app = app();
        app.list_area = Some(Rect::new(10, 5, 20, 4));
        assert_eq!(app.list_row_at(10, 5), Some(0));
        assert_eq!(app.list_row_at(29, 8), Some(3));
        assert_eq!(app.list_row_at(9, 5), None);
        assert_eq!(app.list_row_at(12, 9), None);

        app.list_offset = 2;
        assert_eq!(app.list_row_at(10, 5), Some(2));
    }
}
