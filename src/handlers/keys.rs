//! Keyboard Input Handling Module
//!
//! The overlay has a single always-on search field, so printable characters edit the term
//! and navigation lives on arrow keys and Ctrl chords.

use crate::app::App;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main keyboard event handler and dispatcher.
/// Returns true when the overlay should close.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_control_keys(key, app);
    }

    match key.code {
        KeyCode::Esc => app.cancel(),
        KeyCode::Enter => app.commit(),
        KeyCode::Up => app.launcher.move_up(),
        KeyCode::Down => app.launcher.move_down(),
        KeyCode::Tab => app.add_highlighted(),
        KeyCode::BackTab => app.remove_highlighted(),
        KeyCode::Backspace => {
            app.clear_messages();
            app.launcher.pop_search_char();
        }
        KeyCode::Char(c) => {
            app.clear_messages();
            app.launcher.push_search_char(c);
        }
        _ => {}
    }

    app.should_quit
}

fn handle_control_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('c') => {
            app.should_quit = true;
        }
        KeyCode::Char('p') | KeyCode::Char('k') => app.launcher.move_up(),
        KeyCode::Char('n') | KeyCode::Char('j') => app.launcher.move_down(),
        KeyCode::Char('u') => {
            app.clear_messages();
            app.launcher.clear_search();
        }
        KeyCode::Char('l') => app.clear_combination(),
        _ => {}
    }

    app.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;
    use crate::models::Snippet;
    use crate::selection::Launcher;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        let snippets = vec![
            Snippet::new("Greeting", "Hello there"),
            Snippet::new("Farewell", "Goodbye"),
            Snippet::new("Signature", "Regards"),
        ];
        App::new(
            Launcher::new(LauncherConfig::default(), snippets.into()),
            "test",
        )
    }

    #[test]
    fn typing_filters_and_backspace_restores() {
        let mut app = app();
        for c in "good".chars() {
            handle_key_events(press(KeyCode::Char(c)), &mut app);
        }
        assert_eq!(app.launcher.view().len(), 1);
        assert_eq!(app.launcher.highlighted().unwrap().title(), "Farewell");

        handle_key_events(ctrl('u'), &mut app);
        assert_eq!(app.launcher.search_term(), "");
        assert_eq!(app.launcher.view().len(), 3);
    }

    #[test]
    fn arrows_and_ctrl_chords_navigate_with_wrap() {
        let mut app = app();
        handle_key_events(press(KeyCode::Up), &mut app);
        assert_eq!(app.launcher.global_index(), Some(2));
        handle_key_events(ctrl('n'), &mut app);
        assert_eq!(app.launcher.global_index(), Some(0));
        handle_key_events(ctrl('j'), &mut app);
        handle_key_events(press(KeyCode::Down), &mut app);
        assert_eq!(app.launcher.global_index(), Some(2));
    }

    #[test]
    fn tab_combines_and_enter_commits_combination() {
        let mut app = app();
        handle_key_events(press(KeyCode::Tab), &mut app);
        handle_key_events(press(KeyCode::Down), &mut app);
        handle_key_events(press(KeyCode::Down), &mut app);
        handle_key_events(press(KeyCode::Tab), &mut app);

        let quit = handle_key_events(press(KeyCode::Enter), &mut app);
        assert!(quit);
        let payload = app.outcome.as_ref().unwrap();
        assert_eq!(payload.text(), "Hello there\nRegards");
        assert_eq!(payload.titles(), vec!["Greeting", "Signature"]);
    }

    #[test]
    fn back_tab_removes_highlighted_from_combination() {
        let mut app = app();
        handle_key_events(press(KeyCode::Tab), &mut app);
        handle_key_events(press(KeyCode::BackTab), &mut app);
        assert!(!app.launcher.combination().is_active());
    }

    #[test]
    fn escape_leaves_combining_mode_then_closes() {
        let mut app = app();
        handle_key_events(press(KeyCode::Tab), &mut app);
        assert!(!handle_key_events(press(KeyCode::Esc), &mut app));
        assert!(handle_key_events(press(KeyCode::Esc), &mut app));
    }

    #[test]
    fn enter_without_matches_keeps_overlay_open() {
        let mut app = app();
        for c in "zzz".chars() {
            handle_key_events(press(KeyCode::Char(c)), &mut app);
        }
        assert!(!handle_key_events(press(KeyCode::Enter), &mut app));
        assert!(app.error_message.is_some());
    }
}
