use crate::app::App;
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Pointer hover highlights the row underneath; a left click also commits it.
/// Returns true when the overlay should close.
pub fn handle_mouse_event(mouse: MouseEvent, app: &mut App) -> bool {
    let Some(row) = app.list_row_at(mouse.column, mouse.row) else {
        return false;
    };

    match mouse.kind {
        MouseEventKind::Moved => {
            app.launcher.hover(row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.launcher.hover(row) {
                app.commit();
            }
        }
        MouseEventKind::ScrollDown => app.launcher.move_down(),
        MouseEventKind::ScrollUp => app.launcher.move_up(),
        _ => {}
    }

    app.should_quit
}
