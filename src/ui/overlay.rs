use crate::app::App;
use crate::config::MAX_WINDOW_SIZE;
use crate::ui::colors::RosePine;
use crate::ui::components::{
    centered_rect, render_bottom_bar, render_combination_panel, truncate_to_width,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

const DIALOG_WIDTH: u16 = 110;
const PREVIEW_LINES: usize = 200;

/// Renders the whole overlay and records where the result list landed
pub fn render(frame: &mut Frame, app: &mut App) {
    let max_window = app.launcher.config().max_window_size.min(MAX_WINDOW_SIZE) as u16;
    let combining = app.launcher.combination().is_active();

    // search (3) + list rows + borders (2) + combination panel (4) + bottom bar (3)
    let list_height = max_window.max(3) + 2;
    let combination_height = if combining { 4 } else { 0 };
    let dialog_height = 3 + list_height + combination_height + 3 + 2;

    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, dialog_height);
    frame.render_widget(Clear, dialog_area);

    let dialog_block = Block::bordered()
        .title(" 󰅍 Snippets ")
        .border_type(BorderType::Rounded)
        .border_style(RosePine::border(true))
        .style(Style::default().bg(RosePine::BASE));
    let inner = dialog_block.inner(dialog_area);
    frame.render_widget(dialog_block, dialog_area);

    let [search_area, content_area, combination_area, bar_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(list_height),
        Constraint::Length(combination_height),
        Constraint::Length(3),
    ])
    .areas(inner);

    render_search_input(frame, search_area, app);

    let [list_area, preview_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(content_area);
    render_result_list(frame, list_area, app);
    render_preview(frame, preview_area, app);

    if combining {
        render_combination_panel(frame, combination_area, app);
    }
    render_bottom_bar(frame, bar_area, app);
}

fn render_search_input(frame: &mut Frame, area: Rect, app: &App) {
    let term = app.launcher.search_term();
    let block = Block::bordered()
        .title(" Search ")
        .border_type(BorderType::Rounded)
        .border_style(RosePine::border(true))
        .style(Style::default().bg(RosePine::SURFACE));

    let paragraph = if term.is_empty() {
        Paragraph::new(Span::styled(
            " Type to filter snippets...",
            Style::default().fg(RosePine::MUTED),
        ))
    } else {
        Paragraph::new(Span::styled(
            format!(" {term}"),
            Style::default()
                .fg(RosePine::GOLD)
                .add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(paragraph.block(block), area);

    let cursor_x = area.x + 2 + term.width() as u16;
    if cursor_x < area.x + area.width.saturating_sub(1) {
        frame.set_cursor_position(Position {
            x: cursor_x,
            y: area.y + 1,
        });
    }
}

fn render_result_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let launcher = &app.launcher;
    let view = launcher.view();
    let title = match launcher.global_index() {
        Some(index) => format!(" Results {}/{} ", index + 1, view.len()),
        None => format!(" Results 0/{} ", view.len()),
    };

    let block = Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(RosePine::border(false))
        .style(Style::default().bg(RosePine::SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.is_empty() {
        let message = if launcher.no_matches() {
            "No matches"
        } else {
            "No snippets loaded"
        };
        let placeholder = Paragraph::new(Span::styled(
            message,
            Style::default()
                .fg(RosePine::MUTED)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        app.list_area = None;
        app.list_offset = 0;
        return;
    }

    let cursor = launcher.cursor_index();
    // Keep the cursor row drawn when the terminal is too short for the whole window
    let rows = usize::from(inner.height);
    let offset = cursor.saturating_sub(rows.saturating_sub(1));
    let combination = launcher.combination();
    let title_width = usize::from(inner.width).saturating_sub(4);

    let lines: Vec<Line> = launcher
        .visible_window()
        .into_iter()
        .enumerate()
        .skip(offset)
        .take(rows)
        .map(|(i, snippet)| {
            let marker = if combination.contains(snippet) {
                Span::styled(" ● ", Style::default().fg(RosePine::FOAM))
            } else {
                Span::raw("   ")
            };
            let title = truncate_to_width(snippet.title(), title_width);
            let style = if i == cursor {
                RosePine::highlighted_row()
            } else {
                Style::default().fg(RosePine::TEXT)
            };
            Line::from(vec![marker, Span::styled(title, style)])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
    app.list_area = Some(inner);
    app.list_offset = offset;
}

fn render_preview(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .title(" Preview ")
        .border_type(BorderType::Rounded)
        .border_style(RosePine::border(false))
        .style(Style::default().bg(RosePine::SURFACE));

    let Some(snippet) = app.launcher.highlighted() else {
        frame.render_widget(block, area);
        return;
    };

    let lines: Vec<Line> = snippet
        .content()
        .lines()
        .take(PREVIEW_LINES)
        .map(|line| Line::from(Span::styled(line, Style::default().fg(RosePine::TEXT))))
        .collect();

    let preview = Paragraph::new(lines)
        .block(block.title_bottom(Line::from(format!(
            " {} chars ",
            snippet.content_len()
        ))))
        .wrap(Wrap { trim: false });
    frame.render_widget(preview, area);
}
