//! UI Components
//!
//! Pieces shared by the overlay: the bottom bar with status and shortcuts, the combination
//! panel, and width-aware text truncation.

use crate::app::App;
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders the bottom bar: status message or snippet source on the left, shortcuts on the right
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let status = if let Some(error) = &app.error_message {
        Line::from(Span::styled(format!(" {error}"), Style::default().fg(RosePine::LOVE)))
    } else if let Some(success) = &app.success_message {
        Line::from(Span::styled(format!(" {success}"), Style::default().fg(RosePine::FOAM)))
    } else {
        Line::from(vec![
            Span::styled(" 󰅍 ", Style::default().fg(RosePine::IRIS)),
            Span::styled(app.source_label.clone(), Style::default().fg(RosePine::SUBTLE)),
        ])
    };

    let left_content = Paragraph::new(status).alignment(Alignment::Left).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
    );

    let right_content = Paragraph::new(context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    frame.render_widget(left_content, left);
    frame.render_widget(right_content, right);
}

fn context_shortcuts(app: &App) -> &'static str {
    if app.launcher.combination().is_active() {
        " [Tab] Add │ [S-Tab] Remove │ [^L] Clear │ [⏎] Combine │ [Esc] Exit combine "
    } else if app.launcher.view().is_empty() {
        " [^U] Clear search │ [Esc] Close "
    } else {
        " [↑↓] Navigate │ [Tab] Combine │ [⏎] Select │ [Esc] Close "
    }
}

/// Renders the combination members and a size gauge against the combined limit
pub fn render_combination_panel(frame: &mut Frame, area: Rect, app: &App) {
    let combination = app.launcher.combination();
    let total = combination.total_content_length();
    let max = combination.max_combined_size().max(1);

    let block = Block::bordered()
        .title(format!(" Combination ({}) ", combination.len()))
        .border_type(BorderType::Rounded)
        .border_style(RosePine::border(true))
        .style(Style::default().bg(RosePine::SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [titles_area, gauge_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

    let mut spans = Vec::new();
    for (i, entry) in combination.entries().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" + ", Style::default().fg(RosePine::MUTED)));
        }
        spans.push(Span::styled(
            entry.title().to_string(),
            Style::default().fg(RosePine::TEXT),
        ));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            "Empty - press Tab to add the highlighted snippet",
            Style::default().fg(RosePine::MUTED).italic(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), titles_area);

    let ratio = (total as f64 / max as f64).clamp(0.0, 1.0);
    let gauge_color = if ratio > 0.9 {
        RosePine::LOVE
    } else {
        RosePine::FOAM
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color).bg(RosePine::BASE))
        .ratio(ratio)
        .label(format!("{total}/{max} chars"));
    frame.render_widget(gauge, gauge_area);
}

/// Cuts `text` to at most `max_width` terminal columns, ending with `…` when shortened
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width - 1 {
            break;
        }
        width += char_width;
        out.push(c);
    }
    out.push('…');
    out
}

/// Centers a rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
