use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Mode};
use crate::ui::{ACCENT, DIM, SECONDARY};

/// Render the search input bound to the current term
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let is_editing = app.mode == Mode::Search;

    let border_style = if is_editing {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    };

    let title = if is_editing { " Search [EDIT] " } else { " Search " };

    let block = Block::default()
        .title(title)
        .title_style(if is_editing {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SECONDARY)
        })
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = if app.search.query.is_empty() && !is_editing {
        Line::from(Span::styled("Search users...", Style::default().fg(DIM)))
    } else if is_editing {
        Line::from(vec![
            Span::raw(app.search.query.as_str()),
            Span::styled("_", Style::default().fg(Color::Green)), // Cursor
        ])
    } else {
        Line::from(app.search.query.as_str())
    };

    let paragraph = Paragraph::new(content).block(block);
    f.render_widget(paragraph, area);
}
