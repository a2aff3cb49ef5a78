use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Mode};
use crate::ui::{ACCENT, SECONDARY};
use crate::user::User;

/// Render the user list panel, including the loading and empty states
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.mode == Mode::Normal;

    let border_style = if is_focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    };

    if app.loading {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Users ")
            .border_style(border_style);

        let loading_msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Loading users...",
                Style::default()
                    .fg(SECONDARY)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);

        f.render_widget(loading_msg, area);
        return;
    }

    let visible = app.visible();

    let title = if app.search.is_active() {
        format!(
            " Filter: '{}' ({} results) ",
            app.search.query,
            visible.len()
        )
    } else {
        " Users ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    if visible.is_empty() {
        // The message depends on whether a term is active
        let message = if app.search.is_active() {
            "No users found matching your search."
        } else {
            "No users available."
        };

        let empty_msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
        ])
        .block(block)
        .alignment(Alignment::Center);

        f.render_widget(empty_msg, area);
        return;
    }

    // Keep the highlighted row inside the visible window
    let inner = block.inner(area);
    let visible_height = inner.height as usize;
    let offset = if visible_height == 0 || app.selected_index < visible_height {
        0
    } else {
        app.selected_index + 1 - visible_height
    };

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height.max(1))
        .map(|(idx, user)| render_row(user, idx == app.selected_index))
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Render a single user as a list row: name, email, role badge
fn render_row(user: &User, is_selected: bool) -> ListItem<'_> {
    let (name_style, email_style, badge_style) = if is_selected {
        let selected = Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD);
        (selected, selected, selected)
    } else {
        (
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(SECONDARY),
            Style::default()
                .fg(user.role.badge_color())
                .add_modifier(Modifier::BOLD),
        )
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!(" {} ", user.name), name_style),
        Span::styled(format!("<{}> ", user.email), email_style),
        Span::styled(format!("[{}]", user.role), badge_style),
    ]))
}
