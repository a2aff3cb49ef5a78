use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::ui::SECONDARY;

/// Render the status bar (bottom bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mode_color = app.mode.color();
    let mode_name = app.mode.display_name();

    // Current time
    let now = Local::now();
    let time_str = now.format("%H:%M:%S").to_string();

    let counts = if app.loading {
        "loading".to_string()
    } else {
        format!("{}/{} users", app.visible().len(), app.users().len())
    };

    let mut spans = vec![
        // Mode indicator
        Span::styled(
            format!(" {} ", mode_name),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(counts, Style::default().fg(Color::Cyan)),
        Span::raw("  "),
    ];

    // Status message or keybind hints
    if let Some(ref msg) = app.status_message {
        spans.push(Span::raw(msg.as_str()));
    } else {
        let hints = if app.loading {
            "q: quit"
        } else {
            match app.mode {
                Mode::Normal => "/: search | j/k: move | Enter: select | q: quit",
                Mode::Search => "Enter: apply | Esc: cancel",
            }
        };
        spans.push(Span::styled(hints, Style::default().fg(SECONDARY)));
    }

    // Right-aligned time
    let width = area.width as usize;
    let current_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding = width.saturating_sub(current_len + time_str.len() + 1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(time_str, Style::default().fg(SECONDARY)));

    let paragraph = Paragraph::new(Line::from(spans));
    f.render_widget(paragraph, area);
}
