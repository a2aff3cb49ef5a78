//! UI rendering using ratatui

pub mod layout;
pub mod search_bar;
pub mod status_bar;
pub mod user_list;

use ratatui::style::Color;
use ratatui::Frame;

use crate::app::App;

/// Primary accent color
pub(crate) const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
pub(crate) const SECONDARY: Color = Color::DarkGray;
/// Dim text color
pub(crate) const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire UI
///
/// Loading and empty states replace the whole content column, search
/// input included; the term itself survives and stays editable through
/// the key handler.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.loading || app.visible().is_empty() {
        let (content_area, status_area) = layout::Layout::bare(area);
        user_list::render(frame, content_area, app);
        status_bar::render(frame, status_area, app);
    } else {
        let (search_area, content_area, status_area) = layout::Layout::main(area);
        search_bar::render(frame, search_area, app);
        user_list::render(frame, content_area, app);
        status_bar::render(frame, status_area, app);
    }
}
