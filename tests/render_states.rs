use ratatui::{backend::TestBackend, Terminal};
use roster_tui::{sample_users, ui, App, Role, User};

/// Render the app into a test buffer and flatten it to text
fn render_to_text(app: &App) -> String {
    let backend = TestBackend::new(60, 14);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.cell((x, y)).unwrap().symbol());
        }
        text.push('\n');
    }
    text
}

fn small_roster() -> Vec<User> {
    vec![
        User::new(1, "Ann", "a@x.com", Role::Admin),
        User::new(2, "Bob", "b@x.com", Role::User),
        User::new(3, "Cleo", "c@x.com", Role::Moderator),
    ]
}

#[test]
fn loading_state_renders_no_rows() {
    let app = App::new(small_roster(), true);
    let text = render_to_text(&app);

    assert!(text.contains("Loading users..."));
    // No list content and no search input while loading
    assert!(!text.contains("Ann"));
    assert!(!text.contains("Search users..."));
}

#[test]
fn empty_list_shows_none_available() {
    let app = App::new(Vec::new(), false);
    let text = render_to_text(&app);

    assert!(text.contains("No users available."));
    assert!(!text.contains("Search users..."));
}

#[test]
fn no_match_shows_search_message() {
    let mut app = App::new(small_roster(), false);
    app.search_push('z');
    app.search_push('z');
    let text = render_to_text(&app);

    assert!(text.contains("No users found matching your search."));
    assert!(!text.contains("No users available."));
}

#[test]
fn populated_list_shows_rows_and_badges() {
    let app = App::new(small_roster(), false);
    let text = render_to_text(&app);

    assert!(text.contains("Search users..."));
    assert!(text.contains("Ann"));
    assert!(text.contains("<b@x.com>"));
    assert!(text.contains("[admin]"));
    assert!(text.contains("[moderator]"));
    assert!(text.contains("[user]"));
}

#[test]
fn unknown_role_renders_with_its_own_label() {
    let app = App::new(
        vec![User::new(9, "Zed", "z@x.com", Role::Other("owner".into()))],
        false,
    );
    let text = render_to_text(&app);

    assert!(text.contains("[owner]"));
}

#[test]
fn active_filter_shows_result_count() {
    let mut app = App::new(small_roster(), false);
    app.search_push('a');
    app.search_push('n');
    let text = render_to_text(&app);

    assert!(text.contains("Filter: 'an' (1 results)"));
    assert!(text.contains("Ann"));
    assert!(!text.contains("Bob"));
}

#[test]
fn status_bar_counts_track_the_filter() {
    let mut app = App::new(sample_users(), false);
    let text = render_to_text(&app);
    assert!(text.contains("6/6 users"));

    app.search_push('q');
    let text = render_to_text(&app);
    assert!(text.contains("0/6 users"));
}
