//! Keyboard event handling tests
//!
//! Tests for keyboard input handling including editing the username, starting
//! searches, switching focus, the filter/sort keys and quitting.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use octoscope::github::{Profile, Repository, SearchResult, SortKey};
use octoscope::ui::input::handle_key;
use octoscope::ui::theme::{ThemeController, ThemeMode};
use octoscope::ui::{App, FocusPane, Phase, SearchOutcome, SearchRequest};

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        assert!(handle_key(app, key(KeyCode::Char(c))).is_none());
    }
}

/// Helper to create an app that has already shown results for "octocat"
fn create_app_with_results() -> App {
    let mut app = App::new(ThemeController::with_mode(ThemeMode::Dark));
    type_text(&mut app, "octocat");
    let request = handle_key(&mut app, key(KeyCode::Enter)).expect("search starts");
    let repo = |name: &str, language: &str, stars: u64| Repository {
        name: name.to_string(),
        html_url: format!("https://github.com/octocat/{name}"),
        description: None,
        language: Some(language.to_string()),
        stargazers_count: stars,
        forks_count: 0,
        updated_at: "2024-01-01T00:00:00Z".to_string(),
    };
    app.apply_outcome(SearchOutcome {
        seq: request.seq,
        result: Ok(SearchResult {
            profile: Profile {
                login: "octocat".to_string(),
                name: Some("The Octocat".to_string()),
                avatar_url: String::new(),
                bio: None,
                public_repos: 2,
                followers: 0,
                following: 0,
            },
            repositories: vec![repo("a", "Go", 1), repo("b", "Rust", 2)],
        }),
    });
    app
}

#[test]
fn test_typing_and_enter_starts_search() {
    let mut app = App::new(ThemeController::with_mode(ThemeMode::Dark));
    type_text(&mut app, "octocatx");
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.input, "octocat");

    let request = handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(
        request,
        Some(SearchRequest {
            seq: 1,
            username: "octocat".to_string()
        })
    );
    assert_eq!(app.phase, Phase::Loading);
}

#[test]
fn test_enter_on_whitespace_does_nothing() {
    let mut app = App::new(ThemeController::with_mode(ThemeMode::Dark));
    type_text(&mut app, "   ");

    assert!(handle_key(&mut app, key(KeyCode::Enter)).is_none());
    assert_eq!(app.phase, Phase::Idle);
    assert_eq!(app.latest_seq(), 0);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = App::new(ThemeController::with_mode(ThemeMode::Dark));
    let mut release = key(KeyCode::Char('x'));
    release.kind = KeyEventKind::Release;

    handle_key(&mut app, release);
    assert!(app.input.is_empty());
}

#[test]
fn test_letters_type_into_search_box() {
    let mut app = App::new(ThemeController::with_mode(ThemeMode::Dark));
    // q, t, l and s are bindings only once the results have focus
    type_text(&mut app, "qtls");
    assert_eq!(app.input, "qtls");
    assert!(!app.should_quit);
    assert!(app.theme.is_dark());
}

#[test]
fn test_success_moves_focus_to_results() {
    let app = create_app_with_results();
    assert_eq!(app.phase, Phase::Success);
    assert_eq!(app.focus, FocusPane::Results);
}

#[test]
fn test_filter_and_sort_keys() {
    let mut app = create_app_with_results();

    handle_key(&mut app, key(KeyCode::Char('l')));
    assert_eq!(app.view.language.as_deref(), Some("Go"));
    handle_key(&mut app, key(KeyCode::Char('L')));
    assert_eq!(app.view.language, None);
    handle_key(&mut app, key(KeyCode::Char('L')));
    assert_eq!(app.view.language.as_deref(), Some("Rust"));

    handle_key(&mut app, key(KeyCode::Char('s')));
    assert_eq!(app.view.sort, SortKey::Stars);
    handle_key(&mut app, key(KeyCode::Char('S')));
    assert_eq!(app.view.sort, SortKey::Updated);
}

#[test]
fn test_theme_toggle_keys() {
    let mut app = create_app_with_results();
    handle_key(&mut app, key(KeyCode::Char('t')));
    assert_eq!(app.theme.mode(), ThemeMode::Light);

    // Ctrl+T works from the search box too
    handle_key(&mut app, key(KeyCode::Char('/')));
    assert_eq!(app.focus, FocusPane::Search);
    handle_key(&mut app, ctrl('t'));
    assert_eq!(app.theme.mode(), ThemeMode::Dark);
    assert!(app.input.ends_with("octocat"));
}

#[test]
fn test_focus_switching() {
    let mut app = App::new(ThemeController::with_mode(ThemeMode::Dark));
    assert_eq!(app.focus, FocusPane::Search);
    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.focus, FocusPane::Results);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus, FocusPane::Search);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus, FocusPane::Results);
}

#[test]
fn test_enter_in_results_repeats_search() {
    let mut app = create_app_with_results();
    let request = handle_key(&mut app, key(KeyCode::Enter)).expect("search restarts");
    assert_eq!(request.username, "octocat");
    assert_eq!(request.seq, 2);
    assert!(app.profile.is_none());
}

#[test]
fn test_quit_keys() {
    let mut app = create_app_with_results();
    assert!(!app.should_quit);
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit);

    let mut app = App::new(ThemeController::with_mode(ThemeMode::Dark));
    handle_key(&mut app, ctrl('c'));
    assert!(app.should_quit);
    assert!(app.input.is_empty());
}
