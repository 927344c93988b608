//! Keyboard event handling tests
//!
//! Tests for terminal key input at the app level: quit keys, back
//! navigation, focus movement and the actions activation dispatches.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hotel_tv::dispatch::{Action, RecordingDispatcher};
use hotel_tv::ui::config::Config;
use hotel_tv::ui::screens::{Route, Screen};
use hotel_tv::ui::theme::Theme;
use hotel_tv::ui::App;

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn press(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        app.handle_key_event(&key(*code));
    }
}

/// Helper to create a test app whose actions are recorded
fn create_test_app() -> (App, RecordingDispatcher) {
    let recorder = RecordingDispatcher::default();
    let app = App::with_dispatcher(
        Config::default(),
        Theme::default_theme().clone(),
        Box::new(recorder.clone()),
    );
    (app, recorder)
}

const SUB_SCREENS: [Route; 6] = [
    Route::Promotions,
    Route::Iptv,
    Route::Movie,
    Route::Menu,
    Route::Music,
    Route::Flights,
];

#[tokio::test]
async fn test_quit_with_q_key() {
    let (mut app, _) = create_test_app();
    assert!(!app.should_quit);

    press(&mut app, &[KeyCode::Char('q')]);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_quit_with_uppercase_q_key() {
    let (mut app, _) = create_test_app();
    press(&mut app, &[KeyCode::Char('Q')]);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_quit_with_ctrl_c() {
    let (mut app, _) = create_test_app();
    app.handle_key_event(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_plain_c_does_not_quit() {
    let (mut app, _) = create_test_app();
    press(&mut app, &[KeyCode::Char('c')]);
    assert!(!app.should_quit);
}

#[tokio::test]
async fn test_escape_returns_home_from_every_screen() {
    let (mut app, _) = create_test_app();
    for route in SUB_SCREENS {
        app.navigate(route);
        assert_eq!(app.route(), route);

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.route(), Route::Home, "escape from {route}");
    }
}

#[tokio::test]
async fn test_backspace_returns_home_from_every_screen() {
    let (mut app, _) = create_test_app();
    for route in SUB_SCREENS {
        app.navigate(route);
        press(&mut app, &[KeyCode::Backspace]);
        assert_eq!(app.route(), Route::Home, "backspace from {route}");
    }
}

#[tokio::test]
async fn test_escape_on_home_stays_home() {
    let (mut app, _) = create_test_app();
    press(&mut app, &[KeyCode::Right, KeyCode::Esc]);
    assert_eq!(app.route(), Route::Home);
    let Screen::Home(home) = &app.screen else {
        panic!("expected home screen");
    };
    assert_eq!(home.cursor.index(), 1);
}

#[tokio::test]
async fn test_home_enter_opens_each_service() {
    let expected = [
        Route::Promotions,
        Route::Iptv,
        Route::Movie,
        Route::Menu,
        Route::Music,
        Route::Flights,
    ];
    for (steps, route) in expected.into_iter().enumerate() {
        let (mut app, _) = create_test_app();
        for _ in 0..steps {
            press(&mut app, &[KeyCode::Right]);
        }
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.route(), route);
    }
}

#[tokio::test]
async fn test_reentering_screen_starts_with_fresh_cursors() {
    let (mut app, _) = create_test_app();
    app.navigate(Route::Movie);
    press(&mut app, &[KeyCode::Down, KeyCode::Right, KeyCode::Right]);
    let Screen::Movie(movies) = &app.screen else {
        panic!("expected movie screen");
    };
    assert_eq!(movies.grid.selected(), Some((1, 2)));

    press(&mut app, &[KeyCode::Esc]);
    app.navigate(Route::Movie);
    let Screen::Movie(movies) = &app.screen else {
        panic!("expected movie screen");
    };
    assert_eq!(movies.grid.selected(), Some((0, 0)));
}

#[tokio::test]
async fn test_iptv_enter_dispatches_focused_channel() {
    let (mut app, recorder) = create_test_app();
    app.navigate(Route::Iptv);
    press(&mut app, &[KeyCode::Down, KeyCode::Right, KeyCode::Enter]);

    assert_eq!(
        recorder.actions(),
        vec![Action::PlayChannel {
            category: "Entretenimiento",
            channel: "Netflix Originals",
        }]
    );
    assert_eq!(app.status.as_deref(), Some("Playing: Netflix Originals"));
}

#[tokio::test]
async fn test_menu_enter_dispatches_order() {
    let (mut app, recorder) = create_test_app();
    app.navigate(Route::Menu);
    press(&mut app, &[KeyCode::Enter]);

    let actions = recorder.actions();
    assert_eq!(actions.len(), 1);
    assert!(matches!(actions[0], Action::Order { .. }));
    assert!(app
        .status
        .as_deref()
        .is_some_and(|s| s.starts_with("Ordering: ")));
}

#[tokio::test]
async fn test_music_keys_never_dispatch() {
    let (mut app, recorder) = create_test_app();
    app.navigate(Route::Music);
    press(&mut app, &[KeyCode::Enter, KeyCode::Char(' '), KeyCode::Enter]);

    assert!(recorder.actions().is_empty());
    let Screen::Music(music) = &app.screen else {
        panic!("expected music screen");
    };
    assert!(music.is_playing());
}

#[tokio::test]
async fn test_keys_only_reach_active_screen() {
    let (mut app, _) = create_test_app();
    app.navigate(Route::Flights);
    press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Enter]);
    press(&mut app, &[KeyCode::Esc]);

    let Screen::Home(home) = &app.screen else {
        panic!("expected home screen");
    };
    assert_eq!(home.cursor.index(), 0);
}

#[tokio::test]
async fn test_unmapped_keys_are_ignored() {
    let (mut app, recorder) = create_test_app();
    app.navigate(Route::Iptv);
    press(&mut app, &[KeyCode::Tab, KeyCode::Char('x'), KeyCode::F(5)]);

    assert_eq!(app.route(), Route::Iptv);
    assert!(recorder.actions().is_empty());
    assert!(!app.should_quit);
}
