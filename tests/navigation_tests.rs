//! Focus navigation tests
//!
//! Clamping, reset and activation laws of the single-axis and category/item
//! cursors, checked exhaustively over small shapes and over the real catalogs.

use hotel_tv::catalog::{item_counts, CHANNEL_CATEGORIES, MENU_CATEGORIES, MOVIE_GENRES, PLAYLISTS};
use hotel_tv::clock::Language;
use hotel_tv::nav::{Cursor, GridCursor};
use hotel_tv::ui::keys::NavKey;
use hotel_tv::ui::screens::{
    Browser, FlightControl, FlightMode, FlightsScreen, Outcome, Route, ShelfItem,
};

#[test]
fn test_k_moves_left_clamp_at_zero() {
    for len in 1..=6 {
        for start in 0..len {
            for k in 0..=8 {
                let mut cursor = Cursor::with_index(len, start);
                for _ in 0..k {
                    cursor.move_left();
                }
                assert_eq!(cursor.index(), start.saturating_sub(k), "len={len} start={start} k={k}");
            }
        }
    }
}

#[test]
fn test_k_moves_right_clamp_at_last() {
    for len in 1..=6 {
        for start in 0..len {
            for k in 0..=8 {
                let mut cursor = Cursor::with_index(len, start);
                for _ in 0..k {
                    cursor.move_right();
                }
                assert_eq!(cursor.index(), (start + k).min(len - 1), "len={len} start={start} k={k}");
            }
        }
    }
}

#[test]
fn test_moves_at_boundaries_are_idempotent() {
    let mut cursor = Cursor::new(4);
    cursor.move_left();
    assert_eq!(cursor.index(), 0);

    cursor.set(3);
    cursor.move_right();
    cursor.move_right();
    assert_eq!(cursor.index(), 3);
}

#[test]
fn test_six_rights_on_five_items_stop_at_four() {
    let mut cursor = Cursor::new(5);
    for _ in 0..6 {
        cursor.move_right();
    }
    assert_eq!(cursor.index(), 4);
}

#[test]
fn test_empty_cursor_has_no_selection() {
    let mut cursor = Cursor::new(0);
    cursor.move_right();
    cursor.move_left();
    cursor.set(3);
    assert!(cursor.is_empty());
    assert_eq!(cursor.selected(), None);
}

#[test]
fn test_down_from_middle_item_resets() {
    let mut grid = GridCursor::new(vec![5, 5, 5]);
    for _ in 0..3 {
        grid.move_item_right();
    }
    assert_eq!(grid.selected(), Some((0, 3)));

    grid.move_category_down();
    assert_eq!(grid.selected(), Some((1, 0)));
}

#[test]
fn test_vertical_moves_always_reset_item() {
    for counts in [
        item_counts(&CHANNEL_CATEGORIES),
        item_counts(&MOVIE_GENRES),
        item_counts(&MENU_CATEGORIES),
        item_counts(&PLAYLISTS),
    ] {
        for category in 0..counts.len() {
            for item in 0..counts[category] {
                for down in [false, true] {
                    let mut grid = GridCursor::new(counts.clone());
                    grid.select_category(category);
                    grid.select_item(item);

                    if down {
                        grid.move_category_down();
                    } else {
                        grid.move_category_up();
                    }
                    assert_eq!(grid.item(), 0, "counts={counts:?} at ({category},{item})");
                    assert!(grid.category() < counts.len());
                }
            }
        }
    }
}

#[test]
fn test_reset_happens_even_when_category_is_clamped() {
    let mut grid = GridCursor::new(vec![3, 3]);
    grid.move_item_right();
    grid.move_item_right();
    grid.move_category_up();
    assert_eq!(grid.selected(), Some((0, 0)));

    grid.select_category(1);
    grid.select_item(2);
    grid.move_category_down();
    assert_eq!(grid.selected(), Some((1, 0)));
}

#[test]
fn test_item_moves_clamp_within_category() {
    let mut grid = GridCursor::new(vec![2, 4]);
    for _ in 0..5 {
        grid.move_item_right();
    }
    assert_eq!(grid.item(), 1);

    grid.move_category_down();
    for _ in 0..5 {
        grid.move_item_right();
    }
    assert_eq!(grid.item(), 3);
    grid.move_item_left();
    assert_eq!(grid.item(), 2);
}

#[test]
fn test_pointer_selection_clamps() {
    let mut grid = GridCursor::new(vec![3, 2]);
    grid.select_category(9);
    assert_eq!(grid.category(), 1);
    grid.select_item(9);
    assert_eq!(grid.item(), 1);
}

/// Enter must never move focus, whatever it dispatches.
fn assert_activation_keeps_cursors<T: ShelfItem>(mut browser: Browser<T>) {
    browser.handle_key(NavKey::Down);
    browser.handle_key(NavKey::Right);
    let before = browser.grid.selected();
    browser.handle_key(NavKey::Enter);
    assert_eq!(browser.grid.selected(), before);
    assert_eq!(before, Some((1, 1)));
}

#[test]
fn test_activation_never_moves_cursors() {
    assert_activation_keeps_cursors(Browser::new(&CHANNEL_CATEGORIES));
    assert_activation_keeps_cursors(Browser::new(&MOVIE_GENRES));
    assert_activation_keeps_cursors(Browser::new(&MENU_CATEGORIES));
    assert_activation_keeps_cursors(Browser::new(&PLAYLISTS));
}

#[test]
fn test_music_enter_twice_restores_playback() {
    let mut music = Browser::new(&PLAYLISTS);
    music.handle_key(NavKey::Right);
    let before = music.grid.selected();

    assert_eq!(music.handle_key(NavKey::Enter), Outcome::None);
    assert!(music.is_playing());
    assert_eq!(music.handle_key(NavKey::Enter), Outcome::None);
    assert!(!music.is_playing());
    assert_eq!(music.grid.selected(), before);
}

#[test]
fn test_space_only_toggles_music() {
    let mut music = Browser::new(&PLAYLISTS);
    music.handle_key(NavKey::Space);
    assert!(music.is_playing());

    let mut movies = Browser::new(&MOVIE_GENRES);
    assert_eq!(movies.handle_key(NavKey::Space), Outcome::None);
}

#[test]
fn test_flights_right_then_enter_shows_arrivals() {
    let mut flights = FlightsScreen::new("SAL".to_string(), Language::Es);
    flights.handle_key(NavKey::Right);
    assert_eq!(
        flights.focused_control(),
        Some(FlightControl::Mode(FlightMode::Arrivals))
    );

    assert_eq!(flights.handle_key(NavKey::Enter), Outcome::None);
    assert_eq!(flights.mode(), FlightMode::Arrivals);
    assert_eq!(flights.cursor.index(), 1);
}

#[test]
fn test_back_key_leaves_every_browser() {
    let mut iptv = Browser::new(&CHANNEL_CATEGORIES);
    let mut menu = Browser::new(&MENU_CATEGORIES);
    assert_eq!(iptv.handle_key(NavKey::Back), Outcome::Navigate(Route::Home));
    assert_eq!(menu.handle_key(NavKey::Back), Outcome::Navigate(Route::Home));
}
