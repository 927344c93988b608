//! # Catalog Module
//!
//! Static content the screens navigate over. Everything here is literal data
//! compiled into the binary; nothing is fetched or persisted.
//!
//! | Screen | Data | Shape |
//! |--------|------|-------|
//! | Home | [`SERVICES`] | flat list |
//! | Promotions | [`PROMOTIONS`] | flat list |
//! | IPTV | [`CHANNEL_CATEGORIES`] | categories × channels |
//! | Movie | [`MOVIE_GENRES`] | genres × movies |
//! | Menu | [`MENU_CATEGORIES`] | categories × items |
//! | Music | [`PLAYLISTS`] | playlists × tracks |

pub mod home;
pub mod iptv;
pub mod menu;
pub mod movies;
pub mod music;

pub use home::{Promotion, Service, ServiceId, PROMOTIONS, SERVICES};
pub use iptv::{Channel, CHANNEL_CATEGORIES};
pub use menu::{MenuItem, MENU_CATEGORIES};
pub use movies::{Movie, MOVIE_GENRES};
pub use music::{Track, PLAYLISTS};

/// A named group of items on a dual-axis screen.
#[derive(Debug)]
pub struct Category<T: 'static> {
    pub name: &'static str,
    pub icon: &'static str,
    pub items: &'static [T],
}

/// Item counts per category, in order. This is the shape a
/// [`GridCursor`](crate::nav::GridCursor) is built from.
pub fn item_counts<T: 'static>(categories: &[Category<T>]) -> Vec<usize> {
    categories.iter().map(|c| c.items.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_non_empty<T: 'static>(name: &str, categories: &[Category<T>]) {
        assert!(!categories.is_empty(), "{name} has no categories");
        for category in categories {
            assert!(
                !category.items.is_empty(),
                "{name}/{} has no items",
                category.name
            );
        }
    }

    #[test]
    fn test_catalogs_are_never_empty() {
        assert!(!SERVICES.is_empty());
        assert!(!PROMOTIONS.is_empty());
        assert_non_empty("iptv", &CHANNEL_CATEGORIES);
        assert_non_empty("movies", &MOVIE_GENRES);
        assert_non_empty("menu", &MENU_CATEGORIES);
        assert_non_empty("music", &PLAYLISTS);
    }

    #[test]
    fn test_item_counts() {
        assert_eq!(item_counts(&CHANNEL_CATEGORIES), vec![5, 5, 5]);
        assert_eq!(item_counts(&MOVIE_GENRES), vec![3, 3, 3]);
        assert_eq!(item_counts(&MENU_CATEGORIES), vec![4, 4, 4]);
        assert_eq!(item_counts(&PLAYLISTS), vec![4, 4, 4, 4]);
    }
}
