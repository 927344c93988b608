//! Category × item browser shared by the IPTV, movie, menu and music screens.
//!
//! ```text
//!  ↑↓ categories        ←→ items of the focused category
//! ┌──────────────┐     ┌──────┬──────┬──────┐
//! │ ▶ Noticias   │ ──▶ │ CNN  │ BBC  │ ...  │
//! │   Deportes   │     └──────┴──────┴──────┘
//! └──────────────┘
//! ```

use super::{Outcome, Route, Target};
use crate::catalog::{item_counts, Category, Channel, MenuItem, Movie, Track};
use crate::dispatch::Action;
use crate::nav::GridCursor;
use crate::ui::keys::NavKey;

/// What activating an item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// One-shot side effect handed to the dispatcher.
    Dispatch(Action),
    /// Flip the screen's play/pause flag.
    TogglePlayback,
}

/// An element that can sit on a [`Browser`] shelf.
pub trait ShelfItem: Sync + 'static {
    /// Whether Space behaves like Enter on this screen.
    const SPACE_ACTIVATES: bool = false;

    fn title(&self) -> &'static str;

    fn activation(&self, category: &'static str) -> Activation;
}

impl ShelfItem for Channel {
    fn title(&self) -> &'static str {
        self.name
    }

    fn activation(&self, category: &'static str) -> Activation {
        Activation::Dispatch(Action::PlayChannel {
            category,
            channel: self.name,
        })
    }
}

impl ShelfItem for Movie {
    fn title(&self) -> &'static str {
        self.title
    }

    fn activation(&self, _category: &'static str) -> Activation {
        Activation::Dispatch(Action::PlayMovie { title: self.title })
    }
}

impl ShelfItem for MenuItem {
    fn title(&self) -> &'static str {
        self.name
    }

    fn activation(&self, category: &'static str) -> Activation {
        Activation::Dispatch(Action::Order {
            category,
            item: self.name,
        })
    }
}

impl ShelfItem for Track {
    const SPACE_ACTIVATES: bool = true;

    fn title(&self) -> &'static str {
        self.title
    }

    fn activation(&self, _category: &'static str) -> Activation {
        Activation::TogglePlayback
    }
}

/// Dual-axis screen state over a static catalog.
#[derive(Debug)]
pub struct Browser<T: ShelfItem> {
    categories: &'static [Category<T>],
    pub grid: GridCursor,
    playing: bool,
}

impl<T: ShelfItem> Browser<T> {
    pub fn new(categories: &'static [Category<T>]) -> Self {
        Self {
            categories,
            grid: GridCursor::new(item_counts(categories)),
            playing: false,
        }
    }

    pub fn categories(&self) -> &'static [Category<T>] {
        self.categories
    }

    pub fn current_category(&self) -> Option<&'static Category<T>> {
        self.categories.get(self.grid.category())
    }

    pub fn current_item(&self) -> Option<&'static T> {
        let (category, item) = self.grid.selected()?;
        self.categories.get(category)?.items.get(item)
    }

    /// Play/pause flag. Only toggled on shelves whose items activate with
    /// [`Activation::TogglePlayback`].
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn handle_key(&mut self, key: NavKey) -> Outcome {
        match key {
            NavKey::Back => Outcome::Navigate(Route::Home),
            NavKey::Up => {
                self.grid.move_category_up();
                Outcome::None
            }
            NavKey::Down => {
                self.grid.move_category_down();
                Outcome::None
            }
            NavKey::Left => {
                self.grid.move_item_left();
                Outcome::None
            }
            NavKey::Right => {
                self.grid.move_item_right();
                Outcome::None
            }
            NavKey::Enter => self.activate(),
            NavKey::Space if T::SPACE_ACTIVATES => self.activate(),
            NavKey::Space => Outcome::None,
        }
    }

    pub fn handle_pointer(&mut self, target: Target) -> Outcome {
        match target {
            Target::Back => Outcome::Navigate(Route::Home),
            Target::Category(i) => {
                self.grid.select_category(i);
                Outcome::None
            }
            Target::Item(i) => {
                self.grid.select_item(i);
                Outcome::None
            }
            Target::PlayToggle if T::SPACE_ACTIVATES => self.activate(),
            _ => Outcome::None,
        }
    }

    /// Activate the focused item. Cursors are never moved.
    pub fn activate(&mut self) -> Outcome {
        let (Some(category), Some(item)) = (self.current_category(), self.current_item()) else {
            return Outcome::None;
        };
        match item.activation(category.name) {
            Activation::Dispatch(action) => Outcome::Dispatch(action),
            Activation::TogglePlayback => {
                self.playing = !self.playing;
                tracing::debug!(track = item.title(), playing = self.playing, "playback toggled");
                Outcome::None
            }
        }
    }
}
