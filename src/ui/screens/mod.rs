//! # Screens
//!
//! One state struct per route. A screen is mounted fresh every time its route
//! is entered and dropped when the app navigates away, which also releases
//! anything it owns (e.g. its clock ticker).
//!
//! Screens never perform navigation or side effects themselves: key and
//! pointer handlers return an [`Outcome`] and the app acts on it.

pub mod browser;
pub mod flights;
pub mod home;
pub mod promotions;

pub use browser::{Activation, Browser, ShelfItem};
pub use flights::{FlightControl, FlightMode, FlightsScreen};
pub use home::HomeScreen;
pub use promotions::PromotionsScreen;

use crate::catalog::{
    Channel, MenuItem, Movie, ServiceId, Track, CHANNEL_CATEGORIES, MENU_CATEGORIES,
    MOVIE_GENRES, PLAYLISTS,
};
use crate::dispatch::Action;
use crate::ui::config::Config;
use crate::ui::keys::NavKey;
use std::fmt;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Promotions,
    Iptv,
    Movie,
    Menu,
    Music,
    Flights,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Promotions => "/promotions",
            Route::Iptv => "/iptv",
            Route::Movie => "/movie",
            Route::Menu => "/menu",
            Route::Music => "/music",
            Route::Flights => "/flights",
        }
    }
}

impl From<ServiceId> for Route {
    fn from(id: ServiceId) -> Self {
        match id {
            ServiceId::Promotions => Route::Promotions,
            ServiceId::Iptv => Route::Iptv,
            ServiceId::Movie => Route::Movie,
            ServiceId::Menu => Route::Menu,
            ServiceId::Music => Route::Music,
            ServiceId::Flights => Route::Flights,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What the app should do after a screen handled an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    None,
    Navigate(Route),
    Dispatch(Action),
}

/// A rendered element a pointer can hit. Indices refer to the list the
/// element was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Back,
    Service(usize),
    Category(usize),
    Item(usize),
    FlightControl(usize),
    PlayToggle,
}

pub type IptvScreen = Browser<Channel>;
pub type MovieScreen = Browser<Movie>;
pub type MenuScreen = Browser<MenuItem>;
pub type MusicScreen = Browser<Track>;

/// The mounted screen and its navigation state.
#[derive(Debug)]
pub enum Screen {
    Home(HomeScreen),
    Promotions(PromotionsScreen),
    Iptv(IptvScreen),
    Movie(MovieScreen),
    Menu(MenuScreen),
    Music(MusicScreen),
    Flights(FlightsScreen),
}

impl Screen {
    /// Build a fresh screen for `route`.
    pub fn mount(route: Route, config: &Config) -> Self {
        match route {
            Route::Home => Screen::Home(HomeScreen::new(config.default_service, config.language)),
            Route::Promotions => Screen::Promotions(PromotionsScreen::new()),
            Route::Iptv => Screen::Iptv(Browser::new(&CHANNEL_CATEGORIES)),
            Route::Movie => Screen::Movie(Browser::new(&MOVIE_GENRES)),
            Route::Menu => Screen::Menu(Browser::new(&MENU_CATEGORIES)),
            Route::Music => Screen::Music(Browser::new(&PLAYLISTS)),
            Route::Flights => {
                Screen::Flights(FlightsScreen::new(config.airport.clone(), config.language))
            }
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Home(_) => Route::Home,
            Screen::Promotions(_) => Route::Promotions,
            Screen::Iptv(_) => Route::Iptv,
            Screen::Movie(_) => Route::Movie,
            Screen::Menu(_) => Route::Menu,
            Screen::Music(_) => Route::Music,
            Screen::Flights(_) => Route::Flights,
        }
    }

    pub fn handle_key(&mut self, key: NavKey) -> Outcome {
        match self {
            Screen::Home(s) => s.handle_key(key),
            Screen::Promotions(s) => s.handle_key(key),
            Screen::Iptv(s) => s.handle_key(key),
            Screen::Movie(s) => s.handle_key(key),
            Screen::Menu(s) => s.handle_key(key),
            Screen::Music(s) => s.handle_key(key),
            Screen::Flights(s) => s.handle_key(key),
        }
    }

    pub fn handle_pointer(&mut self, target: Target) -> Outcome {
        match self {
            Screen::Home(s) => s.handle_pointer(target),
            Screen::Promotions(s) => s.handle_pointer(target),
            Screen::Iptv(s) => s.handle_pointer(target),
            Screen::Movie(s) => s.handle_pointer(target),
            Screen::Menu(s) => s.handle_pointer(target),
            Screen::Music(s) => s.handle_pointer(target),
            Screen::Flights(s) => s.handle_pointer(target),
        }
    }
}
