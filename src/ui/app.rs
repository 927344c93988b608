use crate::dispatch::{ActionDispatcher, LogDispatcher};
use crate::ui::config::Config;
use crate::ui::keys::NavKey;
use crate::ui::screens::{Outcome, Route, Screen, Target};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Clickable regions recorded during the last draw.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: Target) {
        self.regions.push((area, target));
    }

    /// Topmost target under `(column, row)`. Later regions are drawn on top.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let point = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(point))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

pub struct App {
    pub screen: Screen,
    pub config: Config,
    pub theme: Theme,
    /// Text of the last dispatched action, cleared on navigation.
    pub status: Option<String>,
    pub should_quit: bool,
    pub hit_map: HitMap,
    dispatcher: Box<dyn ActionDispatcher>,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self::with_dispatcher(config, theme, Box::new(LogDispatcher))
    }

    pub fn with_dispatcher(
        config: Config,
        theme: Theme,
        dispatcher: Box<dyn ActionDispatcher>,
    ) -> Self {
        let screen = Screen::mount(Route::Home, &config);
        Self {
            screen,
            config,
            theme,
            status: None,
            should_quit: false,
            hit_map: HitMap::default(),
            dispatcher,
        }
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    /// Replace the mounted screen with a fresh one for `route`. The old
    /// screen is dropped here, stopping its clock if it had one.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(from = %self.route(), to = %route, "navigate");
        self.screen = Screen::mount(route, &self.config);
        self.status = None;
        self.hit_map.clear();
    }

    pub fn handle_key_event(&mut self, key: &KeyEvent) {
        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.should_quit = true;
            return;
        }
        if let Some(nav) = NavKey::from_key_event(key) {
            self.handle_nav_key(nav);
        }
    }

    /// Deliver a remote key to the active screen only.
    pub fn handle_nav_key(&mut self, key: NavKey) {
        let outcome = self.screen.handle_key(key);
        self.apply(outcome);
    }

    pub fn handle_mouse_event(&mut self, mouse: &MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(target) = self.hit_map.target_at(mouse.column, mouse.row) {
            self.handle_pointer(target);
        }
    }

    pub fn handle_pointer(&mut self, target: Target) {
        let outcome = self.screen.handle_pointer(target);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::None => {}
            Outcome::Navigate(route) => self.navigate(route),
            Outcome::Dispatch(action) => {
                self.dispatcher.dispatch(&action);
                self.status = Some(action.to_string());
            }
        }
    }
}
