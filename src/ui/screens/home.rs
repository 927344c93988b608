use super::{Outcome, Route, Target};
use crate::catalog::{Service, SERVICES};
use crate::clock::{ClockFace, ClockGuard, Language, TICK};
use crate::nav::Cursor;
use crate::ui::keys::NavKey;

/// Welcome dashboard: clock, greeting and the service bar.
#[derive(Debug)]
pub struct HomeScreen {
    pub cursor: Cursor,
    clock: ClockGuard,
}

impl HomeScreen {
    /// Mount the dashboard with `default_service` focused (clamped) and
    /// start its clock.
    pub fn new(default_service: usize, language: Language) -> Self {
        Self {
            cursor: Cursor::with_index(SERVICES.len(), default_service),
            clock: ClockGuard::start(language, TICK),
        }
    }

    pub fn services(&self) -> &'static [Service] {
        &SERVICES
    }

    pub fn focused_service(&self) -> Option<&'static Service> {
        self.cursor.selected().and_then(|i| SERVICES.get(i))
    }

    pub fn clock_face(&self) -> ClockFace {
        self.clock.face()
    }

    pub fn handle_key(&mut self, key: NavKey) -> Outcome {
        match key {
            NavKey::Left => {
                self.cursor.move_left();
                Outcome::None
            }
            NavKey::Right => {
                self.cursor.move_right();
                Outcome::None
            }
            NavKey::Enter => self.activate(),
            _ => Outcome::None,
        }
    }

    /// A click focuses the service and opens it.
    pub fn handle_pointer(&mut self, target: Target) -> Outcome {
        match target {
            Target::Service(i) => {
                self.cursor.set(i);
                self.activate()
            }
            _ => Outcome::None,
        }
    }

    fn activate(&self) -> Outcome {
        match self.focused_service() {
            Some(service) => {
                tracing::info!(service = %service.id, "Opening {} service", service.id);
                Outcome::Navigate(Route::from(service.id))
            }
            None => Outcome::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_is_clamped() {
        let home = HomeScreen::new(99, Language::Es);
        assert_eq!(home.cursor.index(), SERVICES.len() - 1);
    }

    #[test]
    fn test_enter_opens_focused_service() {
        let mut home = HomeScreen::new(0, Language::Es);
        assert_eq!(home.handle_key(NavKey::Enter), Outcome::Navigate(Route::Promotions));

        home.handle_key(NavKey::Right);
        assert_eq!(home.handle_key(NavKey::Enter), Outcome::Navigate(Route::Iptv));
        assert_eq!(home.cursor.index(), 1);
    }

    #[test]
    fn test_up_down_and_back_are_ignored() {
        let mut home = HomeScreen::new(2, Language::Es);
        for key in [NavKey::Up, NavKey::Down, NavKey::Back, NavKey::Space] {
            assert_eq!(home.handle_key(key), Outcome::None);
        }
        assert_eq!(home.cursor.index(), 2);
    }

    #[test]
    fn test_click_focuses_and_opens() {
        let mut home = HomeScreen::new(0, Language::Es);
        let outcome = home.handle_pointer(Target::Service(5));
        assert_eq!(outcome, Outcome::Navigate(Route::Flights));
        assert_eq!(home.cursor.index(), 5);
    }
}
