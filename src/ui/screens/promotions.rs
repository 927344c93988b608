use super::{Outcome, Route, Target};
use crate::catalog::{Promotion, PROMOTIONS};
use crate::ui::keys::NavKey;

/// Promotion cards. The only focusable control is the "Inicio" button, so
/// there is no cursor to move.
#[derive(Debug, Default)]
pub struct PromotionsScreen;

impl PromotionsScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn promotions(&self) -> &'static [Promotion] {
        &PROMOTIONS
    }

    pub fn handle_key(&mut self, key: NavKey) -> Outcome {
        match key {
            NavKey::Enter | NavKey::Back => Outcome::Navigate(Route::Home),
            _ => Outcome::None,
        }
    }

    pub fn handle_pointer(&mut self, target: Target) -> Outcome {
        match target {
            Target::Back => Outcome::Navigate(Route::Home),
            _ => Outcome::None,
        }
    }
}
