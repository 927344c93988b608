use super::{Outcome, Route, Target};
use crate::clock::{ClockFace, ClockGuard, Language, TICK};
use crate::nav::Cursor;
use crate::ui::keys::NavKey;

const WIDGET_BASE: &str = "https://www.avionio.com/widget";

/// Which board the flight widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightMode {
    Arrivals,
    Departures,
}

impl FlightMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FlightMode::Arrivals => "arrivals",
            FlightMode::Departures => "departures",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::Es, FlightMode::Arrivals) => "Llegadas",
            (Language::Es, FlightMode::Departures) => "Salidas",
            (Language::En, FlightMode::Arrivals) => "Arrivals",
            (Language::En, FlightMode::Departures) => "Departures",
        }
    }
}

/// Focusable controls, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightControl {
    Back,
    Mode(FlightMode),
}

pub const CONTROLS: [FlightControl; 3] = [
    FlightControl::Back,
    FlightControl::Mode(FlightMode::Arrivals),
    FlightControl::Mode(FlightMode::Departures),
];

/// Flight board: back button plus an arrivals/departures switch over an
/// embedded third-party widget.
#[derive(Debug)]
pub struct FlightsScreen {
    pub cursor: Cursor,
    mode: FlightMode,
    airport: String,
    language: Language,
    clock: ClockGuard,
}

impl FlightsScreen {
    pub fn new(airport: String, language: Language) -> Self {
        Self {
            cursor: Cursor::new(CONTROLS.len()),
            mode: FlightMode::Departures,
            airport,
            language,
            clock: ClockGuard::start(language, TICK),
        }
    }

    pub fn controls(&self) -> &'static [FlightControl] {
        &CONTROLS
    }

    pub fn focused_control(&self) -> Option<FlightControl> {
        self.cursor.selected().and_then(|i| CONTROLS.get(i).copied())
    }

    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    pub fn airport(&self) -> &str {
        &self.airport
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn clock_face(&self) -> ClockFace {
        self.clock.face()
    }

    /// Address of the flight widget for the current mode.
    pub fn widget_url(&self) -> String {
        format!(
            "{WIDGET_BASE}/{}/{}/{}",
            self.language.code(),
            self.airport,
            self.mode.as_str()
        )
    }

    pub fn handle_key(&mut self, key: NavKey) -> Outcome {
        match key {
            NavKey::Back => Outcome::Navigate(Route::Home),
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

    pub fn handle_pointer(&mut self, target: Target) -> Outcome {
        match target {
            Target::Back => Outcome::Navigate(Route::Home),
            Target::FlightControl(i) => {
                self.cursor.set(i);
                self.activate()
            }
            _ => Outcome::None,
        }
    }

    /// Switching modes keeps focus on the mode control.
    fn activate(&mut self) -> Outcome {
        match self.focused_control() {
            Some(FlightControl::Back) => Outcome::Navigate(Route::Home),
            Some(FlightControl::Mode(mode)) => {
                if self.mode != mode {
                    tracing::info!(mode = mode.as_str(), airport = %self.airport, "flight board switched");
                }
                self.mode = mode;
                Outcome::None
            }
            None => Outcome::None,
        }
    }
}
