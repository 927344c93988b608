//! # Clock
//!
//! Wall-clock face shown on the dashboard header and the flight board.
//!
//! [`ClockFace::at`] is a pure formatter. [`ClockGuard::start`] owns a tokio
//! task that republishes a fresh face every tick through a `watch` channel;
//! dropping the guard aborts the task, so a screen's clock never outlives the
//! screen.

use chrono::{Datelike, Local, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default republish period.
pub const TICK: Duration = Duration::from_secs(1);

/// Display language for the greeting and the long date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Short code used in widget URLs and the header (`es`, `en`).
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Language::Es => "Le deseamos una agradable estancia",
            Language::En => "We wish you a pleasant stay",
        }
    }
}

/// Time-of-day salutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Morning before noon, afternoon until 18:00, evening after.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn text(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::Es, Greeting::Morning) => "Buenos días",
            (Language::Es, Greeting::Afternoon) => "Buenas tardes",
            (Language::Es, Greeting::Evening) => "Buenas noches",
            (Language::En, Greeting::Morning) => "Good morning",
            (Language::En, Greeting::Afternoon) => "Good afternoon",
            (Language::En, Greeting::Evening) => "Good evening",
        }
    }
}

/// Formatted snapshot of the current time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    /// `HH:MM:SS`, 24-hour.
    pub time: String,
    /// Long date, e.g. `Viernes, 15 de marzo de 2024`.
    pub date: String,
    pub greeting: Greeting,
    pub language: Language,
}

impl ClockFace {
    pub fn at(now: NaiveDateTime, language: Language) -> Self {
        Self {
            time: now.format("%H:%M:%S").to_string(),
            date: long_date(now, language),
            greeting: Greeting::for_hour(now.hour()),
            language,
        }
    }

    pub fn now(language: Language) -> Self {
        Self::at(Local::now().naive_local(), language)
    }

    pub fn greeting_text(&self) -> &'static str {
        self.greeting.text(self.language)
    }
}

const WEEKDAYS_ES: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn long_date(now: NaiveDateTime, language: Language) -> String {
    match language {
        Language::En => now.format("%A, %B %-d, %Y").to_string(),
        Language::Es => {
            let weekday = WEEKDAYS_ES[weekday_index(now.weekday())];
            let month = MONTHS_ES[now.month0() as usize];
            capitalize(&format!(
                "{weekday}, {} de {month} de {}",
                now.day(),
                now.year()
            ))
        }
    }
}

fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Running clock owned by a screen. The ticker task is aborted on drop.
#[derive(Debug)]
pub struct ClockGuard {
    rx: watch::Receiver<ClockFace>,
    task: Option<JoinHandle<()>>,
}

impl ClockGuard {
    /// Publish the current face immediately, then every `period`.
    ///
    /// Outside a tokio runtime the face is computed once and never refreshed.
    pub fn start(language: Language, period: Duration) -> Self {
        let (tx, rx) = watch::channel(ClockFace::now(language));

        let task = match tokio::runtime::Handle::try_current() {
            Ok(handle) => Some(handle.spawn(async move {
                let mut interval = tokio::time::interval(period);
                interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                // The first tick completes immediately; the initial face is already published.
                interval.tick().await;
                loop {
                    interval.tick().await;
                    if tx.send(ClockFace::now(language)).is_err() {
                        break;
                    }
                }
            })),
            Err(_) => {
                tracing::debug!("no tokio runtime, clock will not tick");
                None
            }
        };

        Self { rx, task }
    }

    /// Latest published face.
    pub fn face(&self) -> ClockFace {
        self.rx.borrow().clone()
    }

    /// Independent receiver for the published faces.
    pub fn subscribe(&self) -> watch::Receiver<ClockFace> {
        self.rx.clone()
    }

    pub fn is_ticking(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for ClockGuard {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
