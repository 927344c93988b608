//! # Hotel TV Entry Point
//!
//! This is the main entry point for the in-room TV on-screen display.
//!
//! ## Overview
//!
//! The display is a full-screen terminal UI driven like a TV remote: arrow
//! keys move the focus, Enter activates, Escape goes back. A mouse click on a
//! rendered element behaves like focusing it and pressing Enter.
//!
//! ## Usage
//!
//! ```bash
//! # Start on the dashboard
//! hotel-tv
//!
//! # Start directly on a screen
//! hotel-tv --screen music
//!
//! # Use a specific config file and theme
//! hotel-tv --config ./room-204.json --theme Nord
//!
//! # Write structured logs while the UI owns the terminal
//! RUST_LOG=debug hotel-tv --log-file /tmp/hotel-tv.log
//!
//! # Debug mode - print resolved config and catalogs and exit
//! hotel-tv --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `←` / `→` - Move between items (services, channels, movies, tracks)
//! - `↑` / `↓` - Move between categories
//! - `Enter` - Activate the focused element
//! - `Space` - Play/pause on the music screen
//! - `Esc` / `Backspace` - Back to the dashboard
//! - `q` / `Ctrl+c` - Quit

use hotel_tv::catalog::{
    self, CHANNEL_CATEGORIES, MENU_CATEGORIES, MOVIE_GENRES, PLAYLISTS, PROMOTIONS, SERVICES,
};
use hotel_tv::ui;
use hotel_tv::ui::config::Config;
use hotel_tv::ui::screens::Route;
use hotel_tv::ui::theme::Theme;
use hotel_tv::ui::App;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// How long to wait for input before redrawing. Keeps the clock moving.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Screen to show at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StartScreen {
    Home,
    Promotions,
    Iptv,
    Movie,
    Menu,
    Music,
    Flights,
}

impl From<StartScreen> for Route {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Home => Route::Home,
            StartScreen::Promotions => Route::Promotions,
            StartScreen::Iptv => Route::Iptv,
            StartScreen::Movie => Route::Movie,
            StartScreen::Menu => Route::Menu,
            StartScreen::Music => Route::Music,
            StartScreen::Flights => Route::Flights,
        }
    }
}

/// Hotel TV - remote-driven on-screen display for hotel rooms
#[derive(Parser, Debug)]
#[command(name = "hotel-tv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "In-room TV dashboard, channels, movies, room service, music and flights", long_about = None)]
struct Args {
    /// Screen to open at startup
    #[arg(short, long, value_enum, default_value_t = StartScreen::Home)]
    screen: StartScreen,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color theme, overriding the config file
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the resolved config, themes and catalogs and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

/// Route `tracing` output to a file. The UI owns stdout, so nothing is
/// logged unless a file is given.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::load(),
    };
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    Ok(config)
}

async fn run_application(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let theme = Theme::resolve(&config.theme).clone();

    if args.debug {
        print_debug(&config, &theme)?;
        return Ok(());
    }

    tracing::info!(room = %config.room, theme = theme.name, language = config.language.code(), "starting");

    let mut app = App::new(config, theme);
    let start = Route::from(args.screen);
    if start != Route::Home {
        app.navigate(start);
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    tracing::info!("stopped");
    Ok(())
}

fn print_debug(config: &Config, theme: &Theme) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    println!("Config:\n{json}\n");

    println!("Theme: {}", theme.name);
    let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
    println!("Available themes: {}\n", names.join(", "));

    println!("Services:");
    for service in &SERVICES {
        println!("  {} {} -> {}", service.icon, service.label, Route::from(service.id));
    }
    println!("\nPromotions: {}", PROMOTIONS.len());

    print_shelf("Channels", &CHANNEL_CATEGORIES);
    print_shelf("Movies", &MOVIE_GENRES);
    print_shelf("Room service", &MENU_CATEGORIES);
    print_shelf("Playlists", &PLAYLISTS);
    Ok(())
}

fn print_shelf<T: 'static>(title: &str, categories: &[catalog::Category<T>]) {
    let counts = catalog::item_counts(categories);
    println!(
        "\n{title}: {} categories, {} items",
        categories.len(),
        counts.iter().sum::<usize>()
    );
    for (category, count) in categories.iter().zip(counts) {
        println!("  {} {} ({count})", category.icon, category.name);
    }
}

/// Apply one terminal event to the app.
fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key_event(&key),
        Event::Mouse(mouse) => app.handle_mouse_event(&mouse),
        _ => {}
    }
}

/// Read at most one event and apply it. Returns `false` once the app wants
/// to quit.
fn pump_events(app: &mut App, event_reader: &mut dyn EventReader) -> Result<bool> {
    if let Some(event) = event_reader.read_event(POLL_INTERVAL)? {
        handle_event(app, event);
    }
    Ok(!app.should_quit)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        if !pump_events(app, event_reader)? {
            break;
        }
    }

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}
