//! # UI Module
//!
//! Terminal front end of the in-room TV.
//!
//! ## Components
//!
//! - [`App`] - Mounted screen, remote-key and pointer routing, action status
//! - [`mod@render`] - Drawing functions for every screen
//! - [`screens`] - Per-route navigation state
//! - [`keys`] - Mapping from terminal keys to remote-control keys
//!
//! ## Layout
//!
//! The category/item screens (IPTV, movies, room service, music) share one
//! layout:
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────┐
//! │ ← Volver     │              Title               │
//! ├──────────────┴──┬───────────────────────────────┤
//! │                 │                               │
//! │   Categories    │        Items of the           │
//! │   (↑ ↓)         │        focused category (← →) │
//! │                 │                               │
//! │                 ├───────────────────────────────┤
//! │                 │   Detail / player             │
//! ├─────────────────┴───────────────────────────────┤
//! │              Footer hint / last action          │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod keys;
pub mod render;
pub mod screens;
pub mod theme;

pub use app::App;
pub use render::render;
