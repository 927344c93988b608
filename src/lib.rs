//! Hotel TV - on-screen display for hotel in-room televisions
//!
//! This library provides the focus-navigation model (single-axis and
//! category/item cursors), the static content catalogs, and the screens a
//! guest drives with a remote control: dashboard, promotions, IPTV, movies,
//! room service, music and the flight board.

pub mod catalog;
pub mod clock;
pub mod dispatch;
pub mod nav;
pub mod ui;
