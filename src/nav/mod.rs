//! # Focus Navigation
//!
//! Remote-control focus model shared by every screen.
//!
//! ## Navigators
//!
//! - [`Cursor`] - one index over one ordered list (home dashboard, flight board controls)
//! - [`GridCursor`] - a category index plus an item index into the selected
//!   category (channels, movies, room service, music)
//!
//! Both clamp at the list bounds instead of wrapping, so no key sequence can
//! move focus out of range. Pointer selections go through the same clamp.
//!
//! ```text
//!   ArrowLeft            ArrowRight
//!  ┌───┐    ┌───┐    ┌───┐    ┌───┐
//!  │ 0 │ ◀─ │ 1 │ ─▶ │ 2 │ ─▶ │ 3 │   (no edge past either end)
//!  └───┘    └───┘    └───┘    └───┘
//! ```
//!
//! ## Empty lists
//!
//! A navigator over zero elements has no position: `selected()` is `None`,
//! moves do nothing and screens skip activation.

pub mod cursor;
pub mod grid;

pub use cursor::Cursor;
pub use grid::GridCursor;
