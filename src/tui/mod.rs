//! Terminal presentation layer.
//!
//! ## Architecture (TEA)
//!
//! Model (`ViewerApp`) + Update (`input::handle_key`, `mouse::handle_mouse`,
//! timer ticks) + View (`layout::draw`). Immediate mode: every frame is
//! drawn from the model, and the layout caches hit-test regions for the
//! next mouse event.

pub mod app;
pub mod input;
pub mod layout;
pub mod markdown;
pub mod mouse;
pub mod runner;
pub mod style;
