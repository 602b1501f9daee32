//! Interaction core of the viewer.
//!
//! Each component owns its own piece of state and nothing else:
//!
//! - `tabs`: active tab, content lookup, cosmetic diff counters
//! - `surface`: navigation highlighting and panel bodies derived from tab switches
//! - `palette`: command palette overlay visibility, query, selection
//! - `input_line`: the palette's single-line query field
//! - `resize`: sidebar drag session and width
//! - `theme`: persisted light/dark preference
//! - `ticker`: "last updated" label
//!
//! No terminal I/O happens here. `tui` reads these to draw and feeds
//! them input.

pub mod content;
pub mod icons;
pub mod input_line;
pub mod palette;
pub mod resize;
pub mod surface;
pub mod tabs;
pub mod theme;
pub mod ticker;
