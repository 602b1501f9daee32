//! folio, a terminal document viewer.
//!
//! Named markdown panels ("tabs") switched by mouse or single-letter
//! shortcuts, a Ctrl+K command palette, a drag-resizable navigation
//! sidebar and a persisted light/dark preference.

pub mod store;
pub mod tui;
pub mod viewer;

pub use folio_config::FolioConfig;
