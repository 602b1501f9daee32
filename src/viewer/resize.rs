//! Drag-to-resize for the navigation sidebar.
//!
//! Widths are in resize units, not columns: a terminal column is
//! `units_per_column` units wide, so the default 250..=600 unit range maps
//! to 25..=60 columns. The width only changes while a drag session is
//! live.

use tracing::debug;

/// Inclusive width range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeBounds {
    pub min: u16,
    pub max: u16,
}

impl ResizeBounds {
    /// Pin `x` into the range. An inverted range pins to `max`.
    pub fn clamp(self, x: u32) -> u16 {
        x.max(self.min as u32).min(self.max as u32) as u16
    }
}

impl Default for ResizeBounds {
    fn default() -> Self {
        Self { min: 250, max: 600 }
    }
}

/// A live drag. Exists only between `begin_drag` and `end_drag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    /// Width when the drag began.
    pub start_width: u16,
}

#[derive(Debug, Clone)]
pub struct PanelResizer {
    bounds: ResizeBounds,
    units_per_column: u16,
    width: u16,
    session: Option<ResizeSession>,
}

impl PanelResizer {
    pub fn new(bounds: ResizeBounds, units_per_column: u16, width: u16) -> Self {
        Self {
            bounds,
            units_per_column: units_per_column.max(1),
            width: bounds.clamp(width as u32),
            session: None,
        }
    }

    pub fn from_config(cfg: &folio_config::SidebarConfig) -> Self {
        let bounds = ResizeBounds {
            min: cfg.min_width,
            max: cfg.max_width,
        };
        Self::new(bounds, cfg.units_per_column, cfg.width)
    }

    /// Current width in units.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Current width in terminal columns.
    pub fn width_columns(&self) -> u16 {
        self.width / self.units_per_column
    }

    /// Whether a drag is in progress (the "resizing" visual mode).
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<ResizeSession> {
        self.session
    }

    /// Pointer position in units for a terminal column. The sidebar edge
    /// sits under the pointer, so column `c` means a width of `c + 1`.
    pub fn column_to_units(&self, column: u16) -> u32 {
        (column as u32 + 1) * self.units_per_column as u32
    }

    pub fn begin_drag(&mut self) {
        debug!(width = self.width, "resize started");
        self.session = Some(ResizeSession {
            start_width: self.width,
        });
    }

    /// Track the pointer. Returns the new width while dragging, `None`
    /// otherwise.
    pub fn pointer_moved(&mut self, x: u32) -> Option<u16> {
        self.session?;
        self.width = self.bounds.clamp(x);
        Some(self.width)
    }

    /// Column-based convenience for mouse events.
    pub fn pointer_moved_to_column(&mut self, column: u16) -> Option<u16> {
        if self.session.is_none() {
            return None;
        }
        let x = self.column_to_units(column);
        self.pointer_moved(x)
    }

    /// Finish the drag, wherever the pointer is.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(from = session.start_width, to = self.width, "resize finished");
        }
    }
}
