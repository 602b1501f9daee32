//! Mouse event handling.
//!
//! Hit-tests against the regions cached by the last frame. Left clicks
//! switch tabs (tab bar or sidebar), toggle the theme, start a sidebar
//! drag on the resizer edge, or dismiss the palette when they land on
//! the backdrop or its `[x]`. Drags only matter while a resize session is live.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::app::ViewerApp;
use super::input::Scroll;
use crate::viewer::tabs::TabId;

/// Cached layout regions for mouse hit-testing. Updated each frame.
#[derive(Default, Clone, Debug)]
pub struct LayoutAreas {
    pub tab_bar: Rect,
    /// Tab label spans within `tab_bar`: (x_start, x_end, tab).
    pub tab_regions: Vec<(u16, u16, TabId)>,
    pub theme_toggle: Rect,
    pub sidebar: Rect,
    /// Sidebar entry rows: (row, tab).
    pub sidebar_rows: Vec<(u16, TabId)>,
    /// The draggable sidebar edge.
    pub resizer: Rect,
    pub content: Rect,
    /// Palette popup including its border. Zero-sized while closed.
    pub palette_popup: Rect,
    /// Rows listing palette entries, first row is entry 0.
    pub palette_list: Rect,
    /// The `[x]` in the palette's top border.
    pub palette_close: Rect,
}

const WHEEL_LINES: u16 = 3;

pub fn handle_mouse(app: &mut ViewerApp, event: MouseEvent) {
    let col = event.column;
    let row = event.row;

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_down(app, col, row),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            app.resizer.pointer_moved_to_column(col);
        }
        MouseEventKind::Up(MouseButton::Left) => app.resizer.end_drag(),
        MouseEventKind::ScrollUp => handle_wheel(app, col, row, Scroll::Up(WHEEL_LINES)),
        MouseEventKind::ScrollDown => handle_wheel(app, col, row, Scroll::Down(WHEEL_LINES)),
        _ => {}
    }
}

fn handle_wheel(app: &mut ViewerApp, col: u16, row: u16, scroll: Scroll) {
    if app.palette.is_open() {
        return;
    }
    if rect_contains(app.layout_areas.content, col, row) {
        app.scroll(scroll);
    }
}

fn handle_left_down(app: &mut ViewerApp, col: u16, row: u16) {
    let areas = app.layout_areas.clone();

    // The palette is modal: clicks either hit it or dismiss it.
    if app.palette.is_open() {
        if !rect_contains(areas.palette_popup, col, row)
            || rect_contains(areas.palette_close, col, row)
        {
            app.palette.close();
            return;
        }
        if rect_contains(areas.palette_list, col, row) {
            let index = (row - areas.palette_list.y) as usize;
            if let Some(command) = app.palette.command_at(index) {
                app.run_palette_command(command);
            }
        }
        return;
    }

    if rect_contains(areas.resizer, col, row) {
        app.resizer.begin_drag();
        return;
    }

    if rect_contains(areas.theme_toggle, col, row) {
        app.theme.toggle();
        return;
    }

    if rect_contains(areas.tab_bar, col, row) {
        let hit = areas
            .tab_regions
            .iter()
            .find(|(x_start, x_end, _)| col >= *x_start && col < *x_end);
        if let Some((_, _, tab)) = hit {
            app.switch_to(tab);
        }
        return;
    }

    if rect_contains(areas.sidebar, col, row) {
        if let Some((_, tab)) = areas.sidebar_rows.iter().find(|(r, _)| *r == row) {
            app.switch_to(tab);
        }
    }
}

/// Check if a point (col, row) is inside a Rect.
pub(super) fn rect_contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}
