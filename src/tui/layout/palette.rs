//! Command palette popup: query line on top, filtered entries below.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::super::app::ViewerApp;
use super::super::style::colors;
use super::centered;
use crate::viewer::icons::Icon;

const POPUP_WIDTH: u16 = 56;
const CLOSE_LABEL: &str = " [x] ";

pub(super) fn draw_palette(f: &mut Frame, app: &mut ViewerApp, screen: Rect) {
    let c = colors(app.theme.mode());
    let entries = app.palette.filtered();
    // borders (2) + query line (1) + at least one list row
    let height = entries.len().max(1) as u16 + 3;
    let popup = centered(screen, POPUP_WIDTH, height);

    let block = Block::default()
        .title(format!(" {} Commands ", Icon::Command.glyph()))
        .title_top(Line::from(CLOSE_LABEL).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.accent))
        .style(Style::default().bg(c.popup_bg).fg(c.fg));
    let inner = block.inner(popup);

    let selected = app.palette.selected();
    let row_width = inner.width as usize;
    let mut lines = vec![Line::from(vec![
        Span::styled("> ", Style::default().fg(c.accent).add_modifier(Modifier::BOLD)),
        Span::raw(app.palette.query().content().to_string()),
    ])];
    if entries.is_empty() {
        lines.push(Line::styled("  no matching commands", Style::default().fg(c.muted)));
    }
    for (i, entry) in entries.iter().enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(c.selection_fg)
                .bg(c.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        let left = format!(" {} {}", entry.icon.glyph(), entry.label);
        let hint = entry.hint.as_deref().unwrap_or("");
        let pad = row_width.saturating_sub(left.chars().count() + hint.len() + 1);
        lines.push(Line::styled(format!("{left}{}{hint} ", " ".repeat(pad)), style));
    }
    let entry_rows = entries.len() as u16;

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);

    let list = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        entry_rows.min(inner.height.saturating_sub(1)),
    );
    // Right-aligned titles end just inside the corner.
    let close_width = (CLOSE_LABEL.len() as u16).min(popup.width.saturating_sub(2));
    app.layout_areas.palette_close = Rect::new(
        (popup.x + popup.width).saturating_sub(1 + close_width),
        popup.y,
        close_width,
        1,
    );
    app.layout_areas.palette_popup = popup;
    app.layout_areas.palette_list = list;

    let cursor_x = inner.x + 2 + app.palette.query().cursor_column();
    f.set_cursor_position(Position::new(cursor_x.min(inner.x + inner.width), inner.y));
}
