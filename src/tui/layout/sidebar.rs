//! Navigation sidebar: one entry per tab, right edge is the resizer.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::super::app::ViewerApp;
use super::super::style::colors;

pub(super) fn draw_title(f: &mut Frame, app: &ViewerApp, area: Rect) {
    let c = colors(app.theme.mode());
    let title = Line::from(vec![
        Span::styled(" folio", Style::default().fg(c.accent).add_modifier(Modifier::BOLD)),
        Span::styled(" ~/docs", Style::default().fg(c.muted)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

pub(super) fn draw_sidebar(f: &mut Frame, app: &mut ViewerApp, area: Rect) {
    let c = colors(app.theme.mode());
    let edge = if app.resizer.is_resizing() {
        Style::default().fg(c.border_active).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.border)
    };
    let block = Block::default().borders(Borders::RIGHT).border_style(edge);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::styled(
        " EXPLORER",
        Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
    )];
    let mut rows = Vec::new();

    for (i, control) in app.surface.nav().iter().enumerate() {
        let Some(spec) = app.tabs.tabs().iter().find(|t| t.id == control.tab) else {
            continue;
        };
        let (marker, style) = if control.active {
            (
                "▸",
                Style::default()
                    .fg(c.selection_fg)
                    .bg(c.selection_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (" ", Style::default().fg(c.fg))
        };
        let row = inner.y + 1 + i as u16;
        if row < inner.y + inner.height {
            rows.push((row, control.tab.clone()));
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} {} ", spec.icon.glyph()), style),
            Span::styled(format!("{}.md", control.tab), style),
        ]));
    }

    app.layout_areas.sidebar_rows = rows;
    f.render_widget(Paragraph::new(lines), inner);
}
