//! Tab bar, theme indicator and the visible content panel.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::super::app::ViewerApp;
use super::super::style::colors;

/// Width of the theme indicator at the right end of the tab bar.
const TOGGLE_WIDTH: u16 = 3;

pub(super) fn draw_tab_bar(f: &mut Frame, app: &mut ViewerApp, area: Rect) {
    let c = colors(app.theme.mode());
    let mut tab_regions = Vec::new();
    let mut x = area.x;
    let mut spans = Vec::new();

    for control in app.surface.nav() {
        let Some(spec) = app.tabs.tabs().iter().find(|t| t.id == control.tab) else {
            continue;
        };
        let style = if control.active {
            Style::default()
                .fg(c.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(c.muted)
        };
        let label = format!(" {} {} ", spec.icon.glyph(), spec.label);
        let x_start = x + 1; // after the separator space
        let x_end = x_start.saturating_add(label.width() as u16);
        tab_regions.push((x_start, x_end, control.tab.clone()));
        x = x_end;
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, style));
    }

    app.layout_areas.tab_bar = area;
    app.layout_areas.tab_regions = tab_regions;
    f.render_widget(Paragraph::new(Line::from(spans)), area);

    let toggle = Rect::new(
        (area.x + area.width).saturating_sub(TOGGLE_WIDTH),
        area.y,
        TOGGLE_WIDTH.min(area.width),
        1,
    );
    app.layout_areas.theme_toggle = toggle;
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} ", app.theme.indicator().glyph()),
            Style::default().fg(c.accent).bg(c.bg),
        )),
        toggle,
    );
}

pub(super) fn draw_panel(f: &mut Frame, app: &mut ViewerApp, area: Rect) {
    let c = colors(app.theme.mode());
    let Some(panel) = app.surface.visible_panel_mut() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {}.md ", panel.tab))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);

    // Scroll offsets count wrapped rows, so measure before the block is attached.
    let body = Paragraph::new(panel.body.clone())
        .style(Style::default().fg(c.fg))
        .wrap(Wrap { trim: false });
    panel.fit_viewport(body.line_count(inner.width), inner.height);

    f.render_widget(body.block(block).scroll((panel.scroll, 0)), area);
}
