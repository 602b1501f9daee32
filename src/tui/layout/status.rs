//! Bottom status line: diff counters, resize mode, "last updated".

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::super::app::ViewerApp;
use super::super::style::colors;

pub(super) fn draw_status(f: &mut Frame, app: &ViewerApp, area: Rect) {
    let c = colors(app.theme.mode());

    let mut left = vec![
        Span::styled(
            format!(" {}", app.surface.additions_label()),
            Style::default().fg(c.additions).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", app.surface.deletions_label()),
            Style::default().fg(c.deletions).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.active_tab()), Style::default().fg(c.muted)),
    ];
    if app.resizer.is_resizing() {
        left.push(Span::styled(
            "  resizing",
            Style::default().fg(c.accent).add_modifier(Modifier::ITALIC),
        ));
    }

    let right = Line::from(vec![
        Span::styled(app.ticker.label().to_string(), Style::default().fg(c.muted)),
        Span::styled("  ^K commands ", Style::default().fg(c.accent)),
    ])
    .right_aligned();

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right.width() as u16)])
            .areas(area);
    f.render_widget(Paragraph::new(Line::from(left)), left_area);
    f.render_widget(Paragraph::new(right), right_area);
}
