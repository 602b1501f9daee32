//! Screen layout.
//!
//! ```text
//! ┌ folio ───────────┬ ▣ Projects  ⚒ Tools  ✎ Blog  ◧ Day Job ───── ☀ ┐
//! │ EXPLORER         ║ ┌ projects.md ───────────────────────────────┐ │
//! │ ▸ projects.md    ║ │ (rendered markdown of the visible panel)    │ │
//! │   tools.md       ║ │                                             │ │
//! │   blog.md        ║ └─────────────────────────────────────────────┘ │
//! ├──────────────────┴───────────────────────────────────────────────────┤
//! │ +12 -3  resizing                 last updated Oct 18, 2026  ^K cmds │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `║` is the resizer edge. The command palette draws last, centered over
//! everything else.

mod content;
mod palette;
mod sidebar;
mod status;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::app::ViewerApp;
use super::style::colors;

/// Draw a full frame and refresh the hit-test cache.
pub fn draw(f: &mut Frame, app: &mut ViewerApp) {
    let c = colors(app.theme.mode());
    f.render_widget(
        Block::default().style(Style::default().bg(c.bg).fg(c.fg)),
        f.area(),
    );

    let [top, body, status_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let sidebar_cols = app
        .resizer
        .width_columns()
        .min(body.width.saturating_sub(10));
    let [sidebar_area, content_area] =
        Layout::horizontal([Constraint::Length(sidebar_cols), Constraint::Min(10)]).areas(body);
    let [title_area, tab_bar_area] =
        Layout::horizontal([Constraint::Length(sidebar_cols), Constraint::Min(10)]).areas(top);

    app.layout_areas.sidebar = sidebar_area;
    app.layout_areas.content = content_area;
    app.layout_areas.resizer = Rect::new(
        (sidebar_area.x + sidebar_area.width).saturating_sub(1),
        sidebar_area.y,
        sidebar_area.width.min(1),
        sidebar_area.height,
    );

    sidebar::draw_title(f, app, title_area);
    content::draw_tab_bar(f, app, tab_bar_area);
    sidebar::draw_sidebar(f, app, sidebar_area);
    content::draw_panel(f, app, content_area);
    status::draw_status(f, app, status_row);

    if app.palette.is_open() {
        palette::draw_palette(f, app, f.area());
    } else {
        app.layout_areas.palette_popup = Rect::default();
        app.layout_areas.palette_list = Rect::default();
        app.layout_areas.palette_close = Rect::default();
    }
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit.
pub(super) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::tui::app::tests::test_app;
    use crate::tui::input;
    use crate::viewer::content::ContentLibrary;
    use crate::viewer::tabs::TabId;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use folio_config::FolioConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app_showing(page: &str) -> ViewerApp {
        let mut content = ContentLibrary::builtin();
        content.insert(TabId::from("blog"), page);
        ViewerApp::new(
            &FolioConfig::default(),
            &TabId::from("blog"),
            content,
            Box::new(MemoryStore::new()),
            StdRng::seed_from_u64(3),
        )
        .unwrap()
    }

    fn press(app: &mut ViewerApp, code: KeyCode) {
        input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn draws_tabs_sidebar_and_body() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Projects"));
        assert!(text.contains("tools.md"));
        assert!(text.contains("last updated"));
        assert_eq!(app.layout_areas.tab_regions.len(), 4);
        assert_eq!(app.layout_areas.sidebar_rows.len(), 4);
        assert_eq!(app.layout_areas.resizer.width, 1);
        assert_eq!(app.layout_areas.palette_popup, Rect::default());
    }

    #[test]
    fn sidebar_width_follows_resizer() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert_eq!(app.layout_areas.sidebar.width, 30);

        app.resizer.begin_drag();
        app.resizer.pointer_moved(450);
        app.resizer.end_drag();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert_eq!(app.layout_areas.sidebar.width, 45);
        assert_eq!(app.layout_areas.resizer.x, 44);
    }

    #[test]
    fn palette_regions_cached_when_open() {
        let mut app = test_app();
        app.palette.toggle();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert!(app.layout_areas.palette_popup.width > 0);
        assert!(app.layout_areas.palette_list.height >= 5);
        assert!(screen_text(&terminal).contains("Toggle theme"));
    }

    #[test]
    fn palette_close_control_drawn_where_cached() {
        let mut app = test_app();
        app.palette.toggle();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let close = app.layout_areas.palette_close;
        assert_eq!(close.y, app.layout_areas.palette_popup.y);
        let buffer = terminal.backend().buffer();
        let label: String = (close.x..close.x + close.width)
            .map(|x| buffer[(x, close.y)].symbol().to_string())
            .collect();
        assert_eq!(label.trim(), "[x]");

        app.palette.close();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert_eq!(app.layout_areas.palette_close, Rect::default());
    }

    #[test]
    fn end_reaches_last_wrapped_row() {
        let paragraph = vec!["lorem ipsum dolor sit amet"; 80].join(" ");
        let page = format!("{paragraph}\n\n{paragraph}\n\n{paragraph}\n\nENDMARK");
        let mut app = app_showing(&page);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(!screen_text(&terminal).contains("ENDMARK"));

        press(&mut app, KeyCode::End);
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("ENDMARK"));
        let at_end = app.surface.visible_panel().unwrap().scroll;
        // far more rows than source lines
        assert!(at_end as usize > app.surface.visible_panel().unwrap().body.len());

        for _ in 0..50 {
            press(&mut app, KeyCode::PageDown);
        }
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert_eq!(app.surface.visible_panel().unwrap().scroll, at_end);
        assert!(screen_text(&terminal).contains("ENDMARK"));

        press(&mut app, KeyCode::Home);
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(!screen_text(&terminal).contains("ENDMARK"));
    }

    #[test]
    fn centered_fits_inside() {
        let r = centered(Rect::new(0, 0, 20, 10), 50, 4);
        assert_eq!(r, Rect::new(0, 3, 20, 4));
    }
}
