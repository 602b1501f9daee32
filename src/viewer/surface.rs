//! Screen-facing state derived from tab switches.
//!
//! One navigation control and one content panel per tab, built once from
//! the tab set. `apply` is the only writer: it marks exactly one control
//! and one panel active, swaps in a rendered body when there is one, and
//! rewrites the counter labels.

use ratatui::text::Line;

use super::tabs::{TabId, TabSpec, TabSwitch};

#[derive(Debug, Clone)]
pub struct NavControl {
    pub tab: TabId,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ContentPanel {
    pub tab: TabId,
    pub visible: bool,
    pub body: Vec<Line<'static>>,
    /// Vertical scroll offset in rendered rows.
    pub scroll: u16,
    /// Largest useful offset for the last drawn viewport. `None` until the
    /// body has been laid out, in which case source lines bound scrolling.
    max_scroll: Option<u16>,
}

#[derive(Debug, Clone)]
pub struct Surface {
    nav: Vec<NavControl>,
    panels: Vec<ContentPanel>,
    additions: String,
    deletions: String,
}

impl Surface {
    pub fn new(tabs: &[TabSpec]) -> Self {
        Self {
            nav: tabs
                .iter()
                .map(|t| NavControl {
                    tab: t.id.clone(),
                    active: false,
                })
                .collect(),
            panels: tabs
                .iter()
                .map(|t| ContentPanel {
                    tab: t.id.clone(),
                    visible: false,
                    body: Vec::new(),
                    scroll: 0,
                    max_scroll: None,
                })
                .collect(),
            additions: "+0".into(),
            deletions: "-0".into(),
        }
    }

    /// Reflect a tab switch on screen.
    pub fn apply(&mut self, switch: TabSwitch) {
        for control in &mut self.nav {
            control.active = control.tab == switch.tab;
        }
        for panel in &mut self.panels {
            panel.visible = panel.tab == switch.tab;
            if panel.visible {
                if let Some(body) = &switch.body {
                    panel.body = body.clone();
                    panel.scroll = 0;
                    panel.max_scroll = None;
                }
            }
        }
        self.additions = format!("+{}", switch.counters.additions);
        self.deletions = format!("-{}", switch.counters.deletions);
    }

    pub fn nav(&self) -> &[NavControl] {
        &self.nav
    }

    pub fn panels(&self) -> &[ContentPanel] {
        &self.panels
    }

    pub fn visible_panel(&self) -> Option<&ContentPanel> {
        self.panels.iter().find(|p| p.visible)
    }

    pub fn visible_panel_mut(&mut self) -> Option<&mut ContentPanel> {
        self.panels.iter_mut().find(|p| p.visible)
    }

    pub fn additions_label(&self) -> &str {
        &self.additions
    }

    pub fn deletions_label(&self) -> &str {
        &self.deletions
    }
}

impl ContentPanel {
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Scroll down, never past the point where the last row is on screen.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    pub fn scroll_home(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_end(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Record how the body laid out: `rows` wrapped rows shown through a
    /// viewport `height` rows tall. Pulls the offset back if it now points
    /// past the end.
    pub fn fit_viewport(&mut self, rows: usize, height: u16) {
        let max = rows.saturating_sub(height as usize).min(u16::MAX as usize) as u16;
        self.max_scroll = Some(max);
        self.scroll = self.scroll.min(max);
    }

    fn max_scroll(&self) -> u16 {
        self.max_scroll
            .unwrap_or_else(|| self.body.len().saturating_sub(1).min(u16::MAX as usize) as u16)
    }
}
