//! Tab state machine.
//!
//! `TabController` owns the active tab and decides what a switch means:
//! which tab is now active, what its rendered body is (if the content
//! collaborator has an entry) and a fresh pair of cosmetic diff counters.
//! Applying that decision to the screen is the surface's job.

use std::fmt;

use rand::Rng;
use ratatui::text::Line;
use tracing::{debug, warn};

use super::icons::Icon;

/// Identifier of a named content panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Static description of one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec {
    pub id: TabId,
    pub label: String,
    /// Lowercase shortcut letter, if any.
    pub shortcut: Option<char>,
    pub icon: Icon,
}

impl TabSpec {
    pub fn new(id: &str, label: &str, shortcut: Option<char>, icon: Icon) -> Self {
        Self {
            id: TabId::new(id),
            label: label.to_string(),
            shortcut: shortcut.map(|c| c.to_ascii_lowercase()),
            icon,
        }
    }
}

impl From<&folio_config::TabConfig> for TabSpec {
    fn from(cfg: &folio_config::TabConfig) -> Self {
        let icon = cfg.icon.as_deref().map(Icon::from_name).unwrap_or(Icon::File);
        Self::new(&cfg.id, &cfg.label, cfg.key, icon)
    }
}

/// Read-only markdown source per tab.
pub trait ContentLookup {
    fn lookup(&self, tab: &TabId) -> Option<&str>;
}

/// Markdown source to styled lines. Output is shown verbatim.
pub trait MarkupRenderer {
    fn render(&self, source: &str) -> Vec<Line<'static>>;
}

/// Cosmetic "+additions -deletions" pair shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffCounters {
    pub additions: u32,
    pub deletions: u32,
}

impl DiffCounters {
    pub const MAX_ADDITIONS: u32 = 19;
    pub const MAX_DELETIONS: u32 = 9;

    /// Draw a new pair from `rng`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            additions: rng.gen_range(0..=Self::MAX_ADDITIONS),
            deletions: rng.gen_range(0..=Self::MAX_DELETIONS),
        }
    }
}

/// Outcome of a successful `switch_to`.
#[derive(Debug, Clone)]
pub struct TabSwitch {
    pub tab: TabId,
    /// Rendered body, or `None` when the tab has no content entry.
    pub body: Option<Vec<Line<'static>>>,
    pub counters: DiffCounters,
}

/// Owns the active tab.
pub struct TabController<R> {
    tabs: Vec<TabSpec>,
    active: TabId,
    content: Box<dyn ContentLookup>,
    renderer: Box<dyn MarkupRenderer>,
    rng: R,
}

impl<R: Rng> TabController<R> {
    /// Build a controller. `initial` must be one of `tabs`; otherwise the
    /// first tab is used.
    pub fn new(
        tabs: Vec<TabSpec>,
        initial: &TabId,
        content: Box<dyn ContentLookup>,
        renderer: Box<dyn MarkupRenderer>,
        rng: R,
    ) -> Self {
        let active = if tabs.iter().any(|t| &t.id == initial) {
            initial.clone()
        } else {
            tabs.first()
                .map(|t| t.id.clone())
                .unwrap_or_else(|| initial.clone())
        };

        for tab in &tabs {
            if content.lookup(&tab.id).is_none() {
                warn!("tab '{}' has no content, its panel will stay empty", tab.id);
            }
        }

        Self {
            tabs,
            active,
            content,
            renderer,
            rng,
        }
    }

    pub fn tabs(&self) -> &[TabSpec] {
        &self.tabs
    }

    pub fn active(&self) -> &TabId {
        &self.active
    }

    pub fn contains(&self, tab: &TabId) -> bool {
        self.tabs.iter().any(|t| &t.id == tab)
    }

    /// Make `tab` the active tab.
    ///
    /// Returns `None` (and changes nothing) for identifiers outside the
    /// tab set. A known tab without content still switches; its `body`
    /// is `None`. Counters are re-rolled on every successful call.
    pub fn switch_to(&mut self, tab: &TabId) -> Option<TabSwitch> {
        if !self.contains(tab) {
            warn!("ignoring switch to unknown tab '{tab}'");
            return None;
        }

        self.active = tab.clone();

        let body = self
            .content
            .lookup(tab)
            .map(|source| self.renderer.render(source));
        let counters = DiffCounters::roll(&mut self.rng);

        debug!(
            tab = %tab,
            rendered = body.is_some(),
            additions = counters.additions,
            deletions = counters.deletions,
            "switched tab"
        );

        Some(TabSwitch {
            tab: tab.clone(),
            body,
            counters,
        })
    }
}
