//! Viewer model: every component plus the layout cache for hit-testing.
//!
//! Input handlers (`input`, `mouse`) mutate the model; `layout::draw`
//! reads it once per frame. Nothing here touches the terminal.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use folio_config::{ConfigError, FolioConfig};

use super::input::{FocusContext, KeyboardRouter, Scroll};
use super::markdown::MarkdownRenderer;
use super::mouse::LayoutAreas;
use crate::store::KeyValueStore;
use crate::viewer::content::ContentLibrary;
use crate::viewer::palette::{CommandPalette, PaletteCommand};
use crate::viewer::resize::PanelResizer;
use crate::viewer::surface::Surface;
use crate::viewer::tabs::{TabController, TabId, TabSpec};
use crate::viewer::theme::ThemePreference;
use crate::viewer::ticker::CommitInfoTicker;

pub struct ViewerApp {
    pub tabs: TabController<StdRng>,
    pub surface: Surface,
    pub palette: CommandPalette,
    pub resizer: PanelResizer,
    pub theme: ThemePreference,
    pub ticker: CommitInfoTicker,
    pub router: KeyboardRouter,
    /// Regions from the last frame, for mouse hit-testing.
    pub layout_areas: LayoutAreas,
    pub should_quit: bool,
}

impl ViewerApp {
    /// Assemble the viewer and run the startup sequence: restore the
    /// theme, show the initial tab, stamp the "last updated" label.
    ///
    /// Fails if `config` does not validate.
    pub fn new(
        config: &FolioConfig,
        initial_tab: &TabId,
        content: ContentLibrary,
        store: Box<dyn KeyValueStore>,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let specs: Vec<TabSpec> = config.tabs.iter().map(TabSpec::from).collect();

        let tabs = TabController::new(
            specs.clone(),
            initial_tab,
            Box::new(content),
            Box::new(MarkdownRenderer),
            rng,
        );

        let mut app = Self {
            surface: Surface::new(&specs),
            palette: CommandPalette::new(&specs),
            router: KeyboardRouter::new(&specs),
            resizer: PanelResizer::from_config(&config.sidebar),
            theme: ThemePreference::load_initial(store, &config.storage.theme_key),
            ticker: CommitInfoTicker::new(Duration::from_secs(config.ticker.interval_secs)),
            tabs,
            layout_areas: LayoutAreas::default(),
            should_quit: false,
        };

        let first = app.tabs.active().clone();
        app.switch_to(&first);
        app.ticker.refresh();

        info!(
            tab = %first,
            theme = %app.theme.mode(),
            tabs = specs.len(),
            "viewer ready"
        );
        Ok(app)
    }

    /// Convenience constructor with an entropy-seeded RNG.
    pub fn with_entropy(
        config: &FolioConfig,
        initial_tab: &TabId,
        content: ContentLibrary,
        store: Box<dyn KeyValueStore>,
    ) -> Result<Self, ConfigError> {
        Self::new(config, initial_tab, content, store, StdRng::from_entropy())
    }

    pub fn active_tab(&self) -> &TabId {
        self.tabs.active()
    }

    /// Switch tabs and reflect it on the surface.
    pub fn switch_to(&mut self, tab: &TabId) {
        if let Some(switch) = self.tabs.switch_to(tab) {
            self.surface.apply(switch);
        }
    }

    /// The palette's query field is the only text input.
    pub fn focus(&self) -> FocusContext {
        if self.palette.is_open() {
            FocusContext::TextInput
        } else {
            FocusContext::Document
        }
    }

    /// Execute a palette entry, then dismiss the palette.
    pub fn run_palette_command(&mut self, command: PaletteCommand) {
        match command {
            PaletteCommand::SwitchTab(tab) => self.switch_to(&tab),
            PaletteCommand::ToggleTheme => self.theme.toggle(),
        }
        self.palette.close();
    }

    pub fn scroll(&mut self, scroll: Scroll) {
        let Some(panel) = self.surface.visible_panel_mut() else {
            return;
        };
        match scroll {
            Scroll::Up(n) => panel.scroll_up(n),
            Scroll::Down(n) => panel.scroll_down(n),
            Scroll::Top => panel.scroll_home(),
            Scroll::Bottom => panel.scroll_end(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::viewer::theme::ThemeMode;

    pub(crate) fn test_app() -> ViewerApp {
        let config = FolioConfig::default();
        ViewerApp::new(
            &config,
            &TabId::from(config.default_tab.as_str()),
            ContentLibrary::builtin(),
            Box::new(MemoryStore::new()),
            StdRng::seed_from_u64(5),
        )
        .unwrap()
    }

    #[test]
    fn startup_shows_default_tab() {
        let app = test_app();
        assert_eq!(app.active_tab(), &TabId::from("projects"));
        let panel = app.surface.visible_panel().unwrap();
        assert_eq!(panel.tab, TabId::from("projects"));
        assert!(!panel.body.is_empty());
        assert_eq!(app.theme.mode(), ThemeMode::Light);
        assert!(!app.palette.is_open());
        assert!(app.ticker.label().starts_with("last updated "));
    }

    #[test]
    fn focus_follows_palette() {
        let mut app = test_app();
        assert_eq!(app.focus(), FocusContext::Document);
        app.palette.toggle();
        assert_eq!(app.focus(), FocusContext::TextInput);
    }

    #[test]
    fn palette_command_runs_and_closes() {
        let mut app = test_app();
        app.palette.toggle();
        app.run_palette_command(PaletteCommand::SwitchTab(TabId::from("blog")));
        assert_eq!(app.active_tab(), &TabId::from("blog"));
        assert!(!app.palette.is_open());

        app.palette.toggle();
        app.run_palette_command(PaletteCommand::ToggleTheme);
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
        assert!(!app.palette.is_open());
    }

    #[test]
    fn tab_switch_does_not_close_palette() {
        let mut app = test_app();
        app.palette.toggle();
        app.switch_to(&TabId::from("tools"));
        assert!(app.palette.is_open());
    }

    #[test]
    fn scroll_moves_visible_panel() {
        let mut app = test_app();
        app.scroll(Scroll::Down(2));
        assert_eq!(app.surface.visible_panel().unwrap().scroll, 2);
        app.scroll(Scroll::Top);
        assert_eq!(app.surface.visible_panel().unwrap().scroll, 0);
    }

    #[test]
    fn initial_tab_override() {
        let config = FolioConfig::default();
        let app = ViewerApp::new(
            &config,
            &TabId::from("blog"),
            ContentLibrary::builtin(),
            Box::new(MemoryStore::new()),
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        assert_eq!(app.active_tab(), &TabId::from("blog"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let new_app = |config: &FolioConfig| {
            ViewerApp::new(
                config,
                &TabId::from("projects"),
                ContentLibrary::builtin(),
                Box::new(MemoryStore::new()),
                StdRng::seed_from_u64(1),
            )
        };

        let mut config = FolioConfig::default();
        config.sidebar.min_width = 700;
        assert!(matches!(new_app(&config), Err(ConfigError::Invalid(_))));

        let mut config = FolioConfig::default();
        config.ticker.interval_secs = 0;
        assert!(matches!(new_app(&config), Err(ConfigError::Invalid(_))));
    }
}
