//! Command palette overlay.
//!
//! Visibility is private: `toggle` and `close` are the only ways to
//! change it. While open, the palette's query field has focus; keys
//! the router passes through land in `handle_field_key`.

use crossterm::event::{KeyCode, KeyEvent};

use super::icons::Icon;
use super::input_line::InputLine;
use super::tabs::{TabId, TabSpec};

/// What running a palette entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteCommand {
    SwitchTab(TabId),
    ToggleTheme,
}

#[derive(Debug, Clone)]
pub struct PaletteEntry {
    pub label: String,
    /// Shortcut hint shown right-aligned, e.g. `p`.
    pub hint: Option<String>,
    pub icon: Icon,
    pub command: PaletteCommand,
}

#[derive(Debug)]
pub struct CommandPalette {
    open: bool,
    query: InputLine,
    /// Index into the filtered entry list.
    selected: usize,
    entries: Vec<PaletteEntry>,
}

impl CommandPalette {
    /// Build the palette with one "Go to" entry per tab plus theme toggle.
    pub fn new(tabs: &[TabSpec]) -> Self {
        let mut entries: Vec<PaletteEntry> = tabs
            .iter()
            .map(|t| PaletteEntry {
                label: format!("Go to {}", t.label),
                hint: t.shortcut.map(|c| c.to_string()),
                icon: t.icon,
                command: PaletteCommand::SwitchTab(t.id.clone()),
            })
            .collect();
        entries.push(PaletteEntry {
            label: "Toggle theme".into(),
            hint: None,
            icon: Icon::Sun,
            command: PaletteCommand::ToggleTheme,
        });
        Self {
            open: false,
            query: InputLine::new(),
            selected: 0,
            entries,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip visibility. Opening starts from an empty query.
    pub fn toggle(&mut self) {
        if self.open {
            self.open = false;
        } else {
            self.query.clear();
            self.selected = 0;
            self.open = true;
        }
    }

    /// Hide the overlay. Safe to call when already closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn query(&self) -> &InputLine {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Entries whose label contains the query, case-insensitively.
    pub fn filtered(&self) -> Vec<&PaletteEntry> {
        let needle = self.query.content().trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| needle.is_empty() || e.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Command of the filtered entry at `index`, if any.
    pub fn command_at(&self, index: usize) -> Option<PaletteCommand> {
        self.filtered().get(index).map(|e| e.command.clone())
    }

    /// Handle a key while the query field has focus.
    ///
    /// Returns a command when Enter runs the selected entry. The caller
    /// executes it and closes the overlay.
    pub fn handle_field_key(&mut self, key: KeyEvent) -> Option<PaletteCommand> {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.select_next();
                None
            }
            KeyCode::Enter => self.command_at(self.selected),
            _ => {
                let before = self.query.content().to_string();
                self.query.handle_key(key);
                if self.query.content() != before {
                    self.selected = 0;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::tabs::tests::specs;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(palette: &mut CommandPalette, text: &str) {
        for ch in text.chars() {
            palette.handle_field_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn starts_closed() {
        let palette = CommandPalette::new(&specs());
        assert!(!palette.is_open());
    }

    #[test]
    fn toggle_twice_restores() {
        let mut palette = CommandPalette::new(&specs());
        palette.toggle();
        assert!(palette.is_open());
        palette.toggle();
        assert!(!palette.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut palette = CommandPalette::new(&specs());
        palette.toggle();
        palette.close();
        assert!(!palette.is_open());
        palette.close();
        assert!(!palette.is_open());
    }

    #[test]
    fn entries_cover_tabs_and_theme() {
        let palette = CommandPalette::new(&specs());
        let entries = palette.filtered();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].label, "Go to Projects");
        assert_eq!(entries[0].hint.as_deref(), Some("p"));
        assert_eq!(entries[4].command, PaletteCommand::ToggleTheme);
    }

    #[test]
    fn query_filters_case_insensitively() {
        let mut palette = CommandPalette::new(&specs());
        palette.toggle();
        type_text(&mut palette, "BLO");
        let entries = palette.filtered();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].command, PaletteCommand::SwitchTab(TabId::from("blog")));
    }

    #[test]
    fn enter_runs_selected_entry() {
        let mut palette = CommandPalette::new(&specs());
        palette.toggle();
        palette.handle_field_key(key(KeyCode::Down));
        let cmd = palette.handle_field_key(key(KeyCode::Enter));
        assert_eq!(cmd, Some(PaletteCommand::SwitchTab(TabId::from("tools"))));
    }

    #[test]
    fn selection_wraps() {
        let mut palette = CommandPalette::new(&specs());
        palette.toggle();
        palette.handle_field_key(key(KeyCode::Up));
        assert_eq!(palette.selected(), 4);
        palette.handle_field_key(key(KeyCode::Down));
        assert_eq!(palette.selected(), 0);
    }

    #[test]
    fn typing_resets_selection() {
        let mut palette = CommandPalette::new(&specs());
        palette.toggle();
        palette.handle_field_key(key(KeyCode::Down));
        palette.handle_field_key(key(KeyCode::Down));
        type_text(&mut palette, "t");
        assert_eq!(palette.selected(), 0);
    }

    #[test]
    fn enter_with_no_match_runs_nothing() {
        let mut palette = CommandPalette::new(&specs());
        palette.toggle();
        type_text(&mut palette, "zzz");
        assert!(palette.filtered().is_empty());
        assert_eq!(palette.handle_field_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn reopening_clears_query() {
        let mut palette = CommandPalette::new(&specs());
        palette.toggle();
        type_text(&mut palette, "tools");
        palette.close();
        palette.toggle();
        assert_eq!(palette.query().content(), "");
        assert_eq!(palette.filtered().len(), 5);
    }
}
