//! Global key routing.
//!
//! Every key event goes through one ordered policy, `KeyboardRouter::route`:
//!
//! 1. Ctrl+C quits, always.
//! 2. While a text field has focus, Esc closes the palette and every
//!    other key passes through to the field.
//! 3. Ctrl/Super+K toggles the palette.
//! 4. Esc closes the palette.
//! 5. Shortcut letters (case-insensitive, no Ctrl/Alt/Super) switch tabs.
//! 6. Arrow/Page/Home/End keys scroll the visible panel.
//!
//! Anything else is ignored. `handle_key` applies the routed action.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::app::ViewerApp;
use crate::viewer::tabs::{TabId, TabSpec};

/// Where keyboard focus currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusContext {
    Document,
    /// A free-text field (the palette query).
    TextInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up(u16),
    Down(u16),
    Top,
    Bottom,
}

/// Outcome of routing one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    TogglePalette,
    ClosePalette,
    SwitchTab(TabId),
    Scroll(Scroll),
    /// Hand the key to the focused text field untouched.
    PassThrough,
    Ignore,
}

const PAGE: u16 = 10;

/// Shortcut letter map plus the routing policy.
#[derive(Debug, Clone, Default)]
pub struct KeyboardRouter {
    shortcuts: HashMap<char, TabId>,
}

impl KeyboardRouter {
    pub fn new(tabs: &[TabSpec]) -> Self {
        let shortcuts = tabs
            .iter()
            .filter_map(|t| t.shortcut.map(|c| (c.to_ascii_lowercase(), t.id.clone())))
            .collect();
        Self { shortcuts }
    }

    /// Tab bound to a letter, case-insensitively.
    pub fn shortcut(&self, ch: char) -> Option<&TabId> {
        self.shortcuts.get(&ch.to_ascii_lowercase())
    }

    pub fn route(&self, key: &KeyEvent, focus: FocusContext) -> KeyAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let command = ctrl || key.modifiers.contains(KeyModifiers::SUPER);

        if ctrl && matches!(key.code, KeyCode::Char('c')) {
            return KeyAction::Quit;
        }

        if focus == FocusContext::TextInput {
            return if key.code == KeyCode::Esc {
                KeyAction::ClosePalette
            } else {
                KeyAction::PassThrough
            };
        }

        if command && matches!(key.code, KeyCode::Char('k') | KeyCode::Char('K')) {
            return KeyAction::TogglePalette;
        }

        if key.code == KeyCode::Esc {
            return KeyAction::ClosePalette;
        }

        match key.code {
            KeyCode::Char(ch) => {
                if command || key.modifiers.contains(KeyModifiers::ALT) {
                    return KeyAction::Ignore;
                }
                self.shortcut(ch)
                    .map(|tab| KeyAction::SwitchTab(tab.clone()))
                    .unwrap_or(KeyAction::Ignore)
            }
            KeyCode::Up => KeyAction::Scroll(Scroll::Up(1)),
            KeyCode::Down => KeyAction::Scroll(Scroll::Down(1)),
            KeyCode::PageUp => KeyAction::Scroll(Scroll::Up(PAGE)),
            KeyCode::PageDown => KeyAction::Scroll(Scroll::Down(PAGE)),
            KeyCode::Home => KeyAction::Scroll(Scroll::Top),
            KeyCode::End => KeyAction::Scroll(Scroll::Bottom),
            _ => KeyAction::Ignore,
        }
    }
}

/// Route a key and apply the result to the app.
pub fn handle_key(app: &mut ViewerApp, key: KeyEvent) {
    let action = app.router.route(&key, app.focus());
    trace!(?key, ?action, "key routed");
    match action {
        KeyAction::Quit => app.should_quit = true,
        KeyAction::TogglePalette => app.palette.toggle(),
        KeyAction::ClosePalette => app.palette.close(),
        KeyAction::SwitchTab(tab) => app.switch_to(&tab),
        KeyAction::Scroll(scroll) => app.scroll(scroll),
        KeyAction::PassThrough => {
            if let Some(command) = app.palette.handle_field_key(key) {
                app.run_palette_command(command);
            }
        }
        KeyAction::Ignore => {}
    }
}
