//! Light and dark color sets.

use ratatui::style::Color;

use crate::viewer::theme::ThemeMode;

#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    /// Resizer edge while a drag is live.
    pub border_active: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub popup_bg: Color,
    pub additions: Color,
    pub deletions: Color,
}

pub fn colors(mode: ThemeMode) -> Colors {
    match mode {
        ThemeMode::Light => Colors {
            bg: Color::Rgb(250, 250, 248),
            fg: Color::Rgb(36, 41, 47),
            muted: Color::Rgb(110, 119, 129),
            accent: Color::Rgb(9, 105, 218),
            border: Color::Rgb(208, 215, 222),
            border_active: Color::Rgb(9, 105, 218),
            selection_bg: Color::Rgb(221, 235, 255),
            selection_fg: Color::Rgb(36, 41, 47),
            popup_bg: Color::Rgb(255, 255, 255),
            additions: Color::Rgb(26, 127, 55),
            deletions: Color::Rgb(207, 34, 46),
        },
        ThemeMode::Dark => Colors {
            bg: Color::Rgb(22, 27, 34),
            fg: Color::Rgb(201, 209, 217),
            muted: Color::Rgb(139, 148, 158),
            accent: Color::Rgb(88, 166, 255),
            border: Color::Rgb(48, 54, 61),
            border_active: Color::Rgb(88, 166, 255),
            selection_bg: Color::Rgb(56, 139, 253),
            selection_fg: Color::Rgb(13, 17, 23),
            popup_bg: Color::Rgb(30, 30, 36),
            additions: Color::Rgb(63, 185, 80),
            deletions: Color::Rgb(248, 81, 73),
        },
    }
}
