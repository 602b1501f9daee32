//! Icon names and their terminal glyphs.
//!
//! Components only ever store an `Icon`; the glyph is looked up at draw
//! time, so any icon change is visible on the next frame without a
//! separate refresh step.

/// Icons the viewer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Sun,
    Moon,
    Folder,
    Wrench,
    Pen,
    Briefcase,
    File,
    Command,
}

impl Icon {
    /// Resolve an icon by name. Unknown names fall back to `File`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "sun" => Icon::Sun,
            "moon" => Icon::Moon,
            "folder" => Icon::Folder,
            "wrench" | "tools" => Icon::Wrench,
            "pen" | "pencil" => Icon::Pen,
            "briefcase" => Icon::Briefcase,
            "command" => Icon::Command,
            _ => Icon::File,
        }
    }

    /// Single-width glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Sun => "☀",
            Icon::Moon => "☾",
            Icon::Folder => "▣",
            Icon::Wrench => "⚒",
            Icon::Pen => "✎",
            Icon::Briefcase => "◧",
            Icon::File => "▤",
            Icon::Command => "⌘",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn known_names_resolve() {
        let cases = [
            ("sun", Icon::Sun),
            ("moon", Icon::Moon),
            ("folder", Icon::Folder),
            ("wrench", Icon::Wrench),
            ("tools", Icon::Wrench),
            ("pencil", Icon::Pen),
            ("briefcase", Icon::Briefcase),
            ("command", Icon::Command),
        ];
        for (name, icon) in cases {
            assert_eq!(Icon::from_name(name), icon, "{name}");
        }
    }

    #[test]
    fn unknown_name_is_file() {
        assert_eq!(Icon::from_name("rocket"), Icon::File);
        assert_eq!(Icon::from_name(" Moon "), Icon::Moon);
    }

    #[test]
    fn glyphs_are_one_column() {
        // Tab regions are computed from display width; keep icons narrow.
        for icon in [Icon::Folder, Icon::Wrench, Icon::Pen, Icon::Briefcase, Icon::File] {
            assert_eq!(icon.glyph().width(), 1, "{:?}", icon);
        }
    }
}
