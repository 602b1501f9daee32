//! Markdown content per tab.
//!
//! Built-in pages ship inside the binary. A tab's `file:` in config, or
//! `<content_dir>/<id>.md`, replaces the built-in page for that tab. The
//! library is read-only once the viewer starts.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use super::tabs::{ContentLookup, TabId};

const BUILTIN: &[(&str, &str)] = &[
    ("projects", include_str!("../../assets/content/projects.md")),
    ("tools", include_str!("../../assets/content/tools.md")),
    ("blog", include_str!("../../assets/content/blog.md")),
    ("dayjob", include_str!("../../assets/content/dayjob.md")),
];

#[derive(Debug, Default, Clone)]
pub struct ContentLibrary {
    pages: HashMap<TabId, String>,
}

impl ContentLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library preloaded with the bundled pages.
    pub fn builtin() -> Self {
        let mut lib = Self::new();
        for (id, source) in BUILTIN {
            lib.insert(TabId::new(*id), *source);
        }
        lib
    }

    pub fn insert(&mut self, tab: TabId, source: impl Into<String>) {
        self.pages.insert(tab, source.into());
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Replace a page from a file. Unreadable files are logged and skipped.
    pub fn load_file(&mut self, tab: &TabId, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(source) => {
                debug!("loaded content for '{tab}' from {}", path.display());
                self.insert(tab.clone(), source);
            }
            Err(e) => warn!("could not read content for '{tab}' from {}: {e}", path.display()),
        }
    }

    /// Pick up `<id>.md` for each tab from `dir`.
    ///
    /// The directory itself must be readable; individual missing files
    /// just keep whatever page the tab already has.
    pub fn load_dir<'a>(
        &mut self,
        dir: &Path,
        tabs: impl IntoIterator<Item = &'a TabId>,
    ) -> anyhow::Result<()> {
        std::fs::read_dir(dir)
            .with_context(|| format!("content directory {} is not readable", dir.display()))?;
        for tab in tabs {
            let path = dir.join(format!("{tab}.md"));
            if path.is_file() {
                self.load_file(tab, &path);
            }
        }
        Ok(())
    }
}

impl ContentLookup for ContentLibrary {
    fn lookup(&self, tab: &TabId) -> Option<&str> {
        self.pages.get(tab).map(String::as_str)
    }
}
