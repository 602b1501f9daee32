//! Viewer configuration for folio.
//!
//! One YAML file describes the tab set (ids, labels, shortcut letters,
//! icons, optional content files), the sidebar resize bounds, the
//! "last updated" refresh interval and the storage slot for the theme
//! preference. Every section has defaults, so an empty file is valid.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Tab shown at startup.
    pub default_tab: String,
    /// Ordered tab set. Order is the tab bar and sidebar order.
    pub tabs: Vec<TabConfig>,
    pub sidebar: SidebarConfig,
    pub ticker: TickerConfig,
    pub storage: StorageConfig,
}

/// One named content panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    /// Single-letter keyboard shortcut (matched case-insensitively).
    #[serde(default)]
    pub key: Option<char>,
    /// Icon name, e.g. `folder`, `wrench`.
    #[serde(default)]
    pub icon: Option<String>,
    /// Markdown file that replaces the built-in content for this tab.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Navigation sidebar geometry, in resize units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub width: u16,
    pub min_width: u16,
    pub max_width: u16,
    /// Resize units per terminal column.
    pub units_per_column: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub interval_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key under which the light/dark preference is stored.
    pub theme_key: String,
}

impl TabConfig {
    fn new(id: &str, label: &str, key: char, icon: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            key: Some(key),
            icon: Some(icon.into()),
            file: None,
        }
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            default_tab: "projects".into(),
            tabs: vec![
                TabConfig::new("projects", "Projects", 'p', "folder"),
                TabConfig::new("tools", "Tools", 't', "wrench"),
                TabConfig::new("blog", "Blog", 'b', "pen"),
                TabConfig::new("dayjob", "Day Job", 'd', "briefcase"),
            ],
            sidebar: SidebarConfig::default(),
            ticker: TickerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: 300,
            min_width: 250,
            max_width: 600,
            units_per_column: 10,
        }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self { interval_secs: 15 * 60 }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            theme_key: "theme".into(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Check cross-field invariants the type system can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tabs.is_empty() {
            return Err(ConfigError::Invalid("at least one tab is required".into()));
        }

        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        for tab in &self.tabs {
            if tab.id.trim().is_empty() {
                return Err(ConfigError::Invalid("tab id must not be empty".into()));
            }
            if !ids.insert(tab.id.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate tab id '{}'", tab.id)));
            }
            if let Some(key) = tab.key {
                if !key.is_ascii_alphabetic() {
                    return Err(ConfigError::Invalid(format!(
                        "shortcut for '{}' must be a letter, got '{key}'",
                        tab.id
                    )));
                }
                if !keys.insert(key.to_ascii_lowercase()) {
                    return Err(ConfigError::Invalid(format!(
                        "shortcut '{key}' is bound to more than one tab"
                    )));
                }
            }
        }

        if !ids.contains(self.default_tab.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "default tab '{}' is not in the tab list",
                self.default_tab
            )));
        }

        let sidebar = &self.sidebar;
        if sidebar.min_width > sidebar.max_width {
            return Err(ConfigError::Invalid(format!(
                "sidebar min_width ({}) exceeds max_width ({})",
                sidebar.min_width, sidebar.max_width
            )));
        }
        if sidebar.units_per_column == 0 {
            return Err(ConfigError::Invalid("sidebar units_per_column must be > 0".into()));
        }
        if self.ticker.interval_secs == 0 {
            return Err(ConfigError::Invalid("ticker interval_secs must be > 0".into()));
        }
        if self.storage.theme_key.is_empty() {
            return Err(ConfigError::Invalid("storage theme_key must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = FolioConfig::default();
        config.validate().unwrap();
        assert_eq!(config.default_tab, "projects");
        assert_eq!(config.tabs.len(), 4);
        assert_eq!(config.sidebar.min_width, 250);
        assert_eq!(config.sidebar.max_width, 600);
        assert_eq!(config.ticker.interval_secs, 900);
        assert_eq!(config.storage.theme_key, "theme");
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(FolioConfig::from_yaml("").unwrap(), FolioConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = FolioConfig::from_yaml("sidebar:\n  width: 400\n").unwrap();
        assert_eq!(config.sidebar.width, 400);
        assert_eq!(config.sidebar.min_width, 250);
        assert_eq!(config.tabs.len(), 4);
    }

    #[test]
    fn parse_custom_tabs() {
        let yaml = r#"
default_tab: notes
tabs:
  - id: notes
    label: Notes
    key: n
    file: notes.md
  - id: links
    label: Links
"#;
        let config = FolioConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.tabs.len(), 2);
        assert_eq!(config.tabs[0].key, Some('n'));
        assert_eq!(config.tabs[0].file, Some(PathBuf::from("notes.md")));
        assert_eq!(config.tabs[1].key, None);
        assert_eq!(config.tabs[1].icon, None);
    }

    #[test]
    fn unknown_default_tab_rejected() {
        let err = FolioConfig::from_yaml("default_tab: nowhere\n").unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn duplicate_shortcut_rejected() {
        let yaml = r#"
default_tab: a
tabs:
  - { id: a, label: A, key: x }
  - { id: b, label: B, key: X }
"#;
        let err = FolioConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn duplicate_id_rejected() {
        let yaml = r#"
default_tab: a
tabs:
  - { id: a, label: A }
  - { id: a, label: Again }
"#;
        assert!(FolioConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn non_letter_shortcut_rejected() {
        let yaml = r#"
default_tab: a
tabs:
  - { id: a, label: A, key: "1" }
"#;
        assert!(FolioConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let yaml = "sidebar:\n  min_width: 700\n  max_width: 600\n";
        assert!(FolioConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ticker:\n  interval_secs: 60").unwrap();
        let config = FolioConfig::load(file.path()).unwrap();
        assert_eq!(config.ticker.interval_secs, 60);
    }

    #[test]
    fn load_missing_file_errors() {
        let err = FolioConfig::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
