//! Configuration type definitions

use std::path::Path;

use serde::Deserialize;

use crate::error::{MenuError, MenuResult};
use crate::menu::{Marks, MenuStyle, DEFAULT_INDICATOR, DEFAULT_PAGE_SIZE};

use super::loader::{self, ConfigWarning};

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// `[menu]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_indicator")]
    pub indicator: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            indicator: default_indicator(),
            page_size: default_page_size(),
        }
    }
}

fn default_indicator() -> String {
    DEFAULT_INDICATOR.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// `[marks]` section: glyphs for the multi-select column
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarksConfig {
    #[serde(default = "default_open")]
    pub open: String,

    #[serde(default = "default_close")]
    pub close: String,

    #[serde(default = "default_selected")]
    pub selected: String,

    #[serde(default = "default_unselected")]
    pub unselected: String,
}

impl Default for MarksConfig {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
            selected: default_selected(),
            unselected: default_unselected(),
        }
    }
}

fn default_open() -> String {
    "[".to_string()
}

fn default_close() -> String {
    "]".to_string()
}

fn default_selected() -> String {
    "*".to_string()
}

fn default_unselected() -> String {
    " ".to_string()
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Full configuration file
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub marks: MarksConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Reject values no menu can work with
    pub fn validate(&self, file: &Path) -> MenuResult<()> {
        if self.menu.page_size == 0 {
            return Err(MenuError::InvalidConfig {
                file: file.to_path_buf(),
                message: "menu.page_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Menu construction style; `color` is the already-resolved color decision
    pub fn menu_style(&self, color: bool) -> MenuStyle {
        MenuStyle {
            indicator: self.menu.indicator.clone(),
            page_size: self.menu.page_size.max(1),
            color,
        }
    }

    pub fn marks(&self) -> Marks {
        Marks {
            open: self.marks.open.clone(),
            close: self.marks.close.clone(),
            selected: self.marks.selected.clone(),
            unselected: self.marks.unselected.clone(),
        }
    }
}
