use markdown_view_engine::{FontTable, MarkdownRenderer, Style, Styles};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Caller-side render configuration.
///
/// Every section is optional in the file; omitted sections fall back to the
/// default font table, no style overrides and an empty base text style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub fonts: FontTable,
    pub styles: Styles,
    pub text_style: Style,
}

impl ViewConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config = Self::from_toml(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Writes the config as TOML. TOML has no null, so cleared style
    /// properties are not persisted.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let persisted = ViewConfig {
            fonts: self.fonts.clone(),
            styles: self.styles.without_nulls(),
            text_style: self.text_style.without_nulls(),
        };
        let content = toml::to_string_pretty(&persisted)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-view");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// A renderer using the configured tables over the built-in rules.
    pub fn renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::new()
            .with_fonts(self.fonts.clone())
            .with_styles(&self.styles)
            .with_text_style(self.text_style.clone())
    }
}
