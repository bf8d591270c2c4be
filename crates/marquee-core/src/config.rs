//! Site content loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    content::Landing,
    error::{CoreError, Result},
};

/// Root content object handed to the theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Theme asset settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Landing page sections. Sites without this table cannot be rendered
    /// by the landing theme.
    #[serde(default)]
    pub landing: Option<Landing>,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Comma separated keywords for the `keywords` meta tag.
    #[serde(default)]
    pub keywords: String,

    /// Copyright line shown in the footer.
    #[serde(default)]
    pub copyright: String,

    /// Custom stylesheet appended after the theme stylesheets.
    #[serde(default)]
    pub css: Option<String>,

    /// Whether the footer links to `/privacy`.
    #[serde(default)]
    pub has_privacy_url: bool,

    /// Document language tag.
    #[serde(default = "default_language")]
    pub language: String,
}

/// Where the theme's bundled assets live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Root directory of the theme's stylesheets, fonts and badges.
    #[serde(default = "default_theme_root")]
    pub root: String,

    /// Locale directory of the App Store badge artwork.
    #[serde(default = "default_badge_locale")]
    pub badge_locale: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_theme_root() -> String {
    "StevenPaulJobsTheme".to_string()
}

fn default_badge_locale() -> String {
    "us-uk".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            root: default_theme_root(),
            badge_locale: default_badge_locale(),
        }
    }
}

impl SiteConfig {
    /// Create site settings with the given title and defaults elsewhere.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            keywords: String::new(),
            copyright: String::new(),
            css: None,
            has_privacy_url: false,
            language: default_language(),
        }
    }
}

impl Config {
    /// Load content from a TOML or YAML file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext, "yaml" | "yml"));

        let config: Config = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to parse config file: {}", path.display()),
                    e,
                )
            })?
        } else {
            toml::from_str(&content).map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to parse config file: {}", path.display()),
                    e,
                )
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load content with `MARQUEE__*` environment overrides layered on top.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("MARQUEE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse content from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.language.is_empty() {
            return Err(CoreError::config("site.language cannot be empty"));
        }

        if let Some(css) = &self.site.css {
            if !css.starts_with('/') {
                tracing::warn!(css = %css, "site.css should be an absolute path");
            }
        }

        let download = self.landing.as_ref().and_then(|l| l.download.as_ref());
        if download.is_some_and(|d| d.app_store_url.is_empty()) {
            tracing::warn!("landing.download.app_store_url is empty");
        }

        Ok(())
    }
}
