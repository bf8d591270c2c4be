//! Landing page content model.
//!
//! Every section is optional. A section that is absent from the content file
//! renders nothing at all, and list order is the order items appear on the page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Availability state of the app, selects the App Store badge artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DownloadState {
    /// The app is available now.
    #[default]
    Download,
    /// The app can be pre-ordered.
    PreOrder,
}

impl DownloadState {
    /// Path segment used by the badge artwork for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::PreOrder => "pre-order",
        }
    }
}

impl fmt::Display for DownloadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme-specific content attached to a site.
///
/// ```toml
/// [landing.hero]
/// title = "Ship It"
///
/// [landing.download]
/// title = "Get it today"
/// app_store_url = "https://apps.apple.com/app/id0000000000"
/// state = "pre-order"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Landing {
    #[serde(default)]
    pub hero: Option<HeroSection>,
    #[serde(default)]
    pub header: Option<HeaderSection>,
    #[serde(default)]
    pub why: Option<WhySection>,
    #[serde(default)]
    pub how: Option<HowSection>,
    #[serde(default)]
    pub product: Option<ProductSection>,
    #[serde(default)]
    pub features: Option<FeaturesSection>,
    #[serde(default)]
    pub brands: Option<BrandsSection>,
    #[serde(default)]
    pub community: Option<CommunitySection>,
    #[serde(default)]
    pub download: Option<DownloadSection>,
}

impl Landing {
    /// Names of the sections that carry content, in page order.
    pub fn present_sections(&self) -> Vec<&'static str> {
        let sections = [
            ("hero", self.hero.is_some()),
            ("header", self.header.is_some()),
            ("why", self.why.is_some()),
            ("how", self.how.is_some()),
            ("product", self.product.is_some()),
            ("features", self.features.is_some()),
            ("brands", self.brands.is_some()),
            ("community", self.community.is_some()),
            ("download", self.download.is_some()),
        ];
        sections
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }

    /// Whether no section carries content.
    pub fn is_empty(&self) -> bool {
        self.present_sections().is_empty()
    }
}

/// Top banner of the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    pub title: String,

    /// Base name of the hero screenshot under `/img/{dark,light}/`.
    #[serde(default = "default_hero_image")]
    pub image: String,
}

fn default_hero_image() -> String {
    "nytimes-hero".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

/// Short pitch rendered as a run of paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhySection {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HowSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One step of the "how it works" walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Base name of an SVG icon under `/img/`.
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A product card. Each optional field controls its own piece of markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Screenshot base names, one picture per entry.
    #[serde(default)]
    pub images: Option<Vec<String>>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Target of the "Learn More" link.
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, alias = "differentiators")]
    pub points: Vec<BulletPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletPoint {
    /// Icon glyph shown above the title.
    #[serde(default)]
    pub symbol: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Logos of publications or partners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandsSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Logo base names under `/img/{dark,light}/source/`.
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunitySection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub resources: Vec<CommunityResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityResource {
    pub title: String,
    pub description: String,
    pub href: String,
}

/// App Store call to action. Its presence also enables the badge in the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub app_store_url: String,
    #[serde(default)]
    pub state: DownloadState,
}

/// A generic content page with a pre-rendered HTML body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Body HTML, inserted verbatim.
    pub body: String,
}

impl Page {
    /// Create a new page.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_state_segments() {
        assert_eq!(DownloadState::Download.to_string(), "download");
        assert_eq!(DownloadState::PreOrder.to_string(), "pre-order");
        assert_eq!(DownloadState::default(), DownloadState::Download);
    }

    #[test]
    fn test_download_state_deserialize() {
        let section: DownloadSection = toml::from_str(
            r#"
title = "Get it"
app_store_url = "https://x"
state = "pre-order"
"#,
        )
        .expect("parse download");
        assert_eq!(section.state, DownloadState::PreOrder);
        assert!(section.subtitle.is_empty());
    }

    #[test]
    fn test_feature_optional_fields() {
        let feature: Feature = toml::from_str(
            r#"
title = "Fast"
description = "Really fast."
tags = ["new"]
"#,
        )
        .expect("parse feature");
        assert!(feature.images.is_none());
        assert!(feature.href.is_none());
        assert_eq!(feature.tags, Some(vec!["new".to_string()]));
    }

    #[test]
    fn test_features_section_accepts_differentiators() {
        let section: FeaturesSection = toml::from_str(
            r#"
title = "Why us"

[[differentiators]]
title = "Private"
description = "No tracking."
"#,
        )
        .expect("parse features");
        assert_eq!(section.points.len(), 1);
        assert!(section.points[0].symbol.is_none());
    }

    #[test]
    fn test_hero_default_image() {
        let hero: HeroSection = toml::from_str(r#"title = "Ship It""#).expect("parse hero");
        assert_eq!(hero.image, "nytimes-hero");
    }

    #[test]
    fn test_present_sections_in_page_order() {
        let landing = Landing {
            download: Some(DownloadSection {
                title: "Get it".to_string(),
                subtitle: String::new(),
                app_store_url: "https://x".to_string(),
                state: DownloadState::Download,
            }),
            hero: Some(HeroSection {
                title: "Ship It".to_string(),
                image: default_hero_image(),
            }),
            ..Landing::default()
        };
        assert_eq!(landing.present_sections(), vec!["hero", "download"]);
        assert!(!landing.is_empty());
        assert!(Landing::default().is_empty());
    }
}
