//! Image variant resolution.
//!
//! Expands one logical asset name into the dark and light references used by
//! `<picture>` markup. This is the only place that knows the image path layout:
//!
//! - `/img/{dark|light}/<name>.png` and `<name>@2x.png 2x` for screenshots
//! - `/img/{dark|light}/source/<name>.png` for brand logos
//! - `/img/<name>.svg` for step icons
//! - `/<root>/img/<state>-mac-app-store/<locale>/{white|black}.svg` for the badge

use marquee_core::{DownloadState, ThemeConfig};

use crate::node::{Element, el};

/// Media query selecting the dark variant.
pub const DARK_MEDIA: &str = "(prefers-color-scheme: dark)";

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    /// Directory segment under `/img/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Badge glyph colour readable on this appearance.
    fn badge_color(&self) -> &'static str {
        match self {
            Self::Dark => "white",
            Self::Light => "black",
        }
    }
}

/// Where an image is used, which decides its path and markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetContext {
    Hero,
    Brand,
    Feature,
    AppStore(DownloadState),
}

impl AssetContext {
    /// Class applied to the `<source>` and `<img>` elements.
    fn image_class(&self) -> Option<&'static str> {
        match self {
            Self::Hero => Some("hero-image"),
            Self::Brand => Some("brand-image"),
            Self::Feature | Self::AppStore(_) => None,
        }
    }
}

/// A single appearance of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    /// Base resolution path.
    pub src: String,
    /// High density candidates, absent for vector artwork.
    pub srcset: Option<String>,
}

/// Dark and light references for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVariants {
    pub dark: ImageSource,
    pub light: ImageSource,
}

/// Resolves asset names against the theme's path conventions.
#[derive(Debug, Clone, Copy)]
pub struct VariantResolver<'a> {
    theme: &'a ThemeConfig,
}

impl<'a> VariantResolver<'a> {
    /// Create a resolver for the given theme settings.
    #[must_use]
    pub fn new(theme: &'a ThemeConfig) -> Self {
        Self { theme }
    }

    /// Dark and light references for `name` in `context`.
    ///
    /// For [`AssetContext::AppStore`] the name is ignored; the badge is picked
    /// by download state and locale.
    #[must_use]
    pub fn resolve(&self, name: &str, context: AssetContext) -> ImageVariants {
        let source = |appearance| match context {
            AssetContext::Hero | AssetContext::Feature => raster(appearance, None, name),
            AssetContext::Brand => raster(appearance, Some("source"), name),
            AssetContext::AppStore(state) => self.badge(appearance, state),
        };

        ImageVariants {
            dark: source(Appearance::Dark),
            light: source(Appearance::Light),
        }
    }

    /// `<picture>` markup for `name`: a dark `<source>` followed by the default `<img>`.
    #[must_use]
    pub fn picture(&self, name: &str, context: AssetContext) -> Element {
        let ImageVariants { dark, light } = self.resolve(name, context);

        if let AssetContext::AppStore(_) = context {
            return el("picture")
                .class("download-image")
                .child(el("source").attr("srcset", dark.src).attr("media", DARK_MEDIA))
                .child(el("img").attr("src", light.src));
        }

        let class = context.image_class();
        let source = with_class(el("source"), class)
            .attr("src", dark.src)
            .attr("srcset", dark.srcset.unwrap_or_default())
            .attr("media", DARK_MEDIA);
        let img = with_class(el("img"), class)
            .attr("src", light.src)
            .attr("srcset", light.srcset.unwrap_or_default());

        el("picture").child(source).child(img)
    }

    fn badge(&self, appearance: Appearance, state: DownloadState) -> ImageSource {
        ImageSource {
            src: format!(
                "/{}/img/{}-mac-app-store/{}/{}.svg",
                self.theme.root,
                state,
                self.theme.badge_locale,
                appearance.badge_color()
            ),
            srcset: None,
        }
    }
}

/// Path of a step icon.
#[must_use]
pub fn step_icon(name: &str) -> String {
    format!("/img/{name}.svg")
}

fn raster(appearance: Appearance, subdir: Option<&str>, name: &str) -> ImageSource {
    let dir = match subdir {
        Some(subdir) => format!("/img/{}/{subdir}", appearance.as_str()),
        None => format!("/img/{}", appearance.as_str()),
    };
    ImageSource {
        src: format!("{dir}/{name}.png"),
        srcset: Some(format!("{dir}/{name}@2x.png 2x")),
    }
}

fn with_class(element: Element, class: Option<&str>) -> Element {
    match class {
        Some(class) => element.class(class),
        None => element,
    }
}
