//! Page composition.
//!
//! Builds complete documents from the site content: head metadata,
//! stylesheets, and the ordered section subtrees.

use marquee_core::{Config, Landing, Page, SiteConfig};
use thiserror::Error;
use tracing::debug;

use crate::{
    node::{Element, Html, Node, el},
    sections::{self, RenderContext},
    stylesheet::stylesheet_paths,
    variant::VariantResolver,
};

/// Separator between page title and site title in `<title>`.
pub const TITLE_SEPARATOR: &str = " | ";

/// Theme construction errors.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The site does not provide the content this theme renders.
    #[error("site '{site}' cannot be rendered by the landing theme: missing {missing}")]
    SiteCapability { site: String, missing: &'static str },
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Kinds of documents a host pipeline asks the theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Index,
    Page,
    Section,
    Item,
    TagList,
    TagDetails,
}

impl DocumentKind {
    /// Whether the theme produces markup for this kind. The others render empty.
    #[must_use]
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Index | Self::Page)
    }
}

/// The landing page theme, bound to one site.
#[derive(Debug, Clone, Copy)]
pub struct LandingTheme<'a> {
    config: &'a Config,
    landing: &'a Landing,
}

impl<'a> LandingTheme<'a> {
    /// Bind the theme to a site, checking that it carries landing content.
    pub fn new(config: &'a Config) -> Result<Self> {
        let landing = config
            .landing
            .as_ref()
            .ok_or_else(|| ThemeError::SiteCapability {
                site: config.site.title.clone(),
                missing: "landing content",
            })?;
        Ok(Self { config, landing })
    }

    /// Site settings the theme is bound to.
    #[must_use]
    pub fn site(&self) -> &'a SiteConfig {
        &self.config.site
    }

    fn context(&self) -> RenderContext<'a> {
        RenderContext::new(
            &self.config.site,
            self.landing,
            VariantResolver::new(&self.config.theme),
        )
    }

    /// Render a document of the given kind. `page` is used by [`DocumentKind::Page`].
    #[must_use]
    pub fn render(&self, kind: DocumentKind, page: Option<&Page>) -> Html {
        match (kind, page) {
            (DocumentKind::Index, _) => self.index_html(),
            (DocumentKind::Page, Some(page)) => self.page_html(page),
            (DocumentKind::Page, None) => {
                debug!("page document requested without a page");
                Html::empty()
            }
            (DocumentKind::Section, _) => self.section_html(""),
            (DocumentKind::Item, _) => self.item_html(page),
            (DocumentKind::TagList, _) => self.tag_list_html(&[]),
            (DocumentKind::TagDetails, _) => self.tag_details_html(""),
        }
    }

    /// The landing page.
    #[must_use]
    pub fn index_html(&self) -> Html {
        debug!(sections = ?self.landing.present_sections(), "composing index document");
        let ctx = self.context();

        let body = el("body")
            .children(sections::hero(&ctx))
            .children(sections::header(&ctx))
            .child(el("main").children(sections::main_sections(&ctx)))
            .child(sections::footer(ctx.site));

        Html::new(&self.site().language, self.head(None, None), body)
    }

    /// A generic content page wrapping pre-rendered body HTML.
    #[must_use]
    pub fn page_html(&self, page: &Page) -> Html {
        debug!(title = %page.title, "composing page document");

        let body = el("body")
            .child(
                el("header")
                    .child(el("h1").child(page.title.as_str()))
                    .child(el("h3").child(page.description.as_str())),
            )
            .child(
                el("main").child(
                    el("section")
                        .class("max-section")
                        .child(Node::Raw(page.body.clone())),
                ),
            )
            .child(sections::footer(self.site()));

        let description = Some(page.description.as_str()).filter(|d| !d.is_empty());
        Html::new(
            &self.site().language,
            self.head(Some(&page.title), description),
            body,
        )
    }

    /// Section listings are not part of this theme.
    #[must_use]
    pub fn section_html(&self, section: &str) -> Html {
        debug!(section, "section documents render empty");
        Html::empty()
    }

    /// Item documents are not part of this theme.
    #[must_use]
    pub fn item_html(&self, item: Option<&Page>) -> Html {
        debug!(item = ?item.map(|p| &p.title), "item documents render empty");
        Html::empty()
    }

    /// Tag indexes are not part of this theme.
    #[must_use]
    pub fn tag_list_html(&self, tags: &[String]) -> Html {
        debug!(tags = tags.len(), "tag list documents render empty");
        Html::empty()
    }

    /// Per-tag listings are not part of this theme.
    #[must_use]
    pub fn tag_details_html(&self, tag: &str) -> Html {
        debug!(tag, "tag detail documents render empty");
        Html::empty()
    }

    /// Document head. `title` is the page's own title, `None` for the index.
    fn head(&self, title: Option<&str>, description: Option<&str>) -> Element {
        let site = self.site();
        let title = match title {
            Some(title) if !title.is_empty() && title != site.title => {
                format!("{title}{TITLE_SEPARATOR}{}", site.title)
            }
            _ => site.title.clone(),
        };
        let description = description.or(site.description.as_deref());

        let stylesheets = stylesheet_paths(site, &self.config.theme)
            .into_iter()
            .map(|href| el("link").attr("rel", "stylesheet").attr("href", href));

        el("head")
            .child(el("meta").attr("charset", "UTF-8"))
            .child(meta_property("og:site_name", &site.title))
            .child(el("title").child(title.as_str()))
            .child(meta_name("twitter:title", &title))
            .child(meta_property("og:title", &title))
            .children(description.map(|d| meta_name("description", d)))
            .children(description.map(|d| meta_name("twitter:description", d)))
            .children(description.map(|d| meta_property("og:description", d)))
            .children(
                Some(site.keywords.as_str())
                    .filter(|k| !k.is_empty())
                    .map(|k| meta_name("keywords", k)),
            )
            .child(meta_name("twitter:card", "summary"))
            .children(stylesheets)
            .child(meta_name("viewport", "width=device-width, initial-scale=1.0"))
            .child(
                el("link")
                    .attr("rel", "shortcut icon")
                    .attr("href", "/images/favicon.png")
                    .attr("type", "image/png"),
            )
    }
}

fn meta_name(name: &str, content: &str) -> Element {
    el("meta").attr("name", name).attr("content", content)
}

fn meta_property(property: &str, content: &str) -> Element {
    el("meta").attr("property", property).attr("content", content)
}
