//! Landing page section renderers.
//!
//! Each renderer maps an optional section to zero or one subtrees. A missing
//! section yields `None`, so it leaves no trace in the document.

use marquee_core::{
    BrandsSection, BulletPoint, CommunitySection, DownloadSection, Feature, FeaturesSection,
    HowSection, Landing, ProductSection, SiteConfig,
};
use tracing::trace;

use crate::{
    node::{Element, Node, el, text},
    variant::{AssetContext, VariantResolver, step_icon},
};

/// SF Symbols arrow shown after "Learn More".
const LEARN_MORE_ICON: &str = "\u{10012F}";

/// Separator between footer links.
const FOOTER_SEPARATOR: &str = " • ";

/// Footer links rendered on every page, in order.
const FOOTER_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("https://twitter.com/getshields", "Twitter"),
    ("https://instagram.com/getshields", "Instagram"),
    ("https://github.com/getshields", "GitHub"),
];

/// Everything a section renderer reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteConfig,
    pub landing: &'a Landing,
    pub resolver: VariantResolver<'a>,
}

impl<'a> RenderContext<'a> {
    /// Create a render context.
    #[must_use]
    pub fn new(site: &'a SiteConfig, landing: &'a Landing, resolver: VariantResolver<'a>) -> Self {
        Self {
            site,
            landing,
            resolver,
        }
    }
}

/// Main content sections in page order.
pub fn main_sections(ctx: &RenderContext) -> Vec<Node> {
    [
        why(ctx),
        how(ctx),
        product(ctx),
        features(ctx),
        brands(ctx),
        community(ctx),
        download(ctx),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn hero(ctx: &RenderContext) -> Option<Node> {
    let Some(hero) = &ctx.landing.hero else {
        trace!(section = "hero", "skipped");
        return None;
    };
    trace!(section = "hero", "rendered");

    let section = el("section")
        .class("hero hero-background")
        .child(el("h1").child(hero.title.as_str()))
        .children(app_store_link(ctx))
        .child(el("div").child(ctx.resolver.picture(&hero.image, AssetContext::Hero)));
    Some(section.into())
}

pub fn header(ctx: &RenderContext) -> Option<Node> {
    let Some(header) = &ctx.landing.header else {
        trace!(section = "header", "skipped");
        return None;
    };
    trace!(section = "header", "rendered");

    let block = el("header")
        .child(el("h1").child(header.title.as_str()))
        .children(subtitle("h3", &header.subtitle));
    Some(el("section").child(block).into())
}

pub fn why(ctx: &RenderContext) -> Option<Node> {
    let Some(why) = &ctx.landing.why else {
        trace!(section = "why", "skipped");
        return None;
    };
    trace!(section = "why", paragraphs = why.paragraphs.len(), "rendered");

    let section = el("section")
        .class("why")
        .child(el("header").child(el("h4").child(why.title.as_str())))
        .child(
            el("div").class("max-section").children(
                why.paragraphs
                    .iter()
                    .map(|paragraph| el("p").child(paragraph.as_str())),
            ),
        );
    Some(section.into())
}

pub fn how(ctx: &RenderContext) -> Option<Node> {
    let Some(HowSection {
        title,
        subtitle,
        steps,
    }) = &ctx.landing.how
    else {
        trace!(section = "how", "skipped");
        return None;
    };
    trace!(section = "how", steps = steps.len(), "rendered");

    let wells = steps.iter().map(|step| {
        el("div")
            .class("well")
            .child(
                el("img")
                    .class("how-image")
                    .attr("src", step_icon(&step.image)),
            )
            .child(
                el("h4")
                    .child(step.title.as_str())
                    .child(el("br"))
                    .child(el("small").child(step.description.as_str())),
            )
    });

    Some(titled(
        title,
        subtitle,
        el("section").class("how max-section").children(wells),
    ))
}

pub fn product(ctx: &RenderContext) -> Option<Node> {
    let Some(ProductSection {
        title,
        subtitle,
        features,
    }) = &ctx.landing.product
    else {
        trace!(section = "product", "skipped");
        return None;
    };
    trace!(section = "product", features = features.len(), "rendered");

    let wells = features.iter().map(|feature| product_well(ctx, feature));
    Some(titled(
        title,
        subtitle,
        el("section").class("product").children(wells),
    ))
}

fn product_well(ctx: &RenderContext, feature: &Feature) -> Element {
    let pictures = feature
        .images
        .iter()
        .flatten()
        .map(|image| ctx.resolver.picture(image, AssetContext::Feature));

    let summary = el("p")
        .child(
            el("strong")
                .class("system-red")
                .child(feature.title.as_str()),
        )
        .child(format!(" {}", feature.description));

    let tags = feature
        .tags
        .as_ref()
        .filter(|tags| !tags.is_empty())
        .map(|tags| {
            el("p").children(
                tags.iter()
                    .map(|tag| el("mark").class("span-red").child(tag.as_str())),
            )
        });

    el("div")
        .class("well")
        .children(pictures)
        .child(summary)
        .children(tags)
        .children(feature.href.as_deref().map(learn_more))
}

pub fn features(ctx: &RenderContext) -> Option<Node> {
    let Some(FeaturesSection {
        title,
        subtitle,
        points,
    }) = &ctx.landing.features
    else {
        trace!(section = "features", "skipped");
        return None;
    };
    trace!(section = "features", points = points.len(), "rendered");

    Some(titled(
        title,
        subtitle,
        el("section")
            .class("features max-section")
            .children(points.iter().map(bullet_point)),
    ))
}

fn bullet_point(point: &BulletPoint) -> Element {
    let symbol = point
        .symbol
        .as_deref()
        .map(|symbol| el("span").class("icon").child(symbol));

    el("div")
        .child(
            el("h3")
                .children(symbol)
                .child(el("br"))
                .child(el("small").child(point.title.as_str())),
        )
        .child(el("p").child(point.description.as_str()))
        .children(point.href.as_deref().map(learn_more))
}

pub fn brands(ctx: &RenderContext) -> Option<Node> {
    let Some(BrandsSection {
        title,
        subtitle,
        sources,
    }) = &ctx.landing.brands
    else {
        trace!(section = "brands", "skipped");
        return None;
    };
    trace!(section = "brands", sources = sources.len(), "rendered");

    let logos = sources
        .iter()
        .map(|source| el("div").child(ctx.resolver.picture(source, AssetContext::Brand)));
    Some(titled(
        title,
        subtitle,
        el("section").class("brands").children(logos),
    ))
}

pub fn community(ctx: &RenderContext) -> Option<Node> {
    let Some(CommunitySection {
        title,
        subtitle,
        resources,
    }) = &ctx.landing.community
    else {
        trace!(section = "community", "skipped");
        return None;
    };
    trace!(section = "community", resources = resources.len(), "rendered");

    let entries = resources.iter().map(|resource| {
        el("div").child(
            el("p")
                .child(
                    el("a")
                        .attr("href", resource.href.as_str())
                        .child(resource.title.as_str()),
                )
                .child(format!(" — {}", resource.description)),
        )
    });
    Some(titled(
        title,
        subtitle,
        el("section").class("community-background").children(entries),
    ))
}

pub fn download(ctx: &RenderContext) -> Option<Node> {
    let Some(DownloadSection {
        title, subtitle, ..
    }) = &ctx.landing.download
    else {
        trace!(section = "download", "skipped");
        return None;
    };
    trace!(section = "download", "rendered");

    Some(titled(
        title,
        subtitle,
        el("section")
            .class("downloads")
            .child(el("div").children(app_store_link(ctx))),
    ))
}

/// App Store badge link, present only when the site has a download section.
pub fn app_store_link(ctx: &RenderContext) -> Option<Element> {
    let download = ctx.landing.download.as_ref()?;
    Some(
        el("a")
            .attr("href", download.app_store_url.as_str())
            .child(
                ctx.resolver
                    .picture("", AssetContext::AppStore(download.state)),
            ),
    )
}

/// Site footer. Always rendered.
pub fn footer(site: &SiteConfig) -> Node {
    let mut footer = el("footer");
    for (i, (href, label)) in FOOTER_LINKS.iter().enumerate() {
        if i > 0 {
            footer = footer.child(FOOTER_SEPARATOR);
        }
        footer = footer.child(el("a").attr("href", *href).child(*label));
    }

    let privacy = site.has_privacy_url.then(|| {
        Node::group([
            text(FOOTER_SEPARATOR),
            el("a").attr("href", "/privacy").child("Privacy").into(),
        ])
    });

    footer
        .children(privacy)
        .child(el("br"))
        .child(el("small").child(site.copyright.as_str()))
        .into()
}

/// Section header (`h2` title, optional `h4` subtitle) followed by the body.
fn titled(title: &str, subtitle_text: &str, body: Element) -> Node {
    let header = el("header")
        .child(el("h2").child(title))
        .children(subtitle("h4", subtitle_text));
    Node::group([header.into(), body.into()])
}

/// Subtitle element, omitted when the text is empty.
fn subtitle(tag: &'static str, value: &str) -> Option<Element> {
    (!value.is_empty()).then(|| el(tag).child(value))
}

fn learn_more(href: &str) -> Element {
    el("a")
        .attr("href", href)
        .child("Learn More ")
        .child(el("span").class("icon").child(LEARN_MORE_ICON))
}
