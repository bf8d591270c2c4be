//! End-to-end tests for Marquee.
//!
//! These tests load content the way a host pipeline does and check the
//! composed documents.

use marquee_core::{Config, Page};
use marquee_theme::{LandingTheme, Node, ThemeError};

const SHIP_IT: &str = r#"
[site]
title = "Ship It"
copyright = "Copyright 2026 Ship It"
has_privacy_url = false

[landing.hero]
title = "Ship It"

[landing.how]
title = "How it works"

[[landing.how.steps]]
image = "gear"
title = "Plan"
description = "Plan it"

[landing.download]
title = "Download"
app_store_url = "https://x"
state = "download"
"#;

fn body_of(config: &Config) -> Node {
    let theme = LandingTheme::new(config).expect("theme should accept landing content");
    let html = theme.index_html();
    Node::Element(html.body().expect("index has a body").clone())
}

#[test]
fn test_ship_it_scenario() {
    let config = Config::from_toml_str(SHIP_IT).expect("content should parse");
    let body = body_of(&config);

    let heroes = body.find_by_class("hero");
    assert_eq!(heroes.len(), 1);
    assert!(Node::Element(heroes[0].clone()).text_content().contains("Ship It"));

    // No header block: nothing under main is a `section > header > h1`.
    // The hero's h1 sits directly in its section.
    let main = &body.find_all("main")[0];
    let header_titles: Vec<String> = main
        .nodes()
        .iter()
        .filter_map(Node::as_element)
        .filter(|section| section.name() == "section")
        .flat_map(|section| section.nodes().iter().filter_map(Node::as_element))
        .filter(|child| child.name() == "header")
        .flat_map(|header| header.nodes().iter().filter_map(Node::as_element))
        .filter(|child| child.name() == "h1")
        .map(|h1| Node::Element(h1.clone()).text_content())
        .collect();
    assert!(header_titles.is_empty());
    let h1 = body.find_all("h1");
    assert_eq!(h1.len(), 1);
    assert!(heroes[0].nodes().iter().any(|n| n.as_element() == Some(h1[0])));
    assert!(body.find_by_class("why").is_empty());

    let how = body.find_by_class("how");
    assert_eq!(how.len(), 1);
    let wells = body.find_by_class("well");
    assert_eq!(wells.len(), 1);
    let well = Node::Element(wells[0].clone());
    assert_eq!(
        well.find_all("img")[0].attribute("src"),
        Some("/img/gear.svg")
    );

    assert!(body.find_by_class("product").is_empty());
    assert!(body.find_by_class("features").is_empty());
    assert!(body.find_by_class("brands").is_empty());
    assert!(body.find_by_class("community-background").is_empty());

    let downloads = body.find_by_class("downloads");
    assert_eq!(downloads.len(), 1);
    let badge = Node::Element(downloads[0].clone()).render();
    assert!(badge.contains("/StevenPaulJobsTheme/img/download-mac-app-store/us-uk/black.svg"));

    let footer = body.find_all("footer");
    assert_eq!(footer.len(), 1);
    let footer = Node::Element(footer[0].clone()).render();
    assert!(footer.contains("Home"));
    assert!(footer.contains("GitHub"));
    assert!(!footer.contains("Privacy"));
}

#[test]
fn test_generic_page_scenario() {
    let config = Config::from_toml_str(SHIP_IT).expect("content should parse");
    let theme = LandingTheme::new(&config).expect("theme");

    let page = Page::new("About", "Who we are", "<p>Hi</p>");
    let html = theme.page_html(&page).render();

    assert!(html.contains("<title>About | Ship It</title>"));
    let header = html.find("<h1>About</h1><h3>Who we are</h3>").expect("header");
    let content = html
        .find(r#"<section class="max-section"><p>Hi</p></section>"#)
        .expect("content");
    let footer = html.find("<footer>").expect("footer");
    assert!(header < content && content < footer);
}

#[test]
fn test_full_landing_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("content.toml");
    std::fs::write(
        &path,
        r#"
[site]
title = "Shields"
css = "/css/site.css"
has_privacy_url = true

[landing.header]
title = "Take back your privacy"
subtitle = "Safari content blocker"

[landing.why]
title = "Why"
paragraphs = ["Trackers follow you.", "Shields stops them."]

[landing.product]
title = "Product"

[[landing.product.features]]
images = ["blocker"]
title = "Blocker"
description = "Blocks trackers."
tags = ["Safari"]
href = "/blocker"

[landing.features]
title = "Features"

[[landing.features.points]]
symbol = "*"
title = "Fast"
description = "Native speed."

[landing.brands]
title = "Featured in"
sources = ["nytimes", "verge"]

[landing.community]
title = "Community"

[[landing.community.resources]]
title = "GitHub"
description = "Report issues"
href = "https://github.com/getshields"

[landing.download]
title = "Get Shields"
app_store_url = "https://apps.apple.com/app/shields"
state = "pre-order"
"#,
    )
    .expect("write content");

    let config = Config::load(&path).expect("content should load");
    let theme = LandingTheme::new(&config).expect("theme");
    let html = theme.index_html().render();

    let order = [
        r#"class="why""#,
        r#"class="product""#,
        r#"class="features max-section""#,
        r#"class="brands""#,
        r#"class="community-background""#,
        r#"class="downloads""#,
        "<footer>",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| html.find(needle).expect("section present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(html.contains("<h3>Safari content blocker</h3>"));
    assert!(html.contains(r#"<link rel="stylesheet" href="/css/site.css"/>"#));
    assert!(html.contains("pre-order-mac-app-store"));
    assert!(html.contains(r#"<a href="/privacy">Privacy</a>"#));
    // Hero is absent, so the badge appears only in the download section.
    assert_eq!(html.matches("download-image").count(), 1);
}

#[test]
fn test_site_without_landing_content_is_rejected() {
    let config = Config::from_toml_str(
        r#"
[site]
title = "Plain Blog"
"#,
    )
    .expect("content should parse");

    let err = LandingTheme::new(&config).unwrap_err();
    assert!(matches!(err, ThemeError::SiteCapability { .. }));
}
