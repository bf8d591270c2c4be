//! Page command - prints a generic content page

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use marquee_core::Page;
use marquee_theme::LandingTheme;

use super::load_config;

/// Run the page command.
///
/// `body` points at a file holding the page's pre-rendered HTML.
pub fn run(config_path: &Path, title: &str, description: &str, body: &Path) -> Result<()> {
    tracing::info!(?config_path, title, ?body, "Rendering page");

    let config = load_config(config_path)?;
    let theme = LandingTheme::new(&config)?;

    let body = std::fs::read_to_string(body)
        .wrap_err_with(|| format!("Failed to read page body from {}", body.display()))?;
    let page = Page::new(title, description, body);
    println!("{}", theme.page_html(&page).render());

    Ok(())
}
