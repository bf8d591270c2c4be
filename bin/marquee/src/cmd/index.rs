//! Index command - prints the landing page

use std::path::Path;

use color_eyre::eyre::Result;
use marquee_theme::LandingTheme;

use super::load_config;

/// Run the index command.
pub fn run(config_path: &Path) -> Result<()> {
    tracing::info!(?config_path, "Rendering landing page");

    let config = load_config(config_path)?;
    let theme = LandingTheme::new(&config)?;
    println!("{}", theme.index_html().render());

    Ok(())
}
