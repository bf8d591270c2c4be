//! Stylesheet references for rendered documents.

use marquee_core::{SiteConfig, ThemeConfig};

/// Ordered stylesheet paths: theme styles, fonts, then the site's own override.
///
/// The override always comes last so its rules win in the cascade.
#[must_use]
pub fn stylesheet_paths(site: &SiteConfig, theme: &ThemeConfig) -> Vec<String> {
    let mut paths = vec![
        format!("/{}/css/styles.css", theme.root),
        format!("/{}/fonts/stylesheet.css", theme.root),
    ];
    if let Some(css) = &site.css {
        paths.push(css.clone());
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_stylesheets_only() {
        let site = SiteConfig::new("Shields");
        let paths = stylesheet_paths(&site, &ThemeConfig::default());
        assert_eq!(
            paths,
            vec![
                "/StevenPaulJobsTheme/css/styles.css",
                "/StevenPaulJobsTheme/fonts/stylesheet.css",
            ]
        );
    }

    #[test]
    fn test_custom_stylesheet_is_last() {
        let mut site = SiteConfig::new("Shields");
        site.css = Some("/css/custom.css".to_string());

        let paths = stylesheet_paths(&site, &ThemeConfig::default());
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[2], "/css/custom.css");
    }
}
