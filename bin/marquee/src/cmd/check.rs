//! Check command - validate content against the landing theme

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use marquee_core::{Config, Landing};
use marquee_theme::LandingTheme;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Loads the content file and verifies the landing theme can render it.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking content");

    let mut result = ValidationResult::default();

    println!("Checking content...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Content file valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Content error: {e}"));
            println!("  ✗ Content file invalid: {e}");
            None
        }
    };

    if let Some(ref config) = config {
        println!("\nChecking theme capability...");
        match LandingTheme::new(config) {
            Ok(_) => println!("  ✓ Landing content present"),
            Err(e) => {
                result.add_error(e.to_string());
                println!("  ✗ {e}");
            }
        }

        if let Some(landing) = &config.landing {
            println!("\nChecking sections...");
            check_sections(landing, strict, &mut result);
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Report present sections and sections whose lists are empty.
///
/// A landing without any section is an error in strict mode.
fn check_sections(landing: &Landing, strict: bool, result: &mut ValidationResult) {
    if landing.is_empty() {
        let msg = "No landing sections defined; the index will only show the footer";
        if strict {
            result.add_error(msg);
        } else {
            result.add_warning(msg);
        }
        return;
    }

    for name in landing.present_sections() {
        println!("  ✓ {name}");
    }

    let empty_lists = [
        ("why.paragraphs", landing.why.as_ref().map(|s| s.paragraphs.is_empty())),
        ("how.steps", landing.how.as_ref().map(|s| s.steps.is_empty())),
        ("product.features", landing.product.as_ref().map(|s| s.features.is_empty())),
        ("features.points", landing.features.as_ref().map(|s| s.points.is_empty())),
        ("brands.sources", landing.brands.as_ref().map(|s| s.sources.is_empty())),
        (
            "community.resources",
            landing.community.as_ref().map(|s| s.resources.is_empty()),
        ),
    ];
    for (field, empty) in empty_lists {
        if empty == Some(true) {
            result.add_warning(format!("landing.{field} is empty"));
        }
    }

    if landing.hero.is_some() && landing.download.is_none() {
        result.add_warning("Hero has no App Store badge without a download section");
    }
}
