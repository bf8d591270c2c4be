//! Marquee CLI Library
//!
//! Host-side commands for the Marquee landing page theme: load a content
//! file, compose a document, and print it.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (index, page, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use marquee::cmd;
//!
//! // Print the landing page for a content file
//! cmd::index::run(Path::new("content.toml")).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use marquee_core::{Config, Page};
pub use marquee_theme::{DocumentKind, Html, LandingTheme};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
