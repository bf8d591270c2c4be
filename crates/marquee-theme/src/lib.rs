//! Marquee Theme Library
//!
//! Rendering engine for the Marquee landing page theme. Everything here is a
//! pure function of the site content: no I/O, no shared state.
//!
//! # Modules
//!
//! - [`node`] - In-memory HTML element tree and serialization
//! - [`variant`] - Dark/light, 1x/2x image variant resolution
//! - [`stylesheet`] - Stylesheet path list
//! - [`sections`] - Per-section renderers
//! - [`theme`] - Document composition and the site capability check

pub mod node;
pub mod sections;
pub mod stylesheet;
pub mod theme;
pub mod variant;

pub use node::{Element, Html, Node};
pub use stylesheet::stylesheet_paths;
pub use theme::{DocumentKind, LandingTheme, ThemeError};
pub use variant::{AssetContext, ImageSource, ImageVariants, VariantResolver};
