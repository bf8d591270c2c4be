//! Marquee Core Library
//!
//! Content model, configuration loading, and error handling for the Marquee
//! landing page theme.

pub mod config;
pub mod content;
pub mod error;

pub use config::{Config, SiteConfig, ThemeConfig};
pub use content::{
    BrandsSection, BulletPoint, CommunityResource, CommunitySection, DownloadSection,
    DownloadState, Feature, FeaturesSection, HeaderSection, HeroSection, HowSection, Landing,
    Page, ProductSection, Step, WhySection,
};
pub use error::{CoreError, Result};
