//! Static marketing site generator for small businesses.
//!
//! Reads business descriptions (TOML, YAML or JSON), resolves industry
//! defaults, and renders one themed page per business in the chosen layout,
//! plus an optional browser-mockup preview page.

pub mod builder;
pub mod cookie;
pub mod mockup;
pub mod model;
pub mod render;
pub mod templates;
pub mod theme;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use cookie::CookieConsent;
pub use mockup::MockupViewport;
pub use model::{
    load_business, parse_business, Business, BusinessFormat, Contact, Layout, LoadError, Section,
    ServiceItem,
};
pub use render::{RenderError, RenderedSite, SiteRenderer};
pub use templates::TemplateEngine;
pub use theme::ThemePipeline;
