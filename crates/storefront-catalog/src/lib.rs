//! Industry catalog for storefront sites.
//!
//! Classifies free-form business categories into a fixed set of industries
//! and supplies each industry's display name, example services and default
//! color palette.

pub mod industry;
pub mod palette;
pub mod profile;

pub use industry::{classify, Industry};
pub use palette::{ColorScheme, Palette};
pub use profile::{IndustryProfile, ServiceTemplate};

/// Errors that can occur when resolving catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("Invalid color for {field}: {value} (expected #rgb or #rrggbb)")]
    InvalidColor { field: &'static str, value: String },
}
