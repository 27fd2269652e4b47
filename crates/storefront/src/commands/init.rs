//! Initialize a storefront project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing storefront...");

    let sites_dir = Path::new("sites");

    if sites_dir.exists() {
        if !yes {
            tracing::warn!("sites/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(sites_dir).context("Failed to create sites directory")?;
    }

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    let example_path = sites_dir.join("example.toml");
    if !example_path.exists() || yes {
        fs::write(&example_path, EXAMPLE_BUSINESS).context("Failed to write example.toml")?;
        tracing::info!("Created sites/example.toml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'storefront build' to generate the sites.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Storefront Configuration

[sites]
# Directory containing business files (.toml, .yaml, .yml, .json)
dir = "sites"

[build]
# Output directory for built sites
output = "dist"

# Title of the overview page
title = "Storefront"

# Base URL (for deployment)
base_url = "/"

# Enable CSS minification
minify = true

# Browser mockup preview pages; set to false to disable
[build.mockup]
frame_width = 960.0
frame_height = 600.0
content_width = 1440.0
"#;

const EXAMPLE_BUSINESS: &str = r#"name = "Bäckerei Sonnenschein"
category = "bakery"
tagline = "Frisches Brot seit 1952"
layout = "classic"

hours = [
    "Monday: 6:00 AM – 6:00 PM",
    "Tuesday: 6:00 AM – 6:00 PM",
    "Wednesday: 6:00 AM – 1:00 PM",
    "Thursday: 6:00 AM – 6:00 PM",
    "Friday: 6:00 AM – 6:00 PM",
    "Saturday: 7:00 AM – 12:00 PM",
    "Sunday: Closed",
]

[contact]
phone = "+49 30 1234567"
email = "hallo@baeckerei-sonnenschein.de"
address = "Hauptstraße 1, 10115 Berlin"

[[sections]]
type = "hero"
cta_label = "Jetzt anrufen"
cta_href = "tel:+49301234567"

[[sections]]
type = "about"
body = """
Unsere Familie backt seit drei Generationen mit **regionalem Mehl**
und viel Zeit für den Teig.
"""

[[sections]]
type = "services"

[[sections]]
type = "hours"

[[sections]]
type = "contact"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_site::{parse_business, BusinessFormat, Layout};

    #[test]
    fn example_business_parses() {
        let business = parse_business(EXAMPLE_BUSINESS, BusinessFormat::Toml, "example.toml").unwrap();

        assert_eq!(business.slug(), "baeckerei-sonnenschein");
        assert_eq!(business.layout, Layout::Classic);
        assert_eq!(business.hours.len(), 7);
        assert_eq!(business.sections.len(), 5);
    }

    #[test]
    fn default_config_parses() {
        let config: crate::config::ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.sites.dir, "sites");
        assert!(config.build.mockup.viewport().is_some());
    }
}
