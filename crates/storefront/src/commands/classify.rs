//! Category classification command.

use anyhow::Result;
use serde::Serialize;
use storefront_catalog::{classify, Industry, Palette, ServiceTemplate};
use storefront_i18n::translate_category;

#[derive(Debug, Serialize)]
struct Classification {
    category: String,
    label: String,
    industry: Industry,
    industry_name: &'static str,
    palette: Palette,
    services: &'static [ServiceTemplate],
}

fn classification(category: &str) -> Classification {
    let industry = classify(category);
    let profile = industry.profile();

    Classification {
        category: category.to_string(),
        label: translate_category(category),
        industry,
        industry_name: profile.name,
        palette: profile.palette(),
        services: profile.services,
    }
}

/// Run the classify command.
pub fn run(category: &str, json: bool) -> Result<()> {
    let result = classification(category);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{} → {} ({})", result.category, result.label, result.industry_name);
    println!("industry: {}", result.industry);
    println!(
        "palette:  {} {} {} {} {}",
        result.palette.primary,
        result.palette.secondary,
        result.palette.accent,
        result.palette.background,
        result.palette.text
    );
    for service in result.services {
        println!("  - {}: {}", service.title, service.description);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_with_german_label() {
        let result = classification("hair_care");

        assert_eq!(result.industry, Industry::HairSalon);
        assert!(!result.services.is_empty());
        assert_eq!(result.palette, Industry::HairSalon.profile().palette());
    }

    #[test]
    fn serializes_industry_id() {
        let json = serde_json::to_value(classification("dentist")).unwrap();

        assert_eq!(json["industry"], "dental");
        assert_eq!(json["category"], "dentist");
    }
}
