//! Business description files.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use storefront_catalog::{classify, ColorScheme, Industry};

use crate::cookie::CookieConsent;

/// A business and the page to generate for it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Business {
    /// Business name (required)
    pub name: String,

    /// Output directory name; derived from the name when absent
    #[serde(default)]
    pub slug: Option<String>,

    /// Category as delivered by the data source (`hair_care`, `Bäckerei`, ...)
    #[serde(default)]
    pub category: String,

    /// Explicit industry id, overriding classification of `category`
    #[serde(default)]
    pub industry: Option<String>,

    /// Short claim shown under the name
    #[serde(default)]
    pub tagline: Option<String>,

    /// Page layout
    #[serde(default)]
    pub layout: Layout,

    /// Partial palette overriding the industry colors
    #[serde(default)]
    pub colors: Option<ColorScheme>,

    /// Page sections in display order; empty means the default order
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Opening hours, one line per day, as delivered by the data source
    #[serde(default)]
    pub hours: Vec<String>,

    #[serde(default)]
    pub contact: Option<Contact>,

    #[serde(default)]
    pub cookie_consent: CookieConsent,
}

/// Page presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Classic,
    Elegant,
    Bold,
    Dynamic,
    Clean,
}

impl Layout {
    pub const ALL: [Layout; 5] = [
        Self::Classic,
        Self::Elegant,
        Self::Bold,
        Self::Dynamic,
        Self::Clean,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Elegant => "elegant",
            Self::Bold => "bold",
            Self::Dynamic => "dynamic",
            Self::Clean => "clean",
        }
    }

    /// Template rendering this layout.
    pub fn template(self) -> &'static str {
        match self {
            Self::Classic => "classic.html",
            Self::Elegant => "elegant.html",
            Self::Bold => "bold.html",
            Self::Dynamic => "dynamic.html",
            Self::Clean => "clean.html",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A page section, tagged by `type` in business files.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Hero {
        #[serde(default)]
        headline: Option<String>,
        #[serde(default)]
        subheadline: Option<String>,
        #[serde(default)]
        cta_label: Option<String>,
        #[serde(default)]
        cta_href: Option<String>,
    },
    About {
        #[serde(default)]
        title: Option<String>,
        /// Markdown
        body: String,
    },
    Services {
        #[serde(default)]
        title: Option<String>,
        /// Empty means the industry's example services
        #[serde(default)]
        items: Vec<ServiceItem>,
    },
    Contact {
        #[serde(default)]
        title: Option<String>,
    },
    Hours {
        #[serde(default)]
        title: Option<String>,
    },
}

impl Section {
    /// Value of the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hero { .. } => "hero",
            Self::About { .. } => "about",
            Self::Services { .. } => "services",
            Self::Contact { .. } => "contact",
            Self::Hours { .. } => "hours",
        }
    }
}

/// A service offered by the business.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<String>,
}

/// Contact details.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.address.is_none()
    }
}

impl Business {
    /// Output directory name.
    pub fn slug(&self) -> String {
        match &self.slug {
            Some(slug) if !slug.trim().is_empty() => slugify(slug),
            _ => slugify(&self.name),
        }
    }

    /// Industry from the explicit override, or classified from the category.
    ///
    /// An override that names no known industry is logged and ignored.
    pub fn resolve_industry(&self) -> Industry {
        if let Some(id) = &self.industry {
            match id.parse() {
                Ok(industry) => return industry,
                Err(e) => {
                    tracing::warn!("{} ({}), classifying category instead", e, self.name);
                }
            }
        }
        classify(&self.category)
    }

    /// Sections to render: the declared ones, or a default order built from
    /// the data that is present.
    pub fn effective_sections(&self) -> Vec<Section> {
        if !self.sections.is_empty() {
            return self.sections.clone();
        }

        let mut sections = vec![Section::Hero {
            headline: None,
            subheadline: None,
            cta_label: None,
            cta_href: None,
        }];

        if let Some(tagline) = &self.tagline {
            sections.push(Section::About {
                title: None,
                body: tagline.clone(),
            });
        }

        sections.push(Section::Services {
            title: None,
            items: Vec::new(),
        });

        if !self.hours.is_empty() {
            sections.push(Section::Hours { title: None });
        }

        if self.contact.as_ref().is_some_and(|c| !c.is_empty()) {
            sections.push(Section::Contact { title: None });
        }

        sections
    }
}

/// Convert a name to a URL-safe slug, transliterating umlauts and accents.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.trim().to_lowercase().chars() {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            'à' | 'á' | 'â' => out.push('a'),
            'è' | 'é' | 'ê' => out.push('e'),
            'ì' | 'í' | 'î' => out.push('i'),
            'ò' | 'ó' | 'ô' => out.push('o'),
            'ù' | 'ú' | 'û' => out.push('u'),
            'ç' => out.push('c'),
            'ñ' => out.push('n'),
            c if c.is_ascii_alphanumeric() => out.push(c),
            _ => out.push('-'),
        }
    }

    out.split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Serialization format of a business file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessFormat {
    Toml,
    Yaml,
    Json,
}

impl BusinessFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Errors that can occur when loading a business file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid business file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Unsupported business file: {0} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Business in {0} has an empty name")]
    MissingName(String),
}

/// Parse a business description.
///
/// `origin` names the source in error messages.
pub fn parse_business(
    source: &str,
    format: BusinessFormat,
    origin: &str,
) -> Result<Business, LoadError> {
    let parse_error = |message: String| LoadError::Parse {
        path: origin.to_string(),
        message,
    };

    let business: Business = match format {
        BusinessFormat::Toml => toml::from_str(source).map_err(|e| parse_error(e.to_string()))?,
        BusinessFormat::Yaml => {
            serde_yaml::from_str(source).map_err(|e| parse_error(e.to_string()))?
        }
        BusinessFormat::Json => {
            serde_json::from_str(source).map_err(|e| parse_error(e.to_string()))?
        }
    };

    if business.name.trim().is_empty() {
        return Err(LoadError::MissingName(origin.to_string()));
    }

    Ok(business)
}

/// Load a business description from disk.
pub fn load_business(path: &Path) -> Result<Business, LoadError> {
    let origin = path.display().to_string();
    let format =
        BusinessFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(origin.clone()))?;

    let source = fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: origin.clone(),
        message: e.to_string(),
    })?;

    parse_business(&source, format, &origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TOML_BUSINESS: &str = r##"
name = "Salon Schnittig"
category = "hair_care"
tagline = "Ihr Friseur in der Altstadt"
layout = "elegant"
hours = ["Monday: 9:00 AM – 6:00 PM", "Sunday: Closed"]

[colors]
primary = "#222222"

[contact]
phone = "+49 30 123 456"
email = "hallo@schnittig.de"

[[sections]]
type = "hero"
cta_label = "Termin buchen"

[[sections]]
type = "services"

[[sections.items]]
title = "Herrenschnitt"
price = "25 €"

[[sections]]
type = "hours"
"##;

    #[test]
    fn parses_toml_business() {
        let business = parse_business(TOML_BUSINESS, BusinessFormat::Toml, "test").unwrap();

        assert_eq!(business.name, "Salon Schnittig");
        assert_eq!(business.layout, Layout::Elegant);
        assert_eq!(business.hours.len(), 2);
        assert_eq!(business.sections.len(), 3);
        assert_eq!(business.sections[0].kind(), "hero");
        assert!(matches!(
            &business.sections[1],
            Section::Services { items, .. } if items[0].title == "Herrenschnitt"
        ));
        assert_eq!(
            business.colors.as_ref().and_then(|c| c.primary.as_deref()),
            Some("#222222")
        );
        assert!(business.cookie_consent.enabled);
    }

    #[test]
    fn parses_yaml_and_json() {
        let yaml = "name: Café Mokka\ncategory: cafe\nsections:\n  - type: about\n    body: Seit 1998.\n";
        let business = parse_business(yaml, BusinessFormat::Yaml, "test.yaml").unwrap();
        assert_eq!(business.layout, Layout::Classic);
        assert!(matches!(&business.sections[0], Section::About { body, .. } if body == "Seit 1998."));

        let json = r#"{"name": "Kanzlei Recht", "category": "lawyer", "layout": "clean"}"#;
        let business = parse_business(json, BusinessFormat::Json, "test.json").unwrap();
        assert_eq!(business.layout, Layout::Clean);
        assert_eq!(business.resolve_industry(), Industry::Legal);
    }

    #[test]
    fn rejects_empty_name_and_unknown_layout() {
        let err = parse_business("name = \"  \"", BusinessFormat::Toml, "blank.toml").unwrap_err();
        assert!(matches!(err, LoadError::MissingName(_)));

        let err = parse_business(
            "name = \"X\"\nlayout = \"fancy\"",
            BusinessFormat::Toml,
            "fancy.toml",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn industry_override_wins_unless_unknown() {
        let mut business = parse_business(
            "name = \"Studio\"\ncategory = \"photographer\"",
            BusinessFormat::Toml,
            "t",
        )
        .unwrap();
        assert_eq!(business.resolve_industry(), Industry::Photography);

        business.industry = Some("beauty_salon".to_string());
        assert_eq!(business.resolve_industry(), Industry::BeautySalon);

        business.industry = Some("moon_base".to_string());
        assert_eq!(business.resolve_industry(), Industry::Photography);
    }

    #[test]
    fn builds_default_sections_from_available_data() {
        let mut business =
            parse_business("name = \"Minimal\"", BusinessFormat::Toml, "t").unwrap();
        let kinds: Vec<_> = business.effective_sections().iter().map(Section::kind).collect();
        assert_eq!(kinds, ["hero", "services"]);

        business.tagline = Some("Claim".to_string());
        business.hours = vec!["Monday: Closed".to_string()];
        business.contact = Some(Contact {
            email: Some("a@b.de".to_string()),
            ..Default::default()
        });
        let kinds: Vec<_> = business.effective_sections().iter().map(Section::kind).collect();
        assert_eq!(kinds, ["hero", "about", "services", "hours", "contact"]);
    }

    #[test]
    fn slugifies_names() {
        assert_eq!(slugify("Bäckerei Müller & Söhne"), "baeckerei-mueller-soehne");
        assert_eq!(slugify("  Straße 42 "), "strasse-42");
        assert_eq!(slugify("Café Mokka"), "cafe-mokka");
    }

    #[test]
    fn explicit_slug_is_normalized() {
        let mut business = parse_business("name = \"A B\"", BusinessFormat::Toml, "t").unwrap();
        assert_eq!(business.slug(), "a-b");
        business.slug = Some("Mein Laden".to_string());
        assert_eq!(business.slug(), "mein-laden");
    }

    #[test]
    fn loads_from_disk_by_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("salon.toml");
        fs::write(&path, TOML_BUSINESS).unwrap();

        let business = load_business(&path).unwrap();
        assert_eq!(business.slug(), "salon-schnittig");

        let txt = temp.path().join("salon.txt");
        fs::write(&txt, TOML_BUSINESS).unwrap();
        assert!(matches!(
            load_business(&txt),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }
}
