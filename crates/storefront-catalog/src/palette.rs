//! Theme color palettes.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::CatalogError;

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Invalid hex color regex")
});

/// The five colors a generated stylesheet is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

/// A partial palette supplied by a business file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScheme {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl Palette {
    pub fn new(colors: [&str; 5]) -> Self {
        let [primary, secondary, accent, background, text] = colors.map(str::to_string);
        Self {
            primary,
            secondary,
            accent,
            background,
            text,
        }
    }

    /// Apply the colors set in `scheme`, validating each one.
    pub fn with_overrides(&self, scheme: &ColorScheme) -> Result<Palette, CatalogError> {
        let pick = |field: &'static str, custom: &Option<String>, base: &str| match custom {
            Some(value) => normalize_hex(field, value),
            None => Ok(base.to_string()),
        };

        Ok(Palette {
            primary: pick("primary", &scheme.primary, &self.primary)?,
            secondary: pick("secondary", &scheme.secondary, &self.secondary)?,
            accent: pick("accent", &scheme.accent, &self.accent)?,
            background: pick("background", &scheme.background, &self.background)?,
            text: pick("text", &scheme.text, &self.text)?,
        })
    }

    /// Readable text color to put on top of the primary color.
    pub fn on_primary(&self) -> &'static str {
        contrast_text(&self.primary)
    }
}

/// Validate a hex color and expand it to lowercase `#rrggbb`.
pub fn normalize_hex(field: &'static str, value: &str) -> Result<String, CatalogError> {
    let value = value.trim();
    if !HEX_COLOR_RE.is_match(value) {
        return Err(CatalogError::InvalidColor {
            field,
            value: value.to_string(),
        });
    }

    let digits = &value[1..];
    let expanded = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        digits.to_string()
    };

    Ok(format!("#{}", expanded.to_lowercase()))
}

/// Pick white or near-black text for a background color.
///
/// Colors that fail to parse are treated as light.
pub fn contrast_text(background: &str) -> &'static str {
    let Some((r, g, b)) = parse_rgb(background) else {
        return DARK_TEXT;
    };

    let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luminance < 150.0 {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

const LIGHT_TEXT: &str = "#ffffff";
const DARK_TEXT: &str = "#111827";

fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = normalize_hex("color", color).ok()?;
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(1)?, channel(3)?, channel(5)?))
}
