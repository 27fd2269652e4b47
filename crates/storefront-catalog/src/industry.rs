//! Industry classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use storefront_i18n::normalize_category;

use crate::profile::{self, IndustryProfile};
use crate::CatalogError;

/// Industries with their own services and palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Restaurant,
    Cafe,
    Bakery,
    HairSalon,
    BeautySalon,
    Fitness,
    Medical,
    Dental,
    Legal,
    AutoRepair,
    Construction,
    Retail,
    Hotel,
    RealEstate,
    Photography,
    Cleaning,
    Consulting,
    #[default]
    General,
}

/// Keyword table for [`classify`]. Checked in order; the first hit wins, so
/// narrower industries come before the ones whose keywords would swallow them
/// (`zahnarzt` before `arzt`, `barber` before `salon`).
///
/// Keywords are matched against whole words, see [`keyword_matches`].
const KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Dental,
        &["dentist", "dental", "zahnarzt", "zahn", "kieferorthop", "orthodont"],
    ),
    (
        Industry::Medical,
        &[
            "doctor", "physio", "cardio", "clinic", "klinik", "arzt", "praxis", "pharmacy",
            "apotheke", "health", "therap", "veterinar",
        ],
    ),
    (
        Industry::HairSalon,
        &["hair", "friseur", "barber", "coiffeur"],
    ),
    (
        Industry::BeautySalon,
        &["beauty", "kosmetik", "nail", "spa", "massage", "salon"],
    ),
    (
        Industry::Bakery,
        &["bakery", "bäckerei", "baeckerei", "konditorei", "patisserie"],
    ),
    (Industry::Cafe, &["cafe", "café", "coffee", "kaffee"]),
    (
        Industry::Hotel,
        &["hotel", "lodging", "hostel", "pension", "unterkunft", "guest_house"],
    ),
    (
        Industry::Restaurant,
        &[
            "restaurant", "meal", "food", "pizza", "bistro", "gastro", "imbiss", "bar", "grill",
            "sushi", "kitchen", "küche",
        ],
    ),
    (
        Industry::Fitness,
        &["gym", "fitness", "yoga", "pilates", "sport", "crossfit"],
    ),
    (
        Industry::Legal,
        &["lawyer", "attorney", "legal", "anwalt", "kanzlei", "notar"],
    ),
    (
        Industry::AutoRepair,
        &["car", "auto", "kfz", "werkstatt", "tire", "reifen", "mechanic"],
    ),
    (
        Industry::RealEstate,
        &["real_estate", "immobilien", "makler", "property"],
    ),
    (Industry::Photography, &["photo", "foto"]),
    (
        Industry::Cleaning,
        &["cleaning", "reinigung", "laundry", "wäscherei", "janitor"],
    ),
    (
        Industry::Construction,
        &[
            "contractor", "construction", "roofing", "bauunternehmen", "dachdecker", "plumber",
            "electrician", "painter", "maler", "elektriker", "sanitär", "handwerk", "schreiner",
            "tischler",
        ],
    ),
    (
        Industry::Consulting,
        &[
            "consult", "beratung", "accounting", "steuer", "insurance", "versicherung",
            "agency", "agentur",
        ],
    ),
    (
        Industry::Retail,
        &[
            "store", "shop", "laden", "geschäft", "boutique", "florist", "jewelry", "supermarket",
            "handel",
        ],
    ),
];

/// Shortest keyword that may match the start or end of a longer word.
const MIN_AFFIX_LEN: usize = 4;

/// Classify a free-form category (`hair_care`, `Zahnarztpraxis`, `Coffee Shop`).
///
/// Falls back to [`Industry::General`] when no keyword matches.
pub fn classify(category: &str) -> Industry {
    let normalized = normalize_category(category);
    if normalized.is_empty() {
        return Industry::General;
    }
    let words: Vec<&str> = normalized.split('_').collect();

    KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| keyword_matches(&words, k)))
        .map(|(industry, _)| *industry)
        .unwrap_or_default()
}

/// Whether `keyword` matches one of the category's words.
///
/// Short keywords (`spa`, `bar`, `car`) must equal a word. Longer ones may
/// also begin a word (`friseursalon`) or end a German compound (`hausarzt`).
/// Keywords containing `_` must equal consecutive words.
fn keyword_matches(words: &[&str], keyword: &str) -> bool {
    if keyword.contains('_') {
        let parts: Vec<&str> = keyword.split('_').collect();
        return words.windows(parts.len()).any(|window| window == parts.as_slice());
    }

    words.iter().any(|word| {
        *word == keyword
            || (keyword.chars().count() >= MIN_AFFIX_LEN
                && (word.starts_with(keyword) || word.ends_with(keyword)))
    })
}

impl Industry {
    /// All industries in declaration order.
    pub const ALL: [Industry; 18] = [
        Self::Restaurant,
        Self::Cafe,
        Self::Bakery,
        Self::HairSalon,
        Self::BeautySalon,
        Self::Fitness,
        Self::Medical,
        Self::Dental,
        Self::Legal,
        Self::AutoRepair,
        Self::Construction,
        Self::Retail,
        Self::Hotel,
        Self::RealEstate,
        Self::Photography,
        Self::Cleaning,
        Self::Consulting,
        Self::General,
    ];

    /// Identifier used in business files (`hair_salon`).
    pub fn id(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Bakery => "bakery",
            Self::HairSalon => "hair_salon",
            Self::BeautySalon => "beauty_salon",
            Self::Fitness => "fitness",
            Self::Medical => "medical",
            Self::Dental => "dental",
            Self::Legal => "legal",
            Self::AutoRepair => "auto_repair",
            Self::Construction => "construction",
            Self::Retail => "retail",
            Self::Hotel => "hotel",
            Self::RealEstate => "real_estate",
            Self::Photography => "photography",
            Self::Cleaning => "cleaning",
            Self::Consulting => "consulting",
            Self::General => "general",
        }
    }

    /// Display name, services and palette for this industry.
    pub fn profile(self) -> &'static IndustryProfile {
        profile::lookup(self)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Industry {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = normalize_category(s);
        Self::ALL
            .into_iter()
            .find(|industry| industry.id() == id)
            .ok_or_else(|| CatalogError::UnknownIndustry(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_provider_identifiers() {
        assert_eq!(classify("restaurant"), Industry::Restaurant);
        assert_eq!(classify("hair_care"), Industry::HairSalon);
        assert_eq!(classify("beauty_salon"), Industry::BeautySalon);
        assert_eq!(classify("car_repair"), Industry::AutoRepair);
        assert_eq!(classify("real_estate_agency"), Industry::RealEstate);
        assert_eq!(classify("insurance_agency"), Industry::Consulting);
        assert_eq!(classify("clothing_store"), Industry::Retail);
    }

    #[test]
    fn classifies_german_and_free_text() {
        assert_eq!(classify("Zahnarztpraxis"), Industry::Dental);
        assert_eq!(classify("Hausarzt"), Industry::Medical);
        assert_eq!(classify("Coffee Shop"), Industry::Cafe);
        assert_eq!(classify("Bäckerei & Konditorei"), Industry::Bakery);
        assert_eq!(classify("Kfz-Werkstatt"), Industry::AutoRepair);
    }

    #[test]
    fn narrow_keywords_win() {
        assert_eq!(classify("Barber Shop"), Industry::HairSalon);
        assert_eq!(classify("Cardiology"), Industry::Medical);
        assert_eq!(classify("car"), Industry::AutoRepair);
    }

    #[test]
    fn matches_whole_words_only() {
        assert_eq!(classify("spanish_restaurant"), Industry::Restaurant);
        assert_eq!(classify("transportation_service"), Industry::General);
        assert_eq!(classify("retirement_home"), Industry::General);
        assert_eq!(classify("Day Spa"), Industry::BeautySalon);
        assert_eq!(classify("car_wash"), Industry::AutoRepair);
        assert_eq!(classify("Tierarzt"), Industry::Medical);
        assert_eq!(classify("Friseursalon"), Industry::HairSalon);
        assert_eq!(classify("guest_house"), Industry::Hotel);
    }

    #[test]
    fn falls_back_to_general() {
        assert_eq!(classify(""), Industry::General);
        assert_eq!(classify("point_of_interest"), Industry::General);
        assert_eq!(classify("Zirkus"), Industry::General);
    }

    #[test]
    fn parses_identifiers() {
        assert_eq!("hair_salon".parse::<Industry>().unwrap(), Industry::HairSalon);
        assert_eq!("Real Estate".parse::<Industry>().unwrap(), Industry::RealEstate);
        assert!(matches!(
            "spaceport".parse::<Industry>(),
            Err(CatalogError::UnknownIndustry(_))
        ));
    }

    #[test]
    fn ids_round_trip_through_serde() {
        for industry in Industry::ALL {
            let json = serde_json::to_string(&industry).unwrap();
            assert_eq!(json, format!("\"{}\"", industry.id()));
            let back: Industry = serde_json::from_str(&json).unwrap();
            assert_eq!(back, industry);
        }
    }
}
