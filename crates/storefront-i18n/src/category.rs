//! Business category labels.

/// German labels for known place-type identifiers.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("accounting", "Steuerberatung"),
    ("bakery", "Bäckerei"),
    ("bar", "Bar"),
    ("beauty_salon", "Kosmetikstudio"),
    ("bicycle_store", "Fahrradgeschäft"),
    ("book_store", "Buchhandlung"),
    ("cafe", "Café"),
    ("car_dealer", "Autohaus"),
    ("car_repair", "Autowerkstatt"),
    ("car_wash", "Autowaschanlage"),
    ("cleaning_service", "Reinigungsservice"),
    ("clothing_store", "Bekleidungsgeschäft"),
    ("dentist", "Zahnarzt"),
    ("doctor", "Arztpraxis"),
    ("electrician", "Elektriker"),
    ("florist", "Blumenladen"),
    ("furniture_store", "Möbelhaus"),
    ("general_contractor", "Bauunternehmen"),
    ("gym", "Fitnessstudio"),
    ("hair_care", "Friseur"),
    ("hair_salon", "Friseur"),
    ("hardware_store", "Baumarkt"),
    ("hotel", "Hotel"),
    ("insurance_agency", "Versicherungsagentur"),
    ("jewelry_store", "Juwelier"),
    ("laundry", "Wäscherei"),
    ("lawyer", "Rechtsanwalt"),
    ("lodging", "Unterkunft"),
    ("meal_delivery", "Lieferservice"),
    ("meal_takeaway", "Imbiss"),
    ("painter", "Malerbetrieb"),
    ("pharmacy", "Apotheke"),
    ("photographer", "Fotograf"),
    ("physiotherapist", "Physiotherapie"),
    ("plumber", "Sanitärinstallateur"),
    ("real_estate_agency", "Immobilienmakler"),
    ("restaurant", "Restaurant"),
    ("roofing_contractor", "Dachdecker"),
    ("shoe_store", "Schuhgeschäft"),
    ("spa", "Spa"),
    ("store", "Geschäft"),
    ("supermarket", "Supermarkt"),
    ("travel_agency", "Reisebüro"),
    ("veterinary_care", "Tierarzt"),
];

/// Provider markers that say nothing about the business.
const GENERIC_CATEGORIES: &[&str] = &["point_of_interest", "establishment"];

/// Normalize a category to its identifier form (`Hair Care` -> `hair_care`).
pub fn normalize_category(category: &str) -> String {
    category
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Translate a category to its German label.
///
/// Unknown categories are title-cased word by word.
pub fn translate_category(category: &str) -> String {
    let key = normalize_category(category);

    if let Some((_, label)) = CATEGORY_LABELS.iter().find(|(id, _)| *id == key) {
        return label.to_string();
    }

    category
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Translate a list of categories, skipping generic markers and duplicate labels.
pub fn translate_categories<I, S>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut labels: Vec<String> = Vec::new();

    for category in categories {
        let category = category.as_ref();
        if GENERIC_CATEGORIES.contains(&normalize_category(category).as_str()) {
            continue;
        }

        let label = translate_category(category);
        if !label.is_empty() && !labels.contains(&label) {
            labels.push(label);
        }
    }

    labels
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_categories() {
        assert_eq!(translate_category("restaurant"), "Restaurant");
        assert_eq!(translate_category("hair_care"), "Friseur");
        assert_eq!(translate_category("Car Repair"), "Autowerkstatt");
        assert_eq!(translate_category(" DENTIST "), "Zahnarzt");
    }

    #[test]
    fn title_cases_unknown_categories() {
        assert_eq!(translate_category("pet_store"), "Pet Store");
        assert_eq!(translate_category("BBQ grill"), "BBQ Grill");
        assert_eq!(translate_category(""), "");
    }

    #[test]
    fn drops_generic_markers_and_duplicates() {
        let labels = translate_categories([
            "hair_care",
            "point_of_interest",
            "hair_salon",
            "beauty_salon",
            "establishment",
        ]);

        assert_eq!(labels, vec!["Friseur", "Kosmetikstudio"]);
    }

    #[test]
    fn normalizes_identifiers() {
        assert_eq!(normalize_category("  Real-Estate  Agency "), "real_estate_agency");
    }
}
