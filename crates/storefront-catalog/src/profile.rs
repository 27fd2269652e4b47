//! Per-industry display data.

use serde::Serialize;

use crate::industry::Industry;
use crate::palette::Palette;

/// An example service shown when a business lists none of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceTemplate {
    pub title: &'static str,
    pub description: &'static str,
}

/// Display data for one industry.
#[derive(Debug)]
pub struct IndustryProfile {
    pub industry: Industry,
    /// German display name
    pub name: &'static str,
    pub services: &'static [ServiceTemplate],
    /// primary, secondary, accent, background, text
    colors: [&'static str; 5],
}

impl IndustryProfile {
    /// Default palette for this industry.
    pub fn palette(&self) -> Palette {
        Palette::new(self.colors)
    }
}

const fn service(title: &'static str, description: &'static str) -> ServiceTemplate {
    ServiceTemplate { title, description }
}

static RESTAURANT: IndustryProfile = IndustryProfile {
    industry: Industry::Restaurant,
    name: "Restaurant",
    services: &[
        service("Mittagstisch", "Wechselnde Tagesgerichte aus frischen, regionalen Zutaten."),
        service("Abendkarte", "Saisonale Küche in entspannter Atmosphäre."),
        service("Catering", "Unsere Küche für Ihre Feier, Ihr Büro oder Ihr Event."),
    ],
    colors: ["#b91c1c", "#78350f", "#f59e0b", "#fffbf5", "#1f2937"],
};

static CAFE: IndustryProfile = IndustryProfile {
    industry: Industry::Cafe,
    name: "Café",
    services: &[
        service("Kaffeespezialitäten", "Frisch gerösteter Kaffee, von Espresso bis Filter."),
        service("Frühstück", "Den ganzen Vormittag ein reichhaltiges Frühstücksangebot."),
        service("Hausgemachter Kuchen", "Täglich frisch gebacken nach eigenen Rezepten."),
    ],
    colors: ["#6f4e37", "#a47551", "#e9c46a", "#fdf8f3", "#2b2118"],
};

static BAKERY: IndustryProfile = IndustryProfile {
    industry: Industry::Bakery,
    name: "Bäckerei",
    services: &[
        service("Brot & Brötchen", "Handwerklich gebacken mit langer Teigführung."),
        service("Feingebäck", "Croissants, Plunder und süße Teilchen aus eigener Backstube."),
        service("Torten auf Bestellung", "Individuelle Torten für jeden Anlass."),
    ],
    colors: ["#c2410c", "#92400e", "#fcd34d", "#fffaf0", "#292524"],
};

static HAIR_SALON: IndustryProfile = IndustryProfile {
    industry: Industry::HairSalon,
    name: "Friseur",
    services: &[
        service("Haarschnitt", "Waschen, Schneiden, Föhnen für Damen, Herren und Kinder."),
        service("Coloration", "Strähnen, Balayage und Farbauffrischung."),
        service("Styling", "Hochsteckfrisuren und Styling für besondere Anlässe."),
    ],
    colors: ["#111827", "#9d174d", "#f472b6", "#fafafa", "#111827"],
};

static BEAUTY_SALON: IndustryProfile = IndustryProfile {
    industry: Industry::BeautySalon,
    name: "Kosmetikstudio",
    services: &[
        service("Gesichtsbehandlung", "Reinigung, Pflege und Massage für jeden Hauttyp."),
        service("Maniküre & Pediküre", "Gepflegte Hände und Füße, auf Wunsch mit Lack."),
        service("Wellness-Massage", "Entspannung für Körper und Geist."),
    ],
    colors: ["#be185d", "#f9a8d4", "#c084fc", "#fff7fb", "#3b0a24"],
};

static FITNESS: IndustryProfile = IndustryProfile {
    industry: Industry::Fitness,
    name: "Fitnessstudio",
    services: &[
        service("Gerätetraining", "Moderne Geräte und individuelle Trainingspläne."),
        service("Kurse", "Von Yoga bis Functional Training, jeden Tag im Programm."),
        service("Personal Training", "Eins-zu-eins-Betreuung für Ihre Ziele."),
    ],
    colors: ["#16a34a", "#0f172a", "#facc15", "#f8fafc", "#0f172a"],
};

static MEDICAL: IndustryProfile = IndustryProfile {
    industry: Industry::Medical,
    name: "Arztpraxis",
    services: &[
        service("Vorsorge", "Check-ups und Vorsorgeuntersuchungen für alle Altersgruppen."),
        service("Akutsprechstunde", "Schnelle Hilfe bei akuten Beschwerden."),
        service("Impfungen", "Beratung und Durchführung aller empfohlenen Impfungen."),
    ],
    colors: ["#0369a1", "#0e7490", "#22d3ee", "#f8fcff", "#0f172a"],
};

static DENTAL: IndustryProfile = IndustryProfile {
    industry: Industry::Dental,
    name: "Zahnarztpraxis",
    services: &[
        service("Prophylaxe", "Professionelle Zahnreinigung und Vorsorge."),
        service("Zahnerhaltung", "Füllungen und Wurzelbehandlungen nach aktuellem Standard."),
        service("Ästhetik", "Bleaching, Veneers und unsichtbare Zahnkorrekturen."),
    ],
    colors: ["#0891b2", "#1e40af", "#5eead4", "#f7feff", "#0f172a"],
};

static LEGAL: IndustryProfile = IndustryProfile {
    industry: Industry::Legal,
    name: "Kanzlei",
    services: &[
        service("Beratung", "Fundierte rechtliche Einschätzung Ihres Anliegens."),
        service("Vertretung", "Engagierte Vertretung außergerichtlich und vor Gericht."),
        service("Vertragsgestaltung", "Rechtssichere Verträge für Privat und Gewerbe."),
    ],
    colors: ["#1e3a8a", "#334155", "#b45309", "#f8fafc", "#0f172a"],
};

static AUTO_REPAIR: IndustryProfile = IndustryProfile {
    industry: Industry::AutoRepair,
    name: "Autowerkstatt",
    services: &[
        service("Inspektion", "Wartung nach Herstellervorgaben, ohne Garantieverlust."),
        service("Reparatur", "Fehlerdiagnose und Instandsetzung aller Marken."),
        service("Reifenservice", "Wechsel, Einlagerung und Achsvermessung."),
    ],
    colors: ["#dc2626", "#1f2937", "#f97316", "#f9fafb", "#111827"],
};

static CONSTRUCTION: IndustryProfile = IndustryProfile {
    industry: Industry::Construction,
    name: "Handwerksbetrieb",
    services: &[
        service("Neubau", "Planung und Ausführung aus einer Hand."),
        service("Sanierung", "Modernisierung und Renovierung im Bestand."),
        service("Reparaturen", "Schnelle Hilfe bei Schäden rund ums Haus."),
    ],
    colors: ["#ca8a04", "#374151", "#ea580c", "#fafaf9", "#1c1917"],
};

static RETAIL: IndustryProfile = IndustryProfile {
    industry: Industry::Retail,
    name: "Fachgeschäft",
    services: &[
        service("Sortiment", "Ausgewählte Produkte mit persönlicher Beratung."),
        service("Bestellservice", "Was nicht vorrätig ist, bestellen wir für Sie."),
        service("Geschenkideen", "Liebevoll verpackt für jeden Anlass."),
    ],
    colors: ["#7c3aed", "#1e293b", "#f472b6", "#ffffff", "#111827"],
};

static HOTEL: IndustryProfile = IndustryProfile {
    industry: Industry::Hotel,
    name: "Hotel",
    services: &[
        service("Zimmer", "Komfortable Zimmer zum Ankommen und Wohlfühlen."),
        service("Frühstück", "Reichhaltiges Frühstücksbuffet jeden Morgen."),
        service("Tagungen", "Räume und Technik für Ihre Veranstaltung."),
    ],
    colors: ["#1e3a5f", "#9a7b4f", "#d4af37", "#fbfaf7", "#1f2933"],
};

static REAL_ESTATE: IndustryProfile = IndustryProfile {
    industry: Industry::RealEstate,
    name: "Immobilienmakler",
    services: &[
        service("Verkauf", "Marktgerechte Bewertung und Vermarktung Ihrer Immobilie."),
        service("Vermietung", "Vom Exposé bis zur Schlüsselübergabe."),
        service("Bewertung", "Kostenlose Ersteinschätzung Ihres Objekts."),
    ],
    colors: ["#0f766e", "#1e293b", "#eab308", "#f8fafc", "#0f172a"],
};

static PHOTOGRAPHY: IndustryProfile = IndustryProfile {
    industry: Industry::Photography,
    name: "Fotostudio",
    services: &[
        service("Porträts", "Natürliche Porträts im Studio oder draußen."),
        service("Hochzeiten", "Ihr Tag in Bildern, vom Getting Ready bis zur Party."),
        service("Business", "Bewerbungsfotos, Teamfotos und Produktaufnahmen."),
    ],
    colors: ["#18181b", "#52525b", "#f43f5e", "#fafafa", "#18181b"],
};

static CLEANING: IndustryProfile = IndustryProfile {
    industry: Industry::Cleaning,
    name: "Reinigungsservice",
    services: &[
        service("Unterhaltsreinigung", "Regelmäßige Reinigung für Büro und Praxis."),
        service("Grundreinigung", "Gründlich bis in jede Ecke, auch nach Renovierung."),
        service("Fensterreinigung", "Streifenfreie Fenster, Rahmen inklusive."),
    ],
    colors: ["#0284c7", "#0d9488", "#a3e635", "#f7fdff", "#0f172a"],
};

static CONSULTING: IndustryProfile = IndustryProfile {
    industry: Industry::Consulting,
    name: "Beratung",
    services: &[
        service("Analyse", "Wir verstehen Ihre Ausgangslage, bevor wir empfehlen."),
        service("Strategie", "Klare Ziele und ein umsetzbarer Plan."),
        service("Begleitung", "Unterstützung bei der Umsetzung bis zum Ergebnis."),
    ],
    colors: ["#2563eb", "#0f172a", "#14b8a6", "#ffffff", "#0f172a"],
};

static GENERAL: IndustryProfile = IndustryProfile {
    industry: Industry::General,
    name: "Unternehmen",
    services: &[
        service("Beratung", "Persönliche Beratung rund um Ihr Anliegen."),
        service("Service", "Zuverlässig, schnell und unkompliziert."),
        service("Qualität", "Sorgfältige Arbeit, auf die Sie sich verlassen können."),
    ],
    colors: ["#2563eb", "#475569", "#f59e0b", "#ffffff", "#111827"],
};

pub(crate) fn lookup(industry: Industry) -> &'static IndustryProfile {
    match industry {
        Industry::Restaurant => &RESTAURANT,
        Industry::Cafe => &CAFE,
        Industry::Bakery => &BAKERY,
        Industry::HairSalon => &HAIR_SALON,
        Industry::BeautySalon => &BEAUTY_SALON,
        Industry::Fitness => &FITNESS,
        Industry::Medical => &MEDICAL,
        Industry::Dental => &DENTAL,
        Industry::Legal => &LEGAL,
        Industry::AutoRepair => &AUTO_REPAIR,
        Industry::Construction => &CONSTRUCTION,
        Industry::Retail => &RETAIL,
        Industry::Hotel => &HOTEL,
        Industry::RealEstate => &REAL_ESTATE,
        Industry::Photography => &PHOTOGRAPHY,
        Industry::Cleaning => &CLEANING,
        Industry::Consulting => &CONSULTING,
        Industry::General => &GENERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::normalize_hex;

    #[test]
    fn every_industry_has_a_matching_profile() {
        for industry in Industry::ALL {
            let profile = industry.profile();
            assert_eq!(profile.industry, industry);
            assert!(!profile.name.is_empty());
            assert!(!profile.services.is_empty());
        }
    }

    #[test]
    fn default_palettes_are_valid_hex() {
        for industry in Industry::ALL {
            let palette = industry.profile().palette();
            for color in [
                &palette.primary,
                &palette.secondary,
                &palette.accent,
                &palette.background,
                &palette.text,
            ] {
                assert_eq!(normalize_hex("color", color).unwrap(), *color);
            }
        }
    }
}
