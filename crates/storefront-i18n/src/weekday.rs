//! Weekday names.

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// English name as delivered by upstream hours providers.
    pub fn english(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// German display name.
    pub fn german(self) -> &'static str {
        match self {
            Self::Monday => "Montag",
            Self::Tuesday => "Dienstag",
            Self::Wednesday => "Mittwoch",
            Self::Thursday => "Donnerstag",
            Self::Friday => "Freitag",
            Self::Saturday => "Samstag",
            Self::Sunday => "Sonntag",
        }
    }

    /// Look up an English day name (case-insensitive).
    pub fn from_english(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.english().eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_every_day() {
        let german: Vec<_> = Weekday::ALL.iter().map(|d| d.german()).collect();
        assert_eq!(
            german,
            [
                "Montag",
                "Dienstag",
                "Mittwoch",
                "Donnerstag",
                "Freitag",
                "Samstag",
                "Sonntag"
            ]
        );
    }

    #[test]
    fn looks_up_english_names_case_insensitively() {
        assert_eq!(Weekday::from_english("monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_english(" SUNDAY "), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_english("Sonntag"), None);
    }
}
