//! Clock time tokens in 12-hour and 24-hour notation.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Suffix written after every displayed time.
pub const UHR: &str = "Uhr";

/// AM/PM marker of a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parse an `AM`/`PM` suffix (case-insensitive).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.trim().to_ascii_lowercase().as_str() {
            "am" => Some(Self::Am),
            "pm" => Some(Self::Pm),
            _ => None,
        }
    }
}

/// A clock time as written in an hours line.
///
/// `meridiem` is `None` when the source was already in 24-hour notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Option<Meridiem>,
}

static TWELVE_HOUR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]{1,2}):([0-9]{2})\s*([ap]m)\b").expect("Invalid 12-hour time regex")
});

static BARE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{1,2}):([0-9]{2})\b").expect("Invalid 24-hour time regex")
});

impl ClockTime {
    pub fn new(hour: u8, minute: u8, meridiem: Option<Meridiem>) -> Self {
        Self {
            hour,
            minute,
            meridiem,
        }
    }

    /// Build a time from regex capture text. Returns `None` if the digits do not fit.
    pub(crate) fn from_parts(hour: &str, minute: &str, meridiem: Option<&str>) -> Option<Self> {
        Some(Self {
            hour: hour.parse().ok()?,
            minute: minute.parse().ok()?,
            meridiem: meridiem.and_then(Meridiem::from_suffix),
        })
    }

    /// Find the first time in `text`, preferring a 12-hour time over a bare one.
    pub fn find(text: &str) -> Option<Self> {
        if let Some(caps) = TWELVE_HOUR_RE.captures(text) {
            return Self::from_captures(&caps, Some(3));
        }
        BARE_TIME_RE
            .captures(text)
            .and_then(|caps| Self::from_captures(&caps, None))
    }

    fn from_captures(caps: &Captures<'_>, meridiem_group: Option<usize>) -> Option<Self> {
        Self::from_parts(
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            meridiem_group.and_then(|i| caps.get(i)).map(|m| m.as_str()),
        )
    }

    /// Adopt `meridiem` if this time carries none of its own.
    pub fn or_meridiem(self, meridiem: Option<Meridiem>) -> Self {
        Self {
            meridiem: self.meridiem.or(meridiem),
            ..self
        }
    }

    /// Convert to 24-hour notation.
    ///
    /// Hours above 12 are already 24-hour values and keep their hour even
    /// when a stray AM/PM marker is attached.
    pub fn to_24h(self) -> Self {
        let hour = match self.meridiem {
            Some(Meridiem::Am) if self.hour == 12 => 0,
            Some(Meridiem::Pm) if self.hour < 12 => self.hour + 12,
            _ => self.hour,
        };
        Self {
            hour,
            minute: self.minute,
            meridiem: None,
        }
    }
}

/// Renders the 24-hour `HH:MM` form.
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.to_24h();
        write!(f, "{:02}:{:02}", t.hour, t.minute)
    }
}

/// Convert a single time token to `HH:MM Uhr`.
///
/// Strings that already contain `Uhr` are returned unchanged, as is anything
/// without a recognizable time.
pub fn convert_time_token(token: &str) -> String {
    if token.contains(UHR) {
        return token.to_string();
    }

    match ClockTime::find(token) {
        Some(time) => format!("{time} {UHR}"),
        None => token.to_string(),
    }
}
