//! Opening-hours line conversion.
//!
//! Lines arrive from an upstream provider in English with 12-hour times
//! (`"Monday: 9:00 AM – 6:00 PM"`) and leave in German with 24-hour times
//! (`"Montag: 09:00 – 18:00 Uhr"`). A line is tokenized once and every token
//! is rendered on its own, so already-converted text is never re-matched.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::clock::{ClockTime, UHR};
use crate::weekday::Weekday;

/// German replacement for a closed day.
pub const CLOSED_DE: &str = "Geschlossen";

/// German replacement for a day open around the clock.
pub const OPEN_24_DE: &str = "24 Stunden geöffnet";

/// A lexical unit of an opening-hours line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied through unchanged.
    Text(&'a str),
    /// An English weekday name.
    Weekday(Weekday),
    /// The `Closed` marker.
    Closed,
    /// The `Open 24 hours` marker.
    Open24,
    /// Two times joined by a dash. `separator` keeps the original glyph and spacing.
    Range {
        start: ClockTime,
        separator: &'a str,
        end: ClockTime,
    },
    /// A time outside any range.
    Time(ClockTime),
}

// Alternatives are tried left to right at each position, so a range wins
// over the standalone time at its start. A time must end at a word boundary
// or an AM/PM marker (`10:00h` is not a time). A trailing `Uhr` is swallowed
// and re-emitted by the renderer.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)",
        r"\b(?P<day>monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
        r"|\b(?P<open24>open\s+24\s+hours)\b",
        r"|\b(?P<closed>closed)\b",
        r"|\b(?P<start_h>[0-9]{1,2}):(?P<start_m>[0-9]{2})(?:\s*(?P<start_p>[ap]m)\b|\b)",
        r"(?P<sep>\s*[-–—]\s*)",
        r"\b(?P<end_h>[0-9]{1,2}):(?P<end_m>[0-9]{2})(?:\s*(?P<end_p>[ap]m)\b|\b)",
        r"(?:\s*uhr\b)?",
        r"|\b(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2})(?:\s*(?P<period>[ap]m)\b|\b)(?:\s*uhr\b)?",
    ))
    .expect("Invalid opening hours token regex")
});

/// Split a line into tokens. Concatenating the source text of all tokens
/// reproduces the input.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        // Unparseable matches stay part of the surrounding text
        let Some(token) = token_from_captures(&caps) else {
            continue;
        };

        if whole.start() > last {
            tokens.push(Token::Text(&line[last..whole.start()]));
        }
        tokens.push(token);
        last = whole.end();
    }

    if last < line.len() {
        tokens.push(Token::Text(&line[last..]));
    }

    tokens
}

fn token_from_captures<'a>(caps: &Captures<'a>) -> Option<Token<'a>> {
    let text = |name: &str| caps.name(name).map(|m| m.as_str());

    if let Some(day) = text("day") {
        return Weekday::from_english(day).map(Token::Weekday);
    }
    if caps.name("open24").is_some() {
        return Some(Token::Open24);
    }
    if caps.name("closed").is_some() {
        return Some(Token::Closed);
    }
    if let Some(separator) = text("sep") {
        let start = ClockTime::from_parts(text("start_h")?, text("start_m")?, text("start_p"))?;
        let end = ClockTime::from_parts(text("end_h")?, text("end_m")?, text("end_p"))?;
        return Some(Token::Range {
            start,
            separator,
            end,
        });
    }

    ClockTime::from_parts(text("hour")?, text("minute")?, text("period")).map(Token::Time)
}

/// Render tokens in German display form.
///
/// A range start without its own AM/PM marker takes the end's marker, which
/// covers provider output such as `10:00 – 11:30 AM`.
pub fn render(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();

    for token in tokens {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Weekday(day) => out.push_str(day.german()),
            Token::Closed => out.push_str(CLOSED_DE),
            Token::Open24 => out.push_str(OPEN_24_DE),
            Token::Range {
                start,
                separator,
                end,
            } => {
                let start = start.or_meridiem(end.meridiem);
                out.push_str(&format!("{start}{separator}{end} {UHR}"));
            }
            Token::Time(time) => out.push_str(&format!("{time} {UHR}")),
        }
    }

    out
}

/// Convert one opening-hours line to German 24-hour form.
pub fn convert_line(line: &str) -> String {
    render(&tokenize(line))
}

/// Convert every line, preserving order and count.
pub fn convert_opening_hours_to_german<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| convert_line(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Meridiem;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_single_range() {
        assert_eq!(
            convert_line("Monday: 9:00 AM – 6:00 PM"),
            "Montag: 09:00 – 18:00 Uhr"
        );
    }

    #[test]
    fn converts_closed_day() {
        assert_eq!(convert_line("Tuesday: Closed"), "Dienstag: Geschlossen");
    }

    #[test]
    fn converts_split_shift() {
        assert_eq!(
            convert_line("Wednesday: 9:00 AM – 12:00 PM, 2:00 PM – 6:00 PM"),
            "Mittwoch: 09:00 – 12:00 Uhr, 14:00 – 18:00 Uhr"
        );
    }

    #[test]
    fn converts_open_around_the_clock() {
        assert_eq!(
            convert_line("Sunday: Open 24 hours"),
            "Sonntag: 24 Stunden geöffnet"
        );
    }

    #[test]
    fn converts_midnight_start() {
        assert_eq!(
            convert_line("Thursday: 12:00 AM – 12:00 PM"),
            "Donnerstag: 00:00 – 12:00 Uhr"
        );
    }

    #[test]
    fn leaves_unrelated_text_untouched() {
        for line in ["", "Nach Vereinbarung", "Call 555-1234 for details", "Ruhetag"] {
            assert_eq!(convert_line(line), line);
        }
    }

    #[test]
    fn converting_twice_is_stable() {
        for line in [
            "Monday: 9:00 AM – 6:00 PM",
            "Tuesday: Closed",
            "Wednesday: 9:00 AM – 12:00 PM, 2:00 PM – 6:00 PM",
            "Sunday: Open 24 hours",
            "Friday: 7:30 PM",
            "Saturday: 10:00-14:00",
            "Samstag 9:30h",
            "Montag: 10:00h - 18:00h",
            "v 1:2345",
        ] {
            let once = convert_line(line);
            assert_eq!(convert_line(&once), once);
        }
    }

    #[test]
    fn ignores_times_glued_to_other_text() {
        for line in ["Samstag 9:30h", "Montag: 10:00h - 18:00h", "v 1:2345", "ab 7:00Uhr"] {
            assert_eq!(convert_line(line), line);
        }
        assert_eq!(convert_line("Friday: 9:00AM-5:00PM"), "Freitag: 09:00-17:00 Uhr");
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(
            convert_line("MONDAY: closed, friday: OPEN 24 HOURS"),
            "Montag: Geschlossen, Freitag: 24 Stunden geöffnet"
        );
    }

    #[test]
    fn does_not_translate_partial_words() {
        assert_eq!(convert_line("Mondays: Closedown"), "Mondays: Closedown");
    }

    #[test]
    fn accepts_other_dash_glyphs() {
        assert_eq!(
            convert_line("Friday: 9:00 AM-5:00 PM"),
            "Freitag: 09:00-17:00 Uhr"
        );
        assert_eq!(
            convert_line("Friday: 9:00 AM — 5:00 PM"),
            "Freitag: 09:00 — 17:00 Uhr"
        );
    }

    #[test]
    fn handles_provider_spacing_characters() {
        assert_eq!(
            convert_line("Monday: 9:00\u{202f}AM\u{2009}–\u{2009}6:00\u{202f}PM"),
            "Montag: 09:00\u{2009}–\u{2009}18:00 Uhr"
        );
    }

    #[test]
    fn shares_trailing_meridiem_across_range() {
        assert_eq!(
            convert_line("Saturday: 10:00 – 11:30 AM"),
            "Samstag: 10:00 – 11:30 Uhr"
        );
        assert_eq!(
            convert_line("Saturday: 6:00 – 9:30 PM"),
            "Samstag: 18:00 – 21:30 Uhr"
        );
    }

    #[test]
    fn suffixes_standalone_times() {
        assert_eq!(convert_line("Friday: from 7:30 PM"), "Freitag: from 19:30 Uhr");
        assert_eq!(convert_line("Kitchen closes 22:00"), "Kitchen closes 22:00 Uhr");
    }

    #[test]
    fn tokenizes_structurally() {
        let tokens = tokenize("Monday: 9:00 AM – 6:00 PM");
        assert_eq!(
            tokens,
            vec![
                Token::Weekday(Weekday::Monday),
                Token::Text(": "),
                Token::Range {
                    start: ClockTime::new(9, 0, Some(Meridiem::Am)),
                    separator: " – ",
                    end: ClockTime::new(6, 0, Some(Meridiem::Pm)),
                },
            ]
        );
    }

    #[test]
    fn batch_preserves_order_and_count() {
        let lines = [
            "Monday: 9:00 AM – 6:00 PM",
            "Tuesday: Closed",
            "Sunday: Open 24 hours",
        ];

        let converted = convert_opening_hours_to_german(lines);

        assert_eq!(converted.len(), lines.len());
        for (input, output) in lines.iter().zip(&converted) {
            assert_eq!(output, &convert_line(input));
        }
    }

    #[test]
    fn batch_of_nothing_is_empty() {
        let converted = convert_opening_hours_to_german(Vec::<String>::new());
        assert!(converted.is_empty());
    }
}
