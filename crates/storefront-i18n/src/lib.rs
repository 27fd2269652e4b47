//! German display helpers for storefront sites.
//!
//! Converts opening-hours lines from upstream providers into German 24-hour
//! form and translates business category identifiers into German labels.

pub mod category;
pub mod clock;
pub mod hours;
pub mod weekday;

pub use category::{normalize_category, translate_categories, translate_category};
pub use clock::{convert_time_token, ClockTime, Meridiem, UHR};
pub use hours::{
    convert_line, convert_opening_hours_to_german, render, tokenize, Token, CLOSED_DE, OPEN_24_DE,
};
pub use weekday::Weekday;
