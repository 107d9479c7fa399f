// src/config.rs
// Site-wide constants. Content lives in content/*.json; these are the fixed bits of chrome.

pub const SITE_NAME: &str = "Little Sprouts Early Learning";
pub const TAGLINE: &str = "Play-based learning for curious kids aged 2 to 6.";

// Shown to humans; PHONE_DIAL is what the tel: link dials.
pub const PHONE_DISPLAY: &str = "(555) 123-4567";
pub const PHONE_DIAL: &str = "+15551234567";

pub const EMAIL: &str = "hello@littlesprouts.example";
pub const ADDRESS_LINES: &[&str] = &["42 Maple Grove", "Springfield, ST 12345"];

#[derive(Debug, Clone, PartialEq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours { days: "Monday to Friday", hours: "7:30am to 6:00pm" },
    OpeningHours { days: "Saturday", hours: "9:00am to 12:00pm" },
    OpeningHours { days: "Sunday", hours: "Closed" },
];

pub fn tel_href() -> String {
    format!("tel:{PHONE_DIAL}")
}
