//! Journal text extraction: calendar dates and secret codes

use crate::domain::calendar;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// Regex for the date shape MM/DD/YYYY (ASCII digits only)
fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[0-9]{2}/[0-9]{2}/[0-9]{4}").unwrap())
}

/// Regex for secret codes: AZMAR- followed by three digits
fn code_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"AZMAR-[0-9]{3}").unwrap())
}

/// A calendar-valid date found in journal text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateToken {
    /// Text exactly as it appeared in the source
    text: String,
    month: u32,
    day: u32,
    year: u32,
}

impl DateToken {
    /// Build a token from a `MM/DD/YYYY` lexical match.
    /// Returns None when the digits don't form a real calendar date.
    fn from_match(raw: &str) -> Option<Self> {
        let month: u32 = raw.get(0..2)?.parse().ok()?;
        let day: u32 = raw.get(3..5)?.parse().ok()?;
        let year: u32 = raw.get(6..10)?.parse().ok()?;

        if !calendar::is_valid_date(month, day, year) {
            return None;
        }

        Some(DateToken {
            text: raw.to_string(),
            month,
            day,
            year,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Convert to a chrono date for callers that need date arithmetic
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::try_from(self.year).ok()?, self.month, self.day)
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A secret code of the form AZMAR-XXX
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCode(String);

impl SecretCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The three digits after the prefix, leading zeros kept
    pub fn digits(&self) -> &str {
        &self.0["AZMAR-".len()..]
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check that a match at `start..end` does not sit inside a longer digit run
fn on_digit_boundary(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start > 0 && bytes[start - 1].is_ascii_digit();
    let after = end < bytes.len() && bytes[end].is_ascii_digit();
    !before && !after
}

/// Every `MM/DD/YYYY` substring not embedded in a longer digit run, in order.
/// Calendar validity is not checked here.
fn lexical_dates(text: &str) -> Vec<&str> {
    let regex = date_regex();
    let mut matches = Vec::new();
    let mut start = 0;

    while let Some(m) = regex.find_at(text, start) {
        if on_digit_boundary(text, m.start(), m.end()) {
            matches.push(m.as_str());
            start = m.end();
        } else {
            // Matches begin with an ASCII digit, so the next byte is a char boundary
            start = m.start() + 1;
        }
    }

    matches
}

/// Extract calendar-valid dates in MM/DD/YYYY form, in order of appearance.
///
/// Matches embedded in longer digit runs are ignored. Matches that fail
/// calendar validation (month 13, February 30, ...) are dropped silently.
pub fn extract_dates(text: &str) -> Vec<DateToken> {
    lexical_dates(text)
        .into_iter()
        .filter_map(|raw| {
            let token = DateToken::from_match(raw);
            if token.is_none() {
                debug!(date = raw, "Dropping calendar-invalid date");
            }
            token
        })
        .collect()
}

/// Extract secret codes (AZMAR- plus exactly three digits), in order of appearance
pub fn extract_secret_codes(text: &str) -> Vec<SecretCode> {
    code_regex()
        .find_iter(text)
        .map(|m| SecretCode(m.as_str().to_string()))
        .collect()
}

/// Both extraction results for one journal text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalFindings {
    pub dates: Vec<DateToken>,
    pub codes: Vec<SecretCode>,
}

impl JournalFindings {
    pub fn from_text(text: &str) -> Self {
        JournalFindings {
            dates: extract_dates(text),
            codes: extract_secret_codes(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.codes.is_empty()
    }

    pub fn date_strings(&self) -> Vec<&str> {
        self.dates.iter().map(DateToken::as_str).collect()
    }

    pub fn code_strings(&self) -> Vec<&str> {
        self.codes.iter().map(SecretCode::as_str).collect()
    }
}
