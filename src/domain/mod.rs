//! Domain layer - Extraction logic and domain models

pub mod calendar;
pub mod choice;
pub mod journal;
pub mod table;

pub use choice::{PathChoice, INVALID_CHOICE_MESSAGE};
pub use journal::{extract_dates, extract_secret_codes, DateToken, JournalFindings, SecretCode};
pub use table::Table;
