//! Application layer - Use cases and orchestration

pub mod menu;
pub mod scan_journal;
pub mod survey;

pub use menu::AdventureMenu;
pub use scan_journal::{JournalScan, ScanJournalService};
pub use survey::{SurveyReport, SurveyService};
