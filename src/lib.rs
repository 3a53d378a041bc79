//! temple - Lost Temple of Data
//!
//! A small text adventure plus expedition data helpers: extracting calendar
//! dates and AZMAR secret codes from journal text, and loading tab-separated
//! location notes.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TempleError;
