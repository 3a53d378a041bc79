//! Infrastructure layer - File access and configuration

pub mod config;
pub mod loader;
pub mod spreadsheet;
pub mod store;

pub use config::Config;
pub use loader::DelimitedLoader;
pub use spreadsheet::ArtifactLoader;
pub use store::{FileSystemStore, TextStore};
