//! Survey use case: load every configured data file in one run

use crate::application::ScanJournalService;
use crate::domain::{JournalFindings, Table};
use crate::error::Result;
use crate::infrastructure::{ArtifactLoader, Config, DelimitedLoader, TextStore};
use std::path::PathBuf;
use tracing::warn;

/// Outcome of each survey step. A failed step does not stop the survey.
#[derive(Debug)]
pub struct SurveyReport {
    pub artifacts_path: PathBuf,
    pub artifacts: Result<Table>,
    pub locations_path: PathBuf,
    pub locations: Result<Table>,
    pub journal_path: PathBuf,
    pub journal: Result<JournalFindings>,
}

/// Service running the artifact, location and journal steps from config
pub struct SurveyService<S: TextStore> {
    store: S,
    config: Config,
}

impl<S: TextStore> SurveyService<S> {
    pub fn new(store: S, config: Config) -> Self {
        SurveyService { store, config }
    }

    pub fn execute(self) -> SurveyReport {
        let artifacts_path = self.config.artifacts_path();
        let artifacts = ArtifactLoader::new(
            self.config.artifacts_sheet.clone(),
            self.config.artifacts_skip_rows,
        )
        .load(&artifacts_path);
        if let Err(e) = &artifacts {
            warn!(path = %artifacts_path.display(), error = %e, "Artifact data step failed");
        }

        let locations_path = self.config.locations_path();
        let journal_path = self.config.journal_path();

        let locations = DelimitedLoader::tsv(self.config.locations_skip_rows)
            .load(&self.store, &locations_path);
        if let Err(e) = &locations {
            warn!(path = %locations_path.display(), error = %e, "Location notes step failed");
        }

        let journal = ScanJournalService::new(self.store).scan_file(&journal_path);
        if let Err(e) = &journal {
            warn!(path = %journal_path.display(), error = %e, "Journal step failed");
        }

        SurveyReport {
            artifacts_path,
            artifacts,
            locations_path,
            locations,
            journal_path,
            journal,
        }
    }
}
