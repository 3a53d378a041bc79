use clap::Parser;
use std::io;
use temple::application::{AdventureMenu, JournalScan, ScanJournalService, SurveyService};
use temple::cli::{
    format_findings, format_findings_by_file, format_survey, format_table_preview, Cli, Commands,
};
use temple::error::{Result, TempleError};
use temple::infrastructure::{ArtifactLoader, Config, DelimitedLoader, FileSystemStore};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings only)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli_config: Option<&std::path::Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    Config::load(cli_config, &cwd)
}

fn preview_rows(rows: Option<usize>, config: &Config) -> Result<usize> {
    match rows {
        Some(0) => Err(TempleError::Config(
            "--rows must be at least 1".to_string(),
        )),
        Some(n) => Ok(n),
        None => Ok(config.preview_rows),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Commands::Play) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout().lock();
            // An invalid choice is reported by the menu itself
            AdventureMenu::run(&mut input, &mut output)?;
            Ok(())
        }
        Some(Commands::Journal { path }) => {
            let config = load_config(cli.config.as_deref())?;
            let path = path.unwrap_or_else(|| config.journal_path());
            let service = ScanJournalService::new(FileSystemStore::new());

            match service.scan_path(&path)? {
                JournalScan::File(findings) => print!("{}", format_findings(&findings)),
                JournalScan::Directory(results) => {
                    print!("{}", format_findings_by_file(&results, &path))
                }
            }
            Ok(())
        }
        Some(Commands::Locations {
            path,
            skip_rows,
            rows,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let path = path.unwrap_or_else(|| config.locations_path());
            let loader = DelimitedLoader::tsv(skip_rows.unwrap_or(config.locations_skip_rows));
            let rows = preview_rows(rows, &config)?;

            let table = loader.load(&FileSystemStore::new(), &path)?;
            print!("{}", format_table_preview(&table, rows));
            Ok(())
        }
        Some(Commands::Artifacts {
            path,
            sheet,
            skip_rows,
            rows,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let path = path.unwrap_or_else(|| config.artifacts_path());
            let loader = ArtifactLoader::new(
                sheet.unwrap_or_else(|| config.artifacts_sheet.clone()),
                skip_rows.unwrap_or(config.artifacts_skip_rows),
            );
            let rows = preview_rows(rows, &config)?;

            let table = loader.load(&path)?;
            print!("{}", format_table_preview(&table, rows));
            Ok(())
        }
        Some(Commands::Survey) => {
            let config = load_config(cli.config.as_deref())?;
            let rows = config.preview_rows;
            let report = SurveyService::new(FileSystemStore::new(), config).execute();
            print!("{}", format_survey(&report, rows));
            Ok(())
        }
    }
}
