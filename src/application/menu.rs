//! Adventure menu use case

use crate::domain::{PathChoice, INVALID_CHOICE_MESSAGE};
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const MENU_LINES: [&str; 4] = [
    "Welcome to the Lost Temple of Data!",
    "You are about to embark on an exciting adventure.",
    "1. Start Adventure",
    "2. Exit",
];

const PROMPT: &str = "Enter your choice: ";

/// The two-option console menu
pub struct AdventureMenu;

impl AdventureMenu {
    /// Print the welcome text and the options
    pub fn show(output: &mut impl Write) -> Result<()> {
        for line in MENU_LINES {
            writeln!(output, "{}", line)?;
        }
        Ok(())
    }

    /// Show the menu, read one choice and take the chosen path.
    ///
    /// Invalid or missing input prints the invalid-choice message and returns
    /// `None` without taking any path.
    pub fn run(input: &mut impl BufRead, output: &mut impl Write) -> Result<Option<PathChoice>> {
        Self::show(output)?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;

        match line.parse::<PathChoice>() {
            Ok(choice) => {
                info!(choice = choice.number(), "Path chosen");
                writeln!(output, "{}", choice.message())?;
                Ok(Some(choice))
            }
            Err(e) => {
                warn!(error = %e, "Rejected menu input");
                // The prompt line has no newline when input ended early
                if !line.ends_with('\n') {
                    writeln!(output)?;
                }
                writeln!(output, "{}", INVALID_CHOICE_MESSAGE)?;
                Ok(None)
            }
        }
    }
}
