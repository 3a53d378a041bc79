//! Adventure menu choices

use crate::error::TempleError;
use std::str::FromStr;

/// Message shown for anything other than 1 or 2
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please enter 1 or 2.";

/// The two paths offered by the adventure menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathChoice {
    /// 1. Start Adventure
    Adventure,
    /// 2. Exit
    Exit,
}

impl PathChoice {
    /// Message printed once the path is taken
    pub fn message(&self) -> &'static str {
        match self {
            PathChoice::Adventure => "You have chosen the adventurous path!",
            PathChoice::Exit => "You have chosen to exit the game. Goodbye!",
        }
    }

    pub fn number(&self) -> i64 {
        match self {
            PathChoice::Adventure => 1,
            PathChoice::Exit => 2,
        }
    }
}

impl FromStr for PathChoice {
    type Err = TempleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(1) => Ok(PathChoice::Adventure),
            Ok(2) => Ok(PathChoice::Exit),
            _ => Err(TempleError::InvalidChoice(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(PathChoice::from_str("1").unwrap(), PathChoice::Adventure);
        assert_eq!(PathChoice::from_str("2").unwrap(), PathChoice::Exit);
        assert_eq!(PathChoice::from_str("  2\n").unwrap(), PathChoice::Exit);
        assert_eq!(PathChoice::from_str("+1").unwrap(), PathChoice::Adventure);
    }

    #[test]
    fn test_parse_out_of_range() {
        for input in ["0", "3", "-1", "99999999999999999999"] {
            assert!(
                matches!(PathChoice::from_str(input), Err(TempleError::InvalidChoice(_))),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(PathChoice::from_str("abc").is_err());
        assert!(PathChoice::from_str("").is_err());
        assert!(PathChoice::from_str("1.0").is_err());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PathChoice::Adventure.message(),
            "You have chosen the adventurous path!"
        );
        assert_eq!(
            PathChoice::Exit.message(),
            "You have chosen to exit the game. Goodbye!"
        );
        assert_eq!(PathChoice::Exit.number(), 2);
    }
}
