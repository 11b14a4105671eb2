//! Main menu choices

use std::fmt;
use std::str::FromStr;

use crate::error::EcoTrackError;

/// An option from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// "1": record emissions for a category
    AddEmission,
    /// "2": print the total carbon footprint
    CalculateFootprint,
    /// "3": print a reduction strategy
    SuggestReduction,
    /// "4": leave the tool
    Exit,
}

impl MenuChoice {
    /// Every option, in menu order
    pub const ALL: [MenuChoice; 4] = [
        Self::AddEmission,
        Self::CalculateFootprint,
        Self::SuggestReduction,
        Self::Exit,
    ];

    /// Key the user types to select this option
    pub const fn key(&self) -> &'static str {
        match self {
            Self::AddEmission => "1",
            Self::CalculateFootprint => "2",
            Self::SuggestReduction => "3",
            Self::Exit => "4",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = EcoTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddEmission),
            "2" => Ok(Self::CalculateFootprint),
            "3" => Ok(Self::SuggestReduction),
            "4" => Ok(Self::Exit),
            other => Err(EcoTrackError::InvalidMenuChoice(other.to_string())),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AddEmission => "Add Emission Data",
            Self::CalculateFootprint => "Calculate Carbon Footprint",
            Self::SuggestReduction => "Suggest Reduction Strategies",
            Self::Exit => "Exit",
        };
        write!(f, "{}. {}", self.key(), label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::AddEmission);
        assert_eq!("2".parse::<MenuChoice>().unwrap(), MenuChoice::CalculateFootprint);
        assert_eq!(" 3 ".parse::<MenuChoice>().unwrap(), MenuChoice::SuggestReduction);
        assert_eq!("4".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_invalid_choice() {
        let err = "5".parse::<MenuChoice>().unwrap_err();
        assert!(matches!(err, EcoTrackError::InvalidMenuChoice(s) if s == "5"));
        assert!("exit".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_display_matches_menu_text() {
        assert_eq!(MenuChoice::AddEmission.to_string(), "1. Add Emission Data");
        assert_eq!(MenuChoice::Exit.to_string(), "4. Exit");
    }
}
