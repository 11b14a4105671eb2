//! Ledger display formatting
//!
//! Formats the interactive menu and ledger results for terminal output.

use crate::console::MenuChoice;
use crate::models::Tonnes;

/// Format the main menu, including the leading blank line and title
pub fn format_menu() -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str("Eco-Track Tool\n");
    for choice in MenuChoice::ALL {
        output.push_str(&format!("{}\n", choice));
    }
    output
}

/// Format the carbon footprint line
pub fn format_footprint(footprint: Tonnes) -> String {
    format!("Total Carbon Footprint: {} tons.", footprint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_menu() {
        let menu = format_menu();
        let lines: Vec<&str> = menu.lines().collect();
        assert_eq!(
            lines,
            vec![
                "",
                "Eco-Track Tool",
                "1. Add Emission Data",
                "2. Calculate Carbon Footprint",
                "3. Suggest Reduction Strategies",
                "4. Exit",
            ]
        );
    }

    #[test]
    fn test_format_footprint() {
        assert_eq!(
            format_footprint(Tonnes::new(15.0)),
            "Total Carbon Footprint: 15.0 tons."
        );
        assert_eq!(
            format_footprint(Tonnes::zero()),
            "Total Carbon Footprint: 0.0 tons."
        );
        assert_eq!(
            format_footprint(Tonnes::new(2.5)),
            "Total Carbon Footprint: 2.5 tons."
        );
    }
}
