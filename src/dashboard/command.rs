//! Line commands accepted by the terminal dashboard.

use clap::{Parser, Subcommand};

/// One line typed at the dashboard prompt.
///
/// Parsed in multicall mode: the first word of the line is the command name.
#[derive(Debug, Parser)]
#[command(
    multicall = true,
    about = "Sipboard dashboard commands",
    long_about = None
)]
pub struct DashboardLine {
    #[command(subcommand)]
    pub command: Command,
}

/// One parsed user action.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Choose who drinks are attributed to
    Name {
        /// Player name, kept exactly as typed
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        name: Vec<String>,
    },

    /// Add drinks for yourself
    Sip {
        /// Number of drinks
        count: u32,
    },

    /// Take the drinks for a rule
    Drink {
        /// Rule index as shown on the board
        index: usize,
    },

    /// Add a rule costing <COST> drinks
    #[command(name = "rule")]
    AddRule {
        /// Drinks the rule costs
        cost: u32,
        /// Rule text
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        text: Vec<String>,
    },

    /// Delete a rule
    Delete {
        /// Rule index as shown on the board
        index: usize,
    },

    /// Ask every dashboard to reload
    Refresh,

    /// Clear all players and rules
    Reset,

    /// Redraw the board
    Show,

    /// Leave the dashboard
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Parse one whitespace-separated input line.
    ///
    /// `help` and malformed lines come back as a [`clap::Error`] whose
    /// `Display` is the text to show the user.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        DashboardLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_name_keeps_case_and_words() {
        assert_eq!(
            Command::parse_line("name  Big Alice").unwrap(),
            Command::Name {
                name: vec!["Big".to_string(), "Alice".to_string()]
            }
        );
        assert!(Command::parse_line("name").is_err());
    }

    #[test]
    fn test_parse_rule_splits_cost_and_text() {
        assert_eq!(
            Command::parse_line("rule 2 Finish your drink").unwrap(),
            Command::AddRule {
                cost: 2,
                text: vec![
                    "Finish".to_string(),
                    "your".to_string(),
                    "drink".to_string()
                ]
            }
        );
        assert!(Command::parse_line("rule 3").is_err());
        assert!(Command::parse_line("rule many drinks").is_err());
    }

    #[test]
    fn test_parse_numeric_commands() {
        assert_eq!(
            Command::parse_line("sip 4").unwrap(),
            Command::Sip { count: 4 }
        );
        assert_eq!(
            Command::parse_line("drink 0").unwrap(),
            Command::Drink { index: 0 }
        );
        assert_eq!(
            Command::parse_line("delete 12 ").unwrap(),
            Command::Delete { index: 12 }
        );
        assert!(Command::parse_line("delete -1").is_err());
        assert!(Command::parse_line("sip").is_err());
        assert!(Command::parse_line("sip lots").is_err());
    }

    #[test]
    fn test_parse_plain_commands() {
        assert_eq!(Command::parse_line("  reset ").unwrap(), Command::Reset);
        assert_eq!(Command::parse_line("refresh").unwrap(), Command::Refresh);
        assert_eq!(Command::parse_line("show").unwrap(), Command::Show);
        assert_eq!(Command::parse_line("exit").unwrap(), Command::Quit);
        assert!(Command::parse_line("cheers").is_err());
    }

    #[test]
    fn test_help_is_rendered_by_clap() {
        let err = Command::parse_line("help").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let text = err.to_string();
        assert!(text.contains("rule"));
        assert!(text.contains("Take the drinks for a rule"));
    }
}
