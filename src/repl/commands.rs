//! REPL command table and input parsing

use crate::error::{PokedexError, Result};

/// Help-table entry for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    /// Word typed to run the command
    pub name: &'static str,
    /// Name plus any arguments
    pub usage: &'static str,
    /// One-line description shown by `help`
    pub description: &'static str,
}

/// Every command the REPL understands, in help order.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        name: "clear",
        usage: "clear",
        description: "Clears the console",
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "Displays the names of the next page of location areas in the Pokemon world",
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "(Map Back) Displays the names of the previous page of location areas",
    },
    CommandInfo {
        name: "explore",
        usage: "explore <area-name>",
        description: "Lists the Pokemon that can be found in a location area",
    },
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Clear,
    Map,
    MapBack,
    Explore(String),
}

impl Command {
    /// Parses one line of input.
    ///
    /// Returns `Ok(None)` for blank input. Extra arguments are ignored.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let words = clean_input(input);
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.as_str() {
            "help" => Self::Help,
            "exit" => Self::Exit,
            "clear" => Self::Clear,
            "map" => Self::Map,
            "mapb" => Self::MapBack,
            "explore" => {
                let area = args
                    .first()
                    .ok_or(PokedexError::MissingArgument("explore <area-name>"))?;
                Self::Explore(area.clone())
            }
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Lower-cases `input` and splits it on whitespace.
pub fn clean_input(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        assert_eq!(clean_input("  Hello   World "), vec!["hello", "world"]);
        assert!(clean_input("   ").is_empty());
    }

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("help").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("EXIT").unwrap(), Some(Command::Exit));
        assert_eq!(Command::parse(" map ").unwrap(), Some(Command::Map));
        assert_eq!(Command::parse("mapb").unwrap(), Some(Command::MapBack));
        assert_eq!(Command::parse("clear").unwrap(), Some(Command::Clear));
    }

    #[test]
    fn test_parse_explore_takes_first_argument() {
        assert_eq!(
            Command::parse("explore Pastoria-City-Area extra").unwrap(),
            Some(Command::Explore("pastoria-city-area".to_string()))
        );
    }

    #[test]
    fn test_parse_explore_without_argument() {
        let err = Command::parse("explore").unwrap_err();
        assert!(matches!(err, PokedexError::MissingArgument(_)));
    }

    #[test]
    fn test_parse_blank_input() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse(" \t ").unwrap(), None);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("fly away").unwrap_err();
        assert!(matches!(err, PokedexError::UnknownCommand(ref word) if word == "fly"));
    }

    #[test]
    fn test_every_command_in_table_parses() {
        for entry in COMMANDS {
            let input = entry.usage.replace("<area-name>", "somewhere");
            assert!(
                Command::parse(&input).unwrap().is_some(),
                "{} should parse",
                entry.name
            );
        }
    }
}
