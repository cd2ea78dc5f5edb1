//! Command parsing for the interactive loop.

use crate::error::CommandError;

/// Name and description of every command, in display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Lists the next 20 location areas"),
    ("mapb", "Lists the previous 20 location areas"),
    (
        "explore",
        "Shows all Pokemon in a location area (usage: explore <area-name>)",
    ),
    (
        "catch",
        "Attempt to catch a Pokemon (usage: catch <pokemon-name>)",
    ),
    (
        "inspect",
        "View details of a caught Pokemon (usage: inspect <pokemon-name>)",
    ),
    ("pokedex", "Lists all Pokemon you have caught"),
    (
        "stats",
        "Shows response cache statistics (usage: stats [json])",
    ),
];

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    /// Cache statistics, as text or as a JSON object
    Stats { json: bool },
}

impl Command {
    /// Parses words produced by [`clean_input`].
    ///
    /// Returns `Ok(None)` for a blank line. Extra arguments are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Self>, CommandError> {
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.as_str() {
            "help" => Self::Help,
            "exit" => Self::Exit,
            "map" => Self::Map,
            "mapb" => Self::MapBack,
            "explore" => {
                let area = args.first().ok_or(CommandError::MissingArgument {
                    what: "a location name",
                    example: "explore canalave-city-area",
                })?;
                Self::Explore(area.clone())
            }
            "catch" => Self::Catch(pokemon_name(args, "catch pikachu")?),
            "inspect" => Self::Inspect(pokemon_name(args, "inspect pikachu")?),
            "pokedex" => Self::Pokedex,
            "stats" => Self::Stats {
                json: args.first().is_some_and(|arg| arg == "json"),
            },
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn pokemon_name(args: &[String], example: &'static str) -> Result<String, CommandError> {
    args.first().cloned().ok_or(CommandError::MissingArgument {
        what: "a Pokemon name",
        example,
    })
}

/// Splits `text` on whitespace and lowercases every word.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        let cases: &[(&str, &[&str])] = &[
            ("  hello  world  ", &["hello", "world"]),
            ("damn    that's crazzyy", &["damn", "that's", "crazzyy"]),
            ("HELLO World", &["hello", "world"]),
            ("", &[]),
            ("   ", &[]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), *expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse(&[]), Ok(None));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse(&clean_input("HELP")), Ok(Some(Command::Help)));
        assert_eq!(Command::parse(&clean_input("map")), Ok(Some(Command::Map)));
        assert_eq!(
            Command::parse(&clean_input("mapb")),
            Ok(Some(Command::MapBack))
        );
        assert_eq!(
            Command::parse(&clean_input("stats")),
            Ok(Some(Command::Stats { json: false }))
        );
        assert_eq!(
            Command::parse(&clean_input("stats JSON")),
            Ok(Some(Command::Stats { json: true }))
        );
        assert_eq!(
            Command::parse(&clean_input("pokedex")),
            Ok(Some(Command::Pokedex))
        );
        assert_eq!(Command::parse(&clean_input("exit")), Ok(Some(Command::Exit)));
    }

    #[test]
    fn test_parse_explore() {
        assert_eq!(
            Command::parse(&clean_input("explore Pastoria-City-Area")),
            Ok(Some(Command::Explore("pastoria-city-area".to_string())))
        );
        assert!(matches!(
            Command::parse(&clean_input("explore")),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_parse_pokemon_commands() {
        assert_eq!(
            Command::parse(&clean_input("catch Pikachu")),
            Ok(Some(Command::Catch("pikachu".to_string())))
        );
        assert_eq!(
            Command::parse(&clean_input("inspect pikachu")),
            Ok(Some(Command::Inspect("pikachu".to_string())))
        );
        assert_eq!(
            Command::parse(&clean_input("inspect")),
            Err(CommandError::MissingArgument {
                what: "a Pokemon name",
                example: "inspect pikachu",
            })
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse(&clean_input("fly cerulean-city")),
            Err(CommandError::Unknown("fly".to_string()))
        );
    }

    #[test]
    fn test_every_command_is_listed() {
        for (name, _) in COMMANDS {
            let words = vec![name.to_string(), "arg".to_string()];
            assert!(Command::parse(&words).is_ok(), "{} should parse", name);
        }
    }
}
