//! Line commands accepted by the terminal runner

use std::str::FromStr;

use thiserror::Error;

use chateauquest_shared::{EventPrompt, StartGameForm};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a new game in this session
    Start(StartGameForm),
    /// A raw key press, as if typed on the page
    Key(String),
    /// Click on an on-screen control button
    Button(String),
    Answer(String),
    CloseRiddle,
    ShowEvent(EventPrompt),
    Choose(String),
    Volume(u8),
    Complete,
    Click,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid argument for {command}: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

pub const HELP: &str = "\
commands:
  start <city> <character> <name>
                       start a new game (e.g. start Paris knight Ada)
  w | a | s | d        key press (throttled like the page)
  btn <label>          control button (not throttled)
  answer <text>        submit a riddle answer
  close                close the riddle
  event <json>         show an event prompt
  choose <text>        pick an event choice
  volume <0-100>       set master volume
  complete             complete the quest
  click                click on the page
  help | quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let required = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "start" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                match (parts.next(), parts.next(), parts.next().map(str::trim)) {
                    (Some(city), Some(character), Some(name))
                        if !city.is_empty() && !name.is_empty() =>
                    {
                        Ok(Command::Start(StartGameForm {
                            start_location: city.to_string(),
                            character: character.to_string(),
                            player_name: name.to_string(),
                        }))
                    }
                    _ => Err(CommandError::InvalidArgument {
                        command: "start",
                        reason: "expected <city> <character> <name>".to_string(),
                    }),
                }
            }
            "w" | "a" | "s" | "d" => Ok(Command::Key(word.to_string())),
            "key" => required("key").map(Command::Key),
            "btn" | "button" => required("btn").map(Command::Button),
            "answer" => Ok(Command::Answer(rest.to_string())),
            "close" => Ok(Command::CloseRiddle),
            "event" => {
                let json = required("event")?;
                serde_json::from_str(&json)
                    .map(Command::ShowEvent)
                    .map_err(|e| CommandError::InvalidArgument {
                        command: "event",
                        reason: e.to_string(),
                    })
            }
            "choose" => required("choose").map(Command::Choose),
            "volume" => {
                let value = required("volume")?;
                value
                    .parse::<u8>()
                    .ok()
                    .filter(|percent| *percent <= 100)
                    .map(Command::Volume)
                    .ok_or(CommandError::InvalidArgument {
                        command: "volume",
                        reason: format!("expected 0-100, got {value}"),
                    })
            }
            "complete" => Ok(Command::Complete),
            "click" => Ok(Command::Click),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters_are_key_presses() {
        assert_eq!("W".parse(), Ok(Command::Key("W".into())));
        assert_eq!(" d ".parse(), Ok(Command::Key("d".into())));
    }

    #[test]
    fn answers_keep_their_spaces() {
        assert_eq!(
            "answer  la  seine".parse(),
            Ok(Command::Answer("la  seine".into()))
        );
        // An empty answer still reaches the controller, which rejects it
        assert_eq!("answer".parse(), Ok(Command::Answer(String::new())));
    }

    #[test]
    fn start_takes_city_character_and_full_name() {
        assert_eq!(
            "start Paris knight Ada Lovelace".parse(),
            Ok(Command::Start(StartGameForm {
                start_location: "Paris".into(),
                character: "knight".into(),
                player_name: "Ada Lovelace".into(),
            }))
        );
        assert!(matches!(
            "start Paris knight".parse::<Command>(),
            Err(CommandError::InvalidArgument { command: "start", .. })
        ));
    }

    #[test]
    fn volume_is_bounded() {
        assert_eq!("volume 40".parse(), Ok(Command::Volume(40)));
        assert!(matches!(
            "volume 140".parse::<Command>(),
            Err(CommandError::InvalidArgument { command: "volume", .. })
        ));
    }

    #[test]
    fn event_takes_a_json_prompt() {
        let cmd: Command = r#"event {"title":"Fog","description":"Thick fog","choices":[{"text":"Wait"}]}"#
            .parse()
            .unwrap();
        let Command::ShowEvent(prompt) = cmd else {
            panic!("expected ShowEvent");
        };
        assert_eq!(prompt.choice_texts(), vec!["Wait"]);
    }

    #[test]
    fn rejects_unknown_and_incomplete_commands() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "fly".parse::<Command>(),
            Err(CommandError::Unknown("fly".into()))
        );
        assert_eq!(
            "choose".parse::<Command>(),
            Err(CommandError::MissingArgument("choose"))
        );
    }
}
