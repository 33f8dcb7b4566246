//! Line commands accepted by the interactive host.

use derive_more::{Display, Error};
use rewind_engine::Position;
use std::str::FromStr;
use tracing::instrument;

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark at a cell index. Not range-checked here.
    Play(usize),
    /// View an earlier history entry.
    Jump(usize),
    /// Start over.
    Reset,
    /// List history entries.
    History,
    /// Render the current state again.
    Show,
    /// Print the command summary.
    Help,
    /// Leave the host.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Blank line.
    #[display("empty command")]
    Empty,
    /// A command that needs an argument got none.
    #[display("'{}' needs an argument", command)]
    MissingArgument {
        /// The command word.
        #[error(not(source))]
        command: String,
    },
    /// Argument not recognised as a square.
    #[display("unknown square '{}'", square)]
    UnknownSquare {
        /// The argument as typed.
        #[error(not(source))]
        square: String,
    },
    /// Argument not a history index.
    #[display("'{}' is not a history index", index)]
    BadIndex {
        /// The argument as typed.
        #[error(not(source))]
        index: String,
    },
    /// Nothing matched.
    #[display("unknown command '{}' (type 'help')", input)]
    Unknown {
        /// The line as typed.
        #[error(not(source))]
        input: String,
    },
}

/// Summary printed by `help`.
pub const HELP: &str = "\
Commands:
  play <square>   place the next mark (index 0-8 or a name like 'center')
  <square>        same as play
  jump <index>    view history entry <index> (0 = game start)
  history         list history entries
  reset           start a new game
  show            print the board again
  help            this message
  quit            leave";

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let require = |command: &str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command: command.to_string(),
                })
            } else {
                Ok(rest)
            }
        };

        match word.to_lowercase().as_str() {
            "play" | "p" | "move" => parse_square(require("play")?).map(Command::Play),
            "jump" | "j" | "goto" => {
                let arg = require("jump")?;
                arg.parse().map(Command::Jump).map_err(|_| CommandError::BadIndex {
                    index: arg.to_string(),
                })
            }
            "reset" | "r" | "new" => Ok(Command::Reset),
            "history" | "h" => Ok(Command::History),
            "show" | "s" | "board" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => parse_square(line)
                .map(Command::Play)
                .map_err(|_| CommandError::Unknown {
                    input: line.to_string(),
                }),
        }
    }
}

/// Parses a raw index (any size, so the engine can reject it) or a square name.
fn parse_square(s: &str) -> Result<usize, CommandError> {
    if let Ok(index) = s.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| CommandError::UnknownSquare {
            square: s.to_string(),
        })
}
