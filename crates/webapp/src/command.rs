//! Line commands typed at the prompt.
//!
//! ```text
//! email <address>     set the email field (no argument clears it)
//! password <secret>   set the password field (no argument clears it)
//! login               submit the login form
//! order               press "Place Order"
//! show                redraw the page (also: empty line)
//! help                list commands
//! quit                leave (also: exit)
//! ```

use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

use crate::state::Action;

/// Usage text printed by `help` and after an unknown command.
pub const HELP: &str = "\
Commands:
  email <address>     set the email field
  password <secret>   set the password field
  login               submit the login form
  order               place an order
  show                redraw the page
  help                show this help
  quit                exit
";

/// Errors parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    /// The command takes no argument but one was given.
    #[error("'{0}' takes no argument")]
    UnexpectedArgument(&'static str),
}

/// One parsed input line.
#[derive(Debug)]
pub enum Command {
    /// An interaction that goes through the reducer.
    Dispatch(Action),
    /// Redraw without changing anything.
    Show,
    /// Print usage.
    Help,
    /// End the session.
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Only the single space after the command word is a separator; field
        // values are kept exactly as typed.
        let line = line.trim_start();
        let (word, value) = line.split_once(' ').unwrap_or((line, ""));
        let word = word.trim_end();

        let no_argument = |name: &'static str, command: Self| {
            if value.trim().is_empty() {
                Ok(command)
            } else {
                Err(CommandError::UnexpectedArgument(name))
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "" | "show" => no_argument("show", Self::Show),
            "email" => Ok(Self::Dispatch(Action::EmailChanged(value.to_string()))),
            "password" => Ok(Self::Dispatch(Action::PasswordChanged(SecretString::from(
                value,
            )))),
            "login" => no_argument("login", Self::Dispatch(Action::LoginSubmitted)),
            "order" => no_argument("order", Self::Dispatch(Action::OrderPlaced)),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
