//! Turning a line of user input into a [`Command`].

use crate::error::{CommandError, CommandResult};

/// A line split into its command word and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lowercased first token, empty for a blank line
    pub command: String,
    /// Remaining whitespace-separated tokens, case preserved
    pub args: Vec<String>,
}

/// Split `line` on whitespace and lowercase the command word.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut parts = line.split_whitespace();
    let command = parts.next().map(str::to_lowercase).unwrap_or_default();
    let args = parts.map(str::to_string).collect();
    ParsedInput { command, args }
}

/// Every command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        date: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Exit,
    /// Anything unrecognised, including a blank line
    Unknown(String),
}

impl Command {
    /// Parse a raw input line.
    ///
    /// Extra arguments are ignored. Too few arguments yield
    /// `CommandError::MissingArgument` with the command's usage.
    pub fn parse(line: &str) -> CommandResult<Self> {
        Self::from_input(parse_input(line))
    }

    pub fn from_input(input: ParsedInput) -> CommandResult<Self> {
        let ParsedInput { command, args } = input;
        let mut args = args.into_iter();

        let command = match command.as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take_args(&mut args, "add", "add <name> <phone>")?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] = take_args(
                    &mut args,
                    "change",
                    "change <name> <old_phone> <new_phone>",
                )?;
                Command::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = take_args(&mut args, "phone", "phone <name>")?;
                Command::Phone { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, date] =
                    take_args(&mut args, "add-birthday", "add-birthday <name> <DD.MM.YYYY>")?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take_args(&mut args, "show-birthday", "show-birthday <name>")?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown(command),
        };
        Ok(command)
    }
}

fn take_args<const N: usize>(
    args: &mut impl Iterator<Item = String>,
    command: &'static str,
    usage: &'static str,
) -> CommandResult<[String; N]> {
    let taken: Vec<String> = args.take(N).collect();
    taken
        .try_into()
        .map_err(|_| CommandError::MissingArgument { command, usage })
}
