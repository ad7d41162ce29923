//! Interactive assistant session.
//!
//! Reads commands line by line, runs them against the loaded address book
//! and writes one reply per command. The book is saved through the
//! repository when the user types `close`/`exit` or input ends.

use crate::clock::Clock;
use crate::commands::{handlers, Command};
use crate::error::{CommandError, CommandResult, SessionResult, StorageResult};
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the session does after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep reading
    Message(String),
    /// Save and stop
    Exit,
}

/// An address book plus everything needed to drive it from text input.
pub struct Session {
    book: AddressBook,
    repo: Box<dyn AddressBookRepository>,
    clock: Box<dyn Clock>,
    birthday_window_days: u32,
}

impl Session {
    /// Load the book from `repo` and start a session over it.
    ///
    /// # Arguments
    /// * `repo` - Where the book is loaded from and saved to
    /// * `clock` - Source of today's date for `birthdays`
    /// * `birthday_window_days` - How far ahead `birthdays` looks
    pub fn open(
        repo: Box<dyn AddressBookRepository>,
        clock: Box<dyn Clock>,
        birthday_window_days: u32,
    ) -> StorageResult<Self> {
        let book = repo.load()?;
        info!("Session opened with {} contacts", book.len());
        Ok(Self {
            book,
            repo,
            clock,
            birthday_window_days,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and run one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(Command::Exit) => return Reply::Exit,
            Ok(command) => command,
            Err(e) => return Reply::Message(format_error(&e)),
        };

        debug!("Running command: {:?}", command);
        match self.execute(command) {
            Ok(message) => Reply::Message(message),
            Err(e) => {
                debug!("Command failed: {}", e);
                Reply::Message(format_error(&e))
            }
        }
    }

    /// Run a parsed command against the book.
    ///
    /// `Exit` only produces the farewell text; saving is up to the caller.
    pub fn execute(&mut self, command: Command) -> CommandResult<String> {
        let book = &mut self.book;
        match command {
            Command::Hello => Ok(handlers::hello()),
            Command::Add { name, phone } => handlers::add_contact(book, &name, &phone),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => handlers::change_phone(book, &name, &old_phone, &new_phone),
            Command::Phone { name } => handlers::show_phone(book, &name),
            Command::All => handlers::show_all(book),
            Command::AddBirthday { name, date } => handlers::add_birthday(book, &name, &date),
            Command::ShowBirthday { name } => handlers::show_birthday(book, &name),
            Command::Birthdays => handlers::upcoming_birthdays(
                book,
                self.clock.today(),
                self.birthday_window_days,
            ),
            Command::Exit => Ok(GOODBYE.to_string()),
            Command::Unknown(word) => {
                debug!("Unknown command: {:?}", word);
                Ok(INVALID_COMMAND.to_string())
            }
        }
    }

    /// Persist the current book.
    pub fn save(&self) -> StorageResult<()> {
        self.repo.save(&self.book).inspect_err(|e| {
            error!("Failed to save address book: {}", e);
        })
    }

    /// Read commands from `input` until `close`/`exit` or end of input,
    /// then save and say goodbye.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so they end up as an
    /// invalid command. If the terminal itself fails, the book is still
    /// saved before the I/O error is returned.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> SessionResult<()> {
        if let Err(e) = self.converse(&mut input, &mut output) {
            error!("Terminal I/O failed: {}", e);
            // save() logs its own failure; the terminal error wins
            let _ = self.save();
            return Err(e.into());
        }

        self.save()?;
        writeln!(output, "{}", GOODBYE)?;
        output.flush()?;
        info!("Session closed with {} contacts", self.book.len());
        Ok(())
    }

    fn converse<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                writeln!(output)?;
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            match self.handle_line(&line) {
                Reply::Message(message) => writeln!(output, "{}", message)?,
                Reply::Exit => return Ok(()),
            }
        }
    }
}

fn format_error(err: &CommandError) -> String {
    format!("Error: {}", err)
}
