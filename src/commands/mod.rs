//! Assistant commands.
//!
//! [`parser`] turns a line of text into a [`Command`]; [`handlers`] runs one
//! command against an address book and produces the reply.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command, ParsedInput};
