//! Lexical front end for Lox: turns source text into the token stream a parser consumes.

pub mod reporter;
pub mod repl;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod test_helpers;

pub use crate::reporter::{ConsoleReporter, ErrorReporter};
pub use crate::scanner::{tokenize, ScanningError};
pub use crate::token::{keyword, Literal, Token, TokenType, KEYWORDS};
