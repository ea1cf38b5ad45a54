use std::io::{self, BufRead, Lines};

use crate::scanner::{tokenize, ScanningError};
use crate::token::TokenType;

/// Handling multi-line input in the prompt.
/// Lines are collected until the entry looks finished: an empty line, or a line whose last token
/// is a `;` with every brace and paren closed.
/// Brackets are counted on scanned tokens so the ones inside strings and comments don't count,
/// and an entry with a string or block comment still open keeps reading until two empty lines in a row.
pub struct MultilineInput<T: BufRead> {
    lines: Lines<T>,
}

impl<T: BufRead> MultilineInput<T> {
    pub fn new(lines: Lines<T>) -> MultilineInput<T> {
        MultilineInput { lines }
    }
}

impl<T: BufRead> Iterator for MultilineInput<T> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current_input = String::new();
        let mut first_line = true;
        let mut previous_empty = false;
        loop {
            let line = match self.lines.next() {
                // stdin closed, whatever was typed so far still gets run
                None if current_input.is_empty() => return None,
                None => return Some(Ok(current_input)),
                Some(Err(err)) => return Some(Err(err)),
                Some(Ok(line)) => line,
            };
            if !first_line {
                current_input.push('\n');
            }
            first_line = false;
            current_input += &line;

            let state = entry_state(&current_input);
            if state.still_open && !(line.is_empty() && previous_empty) {
                previous_empty = line.is_empty();
                continue;
            }
            if line.is_empty() || (state.ends_with_semicolon && state.balanced) {
                return Some(Ok(current_input));
            }
        }
    }
}

struct EntryState {
    still_open: bool,
    balanced: bool,
    ends_with_semicolon: bool,
}

fn entry_state(input: &str) -> EntryState {
    let mut still_open = false;
    let tokens = tokenize(input, |error| {
        if matches!(
            error,
            ScanningError::UnterminatedString { .. } | ScanningError::UnterminatedBlockComment { .. }
        ) {
            still_open = true;
        }
    });

    let mut open_braces: i32 = 0;
    let mut open_parens: i32 = 0;
    for token in &tokens {
        match token.token_type() {
            TokenType::LeftBrace => open_braces += 1,
            TokenType::RightBrace => open_braces -= 1,
            TokenType::LeftParen => open_parens += 1,
            TokenType::RightParen => open_parens -= 1,
            _ => {}
        }
        // going negative is left for the parser to complain about
    }

    let last = tokens
        .iter()
        .rev()
        .find(|token| token.token_type() != TokenType::EOF);
    EntryState {
        still_open,
        balanced: open_braces == 0 && open_parens == 0,
        ends_with_semicolon: last.is_some_and(|token| token.token_type() == TokenType::Semicolon),
    }
}
