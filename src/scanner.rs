use thiserror::Error;

use crate::token::{keyword, Literal, Token, TokenType};

/// public interface for tokenizing.
/// Errors are handed to `error_reporter` as they are found, scanning carries on after each one.
/// The returned tokens always end with a single EOF token.
pub fn tokenize(source: &str, error_reporter: impl FnMut(ScanningError)) -> Vec<Token> {
    let mut scanner = Scanner::new(source, error_reporter);
    scanner.scan_tokens();
    scanner.tokens
}

struct Scanner<'a, F: FnMut(ScanningError)> {
    source: &'a str,
    tokens: Vec<Token>,
    error_reporter: F,

    // position of the start of lexeme
    current_lexeme_start: usize,
    // byte offset of the next unread character
    current: usize,
    line: usize,
    // line the current lexeme started on
    lexeme_line: usize,
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ScanningError {
    #[error("Unexpected character.")]
    UnexpectedCharacter { line: usize, character: char },
    #[error("Unterminated string.")]
    UnterminatedString { line: usize },
    #[error("Unterminated block comment.")]
    UnterminatedBlockComment { line: usize },
}

impl ScanningError {
    /// Line the offending lexeme started on.
    pub fn line(&self) -> usize {
        match self {
            ScanningError::UnexpectedCharacter { line, .. }
            | ScanningError::UnterminatedString { line }
            | ScanningError::UnterminatedBlockComment { line } => *line,
        }
    }
}

/// What the scanner does after consuming a character.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Dispatch {
    Single(TokenType),
    /// `!`, `=`, `<` and `>`, which become a two-character token when followed by `=`.
    OrEqual {
        plain: TokenType,
        with_equal: TokenType,
    },
    Slash,
    Whitespace,
    Newline,
    Quote,
    Digit,
    Alpha,
    Unexpected,
}

pub(crate) fn dispatch(c: char) -> Dispatch {
    match c {
        '(' => Dispatch::Single(TokenType::LeftParen),
        ')' => Dispatch::Single(TokenType::RightParen),
        '{' => Dispatch::Single(TokenType::LeftBrace),
        '}' => Dispatch::Single(TokenType::RightBrace),
        ',' => Dispatch::Single(TokenType::Comma),
        '.' => Dispatch::Single(TokenType::Dot),
        '-' => Dispatch::Single(TokenType::Minus),
        '+' => Dispatch::Single(TokenType::Plus),
        ';' => Dispatch::Single(TokenType::Semicolon),
        '*' => Dispatch::Single(TokenType::Star),
        '!' => Dispatch::OrEqual {
            plain: TokenType::Bang,
            with_equal: TokenType::BangEqual,
        },
        '=' => Dispatch::OrEqual {
            plain: TokenType::Equal,
            with_equal: TokenType::EqualEqual,
        },
        '<' => Dispatch::OrEqual {
            plain: TokenType::Less,
            with_equal: TokenType::LessEqual,
        },
        '>' => Dispatch::OrEqual {
            plain: TokenType::Greater,
            with_equal: TokenType::GreaterEqual,
        },
        '/' => Dispatch::Slash,
        ' ' | '\r' | '\t' => Dispatch::Whitespace,
        '\n' => Dispatch::Newline,
        '"' => Dispatch::Quote,
        c if is_digit(&c) => Dispatch::Digit,
        c if is_alpha(&c) => Dispatch::Alpha,
        _ => Dispatch::Unexpected,
    }
}

impl<'a, F: FnMut(ScanningError)> Scanner<'a, F> {
    fn new(source: &'a str, error_reporter: F) -> Scanner<'a, F> {
        Scanner {
            source,
            tokens: vec![],
            error_reporter,
            current_lexeme_start: 0,
            current: 0,
            line: 1,
            lexeme_line: 1,
        }
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            if let Err(scanning_error) = self.scan_token() {
                (self.error_reporter)(scanning_error)
            }
        }
        self.tokens
            .push(Token::new(TokenType::EOF, "", None, self.line));
    }

    fn scan_token(&mut self) -> Result<(), ScanningError> {
        // set start of lexeme
        self.current_lexeme_start = self.current;
        self.lexeme_line = self.line;
        let Some(c) = self.advance() else {
            return Ok(());
        };
        let maybe_token = match dispatch(c) {
            Dispatch::Single(token_type) => Some((token_type, None)),
            Dispatch::OrEqual { plain, with_equal } => match self.match_one('=') {
                true => Some((with_equal, None)),
                false => Some((plain, None)),
            },
            Dispatch::Slash => {
                if self.match_one('/') {
                    while self.peek_one().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                    None
                } else if self.match_one('*') {
                    self.consume_if_match_block_comment()?;
                    None
                } else {
                    Some((TokenType::Slash, None))
                }
            }
            Dispatch::Whitespace => None,
            Dispatch::Newline => {
                self.line += 1;
                None
            }
            Dispatch::Quote => Some(self.consume_if_match_string()?),
            Dispatch::Digit => Some(self.consume_if_match_number()),
            Dispatch::Alpha => Some((self.consume_if_match_identifier(), None)),
            Dispatch::Unexpected => {
                return Err(ScanningError::UnexpectedCharacter {
                    line: self.line,
                    character: c,
                });
            }
        };

        if let Some((token_type, literal)) = maybe_token {
            self.add_token(token_type, literal);
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn match_one(&mut self, expected: char) -> bool {
        if self.peek_one() != Some(expected) {
            return false;
        }
        self.advance();
        true
    }

    /// Consumes one whole character, `current` stays on a char boundary.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek_one()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn add_token(&mut self, token_type: TokenType, literal: Option<Literal>) {
        let text = self.current_lexeme();
        self.tokens
            .push(Token::new(token_type, text, literal, self.lexeme_line));
    }

    fn current_lexeme(&self) -> &'a str {
        let source = self.source;
        &source[self.current_lexeme_start..self.current]
    }

    /// like advance but does not consume the character. 1 lookahead.
    fn peek_one(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// 2 lookahead
    fn peek_two(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn consume_if_match_string(&mut self) -> Result<(TokenType, Option<Literal>), ScanningError> {
        while let Some(c) = self.peek_one() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(ScanningError::UnterminatedString {
                line: self.lexeme_line,
            });
        }

        // consume closing quote
        self.advance();

        let lexeme = self.current_lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        Ok((TokenType::String, Some(Literal::String(value.to_string()))))
    }

    fn consume_if_match_number(&mut self) -> (TokenType, Option<Literal>) {
        while self.peek_one().is_some_and(|c| is_digit(&c)) {
            self.advance();
        }

        // a trailing '.' stays for the parser
        if self.peek_one() == Some('.') && self.peek_two().is_some_and(|c| is_digit(&c)) {
            // consume the '.'
            self.advance();
            while self.peek_one().is_some_and(|c| is_digit(&c)) {
                self.advance();
            }
        }

        // digits with an optional fraction always parse, overlong ones become infinity
        let value = self.current_lexeme().parse::<f64>().unwrap_or_default();
        (TokenType::Number, Some(Literal::Number(value)))
    }

    fn consume_if_match_identifier(&mut self) -> TokenType {
        while self.peek_one().is_some_and(|c| is_alphanumeric(&c)) {
            self.advance();
        }

        keyword(self.current_lexeme()).unwrap_or(TokenType::Identifier)
    }

    fn consume_if_match_block_comment(&mut self) -> Result<(), ScanningError> {
        loop {
            match self.peek_one() {
                None => {
                    return Err(ScanningError::UnterminatedBlockComment {
                        line: self.lexeme_line,
                    })
                }
                Some('*') if self.peek_two() == Some('/') => {
                    // consume '*' and '/'
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
            }
        }
    }
}

fn is_digit(c: &char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: &char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '_')
}

fn is_alphanumeric(c: &char) -> bool {
    is_digit(c) || is_alpha(c)
}
