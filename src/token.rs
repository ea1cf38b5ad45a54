use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

lazy_static! {
    /// Reserved words. Built on first lookup and never written to again.
    pub static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut map = HashMap::new();
        map.insert("and", TokenType::And);
        map.insert("class", TokenType::Class);
        map.insert("else", TokenType::Else);
        map.insert("false", TokenType::False);
        map.insert("for", TokenType::For);
        map.insert("fun", TokenType::Fun);
        map.insert("if", TokenType::If);
        map.insert("nil", TokenType::Nil);
        map.insert("or", TokenType::Or);
        map.insert("print", TokenType::Print);
        map.insert("return", TokenType::Return);
        map.insert("super", TokenType::Super);
        map.insert("this", TokenType::This);
        map.insert("true", TokenType::True);
        map.insert("var", TokenType::Var);
        map.insert("while", TokenType::While);
        map
    };
}

/// Looks up an exact spelling in the keyword table.
pub fn keyword(text: &str) -> Option<TokenType> {
    KEYWORDS.get(text).copied()
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub(crate) r#type: TokenType,
    pub(crate) lexeme: String,
    pub(crate) literal: Option<Literal>,
    /// Line of the lexeme's first character, 1-based.
    pub(crate) line: usize,
}

impl Token {
    pub fn new(r#type: TokenType, lexeme: &str, literal: Option<Literal>, line: usize) -> Token {
        Token {
            r#type,
            lexeme: lexeme.to_string(),
            literal,
            line,
        }
    }

    pub fn token_type(&self) -> TokenType {
        self.r#type
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.r#type, self.lexeme, literal),
            None => write!(f, "{} {} null", self.r#type, self.lexeme),
        }
    }
}

/// Value carried by NUMBER and STRING tokens.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // whole numbers keep their ".0" so `1` and `1.0` print the same way
            Literal::Number(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Literal::Number(value) => write!(f, "{value}"),
            Literal::String(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Identifier,
    String,
    Number,

    EOF,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::LeftBrace => "LEFT_BRACE",
            TokenType::RightBrace => "RIGHT_BRACE",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::Minus => "MINUS",
            TokenType::Plus => "PLUS",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Slash => "SLASH",
            TokenType::Star => "STAR",
            TokenType::Bang => "BANG",
            TokenType::BangEqual => "BANG_EQUAL",
            TokenType::Equal => "EQUAL",
            TokenType::EqualEqual => "EQUAL_EQUAL",
            TokenType::Greater => "GREATER",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Less => "LESS",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::And => "AND",
            TokenType::Class => "CLASS",
            TokenType::Else => "ELSE",
            TokenType::False => "FALSE",
            TokenType::Fun => "FUN",
            TokenType::For => "FOR",
            TokenType::If => "IF",
            TokenType::Nil => "NIL",
            TokenType::Or => "OR",
            TokenType::Print => "PRINT",
            TokenType::Return => "RETURN",
            TokenType::Super => "SUPER",
            TokenType::This => "THIS",
            TokenType::True => "TRUE",
            TokenType::Var => "VAR",
            TokenType::While => "WHILE",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::String => "STRING",
            TokenType::Number => "NUMBER",
            TokenType::EOF => "EOF",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{keyword, Literal, Token, TokenType, KEYWORDS};

    #[test]
    fn test_keyword_table_has_every_reserved_word() {
        assert_eq!(KEYWORDS.len(), 16);
        assert_eq!(keyword("class"), Some(TokenType::Class));
        assert_eq!(keyword("while"), Some(TokenType::While));
        assert_eq!(keyword("nil"), Some(TokenType::Nil));
    }

    #[test]
    fn test_keyword_lookup_is_exact() {
        assert_eq!(keyword("classroom"), None);
        assert_eq!(keyword("Class"), None);
        assert_eq!(keyword(""), None);
    }

    #[test]
    fn test_display_number_literals() {
        assert_eq!(Literal::Number(1.0).to_string(), "1.0");
        assert_eq!(Literal::Number(2.5).to_string(), "2.5");
        assert_eq!(Literal::Number(100.0).to_string(), "100.0");
    }

    #[test]
    fn test_display_token() {
        let token = Token::new(TokenType::Number, "12", Some(Literal::Number(12.0)), 3);
        assert_eq!(token.to_string(), "NUMBER 12 12.0");

        let token = Token::new(TokenType::GreaterEqual, ">=", None, 1);
        assert_eq!(token.to_string(), "GREATER_EQUAL >= null");

        let token = Token::new(
            TokenType::String,
            "\"hi there\"",
            Some(Literal::String("hi there".to_string())),
            1,
        );
        assert_eq!(token.to_string(), "STRING \"hi there\" hi there");
    }

    #[test]
    fn test_eof_display() {
        assert_eq!(Token::new(TokenType::EOF, "", None, 7).to_string(), "EOF  null");
    }
}
