use crate::scanner::{tokenize, ScanningError};
use crate::token::{Token, TokenType};

#[allow(dead_code)]
pub fn scan_ok(code: &str) -> Vec<Token> {
    tokenize(code, |error| panic!("{error:?}"))
}

#[allow(dead_code)]
pub fn scan_with_errors(code: &str) -> (Vec<Token>, Vec<ScanningError>) {
    let mut errors = vec![];
    let tokens = tokenize(code, |error| errors.push(error));
    (tokens, errors)
}

#[allow(dead_code)]
pub fn token_types(code: &str) -> Vec<TokenType> {
    scan_ok(code).iter().map(|token| token.r#type).collect()
}
