use std::thread;

use lox_scanner::{tokenize, Literal, ScanningError, Token, TokenType};

const PROGRAM: &str = "class Breakfast {
  // breakfast time
  cook(eggs) {
    print \"Eggs a-fryin'
on two lines\";
    /* side
       dish */ var toast = 2.5 * eggs;
    return toast >= 10 and !false;
  }
}
";

fn scan(source: &str) -> Vec<Token> {
    tokenize(source, |err| panic!("{err:?}"))
}

fn scan_with_errors(source: &str) -> (Vec<Token>, Vec<ScanningError>) {
    let mut errors = vec![];
    let tokens = tokenize(source, |err| errors.push(err));
    (tokens, errors)
}

/// Byte offset of every non-EOF token, found by walking the source left to right.
fn token_offsets(source: &str, tokens: &[Token]) -> Vec<usize> {
    let mut offsets = vec![];
    let mut position = 0;
    for token in &tokens[..tokens.len() - 1] {
        let found = source[position..]
            .find(token.lexeme())
            .unwrap_or_else(|| panic!("lexeme {:?} not in source", token.lexeme()));
        offsets.push(position + found);
        position += found + token.lexeme().len();
    }
    offsets
}

#[test]
fn test_scenario_arithmetic() {
    let tokens = scan("(1 + 2) * 3");
    let types: Vec<TokenType> = tokens.iter().map(|token| token.token_type()).collect();
    assert_eq!(
        types,
        vec![
            TokenType::LeftParen,
            TokenType::Number,
            TokenType::Plus,
            TokenType::Number,
            TokenType::RightParen,
            TokenType::Star,
            TokenType::Number,
            TokenType::EOF,
        ]
    );
    assert_eq!(tokens[1].literal(), Some(&Literal::Number(1.0)));
    assert_eq!(tokens[3].literal(), Some(&Literal::Number(2.0)));
    assert_eq!(tokens[6].literal(), Some(&Literal::Number(3.0)));
}

#[test]
fn test_scenario_unterminated_string() {
    let (tokens, errors) = scan_with_errors("\"abc");
    assert_eq!(tokens, vec![Token::new(TokenType::EOF, "", None, 1)]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line(), 1);
    assert_eq!(errors[0].to_string(), "Unterminated string.");
}

#[test]
fn test_scenario_greater_equal() {
    let tokens = scan(">=");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].token_type(), TokenType::GreaterEqual);
    assert_eq!(tokens[0].lexeme(), ">=");
}

#[test]
fn test_scenario_unexpected_character() {
    let (tokens, errors) = scan_with_errors("@");
    assert_eq!(tokens, vec![Token::new(TokenType::EOF, "", None, 1)]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line(), 1);
    assert_eq!(errors[0].to_string(), "Unexpected character.");
}

#[test]
fn test_always_exactly_one_eof() {
    for source in ["", "@@@", "\"open", "/* open", PROGRAM, "1.", "a\n\n"] {
        let (tokens, _) = scan_with_errors(source);
        let last = tokens.last().unwrap();
        assert_eq!(last.token_type(), TokenType::EOF);
        assert_eq!(last.lexeme(), "");
        assert_eq!(
            tokens
                .iter()
                .filter(|token| token.token_type() == TokenType::EOF)
                .count(),
            1
        );
    }
}

#[test]
fn test_lexemes_and_gaps_rebuild_the_source() {
    let tokens = scan(PROGRAM);
    let offsets = token_offsets(PROGRAM, &tokens);

    let mut rebuilt = String::new();
    let mut position = 0;
    for (token, offset) in tokens.iter().zip(offsets) {
        let gap = &PROGRAM[position..offset];
        // gaps hold nothing but whitespace and comments
        assert_eq!(scan(gap).len(), 1, "gap {gap:?}");
        rebuilt += gap;
        rebuilt += token.lexeme();
        position = offset + token.lexeme().len();
    }
    rebuilt += &PROGRAM[position..];
    assert_eq!(rebuilt, PROGRAM);
}

#[test]
fn test_line_is_one_plus_preceding_newlines() {
    let tokens = scan(PROGRAM);
    let offsets = token_offsets(PROGRAM, &tokens);
    for (token, offset) in tokens.iter().zip(offsets) {
        let expected = PROGRAM[..offset].matches('\n').count() + 1;
        assert_eq!(token.line(), expected, "token {token}");
    }
    assert_eq!(tokens.last().unwrap().line(), PROGRAM.matches('\n').count() + 1);
}

#[test]
fn test_reserved_words_followed_by_identifier_characters() {
    for word in [
        "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return",
        "super", "this", "true", "var", "while",
    ] {
        let keyword = scan(word);
        assert_ne!(keyword[0].token_type(), TokenType::Identifier, "{word}");
        for suffix in ["room", "_", "2"] {
            let longer = format!("{word}{suffix}");
            let tokens = scan(&longer);
            assert_eq!(tokens.len(), 2);
            assert_eq!(tokens[0].token_type(), TokenType::Identifier);
            assert_eq!(tokens[0].lexeme(), longer);
        }
    }
}

#[test]
fn test_scanners_run_on_separate_threads() {
    let expected = scan(PROGRAM);
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(|| scan(PROGRAM))).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
