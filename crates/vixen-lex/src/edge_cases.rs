//! Boundary-condition tests for the scanner and classifier, separated
//! from the main unit tests the way the rest of the pipeline keeps its
//! edge-case coverage apart from everyday-path coverage.

use crate::{Lexer, Token, TokenType};

fn lex_all(src: &[u8]) -> Vec<Token> {
    let mut lexer = Lexer::new(src.to_vec());
    let mut out = Vec::new();
    loop {
        let at_end = lexer.end();
        let tok = Lexer::next(&mut lexer);
        let is_control = tok.ttype.is_control();
        out.push(tok);
        if at_end || is_control {
            break;
        }
    }
    out
}

#[test]
fn test_edge_empty_source() {
    let toks = lex_all(b"");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].ttype, TokenType::Eol);
}

#[test]
fn test_edge_single_char_ident() {
    let toks = lex_all(b"x");
    assert_eq!(toks[0].ttype, TokenType::NameGeneric);
    assert_eq!(toks[0].symbol, b"x");
}

#[test]
fn test_edge_long_identifier() {
    let src = "a".repeat(10_000);
    let toks = lex_all(src.as_bytes());
    assert_eq!(toks[0].ttype, TokenType::NameGeneric);
    assert_eq!(toks[0].symbol.len(), 10_000);
}

#[test]
fn test_edge_keywords_not_idents() {
    for kw in ["if", "else", "while", "return", "class", "proto"] {
        let toks = lex_all(kw.as_bytes());
        assert_ne!(toks[0].ttype, TokenType::NameGeneric, "{kw} classified as identifier");
    }
}

#[test]
fn test_edge_hex_bounds() {
    let toks = lex_all(b"0x0 0xFF");
    assert_eq!(toks[0].ttype, TokenType::NumHex);
    assert_eq!(toks[1].ttype, TokenType::NumHex);
    assert_eq!(toks[1].symbol, b"0xFF");
}

#[test]
fn test_edge_binary() {
    let toks = lex_all(b"0b0 0b1010");
    assert_eq!(toks[0].ttype, TokenType::NumBin);
    assert_eq!(toks[1].symbol, b"0b1010");
}

#[test]
fn test_edge_octal() {
    let toks = lex_all(b"0o0 0o77");
    assert_eq!(toks[0].ttype, TokenType::NumOct);
    assert_eq!(toks[1].symbol, b"0o77");
}

#[test]
fn test_edge_triple_quoted_string_round_trips() {
    let toks = lex_all(b"'''hello''';");
    assert_eq!(toks[0].ttype, TokenType::StrTripleSingle);
    assert_eq!(toks[0].symbol, b"'''");
    assert_eq!(toks[1].symbol, b"hello");
    assert_eq!(toks[2].ttype, TokenType::StrTripleSingle);
    assert_eq!(toks[2].symbol, b"'''");
    assert_eq!(toks[3].ttype, TokenType::Semi);
}

#[test]
fn test_edge_adjacent_quote_chars_merge_into_one_symbol() {
    // A quote sequence only closes at its natural length when followed by
    // a non-quote byte; six quote characters in a row never split into
    // two triple-quote tokens, they accumulate into one symbol that no
    // longer matches any recognized quote literal.
    let toks = lex_all(b"\"\"\"\"\"\";");
    assert_eq!(toks[0].ttype, TokenType::ErrorBadString);
    assert_eq!(toks[0].symbol, b"\"\"\"\"\"\"");
    assert_eq!(toks[1].ttype, TokenType::Semi);
}

#[test]
fn test_edge_all_operators() {
    let src = b"& ? = | ^ -- ~ / // ++ && ! || > >= < <= - -= + += ** -> @ * %";
    let toks = lex_all(src);
    let expected = [
        TokenType::Amp,
        TokenType::Question,
        TokenType::Assign,
        TokenType::Pipe,
        TokenType::Caret,
        TokenType::MinusMinus,
        TokenType::Tilde,
        TokenType::Slash,
        TokenType::SlashSlash,
        TokenType::PlusPlus,
        TokenType::AmpAmp,
        TokenType::Bang,
        TokenType::PipePipe,
        TokenType::Gt,
        TokenType::Ge,
        TokenType::Lt,
        TokenType::Le,
        TokenType::Minus,
        TokenType::MinusAssign,
        TokenType::Plus,
        TokenType::PlusAssign,
        TokenType::StarStar,
        TokenType::Arrow,
        TokenType::At,
        TokenType::Star,
        TokenType::Percent,
    ];
    for (tok, want) in toks.iter().zip(expected.iter()) {
        assert_eq!(tok.ttype, *want, "token {:?}", tok);
    }
}

#[test]
fn test_edge_all_delimiters() {
    let toks = lex_all(b": , . { [ ( } ] ) ;");
    let expected = [
        TokenType::Colon,
        TokenType::Comma,
        TokenType::Dot,
        TokenType::LBrace,
        TokenType::LBracket,
        TokenType::LParen,
        TokenType::RBrace,
        TokenType::RBracket,
        TokenType::RParen,
        TokenType::Semi,
    ];
    for (tok, want) in toks.iter().zip(expected.iter()) {
        assert_eq!(tok.ttype, *want);
    }
}

#[test]
fn test_edge_nested_delimiters() {
    let toks = lex_all(b"(([{}]))");
    let kinds: Vec<_> = toks.iter().map(|t| t.ttype).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::LParen,
            TokenType::LParen,
            TokenType::LBracket,
            TokenType::LBrace,
            TokenType::RBrace,
            TokenType::RBracket,
            TokenType::RParen,
            TokenType::RParen,
            TokenType::Eol,
        ]
    );
}

#[test]
fn test_edge_unterminated_string_reaches_eof_without_panicking() {
    let toks = lex_all(b"\"abc");
    assert!(toks.iter().any(|t| t.ttype.is_control()));
}

#[test]
fn test_edge_comment_only_file_yields_control_token() {
    let toks = lex_all(b"# just a comment, no code\n");
    assert_eq!(toks.len(), 1);
    assert!(toks[0].ttype.is_control());
}

#[test]
fn test_edge_trailing_comment_with_no_final_newline_terminates() {
    let toks = lex_all(b"#");
    assert_eq!(toks.len(), 1);
    assert!(toks[0].ttype.is_control());

    let toks = lex_all(b"a #");
    assert_eq!(toks[0].ttype, TokenType::NameGeneric);
    assert!(toks.last().unwrap().ttype.is_control());
}
