use super::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    let mut out = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokenKind::Eof;
        out.push(tok.kind);
        if done {
            break;
        }
    }
    out
}

#[test]
fn next_token_recognizes_basic_punctuation_and_operators() {
    let input = "=+(){},;";
    use TokenKind::*;
    assert_eq!(
        kinds(input),
        vec![
            Assign, Plus, LParen, RParen, LBrace, RBrace, Comma, Semicolon, Eof
        ]
    );
}

#[test]
fn next_token_handles_a_small_program() {
    let input = "let five = 5;\nlet add = fn(x, y) {\n  x + y;\n};\nlet result = add(five, 10);";
    use TokenKind::*;
    let got = kinds(input);
    let expected = vec![
        Let, Ident, Assign, Int, Semicolon, Let, Ident, Assign, Function, LParen, Ident, Comma,
        Ident, RParen, LBrace, Ident, Plus, Ident, Semicolon, RBrace, Semicolon, Let, Ident,
        Assign, Ident, LParen, Ident, Comma, Int, RParen, Semicolon, Eof,
    ];
    assert_eq!(got, expected);
}

#[test]
fn next_token_recognizes_two_character_operators_and_keywords() {
    let input = "!-/*5;\n5 < 10 > 5;\nif (5 < 10) {\n  return true;\n} else {\n  return false;\n}\n10 == 10;\n10 != 9;";
    use TokenKind::*;
    let got = kinds(input);
    assert!(got.contains(&Bang));
    assert!(got.contains(&Slash));
    assert!(got.contains(&Asterisk));
    assert!(got.contains(&If));
    assert!(got.contains(&Else));
    assert!(got.contains(&Return));
    assert!(got.contains(&True));
    assert!(got.contains(&False));
    assert!(got.contains(&Eq));
    assert!(got.contains(&NotEq));
}

#[test]
fn next_token_recognizes_strings_and_brackets() {
    let mut lexer = Lexer::new("\"foobar\"\n\"foo bar\"\n[1, 2];\n{\"foo\": \"bar\"}");
    assert_eq!(lexer.next_token().literal, "foobar");
    assert_eq!(lexer.next_token().literal, "foo bar");
    assert_eq!(lexer.next_token().kind, TokenKind::LBracket);
}

#[test]
fn next_token_returns_eof_forever_after_input_ends() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn unterminated_string_is_tolerated() {
    let mut lexer = Lexer::new("\"unterminated");
    let tok = lexer.next_token();
    assert_eq!(tok.kind, TokenKind::Str);
    assert_eq!(tok.literal, "unterminated");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn unknown_character_is_illegal() {
    let mut lexer = Lexer::new("@");
    assert_eq!(lexer.next_token().kind, TokenKind::Illegal);
}
