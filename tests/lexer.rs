use simplescript::{Lexer, Token};

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_owned())
}

fn int(literal: &str) -> Token {
    Token::Integer(literal.to_owned())
}

#[test]
fn single_character_tokens() {
    assert_eq!(tokens("=+-!*/<>(){}[]:,;"),
               vec![Token::Equals,
                    Token::Plus,
                    Token::Minus,
                    Token::Bang,
                    Token::Star,
                    Token::Slash,
                    Token::Less,
                    Token::Greater,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::LBracket,
                    Token::RBracket,
                    Token::Colon,
                    Token::Comma,
                    Token::Semicolon]);
}

#[test]
fn two_character_operators_are_single_tokens() {
    assert_eq!(tokens("== != <= >="),
               vec![Token::EqualEqual,
                    Token::BangEqual,
                    Token::LessEqual,
                    Token::GreaterEqual]);

    // The same holds without separating whitespace.
    assert_eq!(tokens("a==b"), vec![ident("a"), Token::EqualEqual, ident("b")]);
    assert_eq!(tokens("1<=2"), vec![int("1"), Token::LessEqual, int("2")]);
}

#[test]
fn keywords_are_recognized() {
    assert_eq!(tokens("ft let true false if else return"),
               vec![Token::Function,
                    Token::Let,
                    Token::True,
                    Token::False,
                    Token::If,
                    Token::Else,
                    Token::Return]);
}

#[test]
fn words_containing_keywords_are_identifiers() {
    assert_eq!(tokens("fts lets truest iff"),
               vec![ident("fts"), ident("lets"), ident("truest"), ident("iff")]);
}

#[test]
fn identifiers_do_not_include_digits() {
    assert_eq!(tokens("foo_bar"), vec![ident("foo_bar")]);
    assert_eq!(tokens("foo1"), vec![ident("foo"), int("1")]);
    assert_eq!(tokens("_x"), vec![ident("_x")]);
}

#[test]
fn string_literals_keep_interior_text() {
    assert_eq!(tokens(r#""hello world""#), vec![Token::Str("hello world".to_owned())]);
    assert_eq!(tokens(r#""""#), vec![Token::Str(String::new())]);

    // No escape processing: the backslash is just a byte.
    assert_eq!(tokens(r#""a\b""#), vec![Token::Str(r"a\b".to_owned())]);

    // A string missing its closing quote runs to the end of the input.
    assert_eq!(tokens(r#""unterminated"#), vec![Token::Str("unterminated".to_owned())]);
}

#[test]
fn unknown_characters_become_illegal_tokens() {
    assert_eq!(tokens("@"), vec![Token::Illegal("@".to_owned())]);
    assert_eq!(tokens("1 & 2"),
               vec![int("1"), Token::Illegal("&".to_owned()), int("2")]);
}

#[test]
fn exhausted_input_keeps_returning_none() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token(), Some(ident("x")));
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn lexes_a_representative_program() {
    let source = r#"
        let five = 5;
        let add = ft(x, y) {
            x + y;
        };
        let result = add(five, 10);

        if (5 <= 10) {
            return true;
        } else {
            return false;
        }

        "foobar"
        [1, 2];
        {"foo": "bar"}
    "#;

    let expected = vec![Token::Let,
                        ident("five"),
                        Token::Equals,
                        int("5"),
                        Token::Semicolon,
                        Token::Let,
                        ident("add"),
                        Token::Equals,
                        Token::Function,
                        Token::LParen,
                        ident("x"),
                        Token::Comma,
                        ident("y"),
                        Token::RParen,
                        Token::LBrace,
                        ident("x"),
                        Token::Plus,
                        ident("y"),
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Semicolon,
                        Token::Let,
                        ident("result"),
                        Token::Equals,
                        ident("add"),
                        Token::LParen,
                        ident("five"),
                        Token::Comma,
                        int("10"),
                        Token::RParen,
                        Token::Semicolon,
                        Token::If,
                        Token::LParen,
                        int("5"),
                        Token::LessEqual,
                        int("10"),
                        Token::RParen,
                        Token::LBrace,
                        Token::Return,
                        Token::True,
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Else,
                        Token::LBrace,
                        Token::Return,
                        Token::False,
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Str("foobar".to_owned()),
                        Token::LBracket,
                        int("1"),
                        Token::Comma,
                        int("2"),
                        Token::RBracket,
                        Token::Semicolon,
                        Token::LBrace,
                        Token::Str("foo".to_owned()),
                        Token::Colon,
                        Token::Str("bar".to_owned()),
                        Token::RBrace];

    assert_eq!(tokens(source), expected);
}
