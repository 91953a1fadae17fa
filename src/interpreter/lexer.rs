use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. The literal text is kept
    /// verbatim; the parser converts it and owns the overflow diagnostic.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Integer(String),
    /// String literal tokens. The payload is the text between the quotes,
    /// with no escape processing. A string missing its closing quote runs to
    /// the end of the input.
    #[regex(r#""[^"]*""#, read_string)]
    #[regex(r#""[^"]*"#, read_string)]
    Str(String),
    /// `ft`, the function literal keyword.
    #[token("ft")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens: maximal runs of ASCII letters and underscores that
    /// are not keywords. Digits are not identifier characters.
    #[regex(r"[A-Za-z_]+", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Any character no other rule recognizes, carried as its own literal so
    /// the parser can report it in context.
    #[regex(r"[^ \t\r\n]", |lex| lex.slice().to_owned(), priority = 1)]
    Illegal(String),
}

/// Strips the delimiting quotes from a string literal slice.
///
/// Handles both the terminated form (`"abc"`) and a literal cut short by the
/// end of input (`"abc`), which keeps everything after the opening quote.
fn read_string(lex: &logos::Lexer<Token>) -> String {
    let slice = &lex.slice()[1..];
    slice.strip_suffix('"').unwrap_or(slice).to_owned()
}

impl Token {
    /// Returns the diagnostic tag for this token kind.
    ///
    /// Payload-carrying kinds render as their kind name (`IDENT`, `INT`,
    /// `STRING`, `ILLEGAL`); fixed tokens render as their source symbol, and
    /// keywords as their upper-case name.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Identifier(_) => "IDENT",
            Self::Illegal(_) => "ILLEGAL",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Semicolon => ";",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Produces tokens from a source string, one per call.
///
/// The lexer is a thin wrapper over the generated [`logos`] scanner. Input
/// the scanner cannot match is surfaced as [`Token::Illegal`] rather than an
/// error, so lexing never fails; the parser decides what to do with the
/// offending lexeme.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer with its cursor at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// Returns the next token, advancing the cursor.
    ///
    /// Returns `None` once the input is exhausted, and keeps returning `None`
    /// on every later call.
    pub fn next_token(&mut self) -> Option<Token> {
        match self.inner.next() {
            Some(Ok(token)) => Some(token),
            Some(Err(())) => Some(Token::Illegal(self.inner.slice().to_owned())),
            None => None,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
