//! Token definitions for the Nitro language.

use std::fmt;

use nitro_util::Location;

/// The fixed symbol set of the language
///
/// Spellings are one or two characters. During lexing symbols are tried
/// longest first (see [`Sym::LONGEST_FIRST`]) so `==` beats `=` and `++`
/// beats `+`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sym {
    /// ","
    Comma,
    /// ";"
    Semicolon,
    /// "="
    Assign,
    /// "+"
    Plus,
    /// "-"
    Minus,
    /// "*"
    Star,
    /// "/"
    Slash,
    /// "%"
    Percent,
    /// "|"
    Pipe,
    /// "&"
    Ampersand,
    /// "=="
    EqEq,
    /// "!="
    NotEq,
    /// "<"
    Lt,
    /// "<="
    LtEq,
    /// ">"
    Gt,
    /// ">="
    GtEq,
    /// "("
    LParen,
    /// ")"
    RParen,
    /// "{"
    LBrace,
    /// "}"
    RBrace,
    /// "++"
    PlusPlus,
    /// "--"
    MinusMinus,
}

impl Sym {
    /// All symbols ordered longest spelling first
    ///
    /// This is the match order used by the lexer; within a length class the
    /// language's original symbol order is kept.
    pub const LONGEST_FIRST: [Sym; 22] = [
        Sym::EqEq,
        Sym::NotEq,
        Sym::LtEq,
        Sym::GtEq,
        Sym::PlusPlus,
        Sym::MinusMinus,
        Sym::Comma,
        Sym::Semicolon,
        Sym::Assign,
        Sym::Plus,
        Sym::Minus,
        Sym::Star,
        Sym::Slash,
        Sym::Percent,
        Sym::Pipe,
        Sym::Ampersand,
        Sym::Lt,
        Sym::Gt,
        Sym::LParen,
        Sym::RParen,
        Sym::LBrace,
        Sym::RBrace,
    ];

    /// The source spelling of this symbol
    pub const fn as_str(self) -> &'static str {
        match self {
            Sym::Comma => ",",
            Sym::Semicolon => ";",
            Sym::Assign => "=",
            Sym::Plus => "+",
            Sym::Minus => "-",
            Sym::Star => "*",
            Sym::Slash => "/",
            Sym::Percent => "%",
            Sym::Pipe => "|",
            Sym::Ampersand => "&",
            Sym::EqEq => "==",
            Sym::NotEq => "!=",
            Sym::Lt => "<",
            Sym::LtEq => "<=",
            Sym::Gt => ">",
            Sym::GtEq => ">=",
            Sym::LParen => "(",
            Sym::RParen => ")",
            Sym::LBrace => "{",
            Sym::RBrace => "}",
            Sym::PlusPlus => "++",
            Sym::MinusMinus => "--",
        }
    }

    /// True if `c` appears in any symbol spelling
    ///
    /// Such characters terminate identifiers.
    pub const fn is_symbol_char(c: char) -> bool {
        matches!(
            c,
            ',' | ';'
                | '='
                | '+'
                | '-'
                | '*'
                | '/'
                | '%'
                | '|'
                | '&'
                | '!'
                | '<'
                | '>'
                | '('
                | ')'
                | '{'
                | '}'
        )
    }
}

impl fmt::Display for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The reserved words of the language
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kw {
    Const,
    If,
    Else,
    While,
    Do,
    For,
    Break,
    Return,
}

impl Kw {
    /// The source spelling of this keyword
    pub const fn as_str(self) -> &'static str {
        match self {
            Kw::Const => "const",
            Kw::If => "if",
            Kw::Else => "else",
            Kw::While => "while",
            Kw::Do => "do",
            Kw::For => "for",
            Kw::Break => "break",
            Kw::Return => "return",
        }
    }
}

impl fmt::Display for Kw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up the keyword matching an identifier spelling, if any
pub fn keyword_from_ident(text: &str) -> Option<Kw> {
    match text {
        "const" => Some(Kw::Const),
        "if" => Some(Kw::If),
        "else" => Some(Kw::Else),
        "while" => Some(Kw::While),
        "do" => Some(Kw::Do),
        "for" => Some(Kw::For),
        "break" => Some(Kw::Break),
        "return" => Some(Kw::Return),
        _ => None,
    }
}

/// The payload of a token
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// A symbol from the fixed set
    Symbol(Sym),
    /// A reserved word
    Keyword(Kw),
    /// A non-empty identifier
    Identifier(String),
    /// An integer literal (decimal, hex, binary, or octal in source)
    Integer(i64),
    /// A finite floating-point literal
    Float(f64),
    /// A string literal with quotes stripped; the inner text is kept
    /// verbatim, escape sequences are not decoded
    Str(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Symbol(sym) => write!(f, "'{}'", sym),
            TokenKind::Keyword(kw) => write!(f, "'{}'", kw),
            TokenKind::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenKind::Integer(value) => write!(f, "integer {}", value),
            TokenKind::Float(value) => write!(f, "float {}", value),
            TokenKind::Str(value) => write!(f, "string '{}'", value),
        }
    }
}

/// A lexical token with its source location
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Location,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Self { kind, location }
    }
}
