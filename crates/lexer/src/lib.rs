use logos::Logos;
use std::string::String as RustString;
use syntax::Span;
use thiserror::Error;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"([ \t\n\r\f]+|#[^\n]*)")]
pub enum TokenKind {
    // ===== Keywords (exact tokens; these win over Ident regex) =====
    #[token("let")]
    KwLet,
    #[token("in")]
    KwIn,

    // ===== Literals =====
    // Unsigned here; the parser folds a leading '-' into the literal.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),
    #[regex(r#""([^"\\]|\\.)*""#, |lex| parse_string(lex.slice()))]
    String(RustString),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(RustString),

    // ===== Symbols =====
    #[token("λ")]
    #[token("\\")]
    Lambda,
    #[token("=")]
    Eq,
    #[token("=>")]
    FatArrow,
    #[token("->")]
    Arrow,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("'")]
    Quote,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    Eof,

    Error,
}

fn parse_string(s: &str) -> Result<RustString, ()> {
    let inner = s
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(())?;
    let mut result = RustString::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('0') => result.push('\0'),
            Some(other) => result.push(other),
            None => return Err(()),
        }
    }
    Ok(result)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl From<(TokenKind, std::ops::Range<usize>)> for Token {
    fn from((kind, range): (TokenKind, std::ops::Range<usize>)) -> Self {
        Token {
            kind,
            span: Span::new(range.start as u32, range.end as u32),
        }
    }
}

/// Lexes the whole source. Unrecognized input becomes `TokenKind::Error`
/// tokens rather than stopping the scan.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lx = TokenKind::lexer(source);
    let mut out = Vec::new();
    while let Some(kind) = lx.next() {
        let span = lx.span();
        let kind = kind.unwrap_or(TokenKind::Error);
        out.push(Token::from((kind, span)));
    }
    out
}

/// Error the parser raises when the token stream does not match its
/// expectations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct LexError {
    pub message: RustString,
    pub span: Span,
}

impl LexError {
    pub fn new<M: Into<RustString>>(message: M, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

pub mod stream;
pub use stream::TokenStream;
pub use TokenKind::*;
