use crate::{lex, Eof, LexError, Token, TokenKind};
use syntax::Span;

/// A cursor over a vector of tokens with convenient parsing helpers.
///
/// Typical use in a parser:
/// ```ignore
/// let mut ts = TokenStream::new(source_code);
/// let t = ts.peek();              // look but don't consume
/// ts.expect(KwLet)?;              // require a specific token
/// if ts.consume_if(Comma) { ... } // consume if present
/// if ts.nth(1).kind == Colon { ... } // decide by lookahead
/// ```
#[derive(Clone)]
pub struct TokenStream<'a> {
    src: &'a str,
    toks: Vec<Token>,
    idx: usize,
}

impl<'a> TokenStream<'a> {
    /// Lex the input and append an EOF sentinel.
    pub fn new(source: &'a str) -> Self {
        let mut toks = lex(source);
        toks.push(Token {
            kind: Eof,
            span: Span::new(source.len() as u32, source.len() as u32),
        });
        Self {
            src: source,
            toks,
            idx: 0,
        }
    }

    pub fn peek(&self) -> &Token {
        &self.toks[self.idx]
    }

    /// Peek `n` tokens ahead (0 = current). Sticks to EOF at end.
    pub fn nth(&self, n: usize) -> &Token {
        let i = self.idx.saturating_add(n);
        &self.toks[i.min(self.toks.len() - 1)]
    }

    /// The most recently consumed token, if any.
    pub fn prev(&self) -> Option<&Token> {
        self.idx.checked_sub(1).map(|i| &self.toks[i])
    }

    pub fn at_eof(&self) -> bool {
        self.peek().kind == Eof
    }

    /// Consume the current token. Never moves past EOF.
    pub fn advance(&mut self) -> Token {
        let tok = self.toks[self.idx].clone();
        if self.idx < self.toks.len() - 1 {
            self.idx += 1;
        }
        tok
    }

    /// Consume the current token **iff** it matches `kind`.
    pub fn consume_if(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect a specific token kind; returns error with the current span if not present.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, LexError> {
        if self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&[kind]))
        }
    }

    /// Expect an identifier and return its text.
    pub fn expect_ident(&mut self) -> Result<(String, Span), LexError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let span = self.advance().span;
                Ok((name, span))
            }
            _ => Err(self.unexpected(&[TokenKind::Ident(String::new())])),
        }
    }

    /// Build a friendly unexpected-token error.
    pub fn unexpected(&self, expected: &[TokenKind]) -> LexError {
        let got = &self.peek().kind;
        let exp_list = expected
            .iter()
            .map(display_kind)
            .collect::<Vec<_>>()
            .join(", ");
        LexError::new(
            format!("expected {exp_list}, found {}", display_kind(got)),
            self.peek().span,
        )
    }

    /// Slice the original source by `span` (useful for error messages).
    pub fn slice(&self, span: Span) -> &str {
        let lo = (span.lo as usize).min(self.src.len());
        let hi = (span.hi as usize).min(self.src.len());
        self.src.get(lo..hi).unwrap_or("")
    }
}

pub fn display_kind(k: &TokenKind) -> &'static str {
    use TokenKind::*;
    match k {
        KwLet => "keyword 'let'",
        KwIn => "keyword 'in'",

        Int(_) => "integer literal",
        String(_) => "string literal",
        Ident(_) => "identifier",

        Lambda => "'λ'",
        Eq => "'='",
        FatArrow => "'=>'",
        Arrow => "'->'",
        Colon => "':'",
        Semicolon => "';'",
        Comma => "','",
        Dot => "'.'",
        LParen => "'('",
        RParen => "')'",
        Quote => "'''",
        Plus => "'+'",
        Minus => "'-'",
        Star => "'*'",
        Slash => "'/'",

        Eof => "end of input",
        Error => "invalid token",
    }
}
