mod types;

use lexer::{TokenKind as T, TokenStream};
use syntax::{BinOp, Span, Term, Type, Var};
use thiserror::Error;

pub type PResult<Ty> = Result<Ty, ParseError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    fn new<M: Into<String>>(msg: M, span: Span) -> Self {
        Self {
            message: msg.into(),
            span,
        }
    }
}

impl From<lexer::LexError> for ParseError {
    fn from(e: lexer::LexError) -> Self {
        ParseError::new(e.message, e.span)
    }
}

pub struct Parser<'a> {
    ts: TokenStream<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            ts: TokenStream::new(source),
        }
    }

    // ===== entry points =====

    /// program := (term ";")*
    pub fn parse_program(&mut self) -> PResult<Vec<Term>> {
        let mut stmts = Vec::new();
        while !self.ts.at_eof() {
            stmts.push(self.parse_term()?);
            self.ts.expect(T::Semicolon)?;
        }
        Ok(stmts)
    }

    /// A single term with an optional trailing `;`, filling the whole input.
    pub fn parse_single(&mut self) -> PResult<Term> {
        let t = self.parse_term()?;
        self.ts.consume_if(T::Semicolon);
        if !self.ts.at_eof() {
            return Err(self.unexpected_here(&["';'", "end of input"]));
        }
        Ok(t)
    }

    // ===== terms =====

    pub fn parse_term(&mut self) -> PResult<Term> {
        match self.ts.peek().kind.clone() {
            T::LParen if self.at_arrow_lambda() => self.parse_arrow_lambda(),
            T::Lambda => self.parse_lambda(),
            T::KwLet => self.parse_let(),
            _ => self.parse_sum(),
        }
    }

    // `(x)` alone is ambiguous until the `=>`; a `:` or `,` after the first
    // name already rules out a parenthesized term.
    fn at_arrow_lambda(&self) -> bool {
        if !matches!(self.ts.nth(1).kind, T::Ident(_)) {
            return false;
        }
        match self.ts.nth(2).kind {
            T::Colon | T::Comma => true,
            T::RParen => self.ts.nth(3).kind == T::FatArrow,
            _ => false,
        }
    }

    // "(" params ")" "=>" term, folded into nested abstractions.
    fn parse_arrow_lambda(&mut self) -> PResult<Term> {
        let params = self.parse_params()?;
        self.ts.expect(T::FatArrow)?;
        let body = self.parse_term()?;
        Ok(params
            .into_iter()
            .rev()
            .fold(body, |body, var| Term::lamb(var, body)))
    }

    fn parse_params(&mut self) -> PResult<Vec<Var>> {
        self.ts.expect(T::LParen)?;
        let mut params = vec![self.parse_binder()?];
        while self.ts.consume_if(T::Comma) {
            params.push(self.parse_binder()?);
        }
        self.ts.expect(T::RParen)?;
        Ok(params)
    }

    // ID [":" type]
    fn parse_binder(&mut self) -> PResult<Var> {
        let (name, _) = self.ts.expect_ident()?;
        let ty = if self.ts.consume_if(T::Colon) {
            self.parse_type()?
        } else {
            Type::Unknown
        };
        Ok(Var::typed(name, ty))
    }

    // "λ" binder "." term
    fn parse_lambda(&mut self) -> PResult<Term> {
        self.ts.expect(T::Lambda)?;
        let var = self.parse_binder()?;
        self.ts.expect(T::Dot)?;
        let body = self.parse_term()?;
        Ok(Term::lamb(var, body))
    }

    // "let" binder "=" term "in" term
    fn parse_let(&mut self) -> PResult<Term> {
        self.ts.expect(T::KwLet)?;
        let var = self.parse_binder()?;
        self.ts.expect(T::Eq)?;
        let bound = self.parse_term()?;
        self.ts.expect(T::KwIn)?;
        let body = self.parse_term()?;
        Ok(Term::let_in(var, bound, body))
    }

    // sum := sum ("+" | "-") product | product
    fn parse_sum(&mut self) -> PResult<Term> {
        let mut lhs = self.parse_product()?;
        loop {
            let op = match self.ts.peek().kind {
                T::Plus => BinOp::Add,
                T::Minus => BinOp::Sub,
                _ => break,
            };
            self.ts.advance();
            let rhs = self.parse_product()?;
            lhs = Term::arith(op, lhs, rhs);
        }
        Ok(lhs)
    }

    // product := product ("*" | "/") app | app
    fn parse_product(&mut self) -> PResult<Term> {
        let mut lhs = self.parse_app()?;
        loop {
            let op = match self.ts.peek().kind {
                T::Star => BinOp::Mul,
                T::Slash => BinOp::Div,
                _ => break,
            };
            self.ts.advance();
            let rhs = self.parse_app()?;
            lhs = Term::arith(op, lhs, rhs);
        }
        Ok(lhs)
    }

    // app := atom { atom }
    fn parse_app(&mut self) -> PResult<Term> {
        let mut e = self.parse_atom()?;
        while self.starts_atom() {
            let arg = self.parse_atom()?;
            e = Term::appl(e, arg);
        }
        Ok(e)
    }

    fn starts_atom(&self) -> bool {
        matches!(
            self.ts.peek().kind,
            T::Ident(_) | T::Int(_) | T::String(_) | T::LParen
        ) || self.at_signed_int()
    }

    // `f -1` applies f to -1 while `f - 1` and `f-1` subtract: a '-' glued
    // to the digits after it but not to the token before it is a sign.
    fn at_signed_int(&self) -> bool {
        let minus = self.ts.peek();
        let digits = self.ts.nth(1);
        minus.kind == T::Minus
            && matches!(digits.kind, T::Int(_))
            && minus.span.hi == digits.span.lo
            && self.ts.prev().map_or(true, |p| p.span.hi < minus.span.lo)
    }

    fn parse_atom(&mut self) -> PResult<Term> {
        let t = self.ts.peek().clone();
        match t.kind {
            T::Ident(name) => {
                self.ts.advance();
                Ok(Term::var(name))
            }
            T::Int(n) => {
                self.ts.advance();
                Ok(Term::int(n))
            }
            T::Minus => match self.ts.nth(1).kind.clone() {
                T::Int(n) => {
                    self.ts.advance();
                    self.ts.advance();
                    Ok(Term::int(-n))
                }
                _ => Err(self.unexpected_here(&["term"])),
            },
            T::String(s) => {
                self.ts.advance();
                Ok(Term::str(s))
            }
            T::LParen => {
                self.ts.advance();
                let inner = self.parse_term()?;
                self.ts.expect(T::RParen)?;
                Ok(inner)
            }
            _ => Err(self.unexpected_here(&["term"])),
        }
    }

    fn unexpected_here(&self, expected: &[&str]) -> ParseError {
        let got = self.ts.peek();
        ParseError::new(
            format!(
                "expected {}, found {}",
                expected.join(" or "),
                lexer::stream::display_kind(&got.kind)
            ),
            got.span,
        )
    }
}

// ===== re-export helpers =====
pub fn parse_program(source: &str) -> PResult<Vec<Term>> {
    Parser::new(source).parse_program()
}
pub fn parse_term(source: &str) -> PResult<Term> {
    Parser::new(source).parse_single()
}
