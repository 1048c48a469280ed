use crate::{PResult, ParseError, Parser};
use lexer::TokenKind as T;
use syntax::{BaseType, Type};

impl Parser<'_> {
    /// type := ("'" ID | ID | "(" type ")") ["->" type]
    ///
    /// Arrows associate to the right.
    pub fn parse_type(&mut self) -> PResult<Type> {
        let t = self.ts.peek().clone();
        let dom = match t.kind {
            T::Quote => {
                self.ts.advance();
                let (name, _) = self.ts.expect_ident()?;
                Type::var(name)
            }
            T::Ident(name) => {
                self.ts.advance();
                let base: BaseType = name
                    .parse()
                    .map_err(|e: syntax::TermError| ParseError::new(e.to_string(), t.span))?;
                Type::Base(base)
            }
            T::LParen => {
                self.ts.advance();
                let inner = self.parse_type()?;
                self.ts.expect(T::RParen)?;
                inner
            }
            _ => return Err(self.unexpected_here(&["type"])),
        };
        if self.ts.consume_if(T::Arrow) {
            Ok(Type::arrow(dom, self.parse_type()?))
        } else {
            Ok(dom)
        }
    }
}
