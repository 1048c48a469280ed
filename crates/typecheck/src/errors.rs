use crate::types::Type;
use syntax::Term;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypeError {
    #[error("type mismatch at {at}: expected {expected}, got {found}")]
    Mismatch {
        expected: Type,
        found: Type,
        at: Box<Term>,
    },
    #[error("unbound variable {0}")]
    UnboundVariable(String),
}

impl TypeError {
    pub fn mismatch(expected: Type, found: Type, at: Term) -> Self {
        TypeError::Mismatch {
            expected,
            found,
            at: Box::new(at),
        }
    }
}
