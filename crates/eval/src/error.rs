use std::fmt;
use syntax::{Term, Value};
use thiserror::Error;

/// Which budget a run ran out of.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Limit {
    /// Number of reductions.
    Steps(usize),
    /// How deep inside the term the next redex sits.
    Depth(usize),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Steps(n) => write!(f, "{n} steps"),
            Limit::Depth(n) => write!(f, "nesting depth {n}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("{0} is not a function")]
    NotAFunction(Box<Term>),
    #[error("ran out of fresh variable names")]
    NamesExhausted,
    #[error("reduction limit of {limit} exceeded")]
    ReductionLimitExceeded { limit: Limit },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {lhs} {op} {rhs}")]
    Overflow { op: &'static str, lhs: i64, rhs: i64 },
    #[error("cannot apply {op} to {lhs} and {rhs}")]
    BadOperands {
        op: &'static str,
        lhs: Value,
        rhs: Value,
    },
    #[error("evaluation is stuck at {0}")]
    Stuck(Box<Term>),
}
