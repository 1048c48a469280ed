//! Term and type model shared by the inferencer, the evaluator and the
//! front-end.

pub mod ast;
pub mod error;
pub mod span;
pub mod types;

pub use ast::{BinOp, Name, Term, Value, Var};
pub use error::TermError;
pub use span::Span;
pub use types::{BaseType, Type};
