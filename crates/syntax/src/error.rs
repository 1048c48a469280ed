use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error("unknown operator {0}")]
    UnknownOperator(String),
    #[error("unknown base type {0}")]
    UnknownType(String),
}
