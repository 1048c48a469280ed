use std::fmt;
use std::str::FromStr;

use crate::error::TermError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseType {
    Int,
    Str,
    Bool,
}

impl BaseType {
    pub fn name(self) -> &'static str {
        match self {
            BaseType::Int => "int",
            BaseType::Str => "str",
            BaseType::Bool => "bool",
        }
    }
}

impl FromStr for BaseType {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(BaseType::Int),
            "str" => Ok(BaseType::Str),
            "bool" => Ok(BaseType::Bool),
            other => Err(TermError::UnknownType(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Type {
    /// Not inferred yet. Never handed to the unifier.
    #[default]
    Unknown,
    Var(String),
    Base(BaseType),
    Arrow(Box<Type>, Box<Type>),
}

impl Type {
    pub fn var(name: impl Into<String>) -> Type {
        Type::Var(name.into())
    }
    pub fn arrow(a: Type, b: Type) -> Type {
        Type::Arrow(Box::new(a), Box::new(b))
    }
    pub fn int() -> Type {
        Type::Base(BaseType::Int)
    }
    pub fn str() -> Type {
        Type::Base(BaseType::Str)
    }
    pub fn bool() -> Type {
        Type::Base(BaseType::Bool)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Type::Unknown)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unknown => write!(f, "unk"),
            Type::Var(v) => write!(f, "'{v}"),
            Type::Base(b) => write!(f, "{b}"),
            Type::Arrow(a, b) => match a.as_ref() {
                Type::Arrow(_, _) => write!(f, "({a}) -> {b}"),
                _ => write!(f, "{a} -> {b}"),
            },
        }
    }
}
