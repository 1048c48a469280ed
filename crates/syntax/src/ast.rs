use std::fmt;
use std::str::FromStr;

use crate::error::TermError;
use crate::types::Type;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    pub text: String,
}
impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }
}
impl From<String> for Name {
    fn from(text: String) -> Self {
        Self { text }
    }
}
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A variable occurrence or binder, with its type slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Var {
    pub name: Name,
    pub ty: Type,
}

impl Var {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            ty: Type::Unknown,
        }
    }
    pub fn typed(name: impl Into<Name>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
    pub fn is_typed(&self) -> bool {
        !self.ty.is_unknown()
    }
    /// Same type slot, different name.
    pub fn renamed(&self, name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            ty: self.ty.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    pub fn ty(&self) -> Type {
        match self {
            Value::Int(_) => Type::int(),
            Value::Str(_) => Type::str(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl FromStr for BinOp {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(BinOp::Add),
            "-" => Ok(BinOp::Sub),
            "*" => Ok(BinOp::Mul),
            "/" => Ok(BinOp::Div),
            other => Err(TermError::UnknownOperator(other.to_string())),
        }
    }
}

/// A term tree. Every compound node carries the type inference assigned to
/// it, `Type::Unknown` until then.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    Var(Var),
    Val(Value),
    Lamb {
        var: Var,
        body: Box<Term>,
        ty: Type,
    },
    Appl {
        fun: Box<Term>,
        arg: Box<Term>,
        ty: Type,
    },
    BinOp {
        op: BinOp,
        lhs: Box<Term>,
        rhs: Box<Term>,
        ty: Type,
    },
    Let {
        var: Var,
        bound: Box<Term>,
        body: Box<Term>,
        ty: Type,
    },
}

impl Term {
    pub fn var(name: impl Into<Name>) -> Term {
        Term::Var(Var::new(name))
    }
    pub fn typed_var(name: impl Into<Name>, ty: Type) -> Term {
        Term::Var(Var::typed(name, ty))
    }
    pub fn int(n: i64) -> Term {
        Term::Val(Value::Int(n))
    }
    pub fn str(s: impl Into<String>) -> Term {
        Term::Val(Value::Str(s.into()))
    }
    pub fn lamb(var: Var, body: Term) -> Term {
        Term::Lamb {
            var,
            body: Box::new(body),
            ty: Type::Unknown,
        }
    }
    pub fn appl(fun: Term, arg: Term) -> Term {
        Term::Appl {
            fun: Box::new(fun),
            arg: Box::new(arg),
            ty: Type::Unknown,
        }
    }
    /// Builds a `BinOp` node from its operator symbol, rejecting anything
    /// outside `+ - * /`.
    pub fn binop(op: &str, lhs: Term, rhs: Term) -> Result<Term, TermError> {
        Ok(Term::arith(op.parse()?, lhs, rhs))
    }
    pub fn arith(op: BinOp, lhs: Term, rhs: Term) -> Term {
        Term::BinOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            ty: Type::Unknown,
        }
    }
    pub fn let_in(var: Var, bound: Term, body: Term) -> Term {
        Term::Let {
            var,
            bound: Box::new(bound),
            body: Box::new(body),
            ty: Type::Unknown,
        }
    }

    /// The type recorded on this node.
    pub fn ty(&self) -> Type {
        match self {
            Term::Var(v) => v.ty.clone(),
            Term::Val(v) => v.ty(),
            Term::Lamb { ty, .. }
            | Term::Appl { ty, .. }
            | Term::BinOp { ty, .. }
            | Term::Let { ty, .. } => ty.clone(),
        }
    }

    pub fn is_lamb(&self) -> bool {
        matches!(self, Term::Lamb { .. })
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            Type::Unknown => write!(f, "{}", self.name),
            Type::Arrow(_, _) => write!(f, "{}:({})", self.name, self.ty),
            ty => write!(f, "{}:{}", self.name, ty),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{v}"),
            Term::Val(v) => write!(f, "{v}"),
            Term::Lamb { var, body, .. } => write!(f, "(λ{var}.{body})"),
            Term::Appl { fun, arg, .. } => {
                match fun.as_ref() {
                    Term::BinOp { .. } | Term::Let { .. } => write!(f, "({fun})")?,
                    _ => write!(f, "{fun}")?,
                }
                match arg.as_ref() {
                    Term::Appl { .. } | Term::BinOp { .. } | Term::Let { .. } => {
                        write!(f, " ({arg})")
                    }
                    _ => write!(f, " {arg}"),
                }
            }
            Term::BinOp { op, lhs, rhs, .. } => {
                write!(f, "{} {} {}", Operand(lhs), op.symbol(), Operand(rhs))
            }
            Term::Let {
                var, bound, body, ..
            } => write!(f, "let {var} = {bound} in {body}"),
        }
    }
}

// Operands of an arithmetic node that are themselves compound get parenthesized.
struct Operand<'a>(&'a Term);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Term::BinOp { .. } | Term::Let { .. } => write!(f, "({})", self.0),
            t => write!(f, "{t}"),
        }
    }
}
