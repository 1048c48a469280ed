use std::collections::HashSet;

pub use syntax::types::{BaseType, Type};

/// Mints unification variables for one inference run, skipping any name
/// already written in the program.
#[derive(Default)]
pub struct TyVarSupply {
    next: u32,
    taken: HashSet<String>,
}

impl TyVarSupply {
    pub fn avoiding(taken: HashSet<String>) -> Self {
        Self { next: 0, taken }
    }
    pub fn fresh(&mut self) -> String {
        loop {
            let name = format!("t{}", self.next);
            self.next += 1;
            if !self.taken.contains(&name) {
                return name;
            }
        }
    }
    pub fn fresh_ty(&mut self) -> Type {
        Type::Var(self.fresh())
    }
}

/// Collects the names of the type variables occurring in `ty`.
pub fn type_vars(ty: &Type, out: &mut HashSet<String>) {
    match ty {
        Type::Var(v) => {
            out.insert(v.clone());
        }
        Type::Arrow(a, b) => {
            type_vars(a, out);
            type_vars(b, out);
        }
        Type::Base(_) | Type::Unknown => {}
    }
}
