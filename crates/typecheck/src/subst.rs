use crate::types::Type;
use std::collections::HashMap;

/// Bindings from type-variable symbols to types. Entries are only ever added
/// during a run; lookups chase chains of bound variables.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Subst(pub HashMap<String, Type>);

impl Subst {
    pub fn empty() -> Self {
        Subst(HashMap::new())
    }
    pub fn single(v: impl Into<String>, t: Type) -> Self {
        Subst::empty().bind(v, t)
    }
    pub fn get(&self, v: &str) -> Option<&Type> {
        self.0.get(v)
    }
    pub fn bind(mut self, v: impl Into<String>, t: Type) -> Self {
        self.0.insert(v.into(), t);
        self
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fully applies the substitution, following bound variables until a
    /// free variable or a concrete type is reached.
    pub fn resolve(&self, t: &Type) -> Type {
        match t {
            Type::Var(v) => match self.0.get(v) {
                Some(bound) => self.resolve(bound),
                None => t.clone(),
            },
            Type::Arrow(a, b) => Type::arrow(self.resolve(a), self.resolve(b)),
            Type::Base(_) | Type::Unknown => t.clone(),
        }
    }
}
