use crate::types::Type;
use std::collections::HashMap;

/// Monomorphic typing environment: one type per term variable.
#[derive(Clone, Default, Debug)]
pub struct TypeEnv(pub HashMap<String, Type>);

impl TypeEnv {
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.0.get(name)
    }

    /// Binds `name`, handing back whatever binding it shadows so the caller
    /// can `restore` it when the scope closes.
    pub fn bind(&mut self, name: &str, ty: Type) -> Option<Type> {
        self.0.insert(name.to_string(), ty)
    }

    pub fn restore(&mut self, name: &str, shadowed: Option<Type>) {
        match shadowed {
            Some(ty) => {
                self.0.insert(name.to_string(), ty);
            }
            None => {
                self.0.remove(name);
            }
        }
    }

    pub fn extend(&self, name: &str, ty: Type) -> Self {
        let mut e = self.clone();
        e.bind(name, ty);
        e
    }
}
