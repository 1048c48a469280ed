use crate::env::TypeEnv;
use crate::errors::TypeError;
use crate::types::{type_vars, TyVarSupply};
use std::collections::HashSet;
use syntax::Term;

pub mod term;

#[derive(Clone)]
pub struct InferOptions {
    /// Give unbound term variables a fresh type variable instead of failing.
    pub allow_free_vars: bool,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            allow_free_vars: true,
        }
    }
}

/// Infers and annotates `term` starting from an empty environment.
pub fn infer(term: Term) -> Result<Term, TypeError> {
    infer_with(&TypeEnv::default(), &InferOptions::default(), term)
}

/// Annotates every node of `term` with its type. The tree is consumed; on
/// error nothing annotated escapes.
pub fn infer_with(env: &TypeEnv, opts: &InferOptions, term: Term) -> Result<Term, TypeError> {
    let mut taken = HashSet::new();
    for ty in env.0.values() {
        type_vars(ty, &mut taken);
    }
    annotated_vars(&term, &mut taken);
    let mut tvs = TyVarSupply::avoiding(taken);
    let mut infer = term::InferState::new(env.clone(), opts.clone(), &mut tvs);
    let typed = infer.infer_term(term)?;
    Ok(infer.resolve_term(typed))
}

// Type variables the caller wrote into the tree, on binders and occurrences.
fn annotated_vars(term: &Term, out: &mut HashSet<String>) {
    match term {
        Term::Var(v) => type_vars(&v.ty, out),
        Term::Val(_) => {}
        Term::Lamb { var: v, body, ty } => {
            type_vars(&v.ty, out);
            type_vars(ty, out);
            annotated_vars(body, out);
        }
        Term::Appl { fun, arg, ty } => {
            type_vars(ty, out);
            annotated_vars(fun, out);
            annotated_vars(arg, out);
        }
        Term::BinOp { lhs, rhs, ty, .. } => {
            type_vars(ty, out);
            annotated_vars(lhs, out);
            annotated_vars(rhs, out);
        }
        Term::Let {
            var: v,
            bound,
            body,
            ty,
        } => {
            type_vars(&v.ty, out);
            type_vars(ty, out);
            annotated_vars(bound, out);
            annotated_vars(body, out);
        }
    }
}
