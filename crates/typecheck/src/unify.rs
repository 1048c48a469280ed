use crate::subst::Subst;
use crate::types::Type;
use tracing::debug;

/// Syntactic equality as seen by the unifier. `Unknown` equals nothing.
pub fn unify_eq(x: &Type, y: &Type) -> bool {
    match (x, y) {
        (Type::Var(a), Type::Var(b)) => a == b,
        (Type::Base(a), Type::Base(b)) => a == b,
        (Type::Arrow(a1, a2), Type::Arrow(b1, b2)) => unify_eq(a1, b1) && unify_eq(a2, b2),
        _ => false,
    }
}

/// Extends `subst` so that `x` and `y` become equal, or returns `None` when
/// they cannot be.
pub fn unify(x: &Type, y: &Type, subst: Subst) -> Option<Subst> {
    unify_or_keep(x, y, subst).ok()
}

/// Like `unify`, but hands the substitution back on failure. Bindings made
/// before the clash are still in it.
pub fn unify_or_keep(x: &Type, y: &Type, subst: Subst) -> Result<Subst, Subst> {
    if x.is_unknown() || y.is_unknown() {
        return Err(subst);
    }
    if unify_eq(x, y) {
        return Ok(subst);
    }
    match (x, y) {
        (Type::Var(v), _) => unify_var(v, y, subst),
        (_, Type::Var(v)) => unify_var(v, x, subst),
        (Type::Arrow(a1, a2), Type::Arrow(b1, b2)) => {
            let subst = unify_or_keep(a1, b1, subst)?;
            unify_or_keep(a2, b2, subst)
        }
        _ => Err(subst),
    }
}

fn unify_var(v: &str, x: &Type, subst: Subst) -> Result<Subst, Subst> {
    if let Some(bound) = subst.get(v).cloned() {
        return unify_or_keep(&bound, x, subst);
    }
    if let Type::Var(w) = x {
        if let Some(bound) = subst.get(w).cloned() {
            return unify_or_keep(&Type::Var(v.to_string()), &bound, subst);
        }
    }
    if occurs(v, x, &subst) {
        return Err(subst);
    }
    debug!(var = v, ty = %x, "bind type variable");
    Ok(subst.bind(v, x.clone()))
}

/// Does `v` appear in `t`, looking through variables already bound in `subst`?
pub fn occurs(v: &str, t: &Type, subst: &Subst) -> bool {
    match t {
        Type::Var(w) if w == v => true,
        Type::Var(w) => match subst.get(w) {
            Some(bound) => occurs(v, bound, subst),
            None => false,
        },
        Type::Arrow(a, b) => occurs(v, a, subst) || occurs(v, b, subst),
        Type::Base(_) | Type::Unknown => false,
    }
}
