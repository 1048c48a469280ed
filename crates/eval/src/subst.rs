use crate::error::EvalError;
use crate::fresh::FreshNames;
use syntax::{Name, Term, Var};
use tracing::debug;

/// Does `name` occur free in `term`?
pub fn occurs_free(name: &Name, term: &Term) -> bool {
    match term {
        Term::Var(v) => v.name == *name,
        Term::Val(_) => false,
        Term::Lamb { var, body, .. } => var.name != *name && occurs_free(name, body),
        Term::Appl { fun, arg, .. } => occurs_free(name, fun) || occurs_free(name, arg),
        Term::BinOp { lhs, rhs, .. } => occurs_free(name, lhs) || occurs_free(name, rhs),
        Term::Let {
            var, bound, body, ..
        } => occurs_free(name, bound) || (var.name != *name && occurs_free(name, body)),
    }
}

/// Replaces the free occurrences of `old` in `term` with `new`.
///
/// A binder that would capture a free variable of `new` is renamed to a
/// fresh name from `names` first, together with the occurrences it binds.
/// A binder named like `old` shadows it and its scope is left alone.
pub fn replace(
    term: Term,
    old: &Var,
    new: &Term,
    names: &mut FreshNames,
) -> Result<Term, EvalError> {
    match term {
        Term::Var(v) if v.name == old.name => Ok(new.clone()),
        Term::Var(_) | Term::Val(_) => Ok(term),
        Term::Lamb { var, body, ty } => {
            if var.name == old.name {
                return Ok(Term::Lamb { var, body, ty });
            }
            let (var, body) = avoid_capture(var, *body, new, names)?;
            Ok(Term::Lamb {
                var,
                body: Box::new(replace(body, old, new, names)?),
                ty,
            })
        }
        Term::Appl { fun, arg, ty } => Ok(Term::Appl {
            fun: Box::new(replace(*fun, old, new, names)?),
            arg: Box::new(replace(*arg, old, new, names)?),
            ty,
        }),
        Term::BinOp { op, lhs, rhs, ty } => Ok(Term::BinOp {
            op,
            lhs: Box::new(replace(*lhs, old, new, names)?),
            rhs: Box::new(replace(*rhs, old, new, names)?),
            ty,
        }),
        Term::Let {
            var,
            bound,
            body,
            ty,
        } => {
            let bound = Box::new(replace(*bound, old, new, names)?);
            if var.name == old.name {
                return Ok(Term::Let {
                    var,
                    bound,
                    body,
                    ty,
                });
            }
            let (var, body) = avoid_capture(var, *body, new, names)?;
            Ok(Term::Let {
                var,
                bound,
                body: Box::new(replace(body, old, new, names)?),
                ty,
            })
        }
    }
}

fn avoid_capture(
    var: Var,
    body: Term,
    new: &Term,
    names: &mut FreshNames,
) -> Result<(Var, Term), EvalError> {
    if !occurs_free(&var.name, new) {
        return Ok((var, body));
    }
    let fresh = names.next(&var)?;
    names.bind(&fresh);
    debug!(from = %var.name, to = %fresh.name, "alpha-rename binder");
    let body = replace(body, &var, &Term::Var(fresh.clone()), names)?;
    Ok((fresh, body))
}
