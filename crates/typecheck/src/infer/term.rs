use crate::{
    env::TypeEnv,
    errors::TypeError,
    subst::Subst,
    types::{TyVarSupply, Type},
    unify::unify_or_keep,
};
use syntax::{Term, Var};
use tracing::trace;

pub struct InferState<'s> {
    pub env: TypeEnv,
    pub opts: super::InferOptions,
    pub tvs: &'s mut TyVarSupply,
    subst: Subst,
}

impl<'s> InferState<'s> {
    pub fn new(env: TypeEnv, opts: super::InferOptions, tvs: &'s mut TyVarSupply) -> Self {
        Self {
            env,
            opts,
            tvs,
            subst: Subst::empty(),
        }
    }

    /// Unifies `found` against `expected`, reporting `at` as the offending
    /// node when that is impossible.
    fn constrain(
        &mut self,
        expected: &Type,
        found: &Type,
        at: impl FnOnce() -> Term,
    ) -> Result<(), TypeError> {
        match unify_or_keep(found, expected, std::mem::take(&mut self.subst)) {
            Ok(s) => {
                self.subst = s;
                Ok(())
            }
            Err(s) => {
                self.subst = s;
                Err(TypeError::mismatch(
                    self.subst.resolve(expected),
                    self.subst.resolve(found),
                    self.resolve_term(at()),
                ))
            }
        }
    }

    pub fn infer_term(&mut self, t: Term) -> Result<Term, TypeError> {
        trace!(term = %t, "infer");
        match t {
            Term::Var(v) => Ok(Term::Var(self.infer_var(v)?)),
            Term::Val(v) => Ok(Term::Val(v)),
            Term::Lamb { mut var, body, .. } => {
                if !var.is_typed() {
                    var.ty = self.tvs.fresh_ty();
                }
                let shadowed = self.env.bind(&var.name.text, var.ty.clone());
                let body = self.infer_term(*body);
                self.env.restore(&var.name.text, shadowed);
                let body = body?;
                let ty = Type::arrow(var.ty.clone(), body.ty());
                Ok(Term::Lamb {
                    var,
                    body: Box::new(body),
                    ty,
                })
            }
            Term::Appl { fun, arg, .. } => {
                let fun = self.infer_term(*fun)?;
                let arg = self.infer_term(*arg)?;
                let result = self.tvs.fresh_ty();
                let expected = Type::arrow(arg.ty(), result.clone());
                let fun_ty = fun.ty();
                self.constrain(&expected, &fun_ty, || Term::appl(fun.clone(), arg.clone()))?;
                Ok(Term::Appl {
                    fun: Box::new(fun),
                    arg: Box::new(arg),
                    ty: result,
                })
            }
            Term::BinOp { op, lhs, rhs, .. } => {
                let lhs = self.infer_term(*lhs)?;
                let rhs = self.infer_term(*rhs)?;
                let ty = lhs.ty();
                self.constrain(&ty, &rhs.ty(), || Term::arith(op, lhs.clone(), rhs.clone()))?;
                Ok(Term::BinOp {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                    ty,
                })
            }
            Term::Let {
                mut var,
                bound,
                body,
                ..
            } => {
                let bound = self.infer_term(*bound)?;
                if var.is_typed() {
                    let annotated = var.ty.clone();
                    self.constrain(&annotated, &bound.ty(), || bound.clone())?;
                } else {
                    var.ty = bound.ty();
                }
                let shadowed = self.env.bind(&var.name.text, var.ty.clone());
                let body = self.infer_term(*body);
                self.env.restore(&var.name.text, shadowed);
                let body = body?;
                let ty = body.ty();
                Ok(Term::Let {
                    var,
                    bound: Box::new(bound),
                    body: Box::new(body),
                    ty,
                })
            }
        }
    }

    fn infer_var(&mut self, mut v: Var) -> Result<Var, TypeError> {
        let name = v.name.text.clone();
        match self.env.get(&name).cloned() {
            Some(bound) => {
                if v.is_typed() {
                    let annotated = v.ty.clone();
                    self.constrain(&bound, &annotated, || Term::Var(v.clone()))?;
                } else {
                    v.ty = bound;
                }
            }
            None => {
                if !v.is_typed() {
                    if !self.opts.allow_free_vars {
                        return Err(TypeError::UnboundVariable(name));
                    }
                    v.ty = self.tvs.fresh_ty();
                }
                self.env.bind(&name, v.ty.clone());
            }
        }
        Ok(v)
    }

    /// Writes the current substitution back into every type slot of `t`.
    pub fn resolve_term(&self, t: Term) -> Term {
        match t {
            Term::Var(v) => Term::Var(self.resolve_var(v)),
            Term::Val(v) => Term::Val(v),
            Term::Lamb { var, body, ty } => Term::Lamb {
                var: self.resolve_var(var),
                body: Box::new(self.resolve_term(*body)),
                ty: self.subst.resolve(&ty),
            },
            Term::Appl { fun, arg, ty } => Term::Appl {
                fun: Box::new(self.resolve_term(*fun)),
                arg: Box::new(self.resolve_term(*arg)),
                ty: self.subst.resolve(&ty),
            },
            Term::BinOp { op, lhs, rhs, ty } => Term::BinOp {
                op,
                lhs: Box::new(self.resolve_term(*lhs)),
                rhs: Box::new(self.resolve_term(*rhs)),
                ty: self.subst.resolve(&ty),
            },
            Term::Let {
                var,
                bound,
                body,
                ty,
            } => Term::Let {
                var: self.resolve_var(var),
                bound: Box::new(self.resolve_term(*bound)),
                body: Box::new(self.resolve_term(*body)),
                ty: self.subst.resolve(&ty),
            },
        }
    }

    fn resolve_var(&self, v: Var) -> Var {
        Var {
            ty: self.subst.resolve(&v.ty),
            name: v.name,
        }
    }
}
