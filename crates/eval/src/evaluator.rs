use crate::error::{EvalError, Limit};
use crate::fresh::{FreshNames, NamePolicy};
use crate::subst::replace;
use syntax::{BinOp, Term, Value};
use tracing::trace;

pub const DEFAULT_STEP_LIMIT: usize = 1_000_000;
pub const DEFAULT_DEPTH_LIMIT: usize = 512;

#[derive(Clone, Debug)]
pub struct EvalOptions {
    /// Maximum number of reductions per run; `None` means unbounded.
    pub step_limit: Option<usize>,
    /// Maximum nesting depth at which a redex may be reduced. Reduction
    /// recurses once per level, so `None` lets a term whose callee keeps
    /// growing exhaust the native stack.
    pub depth_limit: Option<usize>,
    pub names: NamePolicy,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            step_limit: Some(DEFAULT_STEP_LIMIT),
            depth_limit: Some(DEFAULT_DEPTH_LIMIT),
            names: NamePolicy::default(),
        }
    }
}

/// Is `term` in normal form? Abstractions are values and are never entered.
pub fn is_norm(term: &Term) -> bool {
    match term {
        Term::Var(_) | Term::Val(_) | Term::Lamb { .. } => true,
        Term::Appl { fun, arg, .. } => !fun.is_lamb() && is_norm(fun) && is_norm(arg),
        Term::BinOp { .. } | Term::Let { .. } => false,
    }
}

pub fn evaluate(term: Term) -> Result<Term, EvalError> {
    evaluate_with(&EvalOptions::default(), term)
}

pub fn evaluate_with(opts: &EvalOptions, term: Term) -> Result<Term, EvalError> {
    Evaluator::new(opts.clone()).eval(term)
}

/// State for a single reduction run: the name allocator and the step count.
pub struct Evaluator {
    opts: EvalOptions,
    names: FreshNames,
    steps: usize,
}

impl Evaluator {
    pub fn new(opts: EvalOptions) -> Self {
        let names = FreshNames::new(opts.names);
        Self {
            opts,
            names,
            steps: 0,
        }
    }

    /// Number of reductions performed by the last run.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Reduces `term` to normal form, starting from a clean allocator.
    pub fn eval(&mut self, term: Term) -> Result<Term, EvalError> {
        self.names.reset();
        self.names.bind_all(&term);
        self.steps = 0;
        self.normalize(term, 0)
    }

    /// Performs one round of reduction on `term`.
    pub fn step(&mut self, term: Term) -> Result<Term, EvalError> {
        self.step_at(term, 0)
    }

    fn normalize(&mut self, mut term: Term, depth: usize) -> Result<Term, EvalError> {
        while !is_norm(&term) {
            let before = self.steps;
            term = self.step_at(term, depth)?;
            if self.steps == before {
                return Err(EvalError::Stuck(Box::new(term)));
            }
        }
        Ok(term)
    }

    fn step_at(&mut self, term: Term, depth: usize) -> Result<Term, EvalError> {
        if let Some(limit) = self.opts.depth_limit {
            if depth > limit {
                return Err(EvalError::ReductionLimitExceeded {
                    limit: Limit::Depth(limit),
                });
            }
        }
        trace!(depth, term = %term, "step");
        match term {
            Term::Appl { fun, arg, ty } => {
                let fun = self.normalize(*fun, depth + 1)?;
                let arg = self.normalize(*arg, depth + 1)?;
                match fun {
                    Term::Lamb { var, body, .. } => {
                        self.tick()?;
                        let reduced = replace(*body, &var, &arg, &mut self.names)?;
                        trace!(depth, result = %reduced, "beta");
                        Ok(reduced)
                    }
                    Term::Val(_) => Err(EvalError::NotAFunction(Box::new(fun))),
                    fun => Ok(Term::Appl {
                        fun: Box::new(fun),
                        arg: Box::new(arg),
                        ty,
                    }),
                }
            }
            Term::BinOp { op, lhs, rhs, ty } => {
                let lhs = self.normalize(*lhs, depth + 1)?;
                let rhs = self.normalize(*rhs, depth + 1)?;
                match (lhs, rhs) {
                    (Term::Val(a), Term::Val(b)) => {
                        self.tick()?;
                        Ok(Term::Val(apply_op(op, a, b)?))
                    }
                    (lhs, rhs) => Ok(Term::BinOp {
                        op,
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                        ty,
                    }),
                }
            }
            Term::Let {
                var, bound, body, ..
            } => {
                let bound = self.normalize(*bound, depth + 1)?;
                self.tick()?;
                replace(*body, &var, &bound, &mut self.names)
            }
            t => Ok(t),
        }
    }

    fn tick(&mut self) -> Result<(), EvalError> {
        self.steps += 1;
        match self.opts.step_limit {
            Some(limit) if self.steps > limit => Err(EvalError::ReductionLimitExceeded {
                limit: Limit::Steps(limit),
            }),
            _ => Ok(()),
        }
    }
}

fn apply_op(op: BinOp, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            let overflow = EvalError::Overflow {
                op: op.symbol(),
                lhs: a,
                rhs: b,
            };
            let n = match op {
                BinOp::Add => a.checked_add(b),
                BinOp::Sub => a.checked_sub(b),
                BinOp::Mul => a.checked_mul(b),
                BinOp::Div if b == 0 => return Err(EvalError::DivisionByZero),
                BinOp::Div => a.checked_div(b),
            };
            n.map(Value::Int).ok_or(overflow)
        }
        (Value::Str(a), Value::Str(b)) if op == BinOp::Add => Ok(Value::Str(a + &b)),
        (lhs, rhs) => Err(EvalError::BadOperands {
            op: op.symbol(),
            lhs,
            rhs,
        }),
    }
}
