use crate::error::EvalError;
use std::collections::HashSet;
use syntax::{Term, Var};

/// Names handed out by alpha-conversion, in order. Wraps around.
pub const ALPHABET: [&str; 6] = ["u", "v", "w", "x", "y", "z"];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// Only the six alphabet letters; fails once all of them are in use.
    Alphabet,
    /// Alphabet letters first, then `u1 .. z1`, `u2 ..` and so on.
    #[default]
    Unbounded,
}

/// Bound-name bookkeeping for one evaluation run.
#[derive(Debug, Default)]
pub struct FreshNames {
    policy: NamePolicy,
    bound: HashSet<String>,
}

impl FreshNames {
    pub fn new(policy: NamePolicy) -> Self {
        Self {
            policy,
            bound: HashSet::new(),
        }
    }

    pub fn reset(&mut self) {
        self.bound.clear();
    }

    pub fn bind(&mut self, v: &Var) {
        self.bound.insert(v.name.text.clone());
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bound.contains(name)
    }

    /// Marks every name mentioned anywhere in `term`, bound or free.
    pub fn bind_all(&mut self, term: &Term) {
        match term {
            Term::Var(v) => self.bind(v),
            Term::Val(_) => {}
            Term::Lamb { var, body, .. } => {
                self.bind(var);
                self.bind_all(body);
            }
            Term::Appl { fun, arg, .. } => {
                self.bind_all(fun);
                self.bind_all(arg);
            }
            Term::BinOp { lhs, rhs, .. } => {
                self.bind_all(lhs);
                self.bind_all(rhs);
            }
            Term::Let {
                var, bound, body, ..
            } => {
                self.bind(var);
                self.bind_all(bound);
                self.bind_all(body);
            }
        }
    }

    /// The first unbound name after `v`'s in alphabet order. Names outside
    /// the alphabet start the search at `u`. The result is not bound yet.
    pub fn next(&self, v: &Var) -> Result<Var, EvalError> {
        let letter = v.name.text.trim_end_matches(|c: char| c.is_ascii_digit());
        let start = ALPHABET
            .iter()
            .position(|l| *l == letter)
            .map_or(0, |i| i + 1);
        let rounds = match self.policy {
            NamePolicy::Alphabet => 1,
            NamePolicy::Unbounded => usize::MAX,
        };
        for round in 0..rounds {
            for k in 0..ALPHABET.len() {
                let letter = ALPHABET[(start + k) % ALPHABET.len()];
                let candidate = if round == 0 {
                    letter.to_string()
                } else {
                    format!("{letter}{round}")
                };
                if !self.bound.contains(&candidate) {
                    return Ok(v.renamed(candidate));
                }
            }
        }
        Err(EvalError::NamesExhausted)
    }
}
