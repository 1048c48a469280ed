//! Call-by-value reduction of terms to beta-normal form.

pub mod error;
pub mod evaluator;
pub mod fresh;
pub mod subst;

pub use error::{EvalError, Limit};
pub use evaluator::{evaluate, evaluate_with, is_norm, EvalOptions, Evaluator};
pub use fresh::{FreshNames, NamePolicy};
pub use subst::replace;
