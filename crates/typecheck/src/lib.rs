pub mod env;
pub mod errors;
pub mod infer;
pub mod subst;
pub mod types;
pub mod unify;

pub use errors::TypeError;
pub use infer::{infer, infer_with, InferOptions};
pub use subst::Subst;
pub use unify::unify;
