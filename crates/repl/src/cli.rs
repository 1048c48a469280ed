use clap::{Parser, ValueEnum};
use eval::evaluator::{DEFAULT_DEPTH_LIMIT, DEFAULT_STEP_LIMIT};
use eval::{EvalOptions, NamePolicy};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lampy", version, about = "Typed lambda calculus interpreter")]
pub struct Cli {
    /// File of `;`-terminated terms to run instead of starting the REPL
    pub file: Option<PathBuf>,

    /// Run a single term and exit
    #[arg(short, long, conflicts_with = "file")]
    pub expr: Option<String>,

    /// Maximum reductions per term, 0 for no limit
    #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
    pub step_limit: usize,

    /// Maximum nesting depth of the redex being reduced, 0 for no limit
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    pub depth_limit: usize,

    /// Pool of names used when renaming binders
    #[arg(long, value_enum, default_value_t = Names::Unbounded)]
    pub names: Names,

    /// Skip type inference and evaluate terms as written
    #[arg(long)]
    pub untyped: bool,

    /// Log substitutions and alpha-renamings
    #[arg(short, long)]
    pub verbose: bool,

    /// Log every reduction step
    #[arg(long)]
    pub trace: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Names {
    /// u, v, w, x, y, z and nothing else
    Alphabet,
    /// u..z, then u1..z1, u2..z2 and so on
    Unbounded,
}

impl Cli {
    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            step_limit: (self.step_limit > 0).then_some(self.step_limit),
            depth_limit: (self.depth_limit > 0).then_some(self.depth_limit),
            names: match self.names {
                Names::Alphabet => NamePolicy::Alphabet,
                Names::Unbounded => NamePolicy::Unbounded,
            },
        }
    }

    pub fn log_filter(&self) -> &'static str {
        if self.trace {
            "trace"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
