use eval::{evaluate_with, EvalError, EvalOptions};
use parser::{parse_program, parse_term, ParseError};
use syntax::{Term, Type};
use typecheck::{infer, TypeError};
use tracing::debug;

pub type ReplResult<T> = Result<T, String>;

/// Settings shared by every term run in one REPL or file session.
pub struct Session {
    pub eval: EvalOptions,
    pub typed: bool,
}

impl Session {
    pub fn new(eval: EvalOptions, typed: bool) -> Self {
        Self { eval, typed }
    }

    /// Runs every statement of `source`, returning one line per statement.
    /// Stops at the first failure.
    pub fn run_program(&self, source: &str) -> ReplResult<Vec<String>> {
        let terms = parse_program(source).map_err(|e| format_parse_error(source, &e))?;
        terms.into_iter().map(|t| self.run_term(t)).collect()
    }

    pub fn run_line(&self, line: &str) -> ReplResult<String> {
        let term = parse_term(line).map_err(|e| format_parse_error(line, &e))?;
        self.run_term(term)
    }

    /// The inferred type of `line`, without evaluating it.
    pub fn type_of(&self, line: &str) -> ReplResult<Type> {
        let term = parse_term(line).map_err(|e| format_parse_error(line, &e))?;
        let typed = infer(term).map_err(|e| format_type_error(&e))?;
        Ok(typed.ty())
    }

    fn run_term(&self, term: Term) -> ReplResult<String> {
        if !self.typed {
            let nf = evaluate_with(&self.eval, term).map_err(|e| format_eval_error(&e))?;
            return Ok(format!("val it = {nf}"));
        }
        let typed = infer(term).map_err(|e| format_type_error(&e))?;
        let ty = typed.ty();
        debug!(%ty, "inferred");
        let nf = evaluate_with(&self.eval, typed).map_err(|e| format_eval_error(&e))?;
        Ok(format!("val it : {ty} = {nf}"))
    }
}

fn format_parse_error(source: &str, error: &ParseError) -> String {
    let (line, col) = line_col(source, error.span.lo as usize);
    format!("Parse error: {} at {line}:{col}", error.message)
}

fn format_type_error(error: &TypeError) -> String {
    format!("Type error: {error}")
}

fn format_eval_error(error: &EvalError) -> String {
    format!("Evaluation error: {error}")
}

// 1-based line and column of a byte offset.
fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, col)
}
