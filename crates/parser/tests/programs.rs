//! Source text through parsing, inference and evaluation.

use eval::{evaluate, EvalError};
use parser::parse_term;
use syntax::Term;
use typecheck::{infer, TypeError};

fn run(src: &str) -> Term {
    let term = parse_term(src).unwrap();
    let typed = infer(term).unwrap();
    evaluate(typed).unwrap()
}

fn run_untyped(src: &str) -> Result<Term, EvalError> {
    evaluate(parse_term(src).unwrap())
}

fn type_of(src: &str) -> String {
    infer(parse_term(src).unwrap()).unwrap().ty().to_string()
}

fn type_error(src: &str) -> TypeError {
    infer(parse_term(src).unwrap()).unwrap_err()
}

#[test]
fn untyped_arithmetic_through_lambdas() {
    assert_eq!(run_untyped("((a, b) => a + b) 1 2;").unwrap(), Term::int(3));
    assert_eq!(run_untyped("((a, b) => a + b) 1 1;").unwrap(), Term::int(2));
    assert_eq!(run_untyped("((a, b) => a) 1 2;").unwrap(), Term::int(1));
    assert_eq!(run_untyped("0 + -1;").unwrap(), Term::int(-1));
    assert_eq!(run_untyped("((a) => a + 1) -1;").unwrap(), Term::int(0));
    assert_eq!(run_untyped("((a) => a + 10) 1 - 2;").unwrap(), Term::int(9));
}

#[test]
fn typed_evaluation() {
    assert_eq!(run("((a: int) => 1 + a) 2;"), Term::int(3));
    assert_eq!(run("((f: int -> int, a: int) => f a) ((i:int) => i) 0;"), Term::int(0));
    assert_eq!(run("((a: int -> int, b: int) => a b) ((i: int) => i) 1;"), Term::int(1));
    assert_eq!(run("let sq = (n: int) => n * n in sq 7"), Term::int(49));
    assert_eq!(run(r#"((s: str) => s + "!") "hi""#), Term::str("hi!"));
}

#[test]
fn inferred_types() {
    assert_eq!(type_of("(a: int) => a;"), "int -> int");
    assert_eq!(type_of("(a: int, b: int) => a;"), "int -> int -> int");
    assert_eq!(
        type_of("(a: int, b: int, c: int, d: int) => a;"),
        "int -> int -> int -> int -> int"
    );
    assert_eq!(type_of("(f: int -> int) => f;"), "(int -> int) -> int -> int");
    assert_eq!(type_of("((a: int, b: int) => a) 1;"), "int -> int");
    assert_eq!(
        type_of("(x: int -> int -> int, y: int -> int, z: int) => x z (y z);"),
        "(int -> int -> int) -> (int -> int) -> int -> int"
    );
    assert_eq!(type_of("(x) => x + 1"), "int -> int");
}

#[test]
fn ill_typed_programs() {
    assert!(matches!(
        type_error(r#"((a: int) => 1 + a) "2";"#),
        TypeError::Mismatch { .. }
    ));
    assert!(matches!(
        type_error("(a: int, b: str) => a + b;"),
        TypeError::Mismatch { .. }
    ));
    assert!(matches!(type_error("(x) => x x"), TypeError::Mismatch { .. }));
}

#[test]
fn capture_avoidance_from_source() {
    let nf = run_untyped("((x) => (y) => x y) y").unwrap();
    assert_eq!(nf.to_string(), "(λz.y z)");
}

#[test]
fn runtime_errors_from_source() {
    assert!(matches!(run_untyped("1 / 0"), Err(EvalError::DivisionByZero)));
    assert!(matches!(run_untyped("1 2"), Err(EvalError::NotAFunction(_))));
}
