use parser::{parse_program, parse_term};
use syntax::{Term, Type, Var};

fn show(src: &str) -> String {
    parse_term(src).unwrap().to_string()
}

#[test]
fn atoms() {
    assert_eq!(parse_term("x").unwrap(), Term::var("x"));
    assert_eq!(parse_term("42").unwrap(), Term::int(42));
    assert_eq!(parse_term(r#""hi""#).unwrap(), Term::str("hi"));
    assert_eq!(parse_term("(x)").unwrap(), Term::var("x"));
}

#[test]
fn application_is_left_associative() {
    assert_eq!(show("f a b"), "f a b");
    assert_eq!(
        parse_term("f a b").unwrap(),
        Term::appl(Term::appl(Term::var("f"), Term::var("a")), Term::var("b"))
    );
    assert_eq!(show("f (g x)"), "f (g x)");
}

#[test]
fn operator_precedence() {
    assert_eq!(show("1 + 2 * 3"), "1 + (2 * 3)");
    assert_eq!(show("(1 + 2) * 3"), "(1 + 2) * 3");
    assert_eq!(show("1 - 2 - 3"), "(1 - 2) - 3");
    // application binds tighter than arithmetic
    assert_eq!(show("f 1 + g 2"), "f 1 + g 2");
}

#[test]
fn arrow_lambda_folds_parameters() {
    let t = parse_term("(a: int, b) => a").unwrap();
    let expected = Term::lamb(
        Var::typed("a", Type::int()),
        Term::lamb(Var::new("b"), Term::var("a")),
    );
    assert_eq!(t, expected);
}

#[test]
fn lambda_body_extends_right() {
    assert_eq!(show("(x) => x + 1"), "(λx.x + 1)");
}

#[test]
fn backslash_and_greek_lambdas() {
    assert_eq!(parse_term("λx.x").unwrap(), parse_term("\\x.x").unwrap());
    assert_eq!(show("λx:int.f x"), "(λx:int.f x)");
}

#[test]
fn parenthesized_lambda_applied() {
    assert_eq!(show("((a) => a + 10) 1 - 2"), "(λa.a + 10) 1 - 2");
}

#[test]
fn signed_literals() {
    assert_eq!(parse_term("-5").unwrap(), Term::int(-5));
    assert_eq!(show("0 + -1"), "0 + -1");
    // glued sign makes an argument, spaced or tight minus subtracts
    assert_eq!(show("f -1"), "f -1");
    assert_eq!(show("f - 1"), "f - 1");
    assert_eq!(show("f-1"), "f - 1");
}

#[test]
fn let_terms() {
    let t = parse_term("let x = 1 in x + x").unwrap();
    assert!(matches!(t, Term::Let { .. }));
    assert_eq!(t.to_string(), "let x = 1 in x + x");
    assert!(parse_term("let n: int = 1 in n").is_ok());
}

#[test]
fn type_annotations() {
    let ty = |src: &str| match parse_term(src).unwrap() {
        Term::Lamb { var, .. } => var.ty,
        other => panic!("Expected lambda, got {other}"),
    };
    assert_eq!(ty("(f: int -> int) => f"), Type::arrow(Type::int(), Type::int()));
    assert_eq!(
        ty("(f: int -> int -> str) => f"),
        Type::arrow(Type::int(), Type::arrow(Type::int(), Type::str()))
    );
    assert_eq!(
        ty("(f: (int -> int) -> int) => f"),
        Type::arrow(Type::arrow(Type::int(), Type::int()), Type::int())
    );
    assert_eq!(ty("(x: 'a) => x"), Type::var("a"));
    assert_eq!(ty("(b: bool) => b"), Type::bool());
}

#[test]
fn programs_are_semicolon_separated() {
    let src = "
        # a comment line
        1 + 1;
        (x) => x;   # trailing comment
        f x;
    ";
    let stmts = parse_program(src).unwrap();
    assert_eq!(stmts.len(), 3);
    assert_eq!(stmts[2].to_string(), "f x");
    assert!(parse_program("").unwrap().is_empty());
}

#[test]
fn single_term_allows_optional_semicolon() {
    assert_eq!(parse_term("1;").unwrap(), Term::int(1));
    assert!(parse_term("1; 2").is_err());
}
