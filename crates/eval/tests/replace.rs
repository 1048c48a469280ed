use eval::subst::occurs_free;
use eval::{replace, FreshNames};
use syntax::{Term, Type, Var};

fn names_for(term: &Term) -> FreshNames {
    let mut names = FreshNames::default();
    names.bind_all(term);
    names
}

fn add(a: Term, b: Term) -> Term {
    Term::binop("+", a, b).unwrap()
}

#[test]
fn replaces_matching_variable() {
    let mut names = FreshNames::default();
    let out = replace(Term::var("x"), &Var::new("x"), &Term::int(1), &mut names).unwrap();
    assert_eq!(out, Term::int(1));

    let out = replace(Term::var("y"), &Var::new("x"), &Term::int(1), &mut names).unwrap();
    assert_eq!(out, Term::var("y"));
}

#[test]
fn replaces_inside_applications_and_operators() {
    let term = Term::appl(Term::var("f"), add(Term::var("x"), Term::var("x")));
    let mut names = names_for(&term);
    let out = replace(term, &Var::new("x"), &Term::int(2), &mut names).unwrap();
    assert_eq!(out.to_string(), "f (2 + 2)");
}

#[test]
fn shadowing_binder_stops_replacement() {
    let term = Term::lamb(Var::new("x"), Term::var("x"));
    let mut names = names_for(&term);
    let out = replace(term.clone(), &Var::new("x"), &Term::int(1), &mut names).unwrap();
    assert_eq!(out, term);
}

#[test]
fn capturing_binder_is_renamed() {
    // (λy.x y)[x := y] = λz.y z
    let term = Term::lamb(Var::new("y"), Term::appl(Term::var("x"), Term::var("y")));
    let mut names = names_for(&term);
    let out = replace(term, &Var::new("x"), &Term::var("y"), &mut names).unwrap();
    assert_eq!(out.to_string(), "(λz.y z)");
    assert!(names.is_bound("z"));
}

#[test]
fn capture_check_looks_at_free_vars_of_compound_replacement() {
    // (λy.x)[x := f y] must not capture the y inside the replacement
    let term = Term::lamb(Var::new("y"), Term::var("x"));
    let new = Term::appl(Term::var("f"), Term::var("y"));
    let mut names = names_for(&term);
    names.bind_all(&new);
    let out = replace(term, &Var::new("x"), &new, &mut names).unwrap();
    assert_eq!(out.to_string(), "(λz.f y)");
}

#[test]
fn harmless_binder_is_kept() {
    let term = Term::lamb(Var::new("y"), Term::appl(Term::var("x"), Term::var("y")));
    let mut names = names_for(&term);
    let out = replace(term, &Var::new("x"), &Term::var("w"), &mut names).unwrap();
    assert_eq!(out.to_string(), "(λy.w y)");
}

#[test]
fn renamed_binder_keeps_type_annotation() {
    let term = Term::lamb(
        Var::typed("y", Type::int()),
        Term::appl(Term::var("x"), Term::typed_var("y", Type::int())),
    );
    let mut names = names_for(&term);
    let out = replace(term, &Var::new("x"), &Term::var("y"), &mut names).unwrap();
    match out {
        Term::Lamb { var, .. } => assert_eq!(var, Var::typed("z", Type::int())),
        other => panic!("Expected lambda, got {other}"),
    }
}

#[test]
fn let_binds_in_body_only() {
    // (let x = x in x)[x := 1] = let x = 1 in x
    let term = Term::let_in(Var::new("x"), Term::var("x"), Term::var("x"));
    let mut names = names_for(&term);
    let out = replace(term, &Var::new("x"), &Term::int(1), &mut names).unwrap();
    assert_eq!(out.to_string(), "let x = 1 in x");
}

#[test]
fn free_occurrence() {
    let term = Term::lamb(Var::new("x"), Term::appl(Term::var("x"), Term::var("y")));
    assert!(occurs_free(&"y".into(), &term));
    assert!(!occurs_free(&"x".into(), &term));
    assert!(!occurs_free(&"z".into(), &term));
}
