use syntax::Type;
use typecheck::subst::Subst;
use typecheck::unify::{occurs, unify, unify_eq, unify_or_keep};

fn tyvar(name: &str) -> Type {
    Type::var(name)
}

fn arrow(t1: Type, t2: Type) -> Type {
    Type::arrow(t1, t2)
}

#[test]
fn base_type_int() {
    // unify(int, int) = {}
    let actual = unify(&Type::int(), &Type::int(), Subst::empty()).unwrap();
    assert!(actual.is_empty());
}

#[test]
fn same_tyvar() {
    // unify('a, 'a) = {}
    let actual = unify(&tyvar("a"), &tyvar("a"), Subst::empty()).unwrap();
    assert!(actual.is_empty());
}

#[test]
fn tyvar_with_concrete_type() {
    let actual = unify(&tyvar("a"), &Type::int(), Subst::empty()).unwrap();
    assert_eq!(actual, Subst::single("a", Type::int()));
}

#[test]
fn concrete_type_with_tyvar() {
    let actual = unify(&Type::str(), &tyvar("a"), Subst::empty()).unwrap();
    assert_eq!(actual, Subst::single("a", Type::str()));
}

#[test]
fn arrow_simple() {
    // unify('a -> 'b, int -> int) = {a ↦ int, b ↦ int}
    let t1 = arrow(tyvar("a"), tyvar("b"));
    let t2 = arrow(Type::int(), Type::int());
    let actual = unify(&t1, &t2, Subst::empty()).unwrap();
    let expected = Subst::empty().bind("a", Type::int()).bind("b", Type::int());
    assert_eq!(actual, expected);
}

#[test]
fn arrow_with_substitution_propagation() {
    // unify('a -> 'a, int -> 'b) binds b through a
    let t1 = arrow(tyvar("a"), tyvar("a"));
    let t2 = arrow(Type::int(), tyvar("b"));
    let actual = unify(&t1, &t2, Subst::empty()).unwrap();
    assert_eq!(actual.resolve(&tyvar("a")), Type::int());
    assert_eq!(actual.resolve(&tyvar("b")), Type::int());
}

#[test]
fn nested_arrow() {
    let t1 = arrow(arrow(tyvar("a"), tyvar("b")), tyvar("c"));
    let t2 = arrow(arrow(Type::int(), Type::bool()), Type::str());
    let actual = unify(&t1, &t2, Subst::empty()).unwrap();
    assert_eq!(actual.len(), 3);
    assert_eq!(actual.resolve(&t1), t2);
}

#[test]
fn occurs_check() {
    // unify('a, 'a -> int) fails
    let t1 = tyvar("a");
    let t2 = arrow(tyvar("a"), Type::int());
    assert!(unify(&t1, &t2, Subst::empty()).is_none());
}

#[test]
fn occurs_check_through_bindings() {
    // with b ↦ 'a -> int, unifying 'a with 'b is cyclic
    let subst = Subst::single("b", arrow(tyvar("a"), Type::int()));
    assert!(occurs("a", &tyvar("b"), &subst));
    assert!(unify(&tyvar("a"), &tyvar("b"), subst).is_none());
}

#[test]
fn bound_variable_is_chased() {
    let subst = Subst::single("a", Type::int());
    assert!(unify(&tyvar("a"), &Type::int(), subst.clone()).is_some());
    assert!(unify(&tyvar("a"), &Type::str(), subst.clone()).is_none());
    // right-hand bound variable
    let extended = unify(&tyvar("c"), &tyvar("a"), subst).unwrap();
    assert_eq!(extended.resolve(&tyvar("c")), Type::int());
}

#[test]
fn existing_entries_are_kept() {
    let subst = Subst::single("z", Type::bool());
    let actual = unify(&tyvar("a"), &Type::int(), subst).unwrap();
    assert_eq!(actual.get("z"), Some(&Type::bool()));
    assert_eq!(actual.get("a"), Some(&Type::int()));
}

#[test]
fn type_mismatch() {
    assert!(unify(&Type::int(), &Type::str(), Subst::empty()).is_none());
    assert!(unify(&Type::int(), &arrow(Type::int(), Type::int()), Subst::empty()).is_none());
}

#[test]
fn domain_failure_stops_before_codomain() {
    let t1 = arrow(Type::int(), tyvar("b"));
    let t2 = arrow(Type::str(), Type::int());
    assert!(unify(&t1, &t2, Subst::empty()).is_none());
}

#[test]
fn unknown_never_unifies() {
    assert!(!unify_eq(&Type::Unknown, &Type::Unknown));
    assert!(unify(&Type::Unknown, &Type::Unknown, Subst::empty()).is_none());
    assert!(unify(&tyvar("a"), &Type::Unknown, Subst::empty()).is_none());
}

#[test]
fn failed_unification_returns_the_substitution() {
    let subst = Subst::single("z", Type::bool());
    let kept = unify_or_keep(&Type::int(), &Type::str(), subst.clone()).unwrap_err();
    assert_eq!(kept, subst);

    // bindings made before the clash survive
    let t1 = arrow(tyvar("a"), Type::int());
    let t2 = arrow(Type::str(), Type::bool());
    let kept = unify_or_keep(&t1, &t2, Subst::empty()).unwrap_err();
    assert_eq!(kept.get("a"), Some(&Type::str()));
}
