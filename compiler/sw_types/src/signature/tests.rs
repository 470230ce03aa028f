use pretty_assertions::assert_eq;

use super::*;

fn add_sig() -> Signature {
    Signature::builder("add", Ty::Int)
        .param("x", Ty::Int)
        .param("y", Ty::Int)
        .build()
        .unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn params_keep_declaration_order() {
    let sig = add_sig();
    assert_eq!(sig.name().as_str(), "add");
    assert_eq!(sig.arity(), 2);
    assert_eq!(
        sig.param_names().map(Name::as_str).collect::<Vec<_>>(),
        vec!["x", "y"]
    );
    assert_eq!(sig.params()[1].ty, Ty::Int);
    assert_eq!(sig.ret(), &Ty::Int);
}

#[test]
fn position_by_name() {
    let sig = add_sig();
    assert_eq!(sig.position("x"), Some(0));
    assert_eq!(sig.position("y"), Some(1));
    assert_eq!(sig.position("z"), None);
}

#[test]
fn fn_ty_drops_names() {
    assert_eq!(
        add_sig().fn_ty(),
        Ty::function([Ty::Int, Ty::Int], Ty::Int)
    );
}

#[test]
fn nullary_signature() {
    let sig = Signature::builder("now", Ty::Float)
        .build()
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(sig.arity(), 0);
    assert_eq!(sig.fn_ty().to_string(), "() -> float");
}

#[test]
fn duplicate_param_rejected() {
    let result = Signature::builder("f", Ty::Int)
        .param("a", Ty::Int)
        .param("b", Ty::Str)
        .param("a", Ty::Bool)
        .build();

    let err = result.expect_err("duplicate names must be rejected");
    assert_eq!(
        err,
        SignatureError::DuplicateParam {
            function: Name::new("f"),
            param: Name::new("a"),
        }
    );
    assert_eq!(
        err.to_string(),
        "function `f` declares parameter `a` more than once"
    );
}

#[test]
fn signatures_compare_structurally() {
    assert_eq!(add_sig(), add_sig());
    let other = Signature::builder("add", Ty::Int)
        .param("y", Ty::Int)
        .param("x", Ty::Int)
        .build()
        .unwrap_or_else(|e| panic!("{e}"));
    assert_ne!(add_sig(), other);
}
