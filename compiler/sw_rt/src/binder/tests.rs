use pretty_assertions::assert_eq;
use sw_types::{Name, Signature, Ty};

use super::*;
use crate::{Ref, Str};

fn add_sig() -> Signature {
    Signature::builder("add", Ty::Int)
        .param("x", Ty::Int)
        .param("y", Ty::Int)
        .build()
        .unwrap()
}

#[test]
fn arg_list_metadata() {
    assert_eq!(<()>::ARITY, 0);
    assert_eq!(<(i64, Ref<Str>)>::ARITY, 2);
    assert_eq!(<(i64, Ref<Str>)>::param_tys(), vec![Ty::Int, Ty::Str]);
    assert_eq!(
        <(i64, Ref<Str>, Option<bool>)>::param_disciplines(),
        vec![Discipline::Value, Discipline::Object, Discipline::Value]
    );
}

#[test]
fn positional_binds_in_order() {
    let sig = add_sig();
    let bound = Binder::new(&sig).positional::<(i64, i64)>(vec![Value::int(3), Value::int(4)]);
    assert_eq!(bound, Ok((3, 4)));
}

#[test]
fn positional_arity_mismatch() {
    let sig = add_sig();
    let binder = Binder::new(&sig);
    for args in [vec![Value::int(3)], vec![Value::int(1); 3], vec![]] {
        let got = args.len();
        assert_eq!(
            binder.positional::<(i64, i64)>(args),
            Err(CallError::ArityMismatch {
                function: Name::from("add"),
                expected: 2,
                got,
            })
        );
    }
}

#[test]
fn positional_type_mismatch_names_parameter() {
    let sig = add_sig();
    let err = Binder::new(&sig)
        .positional::<(i64, i64)>(vec![Value::string("a"), Value::int(4)])
        .unwrap_err();
    assert_eq!(
        err,
        CallError::TypeMismatch {
            site: "argument `x` of `add`".to_string(),
            expected: Ty::Int,
            found: "str".to_string(),
        }
    );
}

#[test]
fn keyword_binds_by_name_in_any_order() {
    let sig = add_sig();
    let kwargs = Kwargs::from([("y", Value::int(4)), ("x", Value::int(3))]);
    assert_eq!(Binder::new(&sig).keyword::<(i64, i64)>(kwargs), Ok((3, 4)));
}

#[test]
fn keyword_missing_reports_first_declared() {
    let sig = add_sig();
    let err = Binder::new(&sig)
        .keyword::<(i64, i64)>(Kwargs::new())
        .unwrap_err();
    assert_eq!(
        err,
        CallError::MissingArgument {
            function: Name::from("add"),
            param: Name::from("x"),
        }
    );

    let err = Binder::new(&sig)
        .keyword::<(i64, i64)>(Kwargs::from([("x", Value::int(3))]))
        .unwrap_err();
    assert_eq!(
        err,
        CallError::MissingArgument {
            function: Name::from("add"),
            param: Name::from("y"),
        }
    );
}

#[test]
fn keyword_rejects_unknown_names() {
    let sig = add_sig();
    let kwargs = Kwargs::from([
        ("x", Value::int(3)),
        ("y", Value::int(4)),
        ("z", Value::int(5)),
        ("w", Value::int(6)),
    ]);
    assert_eq!(
        Binder::new(&sig).keyword::<(i64, i64)>(kwargs),
        Err(CallError::UnexpectedArgument {
            function: Name::from("add"),
            name: Name::from("w"),
        })
    );
}

#[test]
fn structural_errors_win_over_type_errors() {
    let sig = add_sig();
    let kwargs = Kwargs::from([("x", Value::string("a"))]);
    assert!(matches!(
        Binder::new(&sig).keyword::<(i64, i64)>(kwargs),
        Err(CallError::MissingArgument { .. })
    ));
}

#[test]
fn order_yields_declaration_order() {
    let sig = add_sig();
    let slots = Binder::new(&sig)
        .order(Kwargs::from([("y", Value::int(2)), ("x", Value::int(1))]))
        .unwrap();
    let ints: Vec<_> = slots.iter().filter_map(Value::as_int).collect();
    assert_eq!(ints, vec![1, 2]);
}

#[test]
fn zero_arity_accepts_only_empty_payloads() {
    let sig = Signature::builder("now", Ty::Int).build().unwrap();
    let binder = Binder::new(&sig);
    assert_eq!(binder.positional::<()>(vec![]), Ok(()));
    assert_eq!(binder.keyword::<()>(Kwargs::new()), Ok(()));
    assert!(binder.positional::<()>(vec![Value::int(1)]).is_err());
    assert!(binder
        .keyword::<()>(Kwargs::from([("x", Value::int(1))]))
        .is_err());
}

#[test]
fn optional_parameter_accepts_absent() {
    let sig = Signature::builder("greet", Ty::Str)
        .param("name", Ty::optional(Ty::Str))
        .build()
        .unwrap();
    let bound = Binder::new(&sig)
        .positional::<(Option<Ref<Str>>,)>(vec![Value::None])
        .unwrap();
    assert!(bound.0.is_none());
}

#[test]
fn kwargs_table_operations() {
    let mut kwargs = Kwargs::new();
    assert!(kwargs.is_empty());
    assert!(kwargs.insert("a", Value::int(1)).is_none());
    assert!(kwargs.insert("a", Value::int(2)).is_some());
    assert_eq!(kwargs.len(), 1);
    assert!(kwargs.contains("a"));
    assert_eq!(kwargs.get("a").and_then(Value::as_int), Some(2));
    assert_eq!(kwargs.remove("a").and_then(|v| v.as_int()), Some(2));
    assert!(!kwargs.contains("a"));
}
