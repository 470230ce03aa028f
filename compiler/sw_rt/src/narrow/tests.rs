use pretty_assertions::assert_eq;
use sw_types::{Discipline, Ty};

use super::*;
use crate::{CallError, Str};

#[test]
fn scalar_types() {
    assert_eq!(i64::ty(), Ty::Int);
    assert_eq!(f64::ty(), Ty::Float);
    assert_eq!(bool::ty(), Ty::Bool);
    assert_eq!(Complex::ty(), Ty::Complex);
    assert_eq!(<Ref<Str>>::ty(), Ty::Str);
}

#[test]
fn optional_types_follow_inner() {
    assert_eq!(<Option<i64>>::ty(), Ty::optional(Ty::Int));
    assert_eq!(<Option<i64>>::discipline(), Discipline::Value);
    assert_eq!(<Option<Ref<Str>>>::ty(), Ty::optional(Ty::Str));
    assert_eq!(<Option<Ref<Str>>>::discipline(), Discipline::Object);
}

#[test]
fn scalars_narrow_from_their_variant() {
    assert_eq!(i64::from_value(Value::int(4)).ok(), Some(4));
    assert_eq!(bool::from_value(Value::Bool(true)).ok(), Some(true));
    assert_eq!(
        Complex::from_value(Value::complex(2, 3)).ok(),
        Some(Complex::new(2, 3))
    );
}

#[test]
fn mismatch_hands_value_back() {
    let back = i64::from_value(Value::string("a"));
    assert!(matches!(back, Err(Value::Str(s)) if s.as_str() == "a"));
}

#[test]
fn no_implicit_numeric_conversion() {
    assert!(i64::from_value(Value::float(1.0)).is_err());
    assert!(f64::from_value(Value::int(1)).is_err());
    assert!(bool::from_value(Value::int(1)).is_err());
}

#[test]
fn strings_narrow_to_shared_handles() {
    let handle = Ref::new(Str::from("k"));
    let value = Ref::clone(&handle).into_value();
    let back = <Ref<Str>>::from_value(value).ok();
    assert!(back.is_some_and(|s| Ref::ptr_eq(&s, &handle)));
}

#[test]
fn optional_none_round_trips() {
    assert!(None::<i64>.into_value().is_none());
    assert_eq!(<Option<i64>>::from_value(Value::None).ok(), Some(None));
    assert_eq!(<Option<i64>>::from_value(Value::int(9)).ok(), Some(Some(9)));
}

#[test]
fn absent_does_not_narrow_to_required() {
    assert!(i64::from_value(Value::None).is_err());
    assert!(<Ref<Str>>::from_value(Value::None).is_err());
}

#[test]
fn narrow_reports_site_and_types() {
    let err = narrow::<i64>(Value::string("a"), || "argument `x` of `add`".to_string())
        .unwrap_err();
    assert_eq!(
        err,
        CallError::TypeMismatch {
            site: "argument `x` of `add`".to_string(),
            expected: Ty::Int,
            found: "str".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "type mismatch for argument `x` of `add`: expected int, found str"
    );
}

#[test]
fn narrow_does_not_build_site_on_success() {
    let n = narrow::<i64>(Value::int(1), || panic!("site built on success"));
    assert_eq!(n, Ok(1));
}

#[test]
fn nested_optional_type_is_not_flattened() {
    assert_eq!(
        <Option<Option<i64>>>::ty(),
        Ty::Optional(Box::new(Ty::optional(Ty::Int)))
    );
    assert!(<Option<Option<i64>>>::ty().has_nested_optional());
}
