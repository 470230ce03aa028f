use pretty_assertions::assert_eq;
use sw_types::Ty;

use super::*;
use crate::{Str, Typed};

fn pair() -> Ref<Tuple> {
    Ref::new(Tuple::new(vec![Value::string("k"), Value::int(5)]))
}

#[test]
fn tuple_indexing() {
    let t = pair();
    assert_eq!(t.len(), 2);
    assert!(!t.is_empty());
    assert_eq!(t.get(1).ok().and_then(Value::as_int), Some(5));
    assert_eq!(t.narrow::<i64>(1), Ok(5));
}

#[test]
fn tuple_index_out_of_range() {
    let t = pair();
    assert_eq!(
        t.get(2).map(|_| ()),
        Err(CallError::IndexOutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn tuple_slot_type_mismatch() {
    let err = pair().narrow::<i64>(0).unwrap_err();
    assert_eq!(
        err,
        CallError::TypeMismatch {
            site: "slot 0 of tuple".to_string(),
            expected: Ty::Int,
            found: "str".to_string(),
        }
    );
}

#[test]
fn dict_item_unpacks_both_slots() {
    let item = DictItem::<Ref<Str>, i64>::from_tuple(pair()).unwrap();
    let (key, value) = item.unpack().unwrap();
    assert_eq!(key.as_str(), "k");
    assert_eq!(value, 5);
}

#[test]
fn dict_item_unpack_fails_whole() {
    let item = DictItem::<Ref<Str>, Ref<Str>>::from_tuple(pair()).unwrap();
    let err = item.unpack().unwrap_err();
    assert_eq!(
        err,
        CallError::TypeMismatch {
            site: "value of DictItem".to_string(),
            expected: Ty::Str,
            found: "int".to_string(),
        }
    );
}

#[test]
fn dict_item_rejects_wrong_arity() {
    let triple = Ref::new(Tuple::new(vec![Value::int(1), Value::int(2), Value::int(3)]));
    let err = DictItem::<i64, i64>::from_tuple(triple).unwrap_err();
    assert_eq!(
        err,
        CallError::ArityMismatch {
            function: "DictItem".into(),
            expected: 2,
            got: 3,
        }
    );
}

#[test]
fn dict_item_is_a_tuple() {
    let item = DictItem::new(Ref::new(Str::from("a")), 1_i64);
    assert_eq!(item.len(), 2);
    assert_eq!(item.key_slot().as_str(), Some("a"));
    assert_eq!(item.value_slot().as_int(), Some(1));
}

#[test]
fn dict_item_erases_to_its_base() {
    let item = Ref::new(DictItem::new(Ref::new(Str::from("a")), 1_i64));
    let base = Ref::clone(item.base());
    let value = Ref::clone(&item).into_value();
    assert!(matches!(&value, Value::Tuple(t) if Ref::ptr_eq(t, &base)));

    let back = <Ref<DictItem<Ref<Str>, i64>>>::from_value(value).unwrap();
    assert!(Ref::ptr_eq(back.base(), &base));
}

#[test]
fn dict_item_type() {
    assert_eq!(
        <Ref<DictItem<Ref<Str>, i64>>>::ty(),
        Ty::dict_item(Ty::Str, Ty::Int)
    );
}

#[test]
fn dict_item_handle_rejects_mistyped_slots() {
    let mistyped = Value::tuple(vec![Value::string("k"), Value::string("oops")]);
    let back = <Ref<DictItem<Ref<Str>, i64>>>::from_value(mistyped);
    assert!(matches!(back, Err(Value::Tuple(t)) if t.len() == 2));

    let swapped = Value::tuple(vec![Value::int(5), Value::string("k")]);
    assert!(<Ref<DictItem<Ref<Str>, i64>>>::from_value(swapped).is_err());
}

#[test]
fn dict_item_handle_mismatch_names_slot_types() {
    let mistyped = Value::tuple(vec![Value::string("k"), Value::string("oops")]);
    let err = narrow::<Ref<DictItem<Ref<Str>, i64>>>(mistyped, || "item".to_string())
        .unwrap_err();
    assert_eq!(
        err,
        CallError::TypeMismatch {
            site: "item".to_string(),
            expected: Ty::dict_item(Ty::Str, Ty::Int),
            found: "(str, str)".to_string(),
        }
    );
}

#[test]
fn typed_tuple_type_and_contents() {
    let t = TypedTuple::new((1_i64, Ref::new(Str::from("a")), true));
    assert_eq!(
        <Ref<TypedTuple<(i64, Ref<Str>, bool)>>>::ty(),
        Ty::tuple([Ty::Int, Ty::Str, Ty::Bool])
    );
    assert_eq!(t.len(), 3);
    let (n, s, b) = t.unpack().unwrap();
    assert_eq!((n, s.as_str(), b), (1, "a", true));
}

#[test]
fn typed_tuple_from_tuple_checks_every_slot() {
    let ok = TypedTuple::<(i64, i64)>::from_tuple(Ref::new(Tuple::new(vec![
        Value::int(1),
        Value::int(2),
    ])));
    assert!(ok.is_ok());

    let err = TypedTuple::<(i64, i64)>::from_tuple(Ref::new(Tuple::new(vec![
        Value::int(1),
        Value::Bool(false),
    ])))
    .unwrap_err();
    assert_eq!(
        err,
        CallError::TypeMismatch {
            site: "slot 1 of tuple".to_string(),
            expected: Ty::Int,
            found: "bool".to_string(),
        }
    );

    let err = TypedTuple::<(i64, i64)>::from_tuple(Ref::new(Tuple::new(vec![Value::int(1)])))
        .unwrap_err();
    assert_eq!(
        err,
        CallError::ArityMismatch {
            function: "tuple".into(),
            expected: 2,
            got: 1,
        }
    );
}

#[test]
fn typed_tuple_handle_narrows_only_conforming_tuples() {
    let value = Ref::new(TypedTuple::new((1_i64, 2_i64))).into_value();
    let back = <Ref<TypedTuple<(i64, i64)>>>::from_value(value.clone()).unwrap();
    assert_eq!(back.unpack(), Ok((1, 2)));

    assert!(<Ref<TypedTuple<(i64, bool)>>>::from_value(value.clone()).is_err());
    assert!(<Ref<TypedTuple<(i64,)>>>::from_value(value).is_err());
    assert!(<Ref<TypedTuple<()>>>::from_value(Value::tuple(vec![])).is_ok());
}

#[test]
fn element_conformance() {
    let slots = [Value::string("k"), Value::int(5)];
    assert!(<(Ref<Str>, i64)>::conforms(&slots));
    assert!(!<(i64, i64)>::conforms(&slots));
    assert!(!<(Ref<Str>,)>::conforms(&slots));
    assert!(<()>::conforms(&[]));
}
