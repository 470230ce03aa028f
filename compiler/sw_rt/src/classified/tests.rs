use std::sync::Arc;

use pretty_assertions::assert_eq;
use sw_types::{Discipline, Ty};

use super::*;
use crate::{Complex, Str, Tuple};

struct Counter {
    hits: i64,
}

impl ObjectType for Counter {
    fn object_ty() -> Ty {
        Ty::named("Counter")
    }
}

fn read_int(x: Const<'_, i64>) -> i64 {
    x
}

fn read_str(s: Const<'_, Str>) -> usize {
    s.len()
}

fn read_counter(c: Const<'_, Counter>) -> i64 {
    c.hits
}

fn take_counter(c: Mutable<Counter>) -> Mutable<Counter> {
    c
}

#[test]
fn builtin_scalars_are_values() {
    assert_eq!(discipline_of::<i64>(), Discipline::Value);
    assert_eq!(discipline_of::<f64>(), Discipline::Value);
    assert_eq!(discipline_of::<bool>(), Discipline::Value);
    assert_eq!(discipline_of::<Complex>(), Discipline::Value);
}

#[test]
fn object_types_are_objects() {
    assert_eq!(discipline_of::<Str>(), Discipline::Object);
    assert_eq!(discipline_of::<Tuple>(), Discipline::Object);
    assert_eq!(discipline_of::<Counter>(), Discipline::Object);
}

#[test]
fn value_const_is_a_copy() {
    let owned: Mutable<i64> = 41;
    let view = i64::as_const(&owned);
    assert_eq!(read_int(view) + 1, 42);
    assert_eq!(owned, 41);
}

#[test]
fn object_const_borrows_without_refcount() {
    let owned: Mutable<Str> = Arc::new(Str::from("hello"));
    let before = Arc::strong_count(&owned);
    let view = Str::as_const(&owned);
    assert_eq!(Arc::strong_count(&owned), before);
    assert!(Arc::ptr_eq(view, &owned));
    assert_eq!(read_str(view), 5);
}

#[test]
fn mutable_object_shares_identity() {
    let owned: Mutable<Counter> = Arc::new(Counter { hits: 3 });
    let passed = take_counter(Arc::clone(&owned));
    assert!(Arc::ptr_eq(&passed, &owned));
    assert_eq!(read_counter(&passed), 3);
}

#[test]
fn absent_is_none_for_both_disciplines() {
    let no_int: Optional<i64> = absent::<i64>();
    let no_str: Optional<Str> = absent::<Str>();
    assert!(no_int.is_none());
    assert!(no_str.is_none());
}

#[test]
fn present_wraps_owned_forms() {
    assert_eq!(present::<i64>(7), Some(7));

    let s = Arc::new(Str::from("k"));
    let opt = present::<Str>(Arc::clone(&s));
    assert!(opt.is_some_and(|inner| Arc::ptr_eq(&inner, &s)));
}

#[test]
fn kind_constants_match_disciplines() {
    assert_eq!(ValueKind::DISCIPLINE, Discipline::Value);
    assert_eq!(ObjectKind::DISCIPLINE, Discipline::Object);
}
