use super::*;
use pretty_assertions::assert_eq;

#[test]
fn truthiness() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::int(1).is_truthy());
    assert!(!Value::int(0).is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(Value::string("x").is_truthy());
    assert!(!Value::list(vec![]).is_truthy());
    assert!(!Value::Void.is_truthy());
}

#[test]
fn display_formatting() {
    assert_eq!(format!("{}", Value::int(42)), "42");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::string("hello")), "\"hello\"");
    assert_eq!(
        format!("{}", Value::list(vec![Value::int(1), Value::int(2)])),
        "[1, 2]"
    );
    assert_eq!(
        format!("{}", Value::set([Value::int(1), Value::int(2)])),
        "{1, 2}"
    );
}

#[test]
fn factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let list = Value::list(vec![Value::int(1), Value::int(2)]);
    assert_eq!(list.as_list().map(<[Value]>::len), Some(2));

    let f = Value::func("id", |args| {
        Ok(args.into_values().pop().unwrap_or(Value::Void))
    });
    assert!(f.as_func().is_some());
    assert_eq!(f.type_name(), "func");
}

#[test]
fn set_dedups_preserving_insertion_order() {
    let set = Value::set([Value::int(3), Value::int(1), Value::int(3), Value::int(2)]);
    match &set {
        Value::Set(items) => {
            let raw: Vec<i64> = items.iter().filter_map(Value::as_int).collect();
            assert_eq!(raw, vec![3, 1, 2]);
        }
        other => panic!("expected set, got {other:?}"),
    }
}

#[test]
fn equality() {
    assert!(Value::int(42).equals(&Value::int(42)));
    assert!(!Value::int(42).equals(&Value::int(43)));
    assert!(Value::string("hello").equals(&Value::string("hello")));
    assert!(!Value::int(1).equals(&Value::Float(1.0)));

    // Sets compare order-insensitively
    let a = Value::set([Value::int(1), Value::int(2)]);
    let b = Value::set([Value::int(2), Value::int(1)]);
    assert!(a.equals(&b));
}

#[test]
fn float_equality_is_strict_at_every_depth() {
    // Near-zero floats are distinct values, as scalars and inside containers
    assert!(!Value::float(0.0).equals(&Value::float(1e-17)));
    assert!(!Value::list(vec![Value::float(0.0)]).equals(&Value::list(vec![Value::float(1e-17)])));
    assert!(Value::float(1.5).equals(&Value::float(1.5)));
    assert!(!Value::float(f64::NAN).equals(&Value::float(f64::NAN)));

    // Dedup keeps near-zero floats as separate set elements
    let set = Value::set([Value::float(0.0), Value::float(1e-17)]);
    match &set {
        Value::Set(items) => assert_eq!(items.len(), 2),
        other => panic!("expected set, got {other:?}"),
    }
}

#[test]
fn identity_vs_equality() {
    let a = Value::string("hello");
    let b = Value::string("hello");
    let c = a.clone();

    assert!(a.equals(&b));
    assert!(!a.is_identical(&b));
    assert!(a.is_identical(&c));

    // Scalars are identical by value
    assert!(Value::int(2).is_identical(&Value::int(2)));
}

#[test]
fn conversions() {
    assert_eq!(Value::from(5i64), Value::int(5));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from("abc"), Value::string("abc"));
    assert_eq!(Value::from(()), Value::Void);
}
