use error_forge::ContextValue;
use std::collections::BTreeMap;
use std::sync::Arc;

#[test]
fn test_scalar_conversions() {
    assert_eq!(ContextValue::from(true), ContextValue::Bool(true));
    assert_eq!(ContextValue::from(7), ContextValue::Int(7));
    assert_eq!(ContextValue::from(7i64), ContextValue::Int(7));
    assert_eq!(ContextValue::from(0.5), ContextValue::Float(0.5));
    assert_eq!(
        ContextValue::from("sku"),
        ContextValue::String("sku".into())
    );
}

#[test]
fn test_nested_conversions() {
    let seq = ContextValue::from(vec![1, 2, 3]);
    assert_eq!(
        seq,
        ContextValue::Seq(vec![
            ContextValue::Int(1),
            ContextValue::Int(2),
            ContextValue::Int(3),
        ])
    );

    let mut inner = BTreeMap::new();
    inner.insert("a".to_string(), 1);
    let map = ContextValue::from(inner);
    assert!(matches!(map, ContextValue::Map(_)));
}

#[test]
fn test_encodable_classification() {
    assert!(ContextValue::Null.is_encodable());
    assert!(ContextValue::from("plain").is_encodable());
    assert!(!ContextValue::Float(f64::NAN).is_encodable());
    assert!(!ContextValue::opaque(std::time::Instant::now()).is_encodable());

    // One opaque leaf poisons the whole branch.
    let nested = ContextValue::Seq(vec![
        ContextValue::Int(1),
        ContextValue::opaque("handle"),
    ]);
    assert!(!nested.is_encodable());
}

#[test]
fn test_opaque_values_compare_by_identity() {
    let shared = Arc::new("handle");
    let a = ContextValue::Opaque(shared.clone());
    let b = ContextValue::Opaque(shared);
    assert_eq!(a, b);
    assert_eq!(a, a.clone());

    let c = ContextValue::opaque("handle");
    assert_ne!(a, c);
}

#[test]
fn test_opaque_debug_shows_inner_value() {
    let value = ContextValue::opaque(std::time::Duration::from_secs(2));
    assert_eq!(format!("{value:?}"), "2s");
}

#[test]
fn test_serialize_stringifies_opaque_values() {
    let value = ContextValue::opaque(std::time::Duration::from_millis(10));
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json, serde_json::json!("10ms"));
}

#[test]
fn test_deserialize_round_trips_encodable_values() {
    let original = ContextValue::Map(BTreeMap::from([
        ("count".to_string(), ContextValue::Int(3)),
        (
            "tags".to_string(),
            ContextValue::Seq(vec![ContextValue::from("a"), ContextValue::from("b")]),
        ),
        ("note".to_string(), ContextValue::Null),
    ]));

    let json = serde_json::to_string(&original).unwrap();
    let decoded: ContextValue = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
}
