use error_forge::prelude::*;
use serde_json::json;

define_error! {
    pub OrderRejected { kind: Domain, message: "order rejected", reason: "rejected" }
}

define_error! {
    pub BrokerDown { kind: Infrastructure, message: "broker down", reason: "unreachable" }
}

define_error! {
    pub Oops { kind: General, message: "oops" }
}

#[test]
fn test_classification_is_exclusive_per_kind() {
    let domain = OrderRejected::new(params!());
    assert!(is_error(&domain));
    assert!(is_domain_error(&domain));
    assert!(!is_infrastructure_error(&domain));

    let infra = BrokerDown::new(params!());
    assert!(is_error(&infra));
    assert!(is_infrastructure_error(&infra));
    assert!(!is_domain_error(&infra));
}

#[test]
fn test_general_errors_answer_only_the_base_predicate() {
    let general = Oops::new(params!());
    assert!(is_error(&general));
    assert!(!is_domain_error(&general));
    assert!(!is_infrastructure_error(&general));
    assert_eq!(kind_of(&general), Some(ErrorKind::General));
}

#[test]
fn test_non_error_values_fail_every_predicate() {
    assert!(!is_error(&42));
    assert!(!is_error(&"a string"));
    assert!(!is_error(&vec![1, 2, 3]));
    assert!(!is_domain_error(&42));
    assert!(!is_infrastructure_error(&42));
}

#[test]
fn test_hand_built_entities_are_recognized() {
    // Classification is structural; no definition involved.
    let hand_built = ErrorEntity {
        kind: ErrorKind::Domain,
        ..ErrorEntity::default()
    };
    assert!(is_domain_error(&hand_built));
}

#[test]
fn test_decoded_values_are_recognized_by_shape() {
    let decoded = json!({
        "error_type": "RemoteFailure",
        "kind": "infrastructure",
        "message": "remote failure",
        "reason": "timeout",
        "context": {},
        "env": null,
    });
    assert!(is_error(&decoded));
    assert!(is_infrastructure_error(&decoded));
    assert!(!is_domain_error(&decoded));
}

#[test]
fn test_decoded_values_missing_fields_are_rejected() {
    let missing_reason = json!({
        "error_type": "RemoteFailure",
        "kind": "infrastructure",
        "message": "remote failure",
        "context": {},
        "env": null,
    });
    assert!(!is_error(&missing_reason));

    let unknown_kind = json!({
        "error_type": "RemoteFailure",
        "kind": "catastrophe",
        "message": null,
        "reason": null,
        "context": null,
        "env": null,
    });
    assert!(!is_error(&unknown_kind));
}

#[test]
fn test_predicates_work_inside_match_guards() {
    let err = OrderRejected::new(params!());
    let routed = match &err {
        e if is_domain_error(e) => "domain",
        e if is_infrastructure_error(e) => "infrastructure",
        _ => "other",
    };
    assert_eq!(routed, "domain");
}

#[test]
fn test_serialized_entities_keep_their_shape() {
    // The serde form of an entity exposes the canonical field names, so a
    // decode-then-classify round trip holds.
    let err = BrokerDown::new(params!());
    let decoded = serde_json::to_value(&err).unwrap();
    assert!(is_infrastructure_error(&decoded));
}
