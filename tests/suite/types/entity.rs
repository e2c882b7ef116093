use error_forge::{ErrorEntity, ErrorKind, Reason};
use std::borrow::Cow;

fn entity(message: Option<&'static str>, reason: Option<&'static str>) -> ErrorEntity {
    ErrorEntity {
        message: message.map(Cow::Borrowed),
        reason: reason.map(Reason::from),
        ..ErrorEntity::default()
    }
}

#[test]
fn test_format_message_without_reason() {
    assert_eq!(entity(Some("X"), None).format_message(), "X");
}

#[test]
fn test_format_message_with_reason() {
    assert_eq!(entity(Some("X"), Some("r")).format_message(), "X: r");
}

#[test]
#[should_panic(expected = "no message")]
fn test_format_message_without_message_is_a_contract_violation() {
    entity(None, Some("r")).format_message();
}

#[test]
fn test_display_delegates_to_format_message() {
    let err = entity(Some("invalid order"), Some("out_of_stock"));
    assert_eq!(err.to_string(), "invalid order: out_of_stock");
}

#[test]
fn test_error_trait_impl() {
    // ErrorEntity must be usable wherever a std error is expected.
    let err = entity(Some("boom"), None);
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "boom");
}

#[test]
fn test_default_is_an_anonymous_general_error() {
    let err = ErrorEntity::default();
    assert_eq!(err.error_type, "error");
    assert_eq!(err.kind, ErrorKind::General);
    assert!(err.message.is_none());
    assert!(err.reason.is_none());
    assert!(err.context.is_none());
    assert!(err.env.is_none());
}

#[test]
fn test_kind_predicates_are_exclusive() {
    let domain = ErrorEntity {
        kind: ErrorKind::Domain,
        ..ErrorEntity::default()
    };
    assert!(domain.is_domain());
    assert!(!domain.is_infrastructure());
    assert!(!domain.is_general());

    let infra = ErrorEntity {
        kind: ErrorKind::Infrastructure,
        ..ErrorEntity::default()
    };
    assert!(infra.is_infrastructure());
    assert!(!infra.is_domain());
}

#[test]
fn test_entities_are_freely_shareable_across_threads() {
    let err = entity(Some("shared"), Some("everywhere"));
    let clone = err.clone();
    let handle = std::thread::spawn(move || clone.format_message());
    assert_eq!(handle.join().unwrap(), err.format_message());
}
