use error_forge::prelude::*;

define_error! {
    pub CacheMiss { kind: Infrastructure, message: "cache miss", reason: "cold" }
}

#[test]
fn test_params_macro_builds_each_recognized_key() {
    let p = params!(message: "m", reason: "r", context: ctx! { "k" => 1 });
    assert_eq!(p.message.as_deref(), Some("m"));
    assert_eq!(p.reason.as_ref().map(Reason::as_str), Some("r"));
    assert_eq!(p.context.unwrap()["k"], ContextValue::Int(1));
}

#[test]
fn test_params_macro_accepts_owned_strings() {
    let key = "shard-7".to_string();
    let p = params!(message: format!("lost {key}"), reason: key);
    assert_eq!(p.message.as_deref(), Some("lost shard-7"));
    assert_eq!(p.reason.as_ref().map(Reason::as_str), Some("shard-7"));
}

#[test]
fn test_params_macro_still_evaluates_unknown_values() {
    // Unknown keys are dropped but their expressions run; callers may rely
    // on that for logging side effects.
    let mut touched = false;
    let _ = params!(unknown: {
        touched = true;
        1
    });
    assert!(touched);
}

#[test]
fn test_ctx_macro_shapes() {
    let empty = ctx!();
    assert!(empty.is_empty());

    let full = ctx! {
        "bool" => true,
        "int" => 9,
        "text" => "hi",
        "nested" => ContextValue::Seq(vec![ContextValue::Null]),
    };
    assert_eq!(full.len(), 4);
    assert_eq!(full["bool"], ContextValue::Bool(true));
}

#[test]
fn test_ctx_macro_accepts_owned_keys() {
    let key = String::from("dynamic");
    let context = ctx! { key => 1 };
    assert!(context.contains_key("dynamic"));
}

#[test]
fn test_create_with_trailing_comma() {
    let err = create!(CacheMiss, reason: "expired",);
    assert_eq!(err.reason.as_ref().map(Reason::as_str), Some("expired"));
    assert!(err.env.is_some());
}

#[test]
fn test_define_error_preserves_visibility_and_docs() {
    mod inner {
        error_forge::define_error! {
            /// Only visible inside this module tree.
            pub(crate) Private { kind: General, message: "private" }
        }

        pub fn make() -> error_forge::ErrorEntity {
            use error_forge::ErrorDefinition;
            Private::new(error_forge::params!())
        }
    }

    assert_eq!(inner::make().error_type, "Private");
}

#[test]
fn test_capture_line_matches_expansion_site() {
    let line = line!() + 1;
    let env = capture!();
    assert_eq!(env.line, line);
}
