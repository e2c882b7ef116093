use error_forge::{capture, InvocationContext};

#[test]
fn test_capture_populates_every_location_field() {
    let env = capture!();
    assert_eq!(env.module, module_path!());
    assert_eq!(env.file, file!());
    assert!(env.line > 0);
    let function = env.function.expect("capture ran inside a named test fn");
    assert!(function.ends_with("test_capture_populates_every_location_field"));
}

#[test]
fn test_capture_includes_stack_frames_by_default() {
    let env = capture!();
    let frames = env.stacktrace.expect("full capture carries a stack trace");
    assert!(!frames.is_empty());
    // The capture machinery's own frames are excluded.
    assert!(frames
        .iter()
        .all(|frame| !frame.contains("error_forge::types::invocation")));
}

#[test]
fn test_bare_capture_skips_the_stack_trace() {
    let env = capture!(false);
    assert!(env.stacktrace.is_none());
}

#[test]
fn test_capture_inside_closure_reports_the_enclosing_fn() {
    let env = (|| capture!())();
    let function = env.function.expect("closure is inside a named test fn");
    assert!(function.ends_with("test_capture_inside_closure_reports_the_enclosing_fn"));
}

#[test]
fn test_file_line_format() {
    let env = capture!(false);
    assert_eq!(env.file_line(), format!("{}:{}", env.file, env.line));
}

#[test]
fn test_to_plain_map_absent_context_is_empty() {
    assert!(InvocationContext::to_plain_map(None).is_empty());
}

#[test]
fn test_to_plain_map_shape() {
    let env = capture!();
    let map = InvocationContext::to_plain_map(Some(&env));

    assert_eq!(map.len(), 5);
    assert_eq!(map["module"], env.module.as_str());
    assert_eq!(map["file"], env.file.as_str());
    assert_eq!(map["line"], env.line);
    assert_eq!(map["file_line"], env.file_line());
    assert_eq!(
        map["function"],
        env.function.clone().expect("named test fn").as_str()
    );
    // The stack trace never reaches the serialized form.
    assert!(!map.contains_key("stacktrace"));
}

#[test]
fn test_equality_ignores_the_stack_trace() {
    let with_trace = capture!();
    let mut without_trace = with_trace.clone();
    without_trace.stacktrace = None;
    assert_eq!(with_trace, without_trace);
}
