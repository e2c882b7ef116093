//! Capture of the call site an error was created at.
//!
//! An [`InvocationContext`] records where a context-capturing construction
//! happened: the enclosing module, the enclosing function path (when there is
//! one), the source file and line, and a stack trace. It is either fully
//! populated or absent from the owning error; a partially filled context is
//! unrepresentable because the only producer is [`capture`].
//!
//! Capture has to happen in the caller's lexical scope, which is why the
//! public entry point is the [`capture!`](crate::capture) macro rather than a
//! plain function. The macro expands `module_path!()`, `file!()`, `line!()`,
//! and a local probe function at the call site and forwards them here.
//!
//! [`capture`]: InvocationContext::capture

use serde::Serialize;
use serde_json::{Map, Value};
use std::backtrace::Backtrace;

/// Snapshot of the call site a context-capturing construction ran in.
///
/// # Examples
///
/// ```
/// use error_forge::capture;
///
/// let env = capture!();
/// assert!(!env.module.is_empty());
/// assert!(env.line > 0);
/// assert!(env.stacktrace.is_some());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct InvocationContext {
    /// Path of the enclosing module.
    pub module: String,
    /// Full path of the enclosing function, `None` when the capture site is
    /// not inside a named routine.
    pub function: Option<String>,
    /// Source file of the capture site.
    pub file: String,
    /// Source line of the capture site.
    pub line: u32,
    /// Rendered stack frames, innermost first, with the capture machinery's
    /// own frames removed. Present only for full-context capture. Kept out of
    /// every serialized form; it is for in-process diagnostics only.
    #[serde(skip)]
    pub stacktrace: Option<Vec<String>>,
}

impl InvocationContext {
    /// Builds a context from call-site facts gathered by [`capture!`](crate::capture).
    ///
    /// `probe` is the `type_name` of a zero-sized function declared by the
    /// macro inside the caller's scope; stripping the probe's own segment
    /// (and any closure segments) from it yields the enclosing function path.
    /// When `with_stacktrace` is set the current thread's stack is rendered
    /// and attached.
    pub fn capture(
        module: &'static str,
        probe: &'static str,
        file: &'static str,
        line: u32,
        with_stacktrace: bool,
    ) -> Self {
        Self {
            module: module.to_owned(),
            function: enclosing_function(module, probe),
            file: file.to_owned(),
            line,
            stacktrace: with_stacktrace.then(capture_frames),
        }
    }

    /// Formats the capture site as `"<file>:<line>"`.
    #[inline]
    pub fn file_line(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }

    /// Converts an optional context to its plain serializable mapping.
    ///
    /// An absent context yields an empty mapping. A present one yields
    /// `{module, function, file, line, file_line}`; the stack trace is
    /// intentionally omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_forge::{capture, InvocationContext};
    ///
    /// assert!(InvocationContext::to_plain_map(None).is_empty());
    ///
    /// let env = capture!();
    /// let map = InvocationContext::to_plain_map(Some(&env));
    /// assert_eq!(map["file_line"], format!("{}:{}", env.file, env.line));
    /// ```
    pub fn to_plain_map(ctx: Option<&Self>) -> Map<String, Value> {
        let Some(ctx) = ctx else {
            return Map::new();
        };

        let mut map = Map::with_capacity(5);
        map.insert("module".to_owned(), Value::String(ctx.module.clone()));
        map.insert(
            "function".to_owned(),
            ctx.function
                .as_ref()
                .map_or(Value::Null, |f| Value::String(f.clone())),
        );
        map.insert("file".to_owned(), Value::String(ctx.file.clone()));
        map.insert("line".to_owned(), Value::from(ctx.line));
        map.insert("file_line".to_owned(), Value::String(ctx.file_line()));
        map
    }
}

/// Location fields only; the stack trace is diagnostic payload, not identity.
impl PartialEq for InvocationContext {
    fn eq(&self, other: &Self) -> bool {
        self.module == other.module
            && self.function == other.function
            && self.file == other.file
            && self.line == other.line
    }
}

impl Eq for InvocationContext {}

/// Derives the enclosing function path from the probe's type name.
///
/// A probe declared in `my_crate::orders::place` has the type name
/// `my_crate::orders::place::__probe`; inside a closure it gains
/// `::{{closure}}` segments. Stripping those leaves the function path, or
/// nothing when the capture ran at module scope.
fn enclosing_function(module: &str, probe: &str) -> Option<String> {
    let mut path = probe.strip_suffix("::__probe")?;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    if path.is_empty() || path == module {
        None
    } else {
        Some(path.to_owned())
    }
}

/// Renders the current stack into symbol strings, dropping the frames that
/// belong to the capture itself.
fn capture_frames() -> Vec<String> {
    let rendered = Backtrace::force_capture().to_string();
    rendered
        .lines()
        .filter_map(|line| {
            let (index, symbol) = line.trim_start().split_once(": ")?;
            // Frame headers are "N: symbol"; location lines ("at file:line")
            // and anything else fail the index parse.
            index.parse::<usize>().ok()?;
            Some(symbol.trim_end().to_owned())
        })
        .filter(|symbol| {
            !symbol.starts_with("std::backtrace")
                && !symbol.contains("error_forge::types::invocation")
        })
        .collect()
}
