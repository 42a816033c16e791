//! Integration tests for Error types
//!
//! Tests construction, messages, and attached context.

use sundry_foundation::{Error, ErrorContext, ErrorKind, Type};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(Type::seq(Type::Any), Type::Int);
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch { ref expected, ref actual }
            if *expected == Type::seq(Type::Any) && *actual == Type::Int
    ));
    assert_eq!(err.to_string(), "type mismatch: expected seq<any>, got int");
}

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("separator must be a string");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
    assert_eq!(err.to_string(), "invalid argument: separator must be a string");
}

#[test]
fn error_empty_reduce() {
    let err = Error::empty_reduce();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
    assert!(err.to_string().contains("empty collection"));
}

#[test]
fn error_method_not_found() {
    let err = Error::method_not_found("frobnicate", Type::String);
    match &err.kind {
        ErrorKind::MethodNotFound { method, receiver } => {
            assert_eq!(method, "frobnicate");
            assert_eq!(*receiver, Type::String);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert_eq!(err.to_string(), "method not found: frobnicate on string");
}

#[test]
fn error_arity_mismatch() {
    let err = Error::arity_mismatch("0 or 1", 3);
    assert_eq!(err.to_string(), "arity mismatch: expected 0 or 1, got 3");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::invalid_argument("x");
    assert!(err.context.is_none());
}

#[test]
fn error_with_context() {
    let err = Error::method_not_found("size", Type::Int).with_context(
        ErrorContext::new()
            .with_source("invoke")
            .with_frame("element 2"),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("invoke"));
    assert_eq!(context.stack, vec!["element 2".to_string()]);
}

#[test]
fn error_context_display() {
    let context = ErrorContext::new()
        .with_source("invoke")
        .with_frame("element 0")
        .with_frame("join");
    assert_eq!(context.to_string(), "in invoke\n  at element 0\n  at join\n");
}

#[test]
fn error_context_display_empty() {
    assert_eq!(ErrorContext::new().to_string(), "");
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::empty_reduce());
}
