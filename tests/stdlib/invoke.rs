//! Integration tests for invoke

use sundry_foundation::{ErrorKind, NativeFn, Result, Seq, TypeTag, Value};
use sundry_stdlib::{Method, MethodTable, invoke, invoke_with};

use crate::{ints, record};

#[test]
fn invoke_sort_on_nested_sequences() {
    let lists: Seq<Value> = vec![
        Value::Seq(ints(&[5, 1, 7])),
        Value::Seq(ints(&[3, 2, 1])),
    ]
    .into();
    let sorted = invoke(&lists, &Method::from("sort"), &[]).unwrap();
    assert_eq!(
        sorted,
        Seq::from(vec![Value::Seq(ints(&[1, 5, 7])), Value::Seq(ints(&[1, 2, 3]))])
    );
    assert_eq!(lists.get(0), Some(&Value::Seq(ints(&[5, 1, 7]))));
}

#[test]
fn invoke_passes_extra_arguments() {
    let lists: Seq<Value> = vec![Value::Seq(ints(&[1, 2])), Value::Seq(ints(&[3]))].into();
    let joined = invoke(&lists, &Method::from("join"), &[Value::from("-")]).unwrap();
    assert_eq!(joined, Seq::from(vec![Value::from("1-2"), Value::from("3")]));
}

#[test]
fn invoke_reverse_on_each_sequence() {
    let lists: Seq<Value> = vec![Value::Seq(ints(&[1, 2, 3])), Value::Seq(ints(&[]))].into();
    let reversed = invoke(&lists, &Method::from("reverse"), &[]).unwrap();
    assert_eq!(
        reversed,
        Seq::from(vec![Value::Seq(ints(&[3, 2, 1])), Value::Seq(ints(&[]))])
    );
}

#[test]
fn invoke_string_methods() {
    let words: Seq<Value> = vec![Value::from(" Moe "), Value::from("larry")].into();
    let trimmed = invoke(&words, &Method::from("trim"), &[]).unwrap();
    let upper = invoke(&trimmed, &Method::from("to_upper"), &[]).unwrap();
    assert_eq!(upper, Seq::from(vec![Value::from("MOE"), Value::from("LARRY")]));
}

#[test]
fn invoke_with_closure() {
    let scale = |receiver: &Value, args: &[Value]| -> Result<Value> {
        let factor = args.first().and_then(Value::as_int).unwrap_or(1);
        Ok(Value::Int(receiver.as_int().unwrap_or(0) * factor))
    };
    let scaled = invoke(&ints(&[1, 2, 3]), &Method::Func(&scale), &[Value::Int(10)]).unwrap();
    assert_eq!(scaled, ints(&[10, 20, 30]));
}

fn greet(args: &[Value]) -> Result<Value> {
    let name = args[0].get(&Value::from("name"));
    Ok(Value::from(format!("hi {name}")))
}

#[test]
fn invoke_finds_methods_stored_on_records() {
    let method = Value::from(NativeFn::new("greet", greet));
    let people: Seq<Value> = vec![
        record(&[("name", Value::from("moe")), ("greet", method.clone())]),
        record(&[("name", Value::from("curly")), ("greet", method)]),
    ]
    .into();
    let greetings = invoke(&people, &Method::from("greet"), &[]).unwrap();
    assert_eq!(greetings, Seq::from(vec![Value::from("hi moe"), Value::from("hi curly")]));
}

#[test]
fn invoke_missing_method_reports_element() {
    let mixed: Seq<Value> = vec![Value::from("ok"), Value::Int(4)].into();
    let err = invoke(&mixed, &Method::from("to_upper"), &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MethodNotFound { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("invoke"));
    assert_eq!(context.stack, vec!["element 1".to_string()]);
}

#[test]
fn invoke_empty_sequence() {
    let out = invoke(&Seq::new(), &Method::from("nothing_here"), &[]).unwrap();
    assert!(out.is_empty());
}

fn double(args: &[Value]) -> Result<Value> {
    Ok(Value::Int(args[0].as_int().unwrap_or(0) * 2))
}

#[test]
fn invoke_with_custom_table() {
    let mut table = MethodTable::new();
    table.register(TypeTag::Int, "double", NativeFn::new("double", double));
    assert!(table.contains(TypeTag::Int, "double"));
    assert!(!table.contains(TypeTag::Int, "abs"));

    let doubled = invoke_with(&table, &ints(&[1, 2]), &Method::from("double"), &[]).unwrap();
    assert_eq!(doubled, ints(&[2, 4]));

    let err = invoke_with(&table, &ints(&[1]), &Method::from("abs"), &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MethodNotFound { .. }));
}
