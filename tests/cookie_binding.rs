//! End-to-end scenarios for a cookie-backed collaborator: the raw strings
//! below are cookie values already extracted from a `Cookie` header, handed
//! to the engine together with the handler's declared parameter types.
use std::fmt::Display;
use std::net::IpAddr;

use http::{StatusCode, Uri};

use bindery::{
    bind, EmptyStringPolicy, ParameterBinding, StrategyRegistry, TypeDescriptor,
};

fn registry() -> StrategyRegistry {
    let registry = StrategyRegistry::with_defaults();
    registry.register_parsed::<Uri>();
    registry
}

#[test]
fn cookie_values_convert_to_their_declared_types() {
    let registry = registry();

    let arg1 = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::scalar::<f64>()).raw_value("3.145"),
    )
    .unwrap();
    assert_eq!(arg1.into_scalar::<f64>().unwrap(), Some(3.145));

    let arg2 = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::scalar::<i128>()).raw_value("3145"),
    )
    .unwrap();
    assert_eq!(arg2.into_scalar::<i128>().unwrap(), Some(3145));

    let arg3 = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::scalar::<Uri>()).raw_value("http://test"),
    )
    .unwrap()
    .into_scalar::<Uri>()
    .unwrap()
    .unwrap();
    assert_eq!(arg3.scheme_str(), Some("http"));
    assert_eq!(arg3.host(), Some("test"));
}

#[test]
fn a_single_cookie_binds_to_a_one_element_list() {
    let registry = registry();
    let bound = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::list::<f64>()).raw_value("3.145"),
    )
    .unwrap();
    assert_eq!(bound.into_list::<f64>().unwrap(), vec![Some(3.145)]);
}

#[test]
fn an_empty_cookie_value_becomes_a_null_list_element() {
    // The declared element type opts into null-on-empty, so the presence of
    // the cookie still produces a one-element list, not an empty one.
    let registry = StrategyRegistry::new();
    registry.register_parsed_with::<f64>(EmptyStringPolicy::Null);

    let bound = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::list::<f64>()).raw_value(""),
    )
    .unwrap();
    assert_eq!(bound.into_list::<f64>().unwrap(), vec![None]);
}

#[test]
fn a_missing_cookie_with_no_default_binds_to_null() {
    let registry = registry();
    let bound = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::scalar::<f64>()),
    )
    .unwrap();
    assert_eq!(bound.into_scalar::<f64>().unwrap(), None);
}

#[test]
fn a_missing_cookie_takes_the_declared_default() {
    let registry = registry();
    let bound = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::scalar::<f64>()).default_value("3.145"),
    )
    .unwrap();
    assert_eq!(bound.into_scalar::<f64>().unwrap(), Some(3.145));
}

#[test]
fn a_supplied_cookie_overrides_the_declared_default() {
    let registry = registry();
    let bound = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::scalar::<f64>())
            .raw_value("2.718")
            .default_value("3.145"),
    )
    .unwrap();
    assert_eq!(bound.into_scalar::<f64>().unwrap(), Some(2.718));
}

#[test]
fn a_missing_cookie_list_with_no_default_is_empty() {
    let registry = registry();
    let bound = bind(&registry, ParameterBinding::new(TypeDescriptor::list::<f64>())).unwrap();
    assert_eq!(bound.into_list::<f64>().unwrap(), vec![]);
}

#[test]
fn a_missing_cookie_list_takes_the_declared_default() {
    let registry = registry();
    let bound = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::list::<f64>()).default_value("3.145"),
    )
    .unwrap();
    assert_eq!(bound.into_list::<f64>().unwrap(), vec![Some(3.145)]);
}

#[test]
fn a_supplied_cookie_overrides_the_declared_list_default() {
    let registry = registry();
    let bound = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::list::<f64>())
            .raw_value("2.718")
            .default_value("3.145"),
    )
    .unwrap();
    assert_eq!(bound.into_list::<f64>().unwrap(), vec![Some(2.718)]);
}

#[test]
fn an_unconvertible_cookie_value_is_a_bad_request() {
    let registry = registry();
    let error = bind(
        &registry,
        ParameterBinding::new(TypeDescriptor::scalar::<f64>()).raw_value("ABCDEF"),
    )
    .unwrap_err();

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.body().contains("ABCDEF"));
}

#[test]
fn canonical_string_representations_round_trip() {
    let registry = registry();
    assert_round_trips::<f64>(&registry, "3.145");
    assert_round_trips::<i128>(&registry, "3145");
    assert_round_trips::<bool>(&registry, "true");
    assert_round_trips::<IpAddr>(&registry, "127.0.0.1");
}

fn assert_round_trips<T>(registry: &StrategyRegistry, raw: &str)
where
    T: Display + PartialEq + std::fmt::Debug + 'static,
{
    let first = bind(
        registry,
        ParameterBinding::new(TypeDescriptor::scalar::<T>()).raw_value(raw),
    )
    .unwrap()
    .into_scalar::<T>()
    .unwrap()
    .unwrap();

    let formatted = first.to_string();
    let second = bind(
        registry,
        ParameterBinding::new(TypeDescriptor::scalar::<T>()).raw_value(&formatted),
    )
    .unwrap()
    .into_scalar::<T>()
    .unwrap()
    .unwrap();

    assert_eq!(first, second, "`{raw}` did not round-trip");
}
