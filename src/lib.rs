//! Bind raw textual request values (cookie values, headers, query or form
//! fields, any string-valued request source) to the strongly-typed parameters
//! declared by handler signatures.
//!
//! Routing, handler dispatch and the extraction of raw strings from the
//! transport are upstream collaborators. They hand this crate zero, one or
//! many raw strings per declared parameter, together with a
//! [`TypeDescriptor`] and an optional declaration-time default, and get back
//! a typed value, or a structured failure that maps to a `400 Bad Request`.
//!
//! # Example
//!
//! ```rust
//! use bindery::{bind, ParameterBinding, StrategyRegistry, TypeDescriptor};
//!
//! let registry = StrategyRegistry::with_defaults();
//!
//! // A raw value supplied by the request always wins over the
//! // declaration-time default.
//! let binding = ParameterBinding::new(TypeDescriptor::scalar::<f64>())
//!     .raw_value("2.718")
//!     .default_value("3.145");
//! let bound = bind(&registry, binding).unwrap();
//! assert_eq!(bound.into_scalar::<f64>().unwrap(), Some(2.718));
//! ```
pub mod binding;
pub mod descriptor;
pub mod response;
pub mod strategy;

pub use binding::{bind, BoundValue, ParameterBinding};
pub use descriptor::{ScalarType, TypeDescriptor};
pub use response::Response;
pub use strategy::{ConversionStrategy, EmptyStringPolicy, FromRequestString, StrategyRegistry};
