use std::any::Any;

use super::errors::ValueTypeMismatch;

/// One converted element of a list parameter.
pub enum Element {
    /// The null-equivalent value produced by
    /// [`EmptyStringPolicy::Null`](crate::strategy::EmptyStringPolicy::Null).
    Null,
    /// A converted value. It downcasts to the scalar type its strategy was
    /// registered for.
    Value(Box<dyn Any + Send>),
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Null => f.write_str("Null"),
            Element::Value(_) => f.write_str("Value(..)"),
        }
    }
}

/// The typed outcome of binding one parameter: nothing, one scalar value,
/// or a list of values.
///
/// The payloads are type-erased because multiplicity and target type are
/// only known at runtime; use [`into_scalar`](Self::into_scalar) or
/// [`into_list`](Self::into_list) to recover the concrete type.
pub enum BoundValue {
    /// The parameter was absent and no default was configured, or an
    /// empty raw value converted to the null-equivalent.
    Null,
    /// A single converted value.
    Scalar(Box<dyn Any + Send>),
    /// Converted values, in extraction order.
    List(Vec<Element>),
}

impl BoundValue {
    /// `true` if the binding produced no value at all.
    pub fn is_null(&self) -> bool {
        matches!(self, BoundValue::Null)
    }

    /// Extract a scalar binding as a `T`.
    ///
    /// `None` signals absence. It returns an error if the binding produced
    /// a list, or a value of a type other than `T`; both are programmer
    /// errors, not request errors.
    pub fn into_scalar<T: 'static>(self) -> Result<Option<T>, ValueTypeMismatch> {
        let expected = std::any::type_name::<T>();
        match self {
            BoundValue::Null => Ok(None),
            BoundValue::Scalar(value) => value
                .downcast::<T>()
                .map(|boxed| Some(*boxed))
                .map_err(|_| ValueTypeMismatch {
                    expected,
                    actual: "a scalar of a different type",
                }),
            BoundValue::List(_) => Err(ValueTypeMismatch {
                expected,
                actual: "a list",
            }),
        }
    }

    /// Extract a list binding as a `Vec<Option<T>>`.
    ///
    /// `None` elements are the null-equivalents produced by the
    /// empty-string policy. It returns an error if the binding produced a
    /// scalar, or elements of a type other than `T`.
    pub fn into_list<T: 'static>(self) -> Result<Vec<Option<T>>, ValueTypeMismatch> {
        let expected = std::any::type_name::<T>();
        match self {
            BoundValue::List(elements) => elements
                .into_iter()
                .map(|element| match element {
                    Element::Null => Ok(None),
                    Element::Value(value) => value
                        .downcast::<T>()
                        .map(|boxed| Some(*boxed))
                        .map_err(|_| ValueTypeMismatch {
                            expected,
                            actual: "a list with elements of a different type",
                        }),
                })
                .collect(),
            BoundValue::Null | BoundValue::Scalar(_) => Err(ValueTypeMismatch {
                expected,
                actual: "a scalar",
            }),
        }
    }
}

impl std::fmt::Debug for BoundValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundValue::Null => f.write_str("Null"),
            BoundValue::Scalar(_) => f.write_str("Scalar(..)"),
            BoundValue::List(elements) => f.debug_tuple("List").field(elements).finish(),
        }
    }
}
