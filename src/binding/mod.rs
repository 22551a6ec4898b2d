//! Bind the raw values extracted for one parameter to its declared type.
//!
//! [`bind`] is the multiplicity-aware entry point: it reconciles
//! presence/absence, default substitution and scalar-versus-list shape, and
//! delegates each individual string conversion to the strategy resolved for
//! the target's scalar type.
use smallvec::{smallvec, SmallVec};

use crate::descriptor::TypeDescriptor;
use crate::strategy::convert::convert_scalar;
use crate::strategy::StrategyRegistry;

mod bound_value;
pub mod errors;
mod parameter_binding;

pub use bound_value::{BoundValue, Element};
pub use parameter_binding::ParameterBinding;

use errors::BindError;

/// Bind one parameter.
///
/// The effective value sequence is the raw values when any were supplied,
/// the default when one is configured, and empty otherwise. Then:
///
/// - a scalar target converts the first effective value only (extra values
///   are ignored), and an empty sequence yields [`BoundValue::Null`];
/// - a list target converts every effective value independently, in
///   extraction order. One failing element fails the whole binding; no
///   partial list is ever returned.
///
/// The default is substituted only when the request supplied no raw value at
/// all, never when a supplied value fails conversion. An explicitly present
/// empty string is a value, not an absence: it overrides the default and
/// participates in conversion.
pub fn bind(
    registry: &StrategyRegistry,
    binding: ParameterBinding<'_>,
) -> Result<BoundValue, BindError> {
    let ParameterBinding {
        target,
        raw_values,
        default,
    } = binding;

    // Default substitution is presence-based: it happens before any
    // conversion is attempted and never as a fallback for a failing value.
    let effective: SmallVec<[&str; 1]> = if !raw_values.is_empty() {
        raw_values
    } else if let Some(default) = default {
        smallvec![default]
    } else {
        SmallVec::new()
    };

    match target {
        TypeDescriptor::Scalar(scalar) => {
            // Absence is not an error and must not depend on whether the
            // type was ever registered.
            let Some(first) = effective.first() else {
                return Ok(BoundValue::Null);
            };
            let entry = registry.resolve(scalar)?;
            match convert_scalar(&entry, first)? {
                Element::Null => Ok(BoundValue::Null),
                Element::Value(value) => Ok(BoundValue::Scalar(value)),
            }
        }
        TypeDescriptor::List(element) => {
            // Resolution runs even when there is nothing to convert, so a
            // misconfigured handler fails on its first bind rather than on
            // the first populated request.
            let entry = registry.resolve(element)?;
            let mut converted = Vec::with_capacity(effective.len());
            for raw in &effective {
                converted.push(convert_scalar(&entry, raw)?);
            }
            Ok(BoundValue::List(converted))
        }
    }
}
