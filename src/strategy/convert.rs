//! Execution of a resolved strategy against a single raw value.
use crate::binding::errors::ConversionFailure;
use crate::binding::Element;

use super::registry::StrategyEntry;
use super::EmptyStringPolicy;

/// Convert one raw string using `entry`'s strategy.
///
/// Referentially transparent: the same raw value and entry always produce
/// the same outcome. Any failure raised by the strategy is wrapped into a
/// [`ConversionFailure`] carrying the offending raw value and the target
/// type; it never escapes as a bare error.
pub(crate) fn convert_scalar(
    entry: &StrategyEntry,
    raw: &str,
) -> Result<Element, ConversionFailure> {
    if raw.is_empty() && entry.empty_string_policy == EmptyStringPolicy::Null {
        return Ok(Element::Null);
    }
    (entry.convert)(raw)
        .map(Element::Value)
        .map_err(|source| ConversionFailure {
            raw: raw.to_owned(),
            target: entry.target,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ScalarType;
    use crate::strategy::StrategyRegistry;

    #[test]
    fn failures_carry_the_offending_value_and_target() {
        let registry = StrategyRegistry::with_defaults();
        let entry = registry.resolve(ScalarType::of::<f64>()).unwrap();

        let error = convert_scalar(&entry, "ABCDEF").unwrap_err();
        assert_eq!(error.raw(), "ABCDEF");
        assert!(error.target().is::<f64>());
        assert_eq!(error.to_string(), "`ABCDEF` cannot be converted to a `f64`");
    }

    #[test]
    fn empty_string_is_an_ordinary_raw_value_by_default() {
        let registry = StrategyRegistry::with_defaults();

        // `f64` rejects it,
        let decimal = registry.resolve(ScalarType::of::<f64>()).unwrap();
        assert!(convert_scalar(&decimal, "").is_err());

        // the identity strategy passes it through.
        let string = registry.resolve(ScalarType::of::<String>()).unwrap();
        match convert_scalar(&string, "").unwrap() {
            Element::Value(value) => assert_eq!(*value.downcast::<String>().unwrap(), ""),
            Element::Null => panic!("the identity strategy never yields a null element"),
        }
    }

    #[test]
    fn empty_string_short_circuits_under_the_null_policy() {
        let registry = StrategyRegistry::new();
        registry.register_parsed_with::<f64>(EmptyStringPolicy::Null);
        let entry = registry.resolve(ScalarType::of::<f64>()).unwrap();

        assert!(matches!(convert_scalar(&entry, "").unwrap(), Element::Null));

        // Non-empty values still go through the strategy.
        match convert_scalar(&entry, "3.145").unwrap() {
            Element::Value(value) => assert_eq!(*value.downcast::<f64>().unwrap(), 3.145),
            Element::Null => panic!("a non-empty value must be converted"),
        }
    }
}
