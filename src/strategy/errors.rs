//! Errors that can happen when resolving a conversion strategy.
use crate::descriptor::ScalarType;

/// No conversion strategy is known for the requested target type.
///
/// This is a configuration error, not a malformed-request error: a handler
/// declares a parameter of a type that was never registered with the
/// [`StrategyRegistry`]. It surfaces on the first binding attempt for that
/// type and is never retried: registering the type is the only fix.
///
/// [`StrategyRegistry`]: crate::strategy::StrategyRegistry
#[derive(Debug, Clone, thiserror::Error)]
#[error(
    "No conversion strategy is registered for `{}`. \
    Register the type with a `StrategyRegistry` before binding parameters of this type.",
    .target.name()
)]
pub struct StrategyResolutionError {
    pub(crate) target: ScalarType,
}

impl StrategyResolutionError {
    /// The type that could not be resolved.
    pub fn target(&self) -> ScalarType {
        self.target
    }
}
