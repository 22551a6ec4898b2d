//! Errors that can happen when binding a parameter.
use crate::descriptor::ScalarType;
use crate::response::Response;
use crate::strategy::StrategyResolutionError;

/// The error returned by [`bind`] when a parameter cannot be bound.
///
/// See the documentation of each variant for details.
/// [`BindError::into_response`] is the default mapping from a binding
/// failure to a client-visible outcome.
///
/// [`bind`]: crate::binding::bind
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BindError {
    #[error(transparent)]
    /// See [`StrategyResolutionError`] for details.
    UnsupportedType(#[from] StrategyResolutionError),
    #[error(transparent)]
    /// See [`ConversionFailure`] for details.
    ConversionFailed(#[from] ConversionFailure),
}

impl BindError {
    /// Convert a [`BindError`] into an HTTP response.
    ///
    /// It returns a `500 Internal Server Error` to the caller if the failure
    /// was caused by a programmer error (the declared parameter type has no
    /// registered conversion strategy).
    /// It returns a `400 Bad Request` when a caller-supplied raw value could
    /// not be converted, with the offending value and the target type in the
    /// body.
    ///
    /// It never retries and never substitutes a fallback value.
    pub fn into_response(&self) -> Response {
        match self {
            BindError::ConversionFailed(e) => {
                Response::bad_request().set_typed_body(format!("Invalid parameter value.\n{e}"))
            }
            BindError::UnsupportedType(_) => Response::internal_server_error()
                .set_typed_body("Something went wrong when trying to process the request"),
        }
    }
}

/// A conversion strategy rejected one specific raw value.
///
/// The fault originates in caller-supplied data, so it always maps to a
/// client-error outcome, never a server error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
#[error("`{raw}` cannot be converted to a `{}`", .target.name())]
pub struct ConversionFailure {
    pub(crate) raw: String,
    pub(crate) target: ScalarType,
    #[source]
    pub(crate) source: anyhow::Error,
}

impl ConversionFailure {
    /// The raw value the strategy rejected.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The type the raw value was being converted into.
    pub fn target(&self) -> ScalarType {
        self.target
    }
}

/// A [`BoundValue`] was extracted with a different shape or type than it
/// was produced with.
///
/// This is a programmer error in the calling layer, not a request error.
///
/// [`BoundValue`]: crate::binding::BoundValue
#[derive(Debug, thiserror::Error)]
#[error("The bound value is {actual}, it cannot be extracted as a `{expected}`")]
pub struct ValueTypeMismatch {
    pub(crate) expected: &'static str,
    pub(crate) actual: &'static str,
}
