//! The minimal HTTP response surface used to report binding failures.
use http::StatusCode;

/// A client-facing outcome: a status code plus a plain-text body.
///
/// Binding failures become observable outside the engine exclusively through
/// [`BindError::into_response`]; the calling layer turns this into whatever
/// transport-level response it produces.
///
/// [`BindError::into_response`]: crate::binding::errors::BindError::into_response
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    body: String,
}

impl Response {
    /// Build a new [`Response`] with the given status code and an empty
    /// body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Shorthand for a `400 Bad Request` response.
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }

    /// Shorthand for a `500 Internal Server Error` response.
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Set the body of the [`Response`].
    pub fn set_typed_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// The status code of the [`Response`].
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The body of the [`Response`].
    pub fn body(&self) -> &str {
        &self.body
    }
}
