// src/core/outcome.rs

//! The tagged outcome type returned by every invoker.
//!
//! "Action not found" is a normal outcome here, not an error: the invoker
//! seam reserves `Err` for genuine failures (HTTP error signals, handler
//! crashes). Legacy invokers that still signal a missing action as an HTTP
//! 404 error are caught by the interceptor all the same.

use bytes::Bytes;

/// A minimal completed response: status code plus body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with the given body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(200, body)
    }
}

/// The result of asking an invoker to run an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran and produced a completed response.
    Handled(Response),
    /// No action method matched the requested name.
    NotFound,
}

impl ActionOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
