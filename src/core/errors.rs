// src/core/errors.rs

//! Defines the primary error type for the entire crate.

use thiserror::Error;

/// The main error enum, representing all failures that can cross the invoker seam.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FallthruError {
    /// An HTTP error signal raised by the wrapped invoker or by a handler.
    /// A status of 404 is the one signal the interceptor acts on; every other
    /// status propagates to the host's error pipeline unchanged.
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// The wrapped invoker has no asynchronous capability and the interceptor
    /// runs in strict async mode.
    #[error("Wrapped invoker does not support asynchronous invocation")]
    AsyncUnsupported,

    /// A controller or fallback handler failed for a non-HTTP reason.
    #[error("Handler error: {0}")]
    Handler(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FallthruError {
    /// Convenience constructor for an HTTP error signal.
    pub fn http(status: u16) -> Self {
        Self::Http { status }
    }

    /// Returns `true` if this error is the HTTP 404 signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404 })
    }
}
