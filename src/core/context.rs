// src/core/context.rs

//! Request-scoped context types handed to the invoker seam.
//!
//! The host framework owns these values; the interceptor only reads them.

use crate::core::controller::Controller;
use std::fmt;
use std::sync::Arc;

/// Immutable metadata describing the inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    /// The HTTP method, e.g. `GET`.
    pub method: String,
    /// The request path, e.g. `/orders/42`.
    pub path: String,
}

impl RequestInfo {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for RequestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// The full invocation context: the request plus the controller the host
/// routed it to. The action name travels separately, as in the invoker contract.
#[derive(Clone)]
pub struct InvocationContext {
    pub request: RequestInfo,
    pub controller: Arc<dyn Controller>,
}

impl InvocationContext {
    pub fn new(request: RequestInfo, controller: Arc<dyn Controller>) -> Self {
        Self {
            request,
            controller,
        }
    }
}

impl fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("request", &self.request)
            .field("suppresses_fallback", &self.controller.suppresses_fallback())
            .finish()
    }
}
