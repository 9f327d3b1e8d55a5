// src/core/fallback.rs

//! Fallback resolution and the built-in not-found handler.

use crate::config::FallbackConfig;
use crate::core::context::InvocationContext;
use crate::core::errors::FallthruError;
use crate::core::outcome::Response;
use std::sync::Arc;

/// The handler executed in place of a missing action.
///
/// Errors raised here propagate to the host untouched; the interceptor never
/// catches failures inside the fallback itself.
pub trait FallbackHandler: Send + Sync {
    fn execute(&self, cx: &InvocationContext) -> Result<Response, FallthruError>;
}

/// Strategy for choosing a fallback handler per request.
///
/// Injected at interceptor construction. Returning `None` (or not injecting a
/// policy at all) selects the built-in [`DefaultNotFoundHandler`].
pub trait FallbackPolicy: Send + Sync {
    fn resolve(&self, cx: &InvocationContext) -> Option<Arc<dyn FallbackHandler>>;
}

/// The built-in fallback: a plain 404 response naming the request.
#[derive(Debug, Clone)]
pub struct DefaultNotFoundHandler {
    status: u16,
    body: String,
}

impl DefaultNotFoundHandler {
    pub fn new() -> Self {
        Self::from_config(&FallbackConfig::default())
    }

    pub fn from_config(config: &FallbackConfig) -> Self {
        Self {
            status: config.status,
            body: config.body.clone(),
        }
    }
}

impl Default for DefaultNotFoundHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackHandler for DefaultNotFoundHandler {
    fn execute(&self, cx: &InvocationContext) -> Result<Response, FallthruError> {
        let body = format!("{}: {}", self.body, cx.request);
        Ok(Response::new(self.status, body))
    }
}

/// Resolves the fallback handler for a request: the injected policy first,
/// then the built-in default.
pub fn resolve_fallback(
    policy: Option<&dyn FallbackPolicy>,
    default: &Arc<DefaultNotFoundHandler>,
    cx: &InvocationContext,
) -> Arc<dyn FallbackHandler> {
    policy
        .and_then(|p| p.resolve(cx))
        .unwrap_or_else(|| Arc::clone(default) as Arc<dyn FallbackHandler>)
}
