// src/core/interceptor.rs

//! The central component: a decorator over an [`ActionInvoker`] that catches
//! not-found outcomes and dispatches a fallback handler in their place.
//!
//! Per request, exactly one of {action executed successfully, fallback
//! executed} occurs. The traversal follows a small state machine: Invoking,
//! then on a not-found signal CaughtNotFound, then either Done (skip marker)
//! or DispatchingFallback and Done.

use crate::config::{AsyncMode, Config};
use crate::core::context::InvocationContext;
use crate::core::errors::FallthruError;
use crate::core::fallback::{DefaultNotFoundHandler, FallbackPolicy, resolve_fallback};
use crate::core::invoker::{ActionInvoker, AsyncActionInvoker};
use crate::core::metrics;
use crate::core::outcome::ActionOutcome;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{Instrument, debug, info_span, warn};

/// Wraps another invoker except it handles the case of an action not being
/// found, invoking the configured fallback handler instead.
///
/// The interceptor implements both invoker traits itself, so it can stand in
/// anywhere the wrapped invoker could, and interceptors compose.
pub struct NotFoundInterceptor<I> {
    inner: I,
    policy: Option<Arc<dyn FallbackPolicy>>,
    default_handler: Arc<DefaultNotFoundHandler>,
    async_mode: AsyncMode,
}

impl<I: ActionInvoker> NotFoundInterceptor<I> {
    /// Creates an interceptor over `inner` with an optional fallback policy.
    pub fn new(inner: I, policy: Option<Arc<dyn FallbackPolicy>>, config: &Config) -> Self {
        Self {
            inner,
            policy,
            default_handler: Arc::new(DefaultNotFoundHandler::from_config(&config.fallback)),
            async_mode: config.async_mode,
        }
    }

    /// Convenience constructor: default configuration, built-in fallback only.
    pub fn wrap(inner: I) -> Self {
        Self::new(inner, None, &Config::default())
    }

    /// The synchronous entry point.
    pub fn dispatch(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        let span = info_span!(
            "dispatch",
            action = %action,
            request = %cx.request,
        );
        let _guard = span.enter();

        metrics::ACTIONS_INVOKED_TOTAL.inc();
        let result = self.inner.invoke_action(cx, action);
        self.complete(cx, result)
    }

    /// The asynchronous entry point.
    ///
    /// If the wrapped invoker has no async capability, behavior follows the
    /// configured [`AsyncMode`]: `Strict` fails fast with `AsyncUnsupported`
    /// before any work, `SyncFallback` runs the synchronous path instead.
    pub async fn dispatch_async(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        let span = info_span!(
            "dispatch",
            action = %action,
            request = %cx.request,
        );

        async move {
            let Some(async_inner) = self.inner.async_support() else {
                return match self.async_mode {
                    AsyncMode::Strict => Err(FallthruError::AsyncUnsupported),
                    AsyncMode::SyncFallback => {
                        debug!("wrapped invoker has no async capability, taking sync path");
                        metrics::ACTIONS_INVOKED_TOTAL.inc();
                        let result = self.inner.invoke_action(cx, action);
                        self.complete(cx, result)
                    }
                };
            };

            metrics::ACTIONS_INVOKED_TOTAL.inc();
            let result = async_inner.invoke_action_async(cx, action).await;
            self.complete(cx, result)
        }
        .instrument(span)
        .await
    }

    /// Shared tail of both paths: the inner invocation is done, decide between
    /// passing its result through and dispatching the fallback.
    fn complete(
        &self,
        cx: &InvocationContext,
        result: Result<ActionOutcome, FallthruError>,
    ) -> Result<ActionOutcome, FallthruError> {
        match result {
            Ok(ActionOutcome::Handled(response)) => Ok(ActionOutcome::Handled(response)),
            Ok(ActionOutcome::NotFound) => self.caught_not_found(cx, Ok(ActionOutcome::NotFound)),
            Err(err) if err.is_not_found() => self.caught_not_found(cx, Err(err)),
            // Any other error signal propagates unchanged.
            Err(err) => Err(err),
        }
    }

    /// State CaughtNotFound: suppress via the skip marker or dispatch the fallback.
    fn caught_not_found(
        &self,
        cx: &InvocationContext,
        original: Result<ActionOutcome, FallthruError>,
    ) -> Result<ActionOutcome, FallthruError> {
        metrics::NOT_FOUND_CAUGHT_TOTAL.inc();
        debug!("caught not-found signal");

        if cx.controller.suppresses_fallback() {
            metrics::FALLBACKS_SUPPRESSED_TOTAL.inc();
            debug!("controller suppresses fallback, re-surfacing not-found signal");
            return original;
        }

        warn!(request = %cx.request, "no action found, dispatching fallback handler");
        metrics::FALLBACKS_DISPATCHED_TOTAL.inc();

        let handler = resolve_fallback(self.policy.as_deref(), &self.default_handler, cx);
        // Failures inside the fallback handler propagate to the host uncaught.
        let response = handler.execute(cx)?;
        Ok(ActionOutcome::Handled(response))
    }
}

impl<I: ActionInvoker> ActionInvoker for NotFoundInterceptor<I> {
    fn invoke_action(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        self.dispatch(cx, action)
    }

    fn async_support(&self) -> Option<&dyn AsyncActionInvoker> {
        Some(self)
    }
}

#[async_trait]
impl<I: ActionInvoker> AsyncActionInvoker for NotFoundInterceptor<I> {
    async fn invoke_action_async(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        self.dispatch_async(cx, action).await
    }
}
