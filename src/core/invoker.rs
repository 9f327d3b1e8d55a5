// src/core/invoker.rs

//! The action-invoker seam: the extension point the interceptor decorates.

use crate::core::context::InvocationContext;
use crate::core::errors::FallthruError;
use crate::core::outcome::ActionOutcome;
use async_trait::async_trait;

/// The synchronous invoker capability: run an action by name against a context.
pub trait ActionInvoker: Send + Sync {
    /// Invokes `action` against the context, returning the tagged outcome.
    fn invoke_action(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError>;

    /// The asynchronous capability of this invoker, if it has one.
    ///
    /// Invokers without async support return `None`; callers that need the
    /// async path decide between failing fast and degrading to the sync path.
    fn async_support(&self) -> Option<&dyn AsyncActionInvoker> {
        None
    }
}

/// The asynchronous invoker capability. The future itself carries the request
/// context, so no separate correlation state is needed.
#[async_trait]
pub trait AsyncActionInvoker: Send + Sync {
    async fn invoke_action_async(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError>;
}

impl<T: ActionInvoker + ?Sized> ActionInvoker for std::sync::Arc<T> {
    fn invoke_action(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        (**self).invoke_action(cx, action)
    }

    fn async_support(&self) -> Option<&dyn AsyncActionInvoker> {
        (**self).async_support()
    }
}

/// The built-in invoker: delegates straight to the context's controller.
///
/// Controllers execute synchronously, so the async capability is a thin
/// wrapper over the sync path.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectInvoker;

impl ActionInvoker for DirectInvoker {
    fn invoke_action(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        cx.controller.invoke_action(&cx.request, action)
    }

    fn async_support(&self) -> Option<&dyn AsyncActionInvoker> {
        Some(self)
    }
}

#[async_trait]
impl AsyncActionInvoker for DirectInvoker {
    async fn invoke_action_async(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        self.invoke_action(cx, action)
    }
}
