// tests/common/mocks.rs

//! Shared test doubles for the interceptor seams.

#![allow(dead_code)]

use async_trait::async_trait;
use fallthru::core::FallthruError;
use fallthru::core::context::{InvocationContext, RequestInfo};
use fallthru::core::controller::Controller;
use fallthru::core::fallback::{FallbackHandler, FallbackPolicy};
use fallthru::core::invoker::{ActionInvoker, AsyncActionInvoker};
use fallthru::core::outcome::{ActionOutcome, Response};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Installs a compact tracing subscriber for tests; repeated calls are no-ops.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .try_init();
}

/// A controller that handles exactly one action name and reports every other
/// name as not found.
pub struct SingleActionController {
    pub action: &'static str,
    pub suppress: bool,
}

impl SingleActionController {
    pub fn handling(action: &'static str) -> Arc<Self> {
        Arc::new(Self {
            action,
            suppress: false,
        })
    }

    pub fn suppressing(action: &'static str) -> Arc<Self> {
        Arc::new(Self {
            action,
            suppress: true,
        })
    }
}

impl Controller for SingleActionController {
    fn invoke_action(
        &self,
        request: &RequestInfo,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        if action == self.action {
            Ok(ActionOutcome::Handled(Response::ok(format!(
                "{action} for {request}"
            ))))
        } else {
            Ok(ActionOutcome::NotFound)
        }
    }

    fn suppresses_fallback(&self) -> bool {
        self.suppress
    }
}

/// An invoker that returns a preprogrammed result and counts invocations.
/// Async support is optional so tests can exercise both `AsyncMode` branches.
pub struct ScriptedInvoker {
    pub result: Result<ActionOutcome, FallthruError>,
    pub calls: AtomicUsize,
    pub async_capable: bool,
}

impl ScriptedInvoker {
    pub fn returning(result: Result<ActionOutcome, FallthruError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            async_capable: true,
        }
    }

    pub fn sync_only(result: Result<ActionOutcome, FallthruError>) -> Self {
        Self {
            async_capable: false,
            ..Self::returning(result)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ActionInvoker for ScriptedInvoker {
    fn invoke_action(
        &self,
        _cx: &InvocationContext,
        _action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn async_support(&self) -> Option<&dyn AsyncActionInvoker> {
        if self.async_capable { Some(self) } else { None }
    }
}

#[async_trait]
impl AsyncActionInvoker for ScriptedInvoker {
    async fn invoke_action_async(
        &self,
        cx: &InvocationContext,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError> {
        ActionInvoker::invoke_action(self, cx, action)
    }
}

/// A fallback handler that records how often it ran and against which request.
pub struct CountingHandler {
    pub response: Response,
    pub executions: AtomicUsize,
    pub last_request: Mutex<Option<RequestInfo>>,
    pub fail_with: Option<FallthruError>,
}

impl CountingHandler {
    pub fn with_response(response: Response) -> Arc<Self> {
        Arc::new(Self {
            response,
            executions: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            fail_with: None,
        })
    }

    pub fn failing(err: FallthruError) -> Arc<Self> {
        Arc::new(Self {
            response: Response::new(500, ""),
            executions: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            fail_with: Some(err),
        })
    }

    pub fn execution_count(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }
}

impl FallbackHandler for CountingHandler {
    fn execute(&self, cx: &InvocationContext) -> Result<Response, FallthruError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(cx.request.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(self.response.clone()),
        }
    }
}

/// A policy that always resolves to the given handler.
pub struct FixedPolicy {
    pub handler: Arc<CountingHandler>,
}

impl FixedPolicy {
    pub fn new(handler: Arc<CountingHandler>) -> Arc<Self> {
        Arc::new(Self { handler })
    }
}

impl FallbackPolicy for FixedPolicy {
    fn resolve(&self, _cx: &InvocationContext) -> Option<Arc<dyn FallbackHandler>> {
        Some(self.handler.clone())
    }
}

/// A policy that declines every request, forcing the built-in default handler.
pub struct DecliningPolicy {
    pub resolutions: AtomicUsize,
}

impl DecliningPolicy {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            resolutions: AtomicUsize::new(0),
        })
    }
}

impl FallbackPolicy for DecliningPolicy {
    fn resolve(&self, _cx: &InvocationContext) -> Option<Arc<dyn FallbackHandler>> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        None
    }
}

/// A context for action `Foo` style requests against a plain controller.
pub fn context_for(controller: Arc<dyn Controller>) -> InvocationContext {
    InvocationContext::new(RequestInfo::new("GET", "/bar/foo"), controller)
}
