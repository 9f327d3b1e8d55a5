// src/core/mod.rs

//! The central module containing the core logic and data structures of fallthru.

pub mod context;
pub mod controller;
pub mod errors;
pub mod fallback;
pub mod interceptor;
pub mod invoker;
pub mod metrics;
pub mod outcome;

pub use context::{InvocationContext, RequestInfo};
pub use controller::Controller;
pub use errors::FallthruError;
pub use fallback::{DefaultNotFoundHandler, FallbackHandler, FallbackPolicy};
pub use interceptor::NotFoundInterceptor;
pub use invoker::{ActionInvoker, AsyncActionInvoker, DirectInvoker};
pub use outcome::{ActionOutcome, Response};
