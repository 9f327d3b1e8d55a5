// src/core/controller.rs

//! The controller seam: the host-side unit an invoker executes actions against.

use crate::core::context::RequestInfo;
use crate::core::errors::FallthruError;
use crate::core::outcome::ActionOutcome;

/// A controller as seen by the invoker seam.
///
/// The host framework is responsible for routing a request to a controller;
/// this trait only covers locating and executing one of its actions by name.
pub trait Controller: Send + Sync {
    /// Locates and executes the named action against the request.
    ///
    /// Returns `Ok(ActionOutcome::NotFound)` when no action matches `action`.
    /// `Err` is reserved for actions that ran and failed.
    fn invoke_action(
        &self,
        request: &RequestInfo,
        action: &str,
    ) -> Result<ActionOutcome, FallthruError>;

    /// The skip marker: opts this controller out of not-found interception.
    ///
    /// When `true`, the interceptor re-surfaces a not-found signal unchanged
    /// instead of dispatching the fallback handler.
    fn suppresses_fallback(&self) -> bool {
        false
    }
}
