// src/core/metrics.rs

//! Defines and registers Prometheus metrics for interception monitoring.
//!
//! This module uses `lazy_static` to ensure that metrics are registered only once
//! globally for the entire application lifecycle.

use lazy_static::lazy_static;
use prometheus::{Counter, register_counter};

lazy_static! {
    /// The total number of action invocations that passed through an interceptor.
    pub static ref ACTIONS_INVOKED_TOTAL: Counter =
        register_counter!("fallthru_actions_invoked_total", "Total number of actions invoked through the interceptor.").unwrap();
    /// The total number of not-found signals (missing action or HTTP 404) caught.
    pub static ref NOT_FOUND_CAUGHT_TOTAL: Counter =
        register_counter!("fallthru_not_found_caught_total", "Total number of not-found signals caught.").unwrap();
    /// The total number of fallback handler dispatches.
    pub static ref FALLBACKS_DISPATCHED_TOTAL: Counter =
        register_counter!("fallthru_fallbacks_dispatched_total", "Total number of fallback handler dispatches.").unwrap();
    /// The total number of fallbacks suppressed by a controller's skip marker.
    pub static ref FALLBACKS_SUPPRESSED_TOTAL: Counter =
        register_counter!("fallthru_fallbacks_suppressed_total", "Total number of fallbacks suppressed by the skip marker.").unwrap();
}
