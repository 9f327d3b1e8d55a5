// src/lib.rs

pub mod config;
pub mod core;

// Re-export
pub use crate::core::{ActionOutcome, FallthruError, NotFoundInterceptor, Response};
