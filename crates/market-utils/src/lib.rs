//! Shared utilities for the market-params workspace
//!
//! Currently this is the tracing subscriber setup shared by binaries.

pub mod logging;

pub use logging::{init_tracing, init_tracing_json};
