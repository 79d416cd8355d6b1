//! Shared utilities for wifkit.

pub mod logging;

pub use logging::init_tracing;
