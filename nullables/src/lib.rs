//! Nullable infrastructure for deterministic testing.
//!
//! External collaborators of the codec (the curve arithmetic backend) are
//! abstracted behind traits. This crate provides test-friendly implementations
//! that can be observed and told to misbehave on demand.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod curve;

pub use curve::NullCurve;
