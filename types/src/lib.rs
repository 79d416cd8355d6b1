//! Fundamental types for wifkit.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! key material, codec configuration, network presets, error enums, the curve
//! arithmetic trait, and big-endian integer helpers.

pub mod bignum;
pub mod curve;
pub mod error;
pub mod keys;
pub mod network;
pub mod params;

pub use curve::CurveArithmetic;
pub use error::{Base58Error, CurveError, WifError};
pub use keys::{KeyPair, PrivateScalar, PublicPoint};
pub use network::Network;
pub use params::{WifConfig, CHECKSUM_LEN};
