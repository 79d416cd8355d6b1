//! Codec configuration passed explicitly into every operation.

use crate::curve::CurveArithmetic;
use crate::network::Network;
use serde::{Deserialize, Serialize};

/// Length of the trailing checksum in a WIF payload.
pub const CHECKSUM_LEN: usize = 4;

/// Immutable parameters of the WIF layout.
///
/// Payload layout: `version (1) || scalar (scalar_width) || checksum (4)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifConfig {
    /// Version byte identifying the network/key-type context.
    pub version: u8,
    /// Width of the big-endian scalar field.
    pub scalar_width: usize,
    /// Curve group order, big-endian. Scalars must lie in `(0, curve_order)`.
    pub curve_order: Vec<u8>,
}

impl WifConfig {
    pub fn new(version: u8, scalar_width: usize, curve_order: Vec<u8>) -> Self {
        Self {
            version,
            scalar_width,
            curve_order,
        }
    }

    /// Take the scalar width and order from a curve backend.
    pub fn for_curve<C: CurveArithmetic + ?Sized>(version: u8, curve: &C) -> Self {
        Self::new(version, curve.scalar_width(), curve.order().to_vec())
    }

    /// Same as [`WifConfig::for_curve`] with the network's version byte.
    pub fn for_network<C: CurveArithmetic + ?Sized>(network: Network, curve: &C) -> Self {
        Self::for_curve(network.version_byte(), curve)
    }

    /// Exact byte length of a decoded payload.
    pub fn payload_len(&self) -> usize {
        1 + self.scalar_width + CHECKSUM_LEN
    }
}
