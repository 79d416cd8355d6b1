//! Key material: private scalar, public point, and the pair that owns both.

use crate::bignum::{bit_len, pad_to_width, strip_leading_zeros};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An elliptic-curve private scalar `D`, stored as a big-endian magnitude.
///
/// Leading zero bytes are stripped on construction, so two scalars compare
/// equal exactly when their integer values do. This type intentionally does not
/// implement `Clone` or `Serialize`, and its `Debug` output is redacted. Bytes are
/// zeroized on drop.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateScalar(Vec<u8>);

impl PrivateScalar {
    /// Build a scalar from big-endian bytes of any width.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self(strip_leading_zeros(bytes).to_vec())
    }

    /// Canonical big-endian bytes, without leading zeros. Empty for zero.
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Serialize to exactly `width` big-endian bytes, left-padded with zeros.
    ///
    /// Returns `None` if the scalar does not fit in `width` bytes.
    pub fn to_fixed_width(&self, width: usize) -> Option<Vec<u8>> {
        pad_to_width(&self.0, width)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bit_len(&self) -> usize {
        bit_len(&self.0)
    }

    /// Lowercase hex of the canonical bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl std::fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateScalar(<{} bits redacted>)", self.bit_len())
    }
}

/// Affine public point `(X, Y)`, each coordinate a fixed-width big-endian value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicPoint {
    x: Vec<u8>,
    y: Vec<u8>,
}

/// SEC1 tag byte for an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

impl PublicPoint {
    pub fn new(x: Vec<u8>, y: Vec<u8>) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &[u8] {
        &self.x
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }

    /// SEC1 uncompressed encoding: `0x04 || X || Y`.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.x.len() + self.y.len());
        out.push(UNCOMPRESSED_TAG);
        out.extend_from_slice(&self.x);
        out.extend_from_slice(&self.y);
        out
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_uncompressed())
    }
}

/// A private scalar together with the public point derived from it.
///
/// Construct through a `CurveArithmetic` provider (`generate_keypair`,
/// `keypair_from_scalar`) or by decoding a WIF string. This struct is just data.
#[derive(Debug)]
pub struct KeyPair {
    pub private: PrivateScalar,
    pub public: PublicPoint,
}
