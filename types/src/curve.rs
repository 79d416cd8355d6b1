//! Abstract curve arithmetic.
//!
//! The codec never multiplies points itself. Every backend (k256 for secp256k1,
//! a nullable for tests) implements this trait, and the rest of the workspace
//! depends only on the trait.

use crate::bignum::bit_len;
use crate::error::CurveError;
use crate::keys::{KeyPair, PrivateScalar, PublicPoint};

pub trait CurveArithmetic {
    /// Short curve identifier, e.g. `"secp256k1"`.
    fn name(&self) -> &str;

    /// Group order `n` as big-endian bytes. Valid scalars satisfy `0 < D < n`.
    fn order(&self) -> &[u8];

    /// Width in bytes of a serialized scalar.
    fn scalar_width(&self) -> usize {
        bit_len(self.order()).div_ceil(8)
    }

    /// Generate a fresh key pair from a secure random source.
    fn generate_keypair(&self) -> Result<KeyPair, CurveError>;

    /// Multiply the base point by `scalar`.
    fn derive_public(&self, scalar: &PrivateScalar) -> Result<PublicPoint, CurveError>;

    /// Whether `(X, Y)` satisfies the curve equation.
    fn is_on_curve(&self, point: &PublicPoint) -> bool;

    /// Pair a scalar with its freshly derived public point.
    fn keypair_from_scalar(&self, scalar: PrivateScalar) -> Result<KeyPair, CurveError> {
        let public = self.derive_public(&scalar)?;
        Ok(KeyPair {
            private: scalar,
            public,
        })
    }
}
