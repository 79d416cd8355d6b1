//! Nullable curve — real secp256k1 arithmetic with call counting and fault injection.

use std::cell::Cell;

use wifkit_crypto::Secp256k1;
use wifkit_types::{CurveArithmetic, CurveError, KeyPair, PrivateScalar, PublicPoint};

/// A curve backend for testing.
///
/// Delegates to [`Secp256k1`] but counts every `derive_public` call, and can be
/// told to corrupt derived points so they fall off the curve, or to fail outright.
pub struct NullCurve {
    inner: Secp256k1,
    derive_calls: Cell<usize>,
    corrupt_points: Cell<bool>,
    fail_with: Cell<Option<&'static str>>,
}

impl NullCurve {
    pub fn new() -> Self {
        Self {
            inner: Secp256k1,
            derive_calls: Cell::new(0),
            corrupt_points: Cell::new(false),
            fail_with: Cell::new(None),
        }
    }

    /// A curve whose derived points never satisfy the curve equation.
    pub fn off_curve() -> Self {
        let curve = Self::new();
        curve.corrupt_points.set(true);
        curve
    }

    /// A curve whose `derive_public` always fails with a backend error.
    pub fn failing(reason: &'static str) -> Self {
        let curve = Self::new();
        curve.fail_with.set(Some(reason));
        curve
    }

    /// Number of `derive_public` calls so far.
    pub fn derive_calls(&self) -> usize {
        self.derive_calls.get()
    }

    /// Clear the call counter.
    pub fn reset(&self) {
        self.derive_calls.set(0);
    }
}

impl Default for NullCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveArithmetic for NullCurve {
    fn name(&self) -> &str {
        "null-secp256k1"
    }

    fn order(&self) -> &[u8] {
        self.inner.order()
    }

    fn scalar_width(&self) -> usize {
        self.inner.scalar_width()
    }

    fn generate_keypair(&self) -> Result<KeyPair, CurveError> {
        self.inner.generate_keypair()
    }

    fn derive_public(&self, scalar: &PrivateScalar) -> Result<PublicPoint, CurveError> {
        self.derive_calls.set(self.derive_calls.get() + 1);
        if let Some(reason) = self.fail_with.get() {
            return Err(CurveError::Backend(reason.to_string()));
        }
        let point = self.inner.derive_public(scalar)?;
        if !self.corrupt_points.get() {
            return Ok(point);
        }
        let mut y = point.y().to_vec();
        if let Some(last) = y.last_mut() {
            *last ^= 0x01;
        }
        Ok(PublicPoint::new(point.x().to_vec(), y))
    }

    fn is_on_curve(&self, point: &PublicPoint) -> bool {
        self.inner.is_on_curve(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_derivations() {
        let curve = NullCurve::new();
        let one = PrivateScalar::from_be_bytes(&[1]);
        curve.derive_public(&one).unwrap();
        curve.derive_public(&one).unwrap();
        assert_eq!(curve.derive_calls(), 2);
        curve.reset();
        assert_eq!(curve.derive_calls(), 0);
    }

    #[test]
    fn honest_points_are_on_curve() {
        let curve = NullCurve::new();
        let point = curve.derive_public(&PrivateScalar::from_be_bytes(&[7])).unwrap();
        assert!(curve.is_on_curve(&point));
    }

    #[test]
    fn corrupted_points_are_off_curve() {
        let curve = NullCurve::off_curve();
        let point = curve.derive_public(&PrivateScalar::from_be_bytes(&[7])).unwrap();
        assert!(!curve.is_on_curve(&point));
    }

    #[test]
    fn failing_curve_reports_backend_error() {
        let curve = NullCurve::failing("offline");
        assert_eq!(
            curve.derive_public(&PrivateScalar::from_be_bytes(&[7])),
            Err(CurveError::Backend("offline".into()))
        );
    }
}
