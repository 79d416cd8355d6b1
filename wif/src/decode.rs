//! WIF string → private key.
//!
//! Every structural check runs before any curve arithmetic: a string that fails
//! base-58, length, checksum, version or range checks never reaches the curve
//! backend.

use crate::encode::check_scalar_range;
use crate::{base58, payload};
use wifkit_types::{CurveArithmetic, KeyPair, PrivateScalar, WifConfig, WifError};

/// Decode a WIF string into a key pair, re-deriving the public point.
///
/// The returned point comes fresh from `curve.derive_public` and is checked with
/// `curve.is_on_curve`; a point failing that check yields `PointNotOnCurve`.
pub fn decode<C>(config: &WifConfig, curve: &C, wif: &str) -> Result<KeyPair, WifError>
where
    C: CurveArithmetic + ?Sized,
{
    let private = decode_scalar(config, wif)?;
    let public = curve.derive_public(&private)?;
    if !curve.is_on_curve(&public) {
        tracing::warn!(curve = curve.name(), "derived public point is not on the curve");
        return Err(WifError::PointNotOnCurve);
    }
    tracing::debug!(curve = curve.name(), version = config.version, "decoded private key");
    Ok(KeyPair { private, public })
}

/// Decode and validate a WIF string down to its private scalar, without curve
/// arithmetic.
///
/// A checksum-valid payload whose scalar is zero or not below the curve order
/// fails here with `InvalidScalar`, the same error encode uses. Such a payload
/// never reaches `derive_public`, so it cannot surface as `PointNotOnCurve`.
pub fn decode_scalar(config: &WifConfig, wif: &str) -> Result<PrivateScalar, WifError> {
    let raw = base58::decode(wif)?;
    let parts = payload::split(config, &raw)?;

    let expected = parts.expected_checksum();
    if expected != parts.checksum {
        tracing::debug!("checksum mismatch");
        return Err(WifError::ChecksumMismatch {
            expected,
            found: parts.checksum,
        });
    }

    if parts.version != config.version {
        tracing::debug!(
            expected = config.version,
            found = parts.version,
            "version byte mismatch"
        );
        return Err(WifError::VersionMismatch {
            expected: config.version,
            found: parts.version,
        });
    }

    let scalar = PrivateScalar::from_be_bytes(parts.scalar);
    check_scalar_range(config, &scalar)?;
    Ok(scalar)
}
