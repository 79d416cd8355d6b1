//! Private key → WIF string.

use std::cmp::Ordering;

use crate::{base58, payload};
use wifkit_types::bignum::cmp_magnitude;
use wifkit_types::{KeyPair, PrivateScalar, WifConfig, WifError};

/// Encode a key pair's private scalar as a WIF string.
pub fn encode(config: &WifConfig, keypair: &KeyPair) -> Result<String, WifError> {
    encode_scalar(config, &keypair.private)
}

/// Encode a bare private scalar as a WIF string.
///
/// Fails with `InvalidScalar` unless `0 < D < curve_order` and `D` fits in
/// `config.scalar_width` bytes.
pub fn encode_scalar(config: &WifConfig, scalar: &PrivateScalar) -> Result<String, WifError> {
    check_scalar_range(config, scalar)?;
    let scalar_bytes = scalar
        .to_fixed_width(config.scalar_width)
        .ok_or(WifError::InvalidScalar)?;
    let payload = payload::build(config, &scalar_bytes)?;
    tracing::debug!(
        version = config.version,
        payload_len = payload.len(),
        "encoded private key"
    );
    Ok(base58::encode(&payload))
}

pub(crate) fn check_scalar_range(config: &WifConfig, scalar: &PrivateScalar) -> Result<(), WifError> {
    if scalar.is_zero() {
        tracing::debug!("rejecting zero scalar");
        return Err(WifError::InvalidScalar);
    }
    if cmp_magnitude(scalar.as_be_bytes(), &config.curve_order) != Ordering::Less {
        tracing::debug!(bits = scalar.bit_len(), "rejecting scalar not below curve order");
        return Err(WifError::InvalidScalar);
    }
    Ok(())
}
