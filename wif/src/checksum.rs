//! Standalone checksum validation.
//!
//! Rejects mistyped or tampered strings without touching curve arithmetic or
//! needing a [`WifConfig`](wifkit_types::WifConfig).

use crate::base58;
use wifkit_crypto::checksum;
use wifkit_types::{WifError, CHECKSUM_LEN};

/// Check the trailing 4-byte checksum of a base-58 WIF string.
///
/// Returns `Err(WifError::Decode)` if the text is not base-58, `Ok(false)` if the
/// payload is too short to carry a checksum or the checksum disagrees.
pub fn validate_checksum(wif: &str) -> Result<bool, WifError> {
    let payload = base58::decode(wif)?;
    Ok(payload_checksum_valid(&payload))
}

pub(crate) fn payload_checksum_valid(payload: &[u8]) -> bool {
    if payload.len() <= CHECKSUM_LEN {
        tracing::debug!(len = payload.len(), "payload too short for checksum");
        return false;
    }
    let (body, tail) = payload.split_at(payload.len() - CHECKSUM_LEN);
    checksum(body) == tail
}
