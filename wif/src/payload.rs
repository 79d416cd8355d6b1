//! WIF payload layout: `version (1) || scalar (width) || checksum (4)`.

use wifkit_crypto::checksum;
use wifkit_types::{WifConfig, WifError, CHECKSUM_LEN};

/// Borrowed view of a payload split into its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadParts<'a> {
    pub version: u8,
    pub scalar: &'a [u8],
    pub checksum: [u8; CHECKSUM_LEN],
    body: &'a [u8],
}

impl PayloadParts<'_> {
    /// Checksum recomputed over `version || scalar`.
    pub fn expected_checksum(&self) -> [u8; CHECKSUM_LEN] {
        checksum(self.body)
    }

    pub fn checksum_matches(&self) -> bool {
        self.expected_checksum() == self.checksum
    }
}

/// Assemble `version || scalar_bytes || checksum`.
///
/// `scalar_bytes` must already be serialized to `config.scalar_width` bytes;
/// otherwise the error reports the payload length that would have resulted.
pub fn build(config: &WifConfig, scalar_bytes: &[u8]) -> Result<Vec<u8>, WifError> {
    if scalar_bytes.len() != config.scalar_width {
        return Err(WifError::MalformedPayload {
            expected: config.payload_len(),
            actual: 1 + scalar_bytes.len() + CHECKSUM_LEN,
        });
    }
    let mut payload = Vec::with_capacity(config.payload_len());
    payload.push(config.version);
    payload.extend_from_slice(scalar_bytes);
    let sum = checksum(&payload);
    payload.extend_from_slice(&sum);
    Ok(payload)
}

/// Split a payload into its fields. The length must match `config.payload_len()`.
pub fn split<'a>(config: &WifConfig, payload: &'a [u8]) -> Result<PayloadParts<'a>, WifError> {
    let expected = config.payload_len();
    if payload.len() != expected {
        return Err(WifError::MalformedPayload {
            expected,
            actual: payload.len(),
        });
    }
    let (body, tail) = payload.split_at(expected - CHECKSUM_LEN);
    let mut sum = [0u8; CHECKSUM_LEN];
    sum.copy_from_slice(tail);
    Ok(PayloadParts {
        version: body[0],
        scalar: &body[1..],
        checksum: sum,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WifConfig {
        WifConfig::new(0x80, 32, vec![0xFF; 32])
    }

    #[test]
    fn build_layout() {
        let scalar = [0x11u8; 32];
        let payload = build(&config(), &scalar).unwrap();
        assert_eq!(payload.len(), 37);
        assert_eq!(payload[0], 0x80);
        assert_eq!(&payload[1..33], &scalar);
        assert_eq!(&payload[33..], &checksum(&payload[..33]));
    }

    #[test]
    fn build_rejects_wrong_width() {
        let err = build(&config(), &[1u8; 31]).unwrap_err();
        assert_eq!(
            err,
            WifError::MalformedPayload {
                expected: 37,
                actual: 36
            }
        );
        assert_eq!(
            err.to_string(),
            "malformed payload: expected 37 bytes, got 36"
        );
    }

    #[test]
    fn split_inverts_build() {
        let scalar = [0x42u8; 32];
        let payload = build(&config(), &scalar).unwrap();
        let parts = split(&config(), &payload).unwrap();
        assert_eq!(parts.version, 0x80);
        assert_eq!(parts.scalar, &scalar);
        assert!(parts.checksum_matches());
    }

    #[test]
    fn split_rejects_wrong_length() {
        let err = split(&config(), &[0u8; 38]).unwrap_err();
        assert_eq!(
            err,
            WifError::MalformedPayload {
                expected: 37,
                actual: 38
            }
        );
        assert!(split(&config(), &[]).is_err());
    }

    #[test]
    fn split_detects_corrupted_checksum() {
        let mut payload = build(&config(), &[7u8; 32]).unwrap();
        payload[36] ^= 0xFF;
        let parts = split(&config(), &payload).unwrap();
        assert!(!parts.checksum_matches());
    }

    #[test]
    fn smaller_scalar_width() {
        let cfg = WifConfig::new(0x01, 2, vec![0xFF, 0xFF]);
        let payload = build(&cfg, &[0xAB, 0xCD]).unwrap();
        assert_eq!(payload.len(), 7);
        let parts = split(&cfg, &payload).unwrap();
        assert_eq!(parts.scalar, &[0xAB, 0xCD]);
    }
}
