//! Error types shared across crates.

use thiserror::Error;

/// Failure to transcode base-58 text into bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

/// Errors reported by a curve arithmetic backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("scalar is zero or not below the curve order")]
    InvalidScalar,

    #[error("curve backend error: {0}")]
    Backend(String),
}

/// Errors from encoding, decoding or validating a WIF string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WifError {
    #[error("base58 decode failed: {0}")]
    Decode(#[from] Base58Error),

    #[error("malformed payload: expected {expected} bytes, got {actual}")]
    MalformedPayload { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {}, found {}", hex::encode(.expected), hex::encode(.found))]
    ChecksumMismatch { expected: [u8; 4], found: [u8; 4] },

    #[error("version byte mismatch: expected {expected:#04x}, found {found:#04x}")]
    VersionMismatch { expected: u8, found: u8 },

    #[error("private scalar is zero or not below the curve order")]
    InvalidScalar,

    #[error("derived public point is not on the curve")]
    PointNotOnCurve,

    #[error(transparent)]
    Curve(#[from] CurveError),
}
