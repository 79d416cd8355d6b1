//! SHA-256 hashing and the WIF checksum.

use sha2::{Digest, Sha256};
use wifkit_types::CHECKSUM_LEN;

/// Compute a SHA-256 digest of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let result = Sha256::digest(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// SHA-256 applied twice: `SHA256(SHA256(data))`.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// First four bytes of `sha256d(data)`.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_empty_vector() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256d_is_hash_of_hash() {
        let data = b"hello wif";
        assert_eq!(sha256d(data), sha256(&sha256(data)));
        assert_ne!(sha256d(data), sha256(data));
    }

    #[test]
    fn sha256d_known_vector() {
        // Double SHA-256 of "hello".
        assert_eq!(
            hex::encode(sha256d(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn checksum_is_digest_prefix() {
        let data = [0x80u8; 33];
        assert_eq!(checksum(&data), sha256d(&data)[..4]);
    }

    #[test]
    fn checksum_deterministic() {
        assert_eq!(checksum(b"abc"), checksum(b"abc"));
        assert_ne!(checksum(b"abc"), checksum(b"abd"));
    }
}
