//! Cryptographic primitives for wifkit.
//!
//! - **SHA-256** (applied twice) for the 4-byte WIF checksum
//! - **secp256k1** point multiplication, on-curve test and key generation via `k256`

pub mod hash;
pub mod secp256k1;

pub use hash::{checksum, sha256, sha256d};
pub use secp256k1::{Secp256k1, SECP256K1_ORDER, SECP256K1_WIDTH};
