//! Wallet Import Format codec.
//!
//! A WIF string is the base-58 text of
//! `version (1) || private scalar (fixed width, big-endian) || checksum (4)`,
//! where the checksum is the first four bytes of `SHA256(SHA256(version || scalar))`.
//!
//! - [`encode`] turns a key pair into a WIF string
//! - [`decode`] turns a WIF string back into a key pair, re-deriving the public point
//! - [`validate_checksum`] checks a string's checksum without any curve arithmetic
//!
//! Every operation takes an explicit [`WifConfig`]; nothing is read from global state.

pub mod base58;
pub mod checksum;
pub mod decode;
pub mod encode;
pub mod payload;

pub use checksum::validate_checksum;
pub use decode::{decode, decode_scalar};
pub use encode::{encode, encode_scalar};
pub use payload::PayloadParts;
pub use wifkit_types::{KeyPair, PrivateScalar, PublicPoint, WifConfig, WifError};
