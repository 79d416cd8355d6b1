//! secp256k1 curve arithmetic backed by `k256`.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use wifkit_types::{
    CurveArithmetic, CurveError, KeyPair, Network, PrivateScalar, PublicPoint, WifConfig,
};

/// Group order `n` of secp256k1.
pub const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Byte width of a secp256k1 scalar or field element.
pub const SECP256K1_WIDTH: usize = 32;

/// The secp256k1 curve.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1;

impl Secp256k1 {
    pub fn new() -> Self {
        Self
    }

    /// Standard WIF configuration for this curve on the given network.
    pub fn wif_config(&self, network: Network) -> WifConfig {
        WifConfig::for_network(network, self)
    }
}

fn point_from_public(public: &PublicKey) -> Result<PublicPoint, CurveError> {
    let encoded = public.to_encoded_point(false);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => Ok(PublicPoint::new(x.to_vec(), y.to_vec())),
        _ => Err(CurveError::Backend("public key is the identity point".into())),
    }
}

impl CurveArithmetic for Secp256k1 {
    fn name(&self) -> &str {
        "secp256k1"
    }

    fn order(&self) -> &[u8] {
        &SECP256K1_ORDER
    }

    fn scalar_width(&self) -> usize {
        SECP256K1_WIDTH
    }

    fn generate_keypair(&self) -> Result<KeyPair, CurveError> {
        let secret = SecretKey::random(&mut OsRng);
        let public = point_from_public(&secret.public_key())?;
        Ok(KeyPair {
            private: PrivateScalar::from_be_bytes(&secret.to_bytes()),
            public,
        })
    }

    fn derive_public(&self, scalar: &PrivateScalar) -> Result<PublicPoint, CurveError> {
        let bytes = scalar
            .to_fixed_width(SECP256K1_WIDTH)
            .ok_or(CurveError::InvalidScalar)?;
        // Rejects zero and values >= n.
        let secret = SecretKey::from_slice(&bytes).map_err(|_| CurveError::InvalidScalar)?;
        point_from_public(&secret.public_key())
    }

    fn is_on_curve(&self, point: &PublicPoint) -> bool {
        if point.x().len() != SECP256K1_WIDTH || point.y().len() != SECP256K1_WIDTH {
            return false;
        }
        PublicKey::from_sec1_bytes(&point.to_uncompressed()).is_ok()
    }
}
