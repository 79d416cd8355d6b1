//! Network presets for the WIF version byte.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Selects which version byte a WIF string carries.
///
/// Only one preset is ever active for a given operation; decoding does not
/// probe other networks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Main network, version byte `0x80`.
    #[default]
    Mainnet,
    /// Test network, version byte `0xEF`.
    Testnet,
}

impl Network {
    pub fn version_byte(&self) -> u8 {
        match self {
            Self::Mainnet => 0x80,
            Self::Testnet => 0xEF,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "live" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_bytes() {
        assert_eq!(Network::Mainnet.version_byte(), 0x80);
        assert_eq!(Network::Testnet.version_byte(), 0xEF);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("MainNet".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("test".parse::<Network>(), Ok(Network::Testnet));
        assert!("regtest".parse::<Network>().is_err());
    }
}
