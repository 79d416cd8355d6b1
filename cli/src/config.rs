//! CLI configuration: TOML file merged under command-line flags.

use serde::{Deserialize, Serialize};
use std::path::Path;
use wifkit_types::Network;

/// Settings readable from a TOML file.
///
/// ```toml
/// network = "testnet"
/// version_byte = 0xEF   # overrides the network preset
/// log_level = "debug"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub network: Network,
    pub version_byte: Option<u8>,
    pub log_level: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub network: Network,
    pub version_byte: u8,
    /// True when the version byte came from `--version-byte` or the file rather
    /// than the network preset.
    pub version_overridden: bool,
    pub log_level: String,
}

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Read and parse a config file.
pub fn load(path: &Path) -> anyhow::Result<FileConfig> {
    use anyhow::Context;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Merge flags over the file. Precedence: flag/env > file > defaults.
pub fn resolve(
    file: Option<FileConfig>,
    network: Option<Network>,
    version_byte: Option<u8>,
    log_level: Option<String>,
) -> Settings {
    let file = file.unwrap_or_default();
    // An explicit network flag resets the version byte to that network's preset
    // unless a version byte is also given explicitly.
    let file_version = if network.is_some() {
        None
    } else {
        file.version_byte
    };
    let network = network.unwrap_or(file.network);
    let explicit = version_byte.or(file_version);
    Settings {
        network,
        version_byte: explicit.unwrap_or_else(|| network.version_byte()),
        version_overridden: explicit.is_some(),
        log_level: log_level
            .or(file.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    }
}

/// Parse a version byte given as decimal (`128`) or hex (`0x80`).
pub fn parse_version_byte(s: &str) -> Result<u8, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid version byte {s:?}: {e}"))
}
