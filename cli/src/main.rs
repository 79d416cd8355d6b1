//! wifkit — import/export secp256k1 private keys as WIF strings.

mod config;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use config::{parse_version_byte, Settings};
use wifkit_crypto::Secp256k1;
use wifkit_types::{CurveArithmetic, KeyPair, Network, PrivateScalar, WifConfig};

#[derive(Parser)]
#[command(name = "wifkit", about = "Wallet Import Format encoder/decoder for secp256k1 keys")]
struct Cli {
    /// Network preset selecting the version byte: "mainnet" or "testnet".
    #[arg(long, env = "WIFKIT_NETWORK")]
    network: Option<Network>,

    /// Explicit version byte (decimal or 0x-prefixed hex); overrides --network.
    #[arg(long, env = "WIFKIT_VERSION_BYTE", value_parser = parse_version_byte)]
    version_byte: Option<u8>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "WIFKIT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "WIFKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Encode a hex private scalar as WIF.
    Encode {
        /// Big-endian private scalar in hex.
        scalar_hex: String,
    },
    /// Decode a WIF string into its private scalar and public key.
    Decode {
        wif: String,
        /// Print JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Check the checksum of a WIF string without decoding it.
    Validate { wif: String },
    /// Generate a fresh key pair and print it as WIF.
    Generate {
        /// Print JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct KeyReport {
    /// Omitted when an explicit version byte replaced the network preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<&'static str>,
    version_byte: u8,
    wif: String,
    private_hex: String,
    public_hex: String,
}

impl KeyReport {
    fn new(settings: &Settings, wif: String, keypair: &KeyPair) -> Self {
        Self {
            network: (!settings.version_overridden).then(|| settings.network.as_str()),
            version_byte: settings.version_byte,
            wif,
            private_hex: keypair.private.to_hex(),
            public_hex: keypair.public.to_hex(),
        }
    }

    fn print(&self, json: bool) -> anyhow::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            match self.network {
                Some(network) => println!("network: {network}"),
                None => println!("version: {:#04x}", self.version_byte),
            }
            println!("wif:     {}", self.wif);
            println!("private: {}", self.private_hex);
            println!("public:  {}", self.public_hex);
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Tracing is not up yet, so a bad file is reported once it is.
    let file_config = cli.config.as_deref().map(config::load);
    let (file_config, file_error) = match file_config {
        Some(Ok(cfg)) => (Some(cfg), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let settings = config::resolve(file_config, cli.network, cli.version_byte, cli.log_level);
    wifkit_utils::init_tracing(&settings.log_level);
    if let Some(e) = file_error {
        tracing::warn!("{e:#}, using CLI defaults");
    }

    let curve = Secp256k1::new();
    let wif_config = WifConfig::for_curve(settings.version_byte, &curve);
    tracing::debug!(
        network = settings.network.as_str(),
        version = settings.version_byte,
        curve = curve.name(),
        "resolved settings"
    );

    match cli.command {
        Command::Encode { scalar_hex } => {
            let bytes = hex::decode(scalar_hex.trim()).context("scalar is not valid hex")?;
            let scalar = PrivateScalar::from_be_bytes(&bytes);
            let keypair = curve
                .keypair_from_scalar(scalar)
                .context("scalar is not a valid secp256k1 private key")?;
            let wif = wifkit_wif::encode(&wif_config, &keypair)?;
            println!("{wif}");
        }
        Command::Decode { wif, json } => {
            let keypair = wifkit_wif::decode(&wif_config, &curve, wif.trim())
                .context("failed to decode WIF")?;
            KeyReport::new(&settings, wif.trim().to_string(), &keypair).print(json)?;
        }
        Command::Validate { wif } => {
            if wifkit_wif::validate_checksum(wif.trim())? {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Generate { json } => {
            let keypair = curve.generate_keypair()?;
            let wif = wifkit_wif::encode(&wif_config, &keypair)?;
            tracing::info!(network = settings.network.as_str(), "generated new key pair");
            KeyReport::new(&settings, wif, &keypair).print(json)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
