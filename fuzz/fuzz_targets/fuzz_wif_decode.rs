#![no_main]

use libfuzzer_sys::fuzz_target;
use wifkit_crypto::Secp256k1;
use wifkit_types::Network;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let config = Secp256k1.wif_config(Network::Mainnet);

    // Neither entry point may panic on malformed input.
    let valid = wifkit_wif::validate_checksum(text);
    let decoded = wifkit_wif::decode(&config, &Secp256k1, text);

    // Anything that decodes must carry a valid checksum and re-encode identically.
    if let Ok(kp) = decoded {
        assert_eq!(valid, Ok(true));
        assert_eq!(wifkit_wif::encode(&config, &kp).as_deref(), Ok(text));
    }
});
