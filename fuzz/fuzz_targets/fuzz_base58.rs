#![no_main]

use libfuzzer_sys::fuzz_target;
use wifkit_wif::base58;

fuzz_target!(|data: &[u8]| {
    // Encoding arbitrary bytes must round-trip exactly.
    let text = base58::encode(data);
    let decoded = base58::decode(&text).expect("encoder produced invalid base58");
    assert_eq!(decoded, data);

    // Decoding arbitrary text must never panic.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = base58::decode(s);
    }
});
