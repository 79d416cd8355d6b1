//! Base-58 transcoding.
//!
//! Alphabet: `123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz`
//! (digits and letters without the ambiguous `0`, `O`, `I`, `l`).
//!
//! The input bytes are read as one big-endian integer. Leading zero bytes carry
//! no numeric weight, so each one is written as a literal `'1'` and restored on
//! decode.

use wifkit_types::bignum::{div_rem_small, mul_add_small};
use wifkit_types::Base58Error;

/// Base-58 alphabet, index = digit value.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup table: ASCII byte → digit value (0xFF = invalid).
const DECODE_TABLE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 58 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

const BASE: u8 = 58;
const ZERO_DIGIT: char = '1';

/// Encode bytes as base-58 text.
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    let mut number = bytes[zeros..].to_vec();
    let mut digits = Vec::with_capacity(number.len() * 138 / 100 + 1);
    while !number.is_empty() {
        digits.push(div_rem_small(&mut number, BASE));
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat(ZERO_DIGIT).take(zeros));
    out.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    out
}

/// Decode base-58 text back into bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    let mut zeros = 0;
    let mut leading = true;
    let mut number = Vec::with_capacity(text.len() * 733 / 1000 + 1);

    for (index, character) in text.chars().enumerate() {
        let digit = digit_value(character)
            .ok_or(Base58Error::InvalidCharacter { character, index })?;
        if leading && digit == 0 {
            zeros += 1;
            continue;
        }
        leading = false;
        mul_add_small(&mut number, BASE, digit);
    }

    let mut out = vec![0u8; zeros];
    out.extend_from_slice(&number);
    Ok(out)
}

fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        0xFF => None,
        d => Some(d),
    }
}
