//! Big-endian unsigned integer helpers over byte slices.
//!
//! Scalars, curve orders and base-58 intermediates are all arbitrary-precision
//! non-negative integers stored most-significant byte first. These helpers keep
//! the fixed-width serialization explicit instead of leaning on native integer
//! widths.

use std::cmp::Ordering;

/// Drop leading zero bytes. The empty slice represents zero.
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

/// Left-pad `bytes` with zeros to exactly `width` bytes.
///
/// Returns `None` if the value does not fit, i.e. its magnitude needs more
/// than `width` bytes.
pub fn pad_to_width(bytes: &[u8], width: usize) -> Option<Vec<u8>> {
    let magnitude = strip_leading_zeros(bytes);
    if magnitude.len() > width {
        return None;
    }
    let mut out = vec![0u8; width];
    out[width - magnitude.len()..].copy_from_slice(magnitude);
    Some(out)
}

/// Compare two big-endian integers by value, ignoring leading zeros.
pub fn cmp_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Number of significant bits in a big-endian integer.
pub fn bit_len(bytes: &[u8]) -> usize {
    match strip_leading_zeros(bytes).split_first() {
        Some((&top, rest)) => rest.len() * 8 + (8 - top.leading_zeros() as usize),
        None => 0,
    }
}

/// Divide `number` in place by a small divisor, returning the remainder.
///
/// The quotient is left stripped of leading zeros, so repeated division
/// terminates once `number` becomes empty.
pub fn div_rem_small(number: &mut Vec<u8>, divisor: u8) -> u8 {
    debug_assert!(divisor != 0);
    let mut rem: u32 = 0;
    for byte in number.iter_mut() {
        let acc = (rem << 8) | *byte as u32;
        *byte = (acc / divisor as u32) as u8;
        rem = acc % divisor as u32;
    }
    let zeros = number.len() - strip_leading_zeros(number).len();
    number.drain(..zeros);
    rem as u8
}

/// Compute `number = number * factor + addend` in place.
///
/// `number` grows at the front as needed and never carries leading zeros
/// unless it was given some.
pub fn mul_add_small(number: &mut Vec<u8>, factor: u8, addend: u8) {
    let mut carry = addend as u32;
    for byte in number.iter_mut().rev() {
        let acc = *byte as u32 * factor as u32 + carry;
        *byte = acc as u8;
        carry = acc >> 8;
    }
    while carry > 0 {
        number.insert(0, carry as u8);
        carry >>= 8;
    }
}
