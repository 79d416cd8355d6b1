use proptest::prelude::*;
use std::cmp::Ordering;

use wifkit_types::bignum::{cmp_magnitude, div_rem_small, mul_add_small, pad_to_width};
use wifkit_types::PrivateScalar;

proptest! {
    /// Fixed-width serialization keeps the value and always has the requested width.
    #[test]
    fn scalar_fixed_width_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let scalar = PrivateScalar::from_be_bytes(&bytes);
        let fixed = scalar.to_fixed_width(32).unwrap();
        prop_assert_eq!(fixed.len(), 32);
        prop_assert_eq!(PrivateScalar::from_be_bytes(&fixed), scalar);
    }

    /// Leading zero bytes never change a scalar's value.
    #[test]
    fn scalar_leading_zeros_ignored(
        bytes in prop::collection::vec(any::<u8>(), 0..32),
        zeros in 0usize..8,
    ) {
        let mut padded = vec![0u8; zeros];
        padded.extend_from_slice(&bytes);
        prop_assert_eq!(
            PrivateScalar::from_be_bytes(&padded),
            PrivateScalar::from_be_bytes(&bytes)
        );
    }

    /// Magnitude comparison agrees with native u64 comparison.
    #[test]
    fn cmp_magnitude_matches_u64(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(cmp_magnitude(&a.to_be_bytes(), &b.to_be_bytes()), a.cmp(&b));
    }

    /// Padding then comparing gives Equal against the unpadded value.
    #[test]
    fn pad_preserves_magnitude(bytes in prop::collection::vec(any::<u8>(), 0..16)) {
        let padded = pad_to_width(&bytes, 16).unwrap();
        prop_assert_eq!(cmp_magnitude(&padded, &bytes), Ordering::Equal);
    }

    /// Small-divisor arithmetic agrees with u64 arithmetic.
    #[test]
    fn mul_add_div_rem_match_u64(n in 0u64..(u64::MAX / 256), add in 0u8..58) {
        let mut big = n.to_be_bytes().to_vec();
        mul_add_small(&mut big, 58, add);
        let expected = n * 58 + add as u64;
        prop_assert_eq!(cmp_magnitude(&big, &expected.to_be_bytes()), Ordering::Equal);

        let rem = div_rem_small(&mut big, 58);
        prop_assert_eq!(rem, add);
        prop_assert_eq!(cmp_magnitude(&big, &n.to_be_bytes()), Ordering::Equal);
    }
}
