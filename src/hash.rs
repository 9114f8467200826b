// src/hash.rs

/// 32-bit avalanche hash (Jenkins-style mix).
///
/// A one-bit change in the input flips about half of the output bits,
/// which makes the result usable as a scramble seed for the counter
/// sampler. All arithmetic wraps modulo 2^32; total over every input.
#[inline]
pub fn hash_u32(input: u32) -> u32 {
    let mut x = input;
    x = (!x).wrapping_add(x << 15);
    x ^= x >> 12;
    x = x.wrapping_add(x << 2);
    x ^= x >> 4;
    x = x.wrapping_mul(2057);
    x ^= x >> 16;
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_hash_values() {
        // Regression values, worked through the step sequence by hand once.
        assert_eq!(hash_u32(0), 0xcaa3_caa3);
        assert_eq!(hash_u32(1), 0x12d6_0bf6);
        assert_eq!(hash_u32(0xdead_beef), 0x92da_7565);
    }

    #[test]
    fn single_bit_flip_changes_many_bits() {
        // Not a full avalanche test (tests/validation.rs has that), just a
        // cheap sanity check that neighbouring inputs decorrelate.
        let d = hash_u32(42) ^ hash_u32(43);
        assert!(
            d.count_ones() >= 8,
            "expected a wide flip, got {} differing bits",
            d.count_ones()
        );
    }
}
