//! FNV-1a hashing primitives for result comparison.
//!
//! Not cryptographically secure. Used only for fast bit-exact equality
//! checks between runs.

/// FNV-1a offset basis for 64-bit.
pub const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
pub const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
pub fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
pub fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Feed an f64 bit pattern into an FNV-1a hash state.
///
/// `0.0` and `-0.0` hash differently, as do distinct NaN payloads.
#[inline]
pub fn fnv1a_f64(hash: u64, v: f64) -> u64 {
    fnv1a_u64(hash, v.to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_offset_basis() {
        assert_eq!(FNV_OFFSET, 0xcbf29ce484222325);
    }

    #[test]
    fn known_single_byte_vector() {
        // FNV-1a("a") = 0xaf63dc4c8601ec8c
        assert_eq!(fnv1a_byte(FNV_OFFSET, b'a'), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn signed_zero_is_distinguished() {
        assert_ne!(fnv1a_f64(FNV_OFFSET, 0.0), fnv1a_f64(FNV_OFFSET, -0.0));
    }
}
