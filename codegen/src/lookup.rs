//! Compile-time copy of the generated table and the per-width counting it
//! feeds.
//!
//! The emitted fragment is consumed by code that counts the bits of wider
//! words one byte at a time. This module does the same against a table
//! built from [`count_bits_set`], so the values the generator prints are
//! the values these lookups return.
//!
//! # Example
//!
//! ```
//! use bitcount_codegen::lookup::{bit_count_u8, BitCount};
//!
//! assert_eq!(bit_count_u8(0b1010_1010), 4);
//! assert_eq!(0xffff_0000_u32.bit_count(), 16);
//! assert_eq!(u64::MAX.bit_count(), 64);
//! ```

use crate::popcount::count_bits_set;
use crate::table::ENTRY_COUNT;

/// `BIT_COUNT_TABLE[x]` = number of set bits in `x`, for x in 0..256.
pub static BIT_COUNT_TABLE: [u8; ENTRY_COUNT] = {
    let mut table = [0u8; ENTRY_COUNT];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = count_bits_set(i as u64) as u8;
        i += 1;
    }
    table
};

/// O(1) bit count of a single byte.
#[inline]
pub fn bit_count_u8(value: u8) -> u8 {
    BIT_COUNT_TABLE[value as usize]
}

/// Sums the table lookups over every byte of `bytes`.
#[inline]
fn sum_bytes(bytes: &[u8]) -> u32 {
    bytes.iter().map(|&b| u32::from(bit_count_u8(b))).sum()
}

/// Bit counting through the byte lookup table.
pub trait BitCount {
    /// Number of set bits in `self`.
    fn bit_count(self) -> u32;
}

impl BitCount for u8 {
    #[inline]
    fn bit_count(self) -> u32 {
        u32::from(bit_count_u8(self))
    }
}

impl BitCount for u16 {
    #[inline]
    fn bit_count(self) -> u32 {
        sum_bytes(&self.to_le_bytes())
    }
}

impl BitCount for u32 {
    #[inline]
    fn bit_count(self) -> u32 {
        sum_bytes(&self.to_le_bytes())
    }
}

// Every byte of the word is counted once, high half included.
impl BitCount for u64 {
    #[inline]
    fn bit_count(self) -> u32 {
        sum_bytes(&self.to_le_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::lookup_values;

    #[test]
    fn table_matches_emitted_values() {
        assert_eq!(BIT_COUNT_TABLE, lookup_values());
    }

    #[test]
    fn byte_lookups() {
        assert_eq!(bit_count_u8(0), 0);
        assert_eq!(bit_count_u8(128), 1);
        assert_eq!(bit_count_u8(170), 4);
        assert_eq!(bit_count_u8(255), 8);
    }

    #[test]
    fn wider_words() {
        assert_eq!(0x8001_u16.bit_count(), 2);
        assert_eq!(u32::MAX.bit_count(), 32);
        assert_eq!(0xff00_0000_0000_0000_u64.bit_count(), 8);
        assert_eq!(0x0000_ffff_0000_0000_u64.bit_count(), 16);
        assert_eq!(u64::MAX.bit_count(), 64);
    }
}
