//! Population count (Hamming weight).
//!
//! Counts set bits by repeatedly clearing the lowest one, so the loop runs
//! once per set bit rather than once per bit position.

/// Returns the number of 1-bits in `number`.
///
/// Each iteration clears the least-significant set bit (`number & (number - 1)`),
/// so the loop terminates after exactly `k` iterations for `k` set bits.
/// Zero never enters the loop.
///
/// ```
/// use bitcount_codegen::popcount::count_bits_set;
///
/// assert_eq!(count_bits_set(0), 0);
/// assert_eq!(count_bits_set(0b1010_1010), 4);
/// ```
#[inline]
pub const fn count_bits_set(mut number: u64) -> u32 {
    let mut count = 0;
    while number != 0 {
        number &= number - 1;
        count += 1;
    }
    count
}
