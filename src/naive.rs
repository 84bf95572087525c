//! Bit-at-a-time reference implementations.
//!
//! Each function visits all 64 positions one by one. They have none of the
//! word-parallel structure of [`crate::swar`] and serve as the baseline for
//! `benches/word_bench.rs` and as the oracle in tests.

const BITS: u32 = 64;

/// Linear-time population count: tests each position in turn.
pub fn count_ones(x: u64) -> u32 {
    let mut count = 0;
    for i in 0..BITS {
        if (x >> i) & 1 == 1 {
            count += 1;
        }
    }
    count
}

/// Linear-time bit reversal: moves bit `i` to `63 - i` one bit at a time.
pub fn reverse(x: u64) -> u64 {
    let mut out = 0u64;
    for i in 0..BITS {
        if (x >> i) & 1 == 1 {
            out |= 1u64 << (BITS - 1 - i);
        }
    }
    out
}

/// Linear-time right rotation: output bit `j` is input bit `(j + shift) mod 64`.
pub fn rotate_right(x: u64, shift: u32) -> u64 {
    let shift = shift % BITS;
    let mut out = 0u64;
    for j in 0..BITS {
        if (x >> ((j + shift) % BITS)) & 1 == 1 {
            out |= 1u64 << j;
        }
    }
    out
}
