//! Word-parallel ("SWAR") kernels over raw `u64` values.
//!
//! Every kernel runs in a fixed number of word operations, independent of
//! the bit pattern. The masks below split the word into blocks of width
//! $2^{k+1}$; the right mask `RMk` selects the low half of every block and the
//! left mask `LMk` selects the high half.
//!
//! # Population count
//!
//! Lanes of width 1 are summed pairwise into 2-bit lanes, then 4-bit, then
//! 8-bit. The eight byte lanes are folded with shifts of 8, 16 and 32, leaving
//! the total in the low byte. The total never exceeds 64, so seven bits hold it.
//!
//! # Mirror
//!
//! Reversal swaps the two halves of every block, from width 32 down to width 1
//! (a butterfly network). After six rounds bit $i$ sits at $63 - i$.

/// Width of a word in bits.
pub const BITS: u32 = 64;

/// Right masks: low half of each block.
pub const RM0: u64 = 0x5555_5555_5555_5555; // 0101...
/// `0011` repeated.
pub const RM1: u64 = 0x3333_3333_3333_3333;
/// `00001111` repeated.
pub const RM2: u64 = 0x0f0f_0f0f_0f0f_0f0f;
/// Low byte of every 16-bit block.
pub const RM3: u64 = 0x00ff_00ff_00ff_00ff;
/// Low 16 bits of every 32-bit block.
pub const RM4: u64 = 0x0000_ffff_0000_ffff;
/// Low 32 bits.
pub const RM5: u64 = 0x0000_0000_ffff_ffff;

/// Left masks: high half of each block.
pub const LM0: u64 = 0xaaaa_aaaa_aaaa_aaaa; // 1010...
/// `1100` repeated.
pub const LM1: u64 = 0xcccc_cccc_cccc_cccc;
/// `11110000` repeated.
pub const LM2: u64 = 0xf0f0_f0f0_f0f0_f0f0;
/// High byte of every 16-bit block.
pub const LM3: u64 = 0xff00_ff00_ff00_ff00;
/// High 16 bits of every 32-bit block.
pub const LM4: u64 = 0xffff_0000_ffff_0000;
/// High 32 bits.
pub const LM5: u64 = 0xffff_ffff_0000_0000;

const COUNT_MASK: u64 = (1 << 7) - 1;

/// Single-bit mask for position `at`. Requires `at < 64`.
#[inline]
pub(crate) const fn mask_at(at: usize) -> u64 {
    1u64 << at
}

/// Number of set bits in `x`.
#[inline]
pub const fn popcount(x: u64) -> u32 {
    let x = ((x >> 1) & RM0) + (x & RM0);
    let x = ((x >> 2) & RM1) + (x & RM1);
    let x = ((x >> 4) + x) & RM2;
    let x = x + (x >> 8);
    let x = x + (x >> 16);
    let x = x + (x >> 32);
    (x & COUNT_MASK) as u32
}

/// Reverse the bit order of `x` (bit 0 ↔ bit 63).
#[inline]
pub const fn mirror(x: u64) -> u64 {
    let x = ((x & LM5) >> 32) | ((x & RM5) << 32);
    let x = ((x & LM4) >> 16) | ((x & RM4) << 16);
    let x = ((x & LM3) >> 8) | ((x & RM3) << 8);
    let x = ((x & LM2) >> 4) | ((x & RM2) << 4);
    let x = ((x & LM1) >> 2) | ((x & RM1) << 2);
    ((x & LM0) >> 1) | ((x & RM0) << 1)
}

/// Circular right rotation. `shift` is taken modulo 64.
#[inline]
pub const fn rotate_right(x: u64, shift: u32) -> u64 {
    let shift = shift & (BITS - 1);
    // `x << 64` overflows, so a whole-word rotation is its own branch.
    if shift == 0 {
        return x;
    }
    (x >> shift) | (x << (BITS - shift))
}

/// Circular left rotation. `shift` is taken modulo 64.
#[inline]
pub const fn rotate_left(x: u64, shift: u32) -> u64 {
    rotate_right(x, BITS - shift % BITS)
}
