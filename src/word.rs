//! A 64-bit value type with word-parallel bit operations.
//!
//! [`BitWord`] is `Copy` and every operation returns a fresh value, so a word
//! can be shared between threads without synchronization.
//!
//! # Bit indices
//!
//! Positions run from 0 (least significant) to 63 (most significant). The
//! plain accessors (`get`, `set_on`, ...) panic on an index outside `0..64`;
//! the `try_` forms return [`Error::IndexOutOfBounds`] instead. An index is
//! never masked or wrapped into range.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use tracing::debug;

use crate::error::{Error, Result};
use crate::swar;

/// A fixed-width word of 64 bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitWord(u64);

impl BitWord {
    /// Number of bits in a word.
    pub const BITS: u32 = swar::BITS;

    /// The word with every bit cleared.
    pub const ZERO: Self = Self(0);

    /// The word with every bit set.
    pub const ONES: Self = Self(!0);

    /// Wrap a raw bit pattern.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw bit pattern.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Return a word with all 64 bits set.
    #[must_use]
    pub const fn set_all(self) -> Self {
        Self::ONES
    }

    /// Return a word with all 64 bits cleared.
    #[must_use]
    pub const fn reset_all(self) -> Self {
        Self::ZERO
    }

    /// Return a copy with bit `at` set.
    ///
    /// # Panics
    ///
    /// Panics if `at >= 64`.
    #[must_use]
    #[track_caller]
    pub fn set_on(self, at: usize) -> Self {
        Self(self.0 | mask(at))
    }

    /// Return a copy with bit `at` cleared.
    ///
    /// # Panics
    ///
    /// Panics if `at >= 64`.
    #[must_use]
    #[track_caller]
    pub fn set_off(self, at: usize) -> Self {
        Self(self.0 & !mask(at))
    }

    /// Set bit `at` when `value` is nonzero, clear it otherwise.
    ///
    /// Accepts anything convertible to `u64`, including `bool`.
    ///
    /// # Panics
    ///
    /// Panics if `at >= 64`.
    #[must_use]
    #[track_caller]
    pub fn set(self, at: usize, value: impl Into<u64>) -> Self {
        if value.into() != 0 {
            self.set_on(at)
        } else {
            self.set_off(at)
        }
    }

    /// Return true if bit `at` is set.
    ///
    /// # Panics
    ///
    /// Panics if `at >= 64`.
    #[track_caller]
    pub fn get(self, at: usize) -> bool {
        self.0 & mask(at) != 0
    }

    /// Return a copy with bit `at` complemented.
    ///
    /// # Panics
    ///
    /// Panics if `at >= 64`.
    #[must_use]
    #[track_caller]
    pub fn flip_bit(self, at: usize) -> Self {
        Self(self.0 ^ mask(at))
    }

    /// Checked [`set_on`](Self::set_on).
    pub fn try_set_on(self, at: usize) -> Result<Self> {
        checked(at).map(|at| self.set_on(at))
    }

    /// Checked [`set_off`](Self::set_off).
    pub fn try_set_off(self, at: usize) -> Result<Self> {
        checked(at).map(|at| self.set_off(at))
    }

    /// Checked [`set`](Self::set).
    pub fn try_set(self, at: usize, value: impl Into<u64>) -> Result<Self> {
        checked(at).map(|at| self.set(at, value))
    }

    /// Checked [`get`](Self::get).
    pub fn try_get(self, at: usize) -> Result<bool> {
        checked(at).map(|at| self.get(at))
    }

    /// Checked [`flip_bit`](Self::flip_bit).
    pub fn try_flip_bit(self, at: usize) -> Result<Self> {
        checked(at).map(|at| self.flip_bit(at))
    }

    /// Number of set bits. SWAR reduction, no per-bit loop.
    #[inline]
    pub const fn count_on(self) -> u32 {
        swar::popcount(self.0)
    }

    /// Number of cleared bits: `64 - count_on()`.
    #[inline]
    pub const fn count_off(self) -> u32 {
        Self::BITS - self.count_on()
    }

    /// Reverse the bit order: bit `i` moves to `63 - i`.
    #[must_use]
    #[inline]
    pub const fn mirror(self) -> Self {
        Self(swar::mirror(self.0))
    }

    /// Rotate right by `shift` bits, modulo 64.
    #[must_use]
    #[inline]
    pub const fn rotate_right(self, shift: u32) -> Self {
        Self(swar::rotate_right(self.0, shift))
    }

    /// Rotate left by `shift` bits, modulo 64.
    ///
    /// `w.rotate_left(k).rotate_right(k) == w` for every `k`.
    #[must_use]
    #[inline]
    pub const fn rotate_left(self, shift: u32) -> Self {
        Self(swar::rotate_left(self.0, shift))
    }
}

#[track_caller]
fn mask(at: usize) -> u64 {
    assert!(
        at < BitWord::BITS as usize,
        "bit index {at} out of range for 64-bit word"
    );
    swar::mask_at(at)
}

fn checked(at: usize) -> Result<usize> {
    if at < BitWord::BITS as usize {
        Ok(at)
    } else {
        debug!(index = at, "bit index out of range");
        Err(Error::IndexOutOfBounds(at))
    }
}

impl From<u64> for BitWord {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<BitWord> for u64 {
    fn from(word: BitWord) -> Self {
        word.0
    }
}

macro_rules! impl_bit_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $tok:tt) => {
        impl $op for BitWord {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0 $tok rhs.0)
            }
        }

        impl $assign for BitWord {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl Not for BitWord {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive;
    use test_log::test;

    const DE_BRUIJN: u64 = 0x03f7_9d71_b4ca_8b09;

    #[test]
    fn test_set_all_and_reset_all() {
        for w in [BitWord::ZERO, BitWord::ONES, BitWord::new(0x1234)] {
            assert_eq!(w.set_all().bits(), u64::MAX);
            assert_eq!(w.reset_all().bits(), 0);
        }
        assert_eq!(BitWord::default(), BitWord::ZERO);
    }

    #[test]
    fn test_set_on_accumulates() {
        let mut w = BitWord::ZERO;
        let mut want = 0u64;
        for i in 0..64 {
            want |= 1 << i;
            w = w.set_on(i);
            assert_eq!(w.bits(), want);
        }
        assert_eq!(w, BitWord::ONES);
    }

    #[test]
    fn test_set_off_accumulates() {
        let mut w = BitWord::ONES;
        let mut want = u64::MAX;
        for i in 0..64 {
            want <<= 1;
            w = w.set_off(i);
            assert_eq!(w.bits(), want);
        }
        assert_eq!(w, BitWord::ZERO);
    }

    #[test]
    fn test_set_dispatches_on_value() {
        let mut w = BitWord::ZERO;
        let mut want = 0u64;
        for i in 0..64 {
            w = w.set(i, 1u64);
            want |= 1 << i;
            assert_eq!(w.bits(), want);
        }
        for i in (0..64).rev() {
            w = w.set(i, 0u8);
            want ^= 1 << i;
            assert_eq!(w.bits(), want);
        }
        assert_eq!(BitWord::ZERO.set(5, 42u32), BitWord::new(1 << 5));
        assert!(!BitWord::ONES.set(5, false).get(5));
        assert!(BitWord::ZERO.set(63, true).get(63));
    }

    #[test]
    fn test_set_off_on_all_ones_clears_only_target() {
        for i in 0..64 {
            let w = BitWord::ONES.set_off(i);
            assert!(!w.get(i));
            for j in (0..64).filter(|&j| j != i) {
                assert!(w.get(j));
            }
            assert_eq!(w.count_on(), 63);
        }
    }

    #[test]
    fn test_flip_bit() {
        let w = BitWord::new(0b1010);
        assert_eq!(w.flip_bit(0).bits(), 0b1011);
        assert_eq!(w.flip_bit(1).bits(), 0b1000);
        assert_eq!(w.flip_bit(63).bits(), 0b1010 | 1 << 63);
        for i in 0..64 {
            assert_eq!(w.flip_bit(i).flip_bit(i), w);
        }
    }

    #[test]
    #[should_panic(expected = "bit index 64 out of range")]
    fn test_get_out_of_range_panics() {
        let _ = BitWord::ZERO.get(64);
    }

    #[test]
    #[should_panic(expected = "bit index 100 out of range")]
    fn test_set_on_out_of_range_panics() {
        let _ = BitWord::ZERO.set_on(100);
    }

    #[test]
    fn test_checked_index() {
        let w = BitWord::new(0b100);
        assert_eq!(w.try_get(2), Ok(true));
        assert_eq!(w.try_get(64), Err(Error::IndexOutOfBounds(64)));
        assert_eq!(w.try_set_on(0), Ok(BitWord::new(0b101)));
        assert_eq!(w.try_set_off(2), Ok(BitWord::ZERO));
        assert_eq!(w.try_set(1, true), Ok(BitWord::new(0b110)));
        assert_eq!(w.try_flip_bit(63), Ok(BitWord::new(0b100 | 1 << 63)));
        assert!(w.try_set_on(64).is_err());
        assert!(w.try_set_off(usize::MAX).is_err());
        assert!(w.try_set(70, 1u8).is_err());
        assert!(w.try_flip_bit(65).is_err());
    }

    fn check_count_on(w: BitWord, want: u32) {
        assert_eq!(w.count_on(), want, "count_on({:#018x})", w.bits());
        assert_eq!(w.count_off(), 64 - want);
    }

    #[test]
    fn test_count_on_runs() {
        let mut bits = 0u64;
        for i in 0..=64 {
            check_count_on(BitWord::new(bits), i);
            bits = bits << 1 | 1;
        }
        // Shift the full run back out from the bottom.
        let mut bits = u64::MAX;
        for i in (0..=64).rev() {
            check_count_on(BitWord::new(bits), i);
            bits <<= 1;
        }
    }

    #[test]
    fn test_count_on_concrete() {
        check_count_on(BitWord::ZERO, 0);
        check_count_on(BitWord::ONES, 64);
        check_count_on(BitWord::new(0xff), 8);
    }

    #[test]
    fn test_count_on_byte_table() {
        for v in 0u64..256 {
            let pop = naive::count_ones(v);
            for k in 0..56 {
                check_count_on(BitWord::new(v << k), pop);
            }
        }
    }

    fn check_mirror(x: u64, want: u64) {
        let got = BitWord::new(x).mirror().bits();
        assert_eq!(got, want, "mirror({x:#018x}) == {got:#018x}; want {want:#018x}");
    }

    #[test]
    fn test_mirror_single_bits() {
        for i in 0..64 {
            check_mirror(1 << i, 1 << (63 - i));
        }
    }

    #[test]
    fn test_mirror_vectors() {
        let cases: [(u64, u64); 18] = [
            (0, 0),
            (0x1, 0x8 << 60),
            (0x2, 0x4 << 60),
            (0x3, 0xc << 60),
            (0x4, 0x2 << 60),
            (0x5, 0xa << 60),
            (0x6, 0x6 << 60),
            (0x7, 0xe << 60),
            (0x8, 0x1 << 60),
            (0x9, 0x9 << 60),
            (0xa, 0x5 << 60),
            (0xb, 0xd << 60),
            (0xc, 0x3 << 60),
            (0xd, 0xb << 60),
            (0xe, 0x7 << 60),
            (0xf, 0xf << 60),
            (0x0568_6487, 0xe126_16a0_0000_0000),
            (0x0123_4567_89ab_cdef, 0xf7b3_d591_e6a2_c480),
        ];
        for (x, r) in cases {
            check_mirror(x, r);
            check_mirror(r, x);
        }
    }

    #[test]
    fn test_rotate_de_bruijn() {
        let x = BitWord::new(DE_BRUIJN);
        for k in 0..128u32 {
            let got = x.rotate_left(k);
            let s = k & 0x3f;
            let want = if s == 0 {
                DE_BRUIJN
            } else {
                DE_BRUIJN << s | DE_BRUIJN >> (64 - s)
            };
            assert_eq!(got.bits(), want, "rotate_left({DE_BRUIJN:#018x}, {k})");
            assert_eq!(got.rotate_right(k), x, "rotate_right after rotate_left by {k}");
        }
    }

    #[test]
    fn test_rotate_right_zero_is_identity() {
        for x in [0, 1, u64::MAX, DE_BRUIJN, 1 << 63] {
            let w = BitWord::new(x);
            assert_eq!(w.rotate_right(0), w);
            assert_eq!(w.rotate_right(64), w);
            assert_eq!(w.rotate_left(0), w);
            assert_eq!(w.rotate_left(64), w);
        }
    }

    #[test]
    fn test_rotate_agrees_with_naive() {
        for k in 0..130 {
            assert_eq!(
                BitWord::new(DE_BRUIJN).rotate_right(k).bits(),
                naive::rotate_right(DE_BRUIJN, k)
            );
        }
    }

    #[test]
    fn test_bit_ops() {
        let a = BitWord::new(0b1100);
        let b = BitWord::new(0b1010);
        assert_eq!((a & b).bits(), 0b1000);
        assert_eq!((a | b).bits(), 0b1110);
        assert_eq!((a ^ b).bits(), 0b0110);
        assert_eq!(!BitWord::ZERO, BitWord::ONES);

        let mut c = a;
        c &= b;
        assert_eq!(c.bits(), 0b1000);
        c |= BitWord::new(1);
        assert_eq!(c.bits(), 0b1001);
        c ^= BitWord::new(0b1001);
        assert_eq!(c, BitWord::ZERO);
    }

    #[test]
    fn test_conversions() {
        let w: BitWord = 0xabcdu64.into();
        assert_eq!(u64::from(w), 0xabcd);
        assert_eq!(w.bits(), 0xabcd);
    }
}
