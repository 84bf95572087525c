//! # Bit Words
//!
//! *Sixty-four lanes, one register, no loops.*
//!
//! ## Intuition First
//!
//! Picture a row of 64 light switches. Counting how many are on by walking
//! past each one takes 64 steps. Instead, pair the switches up and write the
//! count for each pair on a sticky note, then pair the notes, and so on: after
//! six rounds a single note holds the total. A machine word can do every
//! pairing in a round at once, because addition and masking act on all lanes
//! of the register simultaneously.
//!
//! ## The Problem
//!
//! Bit-level queries on a word have an obvious per-bit formulation:
//! - **Population count**: test each of the 64 positions.
//! - **Reversal**: move each bit to its mirrored position.
//! - **Rotation**: move each bit `k` places around the ring.
//!
//! Each is $O(w)$ for word width $w$. Treating the word as a vector of small
//! lanes ("SIMD within a register") brings all three to $O(\log w)$ or $O(1)$
//! word operations.
//!
//! ## Historical Context
//!
//! ```text
//! 1960  Wegner      Counting bits by clearing the lowest set bit
//! 1972  HAKMEM      Items 167-169: bit reversal and parallel popcount tricks
//! 1998  Fisher-Dietz Coined "SWAR" (SIMD within a register)
//! 2002  Warren      Hacker's Delight, ch. 5 and 7: popcount and reversal
//! 2009  Knuth       TAOCP 4A, "broadword" computing
//! ```
//!
//! ## Mathematical Formulation
//!
//! A word is $x = \sum_{i=0}^{63} b_i 2^i$ with $b_i \in \{0, 1\}$.
//!
//! - `count_on(x)` $= \sum_i b_i$ and `count_off(x)` $= 64 - $ `count_on(x)`.
//! - `mirror(x)` $= \sum_i b_i 2^{63 - i}$.
//! - `rotate_right(x, k)` $= \sum_i b_i 2^{(i - k) \bmod 64}$.
//!
//! ## Complexity Analysis
//!
//! - **Population count**: about a dozen word operations, branch-free.
//! - **Mirror**: 6 rounds of two masks, two shifts and an OR.
//! - **Rotation**: one branch (whole-word shifts), then two shifts and an OR.
//!
//! ## What Could Go Wrong
//!
//! 1. **Shift by width**: `x << 64` overflows. A reduced rotation of zero is
//!    handled as an explicit identity branch, never left to the hardware.
//! 2. **Out-of-range index**: bit 64 does not exist. Plain accessors panic and
//!    the `try_` accessors return [`Error::IndexOutOfBounds`]; an index is
//!    never wrapped into range.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`BitWord`**: the 64-bit value type (`word` module).
//! - **`swar`**: the raw `u64` kernels behind it.
//! - **`naive`**: bit-at-a-time baselines for testing and benchmarking.
//! - A binary text form via `Display` / `FromStr` (`text` module).
//!
//! ```
//! use bitword::BitWord;
//!
//! let w = BitWord::ZERO.set_on(0).set_on(3);
//! assert_eq!(w.count_on(), 2);
//! assert_eq!(w.mirror().bits(), 0x9000_0000_0000_0000);
//! assert_eq!(w.rotate_right(1).bits(), 0x8000_0000_0000_0004);
//! assert_eq!(w.to_string().parse::<BitWord>().unwrap(), w);
//! ```
//!
//! ## References
//!
//! - Beeler, M., Gosper, R. W., & Schroeppel, R. (1972). "HAKMEM." MIT AI Memo 239.
//! - Warren, H. S. (2002). "Hacker's Delight."
//! - Fisher, R. J., & Dietz, H. G. (1998). "Compiling for SIMD Within a Register."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod naive;
pub mod swar;
mod text;
pub mod word;

pub use error::{Error, Result};
pub use word::BitWord;
