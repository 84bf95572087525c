//! Binary text form of a [`BitWord`].
//!
//! A word renders as exactly 64 ASCII digits, most significant bit first, so
//! `BitWord::new(1)` prints as 63 zeros followed by a one. Storage is
//! least-significant-first, so rendering mirrors the word and then emits its
//! lanes from bit 0 upward. Parsing runs the same steps in reverse.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::swar;
use crate::word::BitWord;

const DIGITS: usize = BitWord::BITS as usize;

impl BitWord {
    /// ASCII digits of the word, most significant bit first.
    fn digits(self) -> [u8; DIGITS] {
        let mirrored = self.mirror().bits();
        let mut out = [b'0'; DIGITS];
        for (i, digit) in out.iter_mut().enumerate() {
            *digit += ((mirrored >> i) & 1) as u8;
        }
        out
    }

    fn write_digits(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.digits();
        let s = std::str::from_utf8(&digits).map_err(|_| fmt::Error)?;
        f.write_str(s)
    }
}

impl fmt::Display for BitWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_digits(f)
    }
}

impl fmt::Binary for BitWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        self.write_digits(f)
    }
}

impl fmt::Debug for BitWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitWord({:#018x})", self.bits())
    }
}

impl FromStr for BitWord {
    type Err = Error;

    /// Parse 64 binary digits, most significant first. A leading `0b` is allowed.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0b").unwrap_or(s);

        let len = digits.chars().count();
        if len != DIGITS {
            debug!(len, "binary word has wrong length");
            return Err(Error::InvalidLength(len));
        }

        // Build the mirrored word lane by lane, then flip it into place.
        let mut mirrored = 0u64;
        for (position, digit) in digits.chars().enumerate() {
            let bit = match digit {
                '0' => 0u64,
                '1' => 1,
                _ => {
                    debug!(?digit, position, "binary word has invalid digit");
                    return Err(Error::InvalidDigit { digit, position });
                }
            };
            mirrored |= bit << position;
        }

        Ok(Self::new(swar::mirror(mirrored)))
    }
}
