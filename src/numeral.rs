//! Base-6 numeral values and their spelling.
//!
//! A numeral word is a root naming a digit followed by positional suffixes.
//! Suffix slot `i` contributes `2^i` to the exponent, so a word stands for
//! `digit * 6^exponent`. Larger numbers are written as several words, most
//! significant first.

use crate::lexicon::Lexicon;

/// Number of numeral roots, one per base-6 digit.
pub const NUMERAL_BASE: usize = 6;

/// Number of positional numeral suffixes.
pub const NUMERAL_SLOTS: usize = 6;

/// Prefix word marking a negative number.
pub const NEGATIVE_MARKER: &str = "ñy";

/// Where a numeral stands in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralPosition {
    /// The numeral is the whole word or its root; ablaut is possible.
    Whole,
    /// The numeral follows a root as a modifier; ablaut is not possible.
    Attached,
}

/// The value of one numeral word, kept as digit and exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumeralValue {
    root_index: usize,
    exponent: u32,
}

impl NumeralValue {
    /// Creates a value from a digit and an exponent.
    pub const fn new(root_index: usize, exponent: u32) -> Self {
        Self {
            root_index,
            exponent,
        }
    }

    /// Creates a value from a digit and the suffix slots present.
    pub fn from_slots(root_index: usize, slots: impl IntoIterator<Item = usize>) -> Self {
        let exponent = slots
            .into_iter()
            .fold(0u32, |exponent, slot| exponent | (1 << slot));
        Self::new(root_index, exponent)
    }

    /// Returns the digit.
    pub const fn root_index(self) -> usize {
        self.root_index
    }

    /// Returns the base-6 exponent.
    pub const fn exponent(self) -> u32 {
        self.exponent
    }

    /// Returns the value, or `None` when it does not fit in a `u128`.
    ///
    /// The zero root is zero whatever suffixes follow it.
    pub fn to_u128(self) -> Option<u128> {
        if self.root_index == 0 {
            return Some(0);
        }
        let digit = u128::try_from(self.root_index).ok()?;
        (NUMERAL_BASE as u128)
            .checked_pow(self.exponent)?
            .checked_mul(digit)
    }

    /// Returns `true` when the value is greater than `bound`.
    ///
    /// Values too large to represent exceed every bound.
    pub fn exceeds(self, bound: u128) -> bool {
        self.to_u128().is_none_or(|value| value > bound)
    }
}

/// Spells an integer as Fynotek numeral words.
pub fn encode(lexicon: &Lexicon, value: i128) -> String {
    let roots = lexicon.numeral_roots();
    let suffixes = lexicon.numeral_suffixes();
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return roots[0].clone();
    }

    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push((magnitude % NUMERAL_BASE as u128) as usize);
        magnitude /= NUMERAL_BASE as u128;
    }

    let mut words = Vec::new();
    if value < 0 {
        words.push(NEGATIVE_MARKER.to_string());
    }
    for (position, &digit) in digits.iter().enumerate().rev() {
        if digit == 0 {
            continue;
        }
        let mut word = roots[digit].clone();
        for (slot, suffix) in suffixes.iter().enumerate() {
            if position & (1 << slot) != 0 {
                word.push_str(suffix);
            }
        }
        words.push(word);
    }
    words.join(" ")
}
