//! Bitstring projection into percentage space.
//!
//! A genotype's vertical position is its fraction of set bits; its
//! horizontal position measures how far its set bits lean toward the left
//! end, normalized against the combinatorial extrema for that ones-count.
//! Genotypes with the same ones-count therefore fan out horizontally by
//! left-clustering instead of landing on an arbitrary scatter.

use std::fmt;
use std::str::FromStr;

use crate::error::OnionError;
use crate::onion::OnionPoint;

/// A non-empty binary genotype, indexed left to right.
///
/// Index 0 is the leftmost (most significant) position. Immutable once
/// parsed; parsing rejects empty input and any symbol other than `'0'` or
/// `'1'`, so every constructed value satisfies the projector preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// Number of bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: empty input is rejected at parse time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits.
    #[must_use]
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// The bit at index `i`, counted from the left end.
    #[must_use]
    pub fn bit(&self, i: usize) -> Option<bool> {
        self.bits.get(i).copied()
    }

    /// Iterate over the bits, leftmost first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl FromStr for Bitstring {
    type Err = OnionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(OnionError::EmptyBitstring);
        }
        let mut bits = Vec::with_capacity(s.len());
        for (index, symbol) in s.chars().enumerate() {
            match symbol {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(OnionError::InvalidBitSymbol { symbol, index }),
            }
        }
        Ok(Self { bits })
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Project a bitstring to its percentage-space onion coordinates.
///
/// Vertical is the fraction of set bits, `k / n`. Horizontal accumulates,
/// for each set bit at index `i`, the weight `n − 1 − i` (distance from the
/// right end), then normalizes against the minimum achievable sum (ones
/// packed at the rightmost positions) and maximum (ones packed at the
/// leftmost positions) for exactly `k` ones. `horizontal = 1` therefore
/// means ones packed at the left end.
///
/// The degenerate all-zero and all-one genotypes map to the fixed corners
/// `(0, 0)` and `(1, 1)`; for `0 < k < n` the extrema are strictly ordered,
/// so the normalization never divides by zero.
#[must_use]
pub fn project(bits: &Bitstring, tooltip: Option<String>) -> OnionPoint {
    let n = bits.len();
    let k = bits.ones();

    if k == n {
        return OnionPoint::new(1.0, 1.0, tooltip);
    }
    if k == 0 {
        return OnionPoint::new(0.0, 0.0, tooltip);
    }

    let vertical = k as f64 / n as f64;

    let mut weight: usize = 0;
    for (i, bit) in bits.iter().enumerate() {
        if bit {
            weight += n - 1 - i;
        }
    }

    // Extrema for k ones among n positions: right-packed and left-packed.
    let mut min_weight: usize = 0;
    let mut max_weight: usize = 0;
    for i in 0..k {
        min_weight += i;
        max_weight += n - 1 - i;
    }

    let horizontal = (weight - min_weight) as f64 / (max_weight - min_weight) as f64;

    OnionPoint::new(horizontal, vertical, tooltip)
}
