//! Label width helpers.
//!
//! `digit_count` ignores the sign. `label_width` adds it back so a negative
//! label is never clipped by the column it was reserved.

use crate::core::extremum::Extremum;

/// Decimal digits of `|n|`, at least 1.
#[inline]
#[must_use]
pub fn digit_count(n: i64) -> usize {
    n.unsigned_abs()
        .checked_ilog10()
        .map_or(1, |d| d as usize + 1)
}

/// Printed width of `n`, sign included.
#[inline]
#[must_use]
pub fn signed_width(n: i64) -> usize {
    digit_count(n) + usize::from(n < 0)
}

/// Widest label of the axis plus one separator column.
#[inline]
#[must_use]
pub fn label_width(extent: &Extremum) -> usize {
    signed_width(extent.max).max(signed_width(extent.min)) + 1
}
