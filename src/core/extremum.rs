//! Single-pass extrema over integer samples.

use crate::core::error::GraphError;

/// Inclusive bounds of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremum {
    pub max: i64,
    pub min: i64,
}

impl Extremum {
    /// `|max| + |min|`, the vertical distance the renderer divides into rows.
    #[inline]
    #[must_use]
    pub fn magnitude_span(&self) -> u64 {
        self.max
            .unsigned_abs()
            .saturating_add(self.min.unsigned_abs())
    }

    #[inline]
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.max == self.min
    }
}

/// Maximum and minimum of `values` in one pass.
///
/// Both candidates start at the first sample, so an all-negative series
/// reports its real maximum rather than a floor of zero.
///
/// # Errors
/// [`GraphError::EmptyInput`] when `values` is empty.
pub fn extremum(values: &[i64]) -> Result<Extremum, GraphError> {
    let (&first, rest) = values.split_first().ok_or(GraphError::EmptyInput)?;
    let mut ext = Extremum {
        max: first,
        min: first,
    };
    for &v in rest {
        if v > ext.max {
            ext.max = v;
        } else if v < ext.min {
            ext.min = v;
        }
    }
    Ok(ext)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_every_value_within_bounds(values in prop::collection::vec(any::<i64>(), 1..200)) {
            let ext = extremum(&values).unwrap();
            for v in &values {
                prop_assert!((ext.min..=ext.max).contains(v));
            }
        }

        #[test]
        fn prop_bounds_are_attained(values in prop::collection::vec(-1000i64..1000, 1..200)) {
            let ext = extremum(&values).unwrap();
            prop_assert_eq!(Some(&ext.max), values.iter().max());
            prop_assert_eq!(Some(&ext.min), values.iter().min());
        }
    }
}
