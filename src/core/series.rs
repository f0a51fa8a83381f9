//! Coordinate series: arithmetic ranges, function mapping and tables.

use crate::core::{
    error::{GraphError, RowFault},
    extremum::{Extremum, extremum},
};

/// Samples along one axis; order is meaningful.
pub type Series1D = Vec<i64>;

/// One inner vector per source row. Column 0 is x, column 1 is y.
pub type Table = Vec<Vec<i64>>;

/// Half-open arithmetic range `first, first + gap, ...` stopping before `last`.
///
/// # Errors
/// * [`GraphError::InvalidGap`] if `gap == 0`.
/// * [`GraphError::IllogicalRange`] if `gap` points away from `last`.
/// * [`GraphError::EmptyRange`] if `(last - first) / gap` truncates to 0.
pub fn range(first: i64, last: i64, gap: i64) -> Result<Series1D, GraphError> {
    if gap == 0 {
        return Err(GraphError::InvalidGap);
    }
    if (first < last && gap < 0) || (first > last && gap > 0) {
        return Err(GraphError::IllogicalRange { first, last, gap });
    }

    // i128 so that e.g. i64::MIN..i64::MAX cannot overflow the subtraction
    let count = (i128::from(last) - i128::from(first)) / i128::from(gap);
    if count == 0 {
        return Err(GraphError::EmptyRange { first, last, gap });
    }

    let mut out = Series1D::new();
    let mut v = i128::from(first);
    for _ in 0..count {
        // every emitted value lies in [first, last), so it fits
        #[allow(clippy::cast_possible_truncation)]
        out.push(v as i64);
        v += i128::from(gap);
    }
    Ok(out)
}

/// Paired x/y samples with their extrema. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateSeries {
    x: Series1D,
    y: Series1D,
    x_extent: Extremum,
    y_extent: Extremum,
}

impl CoordinateSeries {
    /// Apply `f` to every x sample.
    ///
    /// # Errors
    /// [`GraphError::EmptyInput`] if `x` is empty.
    pub fn from_function<F>(x: Series1D, f: F) -> Result<Self, GraphError>
    where
        F: Fn(i64) -> i64,
    {
        let x_extent = extremum(&x)?;
        let y: Series1D = x.iter().map(|&v| f(v)).collect();
        let y_extent = extremum(&y)?;
        Ok(Self {
            x,
            y,
            x_extent,
            y_extent,
        })
    }

    /// Column 0 of every row becomes x, column 1 becomes y. Extra columns are ignored.
    ///
    /// # Errors
    /// * [`GraphError::EmptyInput`] for a table without rows.
    /// * [`GraphError::MalformedRow`] for the first row holding fewer than two columns.
    pub fn from_table(table: &[Vec<i64>]) -> Result<Self, GraphError> {
        if table.is_empty() {
            return Err(GraphError::EmptyInput);
        }

        let mut x = Series1D::with_capacity(table.len());
        let mut y = Series1D::with_capacity(table.len());
        for (i, row) in table.iter().enumerate() {
            match row.as_slice() {
                [vx, vy, ..] => {
                    x.push(*vx);
                    y.push(*vy);
                }
                short => {
                    return Err(GraphError::MalformedRow {
                        row: i + 1,
                        fault: RowFault::TooFewColumns(short.len()),
                    });
                }
            }
        }

        let x_extent = extremum(&x)?;
        let y_extent = extremum(&y)?;
        Ok(Self {
            x,
            y,
            x_extent,
            y_extent,
        })
    }

    #[inline]
    #[must_use]
    pub fn x(&self) -> &[i64] {
        &self.x
    }

    #[inline]
    #[must_use]
    pub fn y(&self) -> &[i64] {
        &self.y
    }

    /// Number of samples; never 0.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`: construction rejects empty input.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn x_extent(&self) -> Extremum {
        self.x_extent
    }

    #[inline]
    #[must_use]
    pub fn y_extent(&self) -> Extremum {
        self.y_extent
    }
}
