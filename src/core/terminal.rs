//! Terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{FALLBACK_COLUMNS, FALLBACK_ROWS, PROMPT_ROWS};

/// Current terminal geometry as `(columns, rows)` (80×24 fallback).
#[inline]
#[must_use]
pub fn terminal_dims() -> (usize, usize) {
    terminal_size().map_or((FALLBACK_COLUMNS, FALLBACK_ROWS), |(Width(w), Height(h))| {
        (usize::from(w), usize::from(h))
    })
}

/// Space handed to the chart, leaving room for the prompt underneath.
#[inline]
#[must_use]
pub fn chart_dims((columns, rows): (usize, usize)) -> (usize, usize) {
    (columns, rows.saturating_sub(PROMPT_ROWS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_keeps_prompt_row() {
        assert_eq!(chart_dims((80, 24)), (80, 23));
        assert_eq!(chart_dims((10, 0)), (10, 0));
    }
}
