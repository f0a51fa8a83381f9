//! A collection of constants.

/// Rows kept below the plot: the x-axis labels and one trailing line
pub const RESERVED_ROWS: usize = 2;
/// The plot body needs at least one column next to the y labels
pub const MIN_PLOT_COLUMNS: usize = 1;

/// Widest grid the renderer accepts
pub const MAX_COLUMNS: usize = 4096;
/// Tallest grid the renderer accepts
pub const MAX_ROWS: usize = 4096;

/// Row left free under the chart for the shell prompt
pub const PROMPT_ROWS: usize = 1;

/// Used when stdout is not a terminal
pub const FALLBACK_COLUMNS: usize = 80;
/// Used when stdout is not a terminal
pub const FALLBACK_ROWS: usize = 24;

pub const DEFAULT_BACKGROUND: char = '-';
pub const DEFAULT_MARKER: char = '=';
/// Width of the line as a multiple of one row step.
///
/// 1.0 keeps only samples within half a step of a row.
pub const DEFAULT_STROKE_SIZE: f32 = 1.0;

/// CSV fields are separated by semicolons unless told otherwise
pub const DEFAULT_DELIMITER: u8 = b';';
