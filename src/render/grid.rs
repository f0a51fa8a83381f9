//! ASCII grid renderer.
//!
//! The chart is painted top to bottom, one text row per `y_step`:
//!
//! ```text
//!   0 ========----------------------------
//!  -2 ------------------------------------
//!  -4 ---------------=======--------------
//!     0       1       2     3       4
//! ```
//!
//! Every plot column samples the series by integer stride
//! (`c * len / plot_columns`), so a long series is downsampled and a short
//! one stretched. A sample is drawn on a row when it lies strictly within
//! `line_thickness` of the row's value. The x-axis row reuses the same
//! stride and blanks labels that repeat the previous one.
//!
//! The whole frame is assembled in memory and written in one call.

use std::{fmt::Write as _, io::Write};

use crate::core::{
    constants::{MAX_COLUMNS, MAX_ROWS, MIN_PLOT_COLUMNS, RESERVED_ROWS},
    digits::{label_width, signed_width},
    error::GraphError,
    series::CoordinateSeries,
    theme::Theme,
};

/// Geometry derived from one `(series, theme)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Y label column including its separator.
    pub y_label_width: usize,
    /// Value covered by one text row.
    pub y_step: u64,
    /// Samples closer than this to a row's value are drawn on it.
    pub line_thickness: u64,
    pub plot_columns: usize,
    /// Text rows above the x axis.
    pub plot_rows: usize,
    /// Stride between x-axis labels.
    pub x_label_width: usize,
}

impl Layout {
    /// # Errors
    /// * [`GraphError::GraphTooSmall`] if the theme leaves no plot rows or columns.
    /// * [`GraphError::GraphTooLarge`] past [`MAX_COLUMNS`] or [`MAX_ROWS`].
    /// * [`GraphError::DegenerateRange`] if the y values are too close to
    ///   spread over the available rows.
    pub fn compute(series: &CoordinateSeries, theme: &Theme) -> Result<Self, GraphError> {
        if theme.columns > MAX_COLUMNS || theme.rows > MAX_ROWS {
            return Err(GraphError::GraphTooLarge {
                max_w: MAX_COLUMNS,
                max_h: MAX_ROWS,
                got_w: theme.columns,
                got_h: theme.rows,
            });
        }

        let y_ext = series.y_extent();
        let y_label_width = label_width(&y_ext);

        let too_small = || GraphError::GraphTooSmall {
            want_w: y_label_width + MIN_PLOT_COLUMNS,
            want_h: RESERVED_ROWS + 1,
            got_w: theme.columns,
            got_h: theme.rows,
        };

        let usable_rows = theme
            .rows
            .checked_sub(RESERVED_ROWS)
            .filter(|&r| r > 0)
            .ok_or_else(too_small)?;
        let plot_columns = theme
            .columns
            .checked_sub(y_label_width)
            .filter(|&c| c >= MIN_PLOT_COLUMNS)
            .ok_or_else(too_small)?;

        let y_step = y_ext.magnitude_span() / usable_rows as u64;
        if y_step == 0 || y_ext.is_flat() {
            return Err(GraphError::DegenerateRange {
                max: y_ext.max,
                min: y_ext.min,
                rows: usable_rows,
            });
        }

        // truncation toward zero is the intended rounding
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let line_thickness = (y_step as f64 * f64::from(theme.stroke_size) / 2.0) as u64;

        // rows run from max down to, but excluding, min
        let drop = i128::from(y_ext.max) - i128::from(y_ext.min);
        let step = i128::from(y_step);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let plot_rows = ((drop + step - 1) / step) as usize;

        Ok(Self {
            y_label_width,
            y_step,
            line_thickness,
            plot_columns,
            plot_rows,
            x_label_width: label_width(&series.x_extent()),
        })
    }

    /// Series index shown in plot column `col`, clamped to the last sample.
    #[inline]
    #[must_use]
    pub fn sample_index(&self, col: usize, len: usize) -> usize {
        let idx = (col as u128 * len as u128 / self.plot_columns as u128) as usize;
        idx.min(len.saturating_sub(1))
    }
}

/// Paints a [`CoordinateSeries`] with a borrowed [`Theme`].
pub struct Renderer<'t> {
    theme: &'t Theme,
}

impl<'t> Renderer<'t> {
    #[inline]
    #[must_use]
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    /// # Errors
    /// As [`Layout::compute`].
    #[inline]
    pub fn layout(&self, series: &CoordinateSeries) -> Result<Layout, GraphError> {
        Layout::compute(series, self.theme)
    }

    /// Main render entry: the full chart into `out`, then flush.
    ///
    /// # Errors
    /// As [`Layout::compute`], plus [`GraphError::Io`] from the sink.
    pub fn render<W: Write>(&self, series: &CoordinateSeries, out: &mut W) -> Result<(), GraphError> {
        let frame = self.render_to_string(series)?;
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// # Errors
    /// As [`Layout::compute`].
    pub fn render_to_string(&self, series: &CoordinateSeries) -> Result<String, GraphError> {
        let layout = self.layout(series)?;
        let line = layout.y_label_width + layout.plot_columns + 1;
        let mut buf = String::with_capacity((layout.plot_rows + 1).saturating_mul(line));
        self.push_plot_rows(&mut buf, series, &layout);
        push_x_axis(&mut buf, series, &layout);
        Ok(buf)
    }

    fn push_plot_rows(&self, buf: &mut String, series: &CoordinateSeries, layout: &Layout) {
        let theme = self.theme;
        let y = series.y();
        let len = series.len();
        let label_w = layout.y_label_width - 1;
        let bottom = i128::from(series.y_extent().min);
        let step = i128::from(layout.y_step);
        let band = u128::from(layout.line_thickness);

        let mut row = i128::from(series.y_extent().max);
        while row > bottom {
            let _ = write!(buf, "{row:>label_w$} ");
            for col in 0..layout.plot_columns {
                let sample = i128::from(y[layout.sample_index(col, len)]);
                if (row - sample).unsigned_abs() < band {
                    buf.push_str(&theme.marker_prefix);
                    buf.push(theme.marker);
                    buf.push_str(&theme.marker_suffix);
                } else {
                    buf.push(theme.background);
                }
            }
            buf.push('\n');
            row -= step;
        }
    }
}

/// X labels under the plot body, one every `x_label_width` columns.
fn push_x_axis(buf: &mut String, series: &CoordinateSeries, layout: &Layout) {
    let x = series.x();
    let len = series.len();
    let width = layout.x_label_width;
    let last_x = x[len - 1];

    buf.extend(std::iter::repeat_n(' ', layout.y_label_width));

    let mut previous = last_x;
    let mut col = 0;
    while col + width < layout.plot_columns {
        let v = x[layout.sample_index(col, len)];
        if v == previous {
            buf.extend(std::iter::repeat_n(' ', width));
        } else {
            let _ = write!(buf, "{v:<width$}");
        }
        previous = v;
        col += width;
    }

    let tail = x[layout.sample_index(col, len)];
    if col + signed_width(tail) <= layout.plot_columns && previous != last_x {
        let _ = write!(buf, "{tail}");
    }
    buf.push('\n');
}
