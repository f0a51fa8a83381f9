//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    data::{read_table, read_table_from_path},
    digits::{digit_count, label_width},
    error::{ConfigError, GraphError, RowFault},
    extremum::{Extremum, extremum},
    series::{CoordinateSeries, Series1D, Table, range},
    theme::{Theme, ThemeBuilder},
};

pub use render::{Layout, Renderer};

/// Plots `series` to stdout with the default theme, sized to the current
/// terminal.
///
/// # Errors
/// Anything [`Renderer::render`] reports.
pub fn plot_data(series: &CoordinateSeries) -> Result<(), GraphError> {
    use crate::core::terminal::{chart_dims, terminal_dims};

    let (columns, rows) = chart_dims(terminal_dims());
    let theme = Theme::builder(columns, rows)
        .color(&AnsiCode::yellow())
        .build()?;
    Renderer::new(&theme).render(series, &mut std::io::stdout().lock())
}
