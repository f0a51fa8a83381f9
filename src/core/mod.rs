//! Aggregates the “business logic” layer.

pub mod color;
pub mod constants;
pub mod data;
pub mod digits;
pub mod error;
pub mod extremum;
pub mod series;
pub mod terminal;
pub mod theme;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use digits::{digit_count, label_width, signed_width};
pub use error::{ConfigError, GraphError, RowFault};
pub use extremum::{Extremum, extremum};
pub use series::{CoordinateSeries, Series1D, Table, range};
pub use theme::{Theme, ThemeBuilder};
