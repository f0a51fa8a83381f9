use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::constants::{
    DEFAULT_BACKGROUND, DEFAULT_DELIMITER, DEFAULT_MARKER, DEFAULT_STROKE_SIZE,
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-graph",
    about = "ASCII line charts sized to the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot a function over an integer range
    Range(RangeArgs),
    /// Plot x;y pairs from a CSV file
    Csv(CsvArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Function applied to every x of a range.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    /// y = -x²
    #[default]
    NegSquare,
    /// y = x²
    Square,
    /// y = x
    Identity,
    /// y = x³
    Cube,
    /// y = |x|
    Abs,
}

impl Curve {
    /// Saturates instead of overflowing on huge inputs.
    #[must_use]
    pub fn apply(self, x: i64) -> i64 {
        match self {
            Self::NegSquare => x.saturating_mul(x).saturating_neg(),
            Self::Square => x.saturating_mul(x),
            Self::Identity => x,
            Self::Cube => x.saturating_mul(x).saturating_mul(x),
            Self::Abs => x.saturating_abs(),
        }
    }
}

/// Look of the chart, shared by every plotting subcommand.
#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// Character filling empty cells
    #[arg(long, default_value_t = DEFAULT_BACKGROUND)]
    pub background: char,

    /// Character drawing the line
    #[arg(long, default_value_t = DEFAULT_MARKER)]
    pub marker: char,

    /// Marker color (name or `#RRGGBB`)
    #[arg(long, default_value = "yellow")]
    pub color: String,

    /// No escape sequences around the marker
    #[arg(long)]
    pub plain: bool,

    /// Line thickness as a multiple of one row step
    #[arg(long, default_value_t = DEFAULT_STROKE_SIZE)]
    pub stroke: f32,

    /// Override the terminal width
    #[arg(long)]
    pub cols: Option<usize>,

    /// Override the terminal height
    #[arg(long)]
    pub rows: Option<usize>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `ascii-graph range …`
#[derive(Parser, Debug)]
pub struct RangeArgs {
    /// First x value
    #[arg(allow_negative_numbers = true)]
    pub first: i64,
    /// Stop before this x value
    #[arg(allow_negative_numbers = true)]
    pub last: i64,
    /// Step between x values (negative to count down)
    #[arg(allow_negative_numbers = true)]
    pub gap: i64,

    /// Function to plot
    #[arg(long, value_enum, default_value_t = Curve::NegSquare)]
    pub curve: Curve,

    #[command(flatten)]
    pub theme: ThemeArgs,
}

/// `ascii-graph csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: PathBuf,

    /// Field separator
    #[arg(short, long, default_value_t = char::from(DEFAULT_DELIMITER))]
    pub delimiter: char,

    #[command(flatten)]
    pub theme: ThemeArgs,
}
