use std::{io::stdout, time::Instant};

use crate::{
    core::{
        color::{AnsiCode, colorize},
        data::read_table_from_path,
        error::{ConfigError, GraphError},
        series::{CoordinateSeries, range as build_range},
        terminal::{chart_dims, terminal_dims},
        theme::Theme,
    },
    render::Renderer,
};

use super::parse::{CsvArgs, RangeArgs, ThemeArgs};

pub fn range(a: &RangeArgs) -> Result<(), GraphError> {
    let t_build = Instant::now();
    let xs = build_range(a.first, a.last, a.gap)?;
    let curve = a.curve;
    let data = CoordinateSeries::from_function(xs, |x| curve.apply(x))?;
    let dur_build = t_build.elapsed().as_micros();

    if a.theme.debug {
        eprintln!("range build: {dur_build} µs   ({} points)", data.len());
    }
    draw(&data, &a.theme)
}

pub fn csv(a: &CsvArgs) -> Result<(), GraphError> {
    let delimiter = u8::try_from(a.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(ConfigError::InvalidDelimiter(a.delimiter))?;

    let t_ingest = Instant::now();
    let table = read_table_from_path(&a.file, delimiter)?;
    let data = CoordinateSeries::from_table(&table)?;
    let dur_ingest = t_ingest.elapsed().as_micros();

    if a.theme.debug {
        eprintln!("CSV ingest: {dur_ingest} µs   ({} rows)", data.len());
    }
    draw(&data, &a.theme)
}

/// Theme from flags, falling back to the current terminal size.
fn theme(a: &ThemeArgs) -> Result<Theme, GraphError> {
    let (cols, rows) = chart_dims(terminal_dims());
    let mut b = Theme::builder(a.cols.unwrap_or(cols), a.rows.unwrap_or(rows))
        .background(a.background)
        .marker(a.marker)
        .stroke_size(a.stroke);
    if !a.plain {
        b = b.color(&AnsiCode::from_name(&a.color)?);
    }
    Ok(b.build()?)
}

fn draw(data: &CoordinateSeries, a: &ThemeArgs) -> Result<(), GraphError> {
    let theme = theme(a)?;
    let renderer = Renderer::new(&theme);

    let t_render = Instant::now();
    renderer.render(data, &mut stdout().lock())?;
    let dur_render = t_render.elapsed().as_micros();

    if a.debug {
        let layout = renderer.layout(data)?;
        eprintln!(
            "render: {dur_render} µs   ({}x{} cells, y step {}, stroke band {})",
            layout.plot_columns,
            theme.rows,
            layout.y_step,
            layout.line_thickness
        );
    }
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in AnsiCode::palette() {
        println!("{}", colorize(&code, name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Parabola        : {bin} range 0 50 1
• Counting down   : {bin} range 20 -20 -1 --curve cube
• CSV file        : {bin} csv data.csv
• Comma separated : {bin} csv data.csv --delimiter ,
• From stdin      : printf '0;0\\n1;2\\n2;4\\n' | {bin} csv -
• Custom look     : {bin} range 0 40 1 --marker '*' --background ' ' --color cyan
• Thicker line    : {bin} range 0 40 1 --stroke 3
• Debug mode      : {bin} csv data.csv --debug
"
    );
}
