//! End-to-end: build a series, paint it, inspect the text.

use ascii_graph::{
    CoordinateSeries, Extremum, GraphError, Renderer, Theme, range, read_table,
};

fn theme(columns: usize, rows: usize) -> Theme {
    Theme::builder(columns, rows)
        .background('-')
        .marker('=')
        .stroke_size(1.0)
        .build()
        .unwrap()
}

#[test]
fn parabola_has_eight_rows_and_an_axis() {
    let series = CoordinateSeries::from_function(range(0, 5, 1).unwrap(), |x| -x * x).unwrap();
    let out = Renderer::new(&theme(40, 10)).render_to_string(&series).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 8 + 1);
    let labels: Vec<&str> = lines[..8]
        .iter()
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(labels, ["0", "-2", "-4", "-6", "-8", "-10", "-12", "-14"]);

    // every marker sits on a row whose value was sampled exactly
    for (line, label) in lines[..8].iter().zip(&labels) {
        let has_marker = line.contains('=');
        let sampled = ["0", "-4"].contains(label);
        assert_eq!(has_marker, sampled, "row {label}: {line}");
    }
    assert!(lines[8].trim_start().starts_with('0'));
}

#[test]
fn csv_rows_render() {
    let table = read_table("x;y\n0;0\n1;20\n2;40\n3;20\n4;0\n".as_bytes(), b';').unwrap();
    let series = CoordinateSeries::from_table(&table).unwrap();
    assert_eq!(series.y_extent(), Extremum { max: 40, min: 0 });

    let out = Renderer::new(&theme(30, 12)).render_to_string(&series).unwrap();
    let first = out.lines().next().unwrap();
    assert!(first.starts_with("40 "));
    assert!(first.contains('='));
}

#[test]
fn table_example_extents() {
    let table = vec![vec![0, 0], vec![1, 2], vec![2, 4]];
    let s = CoordinateSeries::from_table(&table).unwrap();
    assert_eq!(s.x(), &[0, 1, 2]);
    assert_eq!(s.y(), &[0, 2, 4]);
    assert_eq!(s.x_extent(), Extremum { max: 2, min: 0 });
    assert_eq!(s.y_extent(), Extremum { max: 4, min: 0 });
}

#[test]
fn render_twice_is_byte_identical() {
    let series = CoordinateSeries::from_function(range(-20, 21, 1).unwrap(), |x| x * x * x).unwrap();
    let theme = theme(60, 20);
    let renderer = Renderer::new(&theme);
    let mut a = Vec::new();
    let mut b = Vec::new();
    renderer.render(&series, &mut a).unwrap();
    renderer.render(&series, &mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn failures_carry_their_kind() {
    let kinds = [
        range(0, 10, 0).unwrap_err().kind(),
        range(0, 10, -1).unwrap_err().kind(),
        range(0, 1, 5).unwrap_err().kind(),
        CoordinateSeries::from_table(&[]).unwrap_err().kind(),
        CoordinateSeries::from_table(&[vec![1]]).unwrap_err().kind(),
    ];
    assert_eq!(
        kinds,
        ["InvalidGap", "IllogicalRange", "EmptyRange", "EmptyInput", "MalformedRow"]
    );

    let flat = CoordinateSeries::from_function(range(0, 10, 1).unwrap(), |_| 7).unwrap();
    let err = Renderer::new(&theme(40, 10)).render_to_string(&flat).unwrap_err();
    assert!(matches!(err, GraphError::DegenerateRange { max: 7, min: 7, .. }));
}
