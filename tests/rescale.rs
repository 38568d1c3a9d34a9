use ledgerviz::models::DebtSeries;
use ledgerviz::rescale::{AxisBounds, DEFAULT_BOUNDS, rescale};

fn series(name: &str, values: &[f64], visible: bool) -> DebtSeries {
    let mut s = DebtSeries::new(name, values.to_vec());
    s.visible = visible;
    s
}

#[test]
fn all_hidden_returns_default_range() {
    let set = [
        series("A", &[10.0, 20.0], false),
        series("B", &[5.0, 15.0], false),
    ];
    assert_eq!(rescale(&set), DEFAULT_BOUNDS);
    assert_eq!(rescale(&set), AxisBounds { min: 0.0, max: 100.0 });
}

#[test]
fn empty_input_returns_default_range() {
    assert_eq!(rescale(&[]), DEFAULT_BOUNDS);
}

#[test]
fn zeros_are_excluded_from_both_bounds() {
    let set = [series("A", &[100.0, 200.0, 0.0, 300.0], true)];
    let bounds = rescale(&set);
    assert_eq!(bounds.min, 95.0);
    assert_eq!(bounds.max, 315.0);
}

#[test]
fn hiding_a_series_reframes_to_the_rest() {
    let set = [
        series("A", &[10.0, 20.0, 30.0], false),
        series("B", &[5.0, 15.0, 25.0], true),
    ];
    let bounds = rescale(&set);
    assert_eq!(bounds.min, 4.75);
    assert_eq!(bounds.max, 26.25);
}

#[test]
fn all_zero_visible_data_falls_back_to_default() {
    let set = [series("A", &[0.0, 0.0], true)];
    assert_eq!(rescale(&set), DEFAULT_BOUNDS);
}
