use indexmap::IndexMap;
use ledgerviz::models::{DebtSection, DebtSeries};
use ledgerviz::stats::{TOTAL_SERIES_NAME, monthly_totals, series_summary};

fn sample_section() -> DebtSection {
    let mut cards = IndexMap::new();
    cards.insert("Visa".to_string(), vec![120.0, 80.0, 0.0]);
    cards.insert("Amex".to_string(), vec![300.0, 250.0, 200.0]);
    DebtSection {
        months: vec!["Jan".into(), "Feb".into(), "Mar".into()],
        cards,
    }
}

#[test]
fn totals_sum_each_month_across_cards() {
    let totals = monthly_totals(&sample_section());
    assert_eq!(totals, vec![420.0, 330.0, 200.0]);
}

#[test]
fn totals_of_empty_section_are_empty() {
    let section = DebtSection {
        months: vec![],
        cards: IndexMap::new(),
    };
    assert!(monthly_totals(&section).is_empty());
}

#[test]
fn summary_excludes_zeros_from_min_max_only() {
    let series = [DebtSeries::new("Visa", vec![120.0, 80.0, 0.0])];
    let out = series_summary(&series);
    assert_eq!(out.len(), 1);
    let s = &out[0];
    assert_eq!(s.count, 3);
    assert_eq!(s.zeros, 1);
    assert_eq!(s.min, Some(80.0));
    assert_eq!(s.max, Some(120.0));
    // mean and median keep the zero month
    assert!((s.mean.unwrap() - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(s.median, Some(80.0));
}

#[test]
fn build_series_appends_total() {
    let section = sample_section();
    let series = ledgerviz::viz::build_series(&section, &["Amex".to_string()]);
    assert_eq!(series.len(), 3);
    assert_eq!(series[2].name, TOTAL_SERIES_NAME);
    assert_eq!(series[2].values, vec![420.0, 330.0, 200.0]);
    assert!(series[0].visible);
    assert!(!series[1].visible, "hidden by name");
    assert!(series[2].visible);
}
