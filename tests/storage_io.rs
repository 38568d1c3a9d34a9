use ledgerviz::storage::{load_json, save_csv, save_json};
use tempfile::tempdir;

const SAMPLE: &str = r#"{
  "debt": {
    "months": ["Jan", "Feb", "Mar"],
    "cards": {
      "Visa": [120.0, 80.0, 0.0],
      "Amex": [300.0, 250.0, 200.0]
    }
  },
  "cashFlow": {
    "categories": [
      { "from": "Income", "to": "Rent", "value": 1500 },
      { "from": "Income", "to": "Cards", "value": 600 }
    ]
  }
}"#;

#[test]
fn load_preserves_card_order() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("data.json");
    std::fs::write(&p, SAMPLE).unwrap();
    let doc = load_json(&p).unwrap();
    let names: Vec<&String> = doc.debt.cards.keys().collect();
    assert_eq!(names, ["Visa", "Amex"]);
    assert_eq!(doc.debt.months.len(), 3);
    assert_eq!(doc.cash_flow.categories.len(), 2);
}

#[test]
fn missing_debt_section_is_an_error() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("data.json");
    std::fs::write(&p, r#"{"cashFlow": {"categories": []}}"#).unwrap();
    let err = load_json(&p).unwrap_err();
    assert!(err.to_string().contains("debt"), "got: {err}");
}

#[test]
fn missing_cash_flow_section_is_an_error() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("data.json");
    std::fs::write(&p, r#"{"debt": {"months": [], "cards": {}}}"#).unwrap();
    let err = load_json(&p).unwrap_err();
    assert!(err.to_string().contains("cashFlow"), "got: {err}");
}

#[test]
fn mismatched_series_length_is_an_error() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("data.json");
    std::fs::write(
        &p,
        r#"{
          "debt": {"months": ["Jan", "Feb"], "cards": {"Visa": [1.0]}},
          "cashFlow": {"categories": []}
        }"#,
    )
    .unwrap();
    let err = load_json(&p).unwrap_err();
    assert!(err.to_string().contains("Visa"), "got: {err}");
}

#[test]
fn exports_round_trip() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("data.json");
    std::fs::write(&p, SAMPLE).unwrap();
    let doc = load_json(&p).unwrap();

    let jsonp = dir.path().join("out.json");
    save_json(&doc, &jsonp).unwrap();
    let reloaded = load_json(&jsonp).unwrap();
    assert_eq!(doc, reloaded);

    let csvp = dir.path().join("out.csv");
    save_csv(&doc, &csvp).unwrap();
    let body = std::fs::read_to_string(&csvp).unwrap();
    assert!(body.starts_with("card,month,value"));
    // one header + one row per (card, month)
    assert_eq!(body.lines().count(), 1 + 2 * 3);
}
