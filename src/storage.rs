use crate::models::{CashFlowSection, DataError, DebtSection, FinanceDoc};
use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Raw document shape used only to tell "section absent" apart from other
/// deserialization failures.
#[derive(Deserialize)]
struct RawDoc {
    debt: Option<DebtSection>,
    #[serde(rename = "cashFlow")]
    cash_flow: Option<CashFlowSection>,
}

/// Load and validate the finance document. This is the system's single read;
/// a missing section or a malformed series fails the whole load so the caller
/// never partially renders.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<FinanceDoc> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let raw: RawDoc = serde_json::from_reader(file)
        .with_context(|| format!("parse {}", path.display()))?;

    let debt = raw.debt.ok_or(DataError::MissingData("debt"))?;
    let cash_flow = raw.cash_flow.ok_or(DataError::MissingData("cashFlow"))?;
    debt.validate()?;

    log::debug!(
        "loaded {} cards over {} months, {} flow edges",
        debt.cards.len(),
        debt.months.len(),
        cash_flow.categories.len()
    );
    Ok(FinanceDoc { debt, cash_flow })
}

/// Save the debt section as tidy CSV with header (one row = one observation).
pub fn save_csv<P: AsRef<Path>>(doc: &FinanceDoc, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("card", "month", "value"))?;
    for (card, values) in &doc.debt.cards {
        for (month, value) in doc.debt.months.iter().zip(values) {
            wtr.serialize((card, month, value))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save the whole document as pretty JSON.
pub fn save_json<P: AsRef<Path>>(doc: &FinanceDoc, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(doc)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use tempfile::tempdir;

    fn sample_doc() -> FinanceDoc {
        let mut cards = IndexMap::new();
        cards.insert("Visa".to_string(), vec![120.0, 80.0]);
        FinanceDoc {
            debt: DebtSection {
                months: vec!["Jan".into(), "Feb".into()],
                cards,
            },
            cash_flow: CashFlowSection { categories: vec![] },
        }
    }

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let doc = sample_doc();
        save_csv(&doc, &csvp).unwrap();
        save_json(&doc, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }

    #[test]
    fn missing_section_fails_load() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.json");
        std::fs::write(&p, r#"{"debt": {"months": [], "cards": {}}}"#).unwrap();
        let err = load_json(&p).unwrap_err();
        assert!(err.to_string().contains("cashFlow"));
    }
}
