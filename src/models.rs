use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating the input document.
///
/// All of these fail the initial render as a whole; there is no partial
/// rendering of a document with a missing or malformed section.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required top-level section is absent from the document.
    #[error("missing `{0}` section in data document")]
    MissingData(&'static str),
    /// A card's value vector is not parallel to the month labels.
    #[error("series `{name}` has {got} values but {expected} months")]
    LengthMismatch {
        name: String,
        got: usize,
        expected: usize,
    },
    /// The cash-flow edge list describes a self-loop or a cycle.
    #[error("cash-flow graph is not acyclic (at `{0}`)")]
    CyclicFlow(String),
}

/// The whole input document: one debt time-series section and one
/// cash-flow edge list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinanceDoc {
    pub debt: DebtSection,
    #[serde(rename = "cashFlow")]
    pub cash_flow: CashFlowSection,
}

/// Monthly balances, one vector per card. Card insertion order is series
/// order, so the map must preserve it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtSection {
    pub months: Vec<String>,
    pub cards: IndexMap<String, Vec<f64>>,
}

/// Directed money flows between named categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowSection {
    pub categories: Vec<FlowEdge>,
}

/// One edge of the cash-flow graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
    pub value: f64,
}

/// Tidy working form of one plotted series (a card, or the synthetic
/// total). `visible` has exactly two states and is toggled only by direct
/// user action; the rescaler reads it, nothing else writes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebtSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub visible: bool,
}

impl DebtSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            visible: true,
        }
    }
}

impl DebtSection {
    /// Check that every card vector is parallel to `months`.
    pub fn validate(&self) -> Result<(), DataError> {
        let expected = self.months.len();
        for (name, values) in &self.cards {
            if values.len() != expected {
                return Err(DataError::LengthMismatch {
                    name: name.clone(),
                    got: values.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Series in card order, all initially visible.
    pub fn to_series(&self) -> Vec<DebtSeries> {
        self.cards
            .iter()
            .map(|(name, values)| DebtSeries::new(name.clone(), values.clone()))
            .collect()
    }
}
