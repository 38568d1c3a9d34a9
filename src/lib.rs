//! ledgerviz
//!
//! A lightweight Rust library for loading, visualizing, and summarizing
//! personal-finance data. Pairs with the `ledgerviz` CLI.
//!
//! ### Features
//! - Load a finance document (monthly card balances + cash-flow edges) from JSON
//! - Render a multi-series debt chart to SVG/PNG with collision-avoided value badges
//! - Re-frame the value axis around only the visible series when toggling
//! - Derive and validate the cash-flow graph behind the Sankey view
//! - Quick summary statistics (min, max, mean, median) per card
//!
//! ### Example
//! ```no_run
//! let doc = ledgerviz::storage::load_json("data.json")?;
//! ledgerviz::viz::plot_debt_chart(&doc, "debt.svg", 1000, 600)?;
//! let series = ledgerviz::viz::build_series(&doc.debt, &[]);
//! let stats = ledgerviz::stats::series_summary(&series);
//! println!("{:#?}", stats);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod flow;
pub mod labels;
pub mod models;
pub mod rescale;
pub mod stats;
pub mod storage;
pub mod viz;

pub use flow::FlowGraph;
pub use labels::{LabeledPoint, PlacedLabel, TextMeasure, place_labels};
pub use models::{DataError, DebtSeries, FinanceDoc, FlowEdge};
pub use rescale::{AxisBounds, rescale};
