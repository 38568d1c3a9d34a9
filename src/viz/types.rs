//! Public types and constants for the visualization module.

/// Legend placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMode {
    /// Overlay legend inside the plotting area (may overlap data).
    Inside,
    /// Separate, non-overlapping legend band at the bottom.
    Bottom,
}

/// The dashboard renders its legend below the chart, so that is the default.
pub const DEFAULT_LEGEND_MODE: LegendMode = LegendMode::Bottom;
