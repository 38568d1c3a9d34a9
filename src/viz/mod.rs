//! Visualization: render the multi-series debt chart to **SVG** or **PNG**.
//!
//! - Distinct series colors (Microsoft Office palette)
//! - Value badges over every nonzero point, collision-avoided by the
//!   `labels` engine
//! - Axis bounds framed around the visible series only (`rescale`)
//! - Legend placement: `Inside` or `Bottom` (non-overlapping band)

pub mod legend;
pub mod overlay;
pub mod text;
pub mod types;
pub mod util;

// Re-export types for public API
pub use overlay::BadgeStyle;
pub use text::EstimatedMeasure;
pub use types::{DEFAULT_LEGEND_MODE, LegendMode};

use crate::labels::{LabeledPoint, place_labels};
use crate::models::{DebtSection, DebtSeries, FinanceDoc};
use crate::rescale::rescale;
use crate::stats::{TOTAL_SERIES_NAME, monthly_totals};
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use legend::{draw_legend_panel, estimate_bottom_legend_height_px};
use util::{compute_left_label_area_px, office_color, office_rgb, y_label_fmt};

/// One-time registration of a "sans-serif" font for the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts; we look for a
/// common system TTF at runtime (override with `LEDGERVIZ_FONT`).
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let mut candidates: Vec<String> = Vec::new();
        if let Ok(p) = std::env::var("LEDGERVIZ_FONT") {
            candidates.push(p);
        }
        for p in [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ] {
            candidates.push(p.to_string());
        }
        for path in candidates {
            if let Ok(bytes) = std::fs::read(&path) {
                let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
                if plotters::style::register_font(
                    "sans-serif",
                    plotters::style::FontStyle::Normal,
                    bytes,
                )
                .is_ok()
                {
                    log::debug!("registered font {path}");
                    return;
                }
            }
        }
        log::warn!("no usable system font found; set LEDGERVIZ_FONT to a .ttf path");
    });
}

/// Convenience: plot the debt chart with the default title and bottom legend.
pub fn plot_debt_chart<P: AsRef<Path>>(
    doc: &FinanceDoc,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    plot_chart(
        doc,
        &[],
        out_path,
        width,
        height,
        "Debt Over Time",
        DEFAULT_LEGEND_MODE,
    )
}

/// Build the plotted series: every card in document order, plus the synthetic
/// per-month total, with `hidden` names toggled off.
pub fn build_series(debt: &DebtSection, hidden: &[String]) -> Vec<DebtSeries> {
    let mut series = debt.to_series();
    series.push(DebtSeries::new(TOTAL_SERIES_NAME, monthly_totals(debt)));
    for s in &mut series {
        if hidden.iter().any(|h| h.eq_ignore_ascii_case(&s.name)) {
            s.visible = false;
        }
    }
    series
}

/// Fully-configurable entry point: choose hidden series, custom title, and
/// legend placement. Toggling a series off re-derives the axis bounds from
/// the remaining visible data before the redraw.
pub fn plot_chart<P: AsRef<Path>>(
    doc: &FinanceDoc,
    hidden: &[String],
    out_path: P,
    width: u32,
    height: u32,
    title: &str,
    legend: LegendMode,
) -> Result<()> {
    doc.debt.validate()?;
    if doc.debt.months.is_empty() {
        return Err(anyhow!("no months to plot"));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    let series = build_series(&doc.debt, hidden);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &doc.debt.months, &series, title, legend)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &doc.debt.months, &series, title, legend)?;
    }
    Ok(())
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    months: &[String],
    series: &[DebtSeries],
    title: &str,
    legend: LegendMode,
) -> Result<()>
where
    DB: DrawingBackend,
{
    const MARGIN: i32 = 16; // matches .margin(16) below
    let x_min = 0.0f64;
    let x_max = (months.len().saturating_sub(1)).max(1) as f64;

    // Axis bounds come from the visible series only; an all-hidden chart
    // still renders at the default range.
    let bounds = rescale(series);

    let x_label_count = months.len().min(12);
    let y_label_count = 10usize;

    let left_label_width_px =
        compute_left_label_area_px(bounds.min, bounds.max, y_label_count, 12);
    let axis_x_start_px: i32 = MARGIN + left_label_width_px as i32;

    let legend_texts: Vec<String> = series
        .iter()
        .filter(|s| s.visible)
        .map(|s| s.name.clone())
        .collect();

    let (root_w_u32, root_h_u32) = root.dim_in_pixel();
    let root_w = root_w_u32 as i32;
    let root_h = root_h_u32 as i32;

    let legend_needed_h = if matches!(legend, LegendMode::Bottom) {
        estimate_bottom_legend_height_px(&legend_texts, axis_x_start_px, root_w)
    } else {
        0
    };

    let (plot_area, legend_area_opt): (DrawingArea<DB, Shift>, Option<DrawingArea<DB, Shift>>) =
        match legend {
            LegendMode::Bottom => {
                let h = legend_needed_h.max(40);
                // keep at least 40px for the plot area
                let (plot, legend) = root.split_vertically((root_h - h).max(40));
                (plot, Some(legend))
            }
            LegendMode::Inside => (root, None),
        };

    plot_area
        .fill(&WHITE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if let Some(ref legend_area) = legend_area_opt {
        legend_area
            .fill(&WHITE)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(MARGIN as u32)
        .caption(title, (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, left_label_width_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d(x_min..x_max, bounds.min..bounds.max)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let month_fmt = |x: &f64| {
        let i = x.round() as usize;
        months.get(i).cloned().unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Balance (US$)")
        .x_labels(x_label_count)
        .y_labels(y_label_count)
        .x_label_formatter(&month_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Draw visible series; colors stay bound to document order so hiding a
    // series never recolors the rest.
    let inside_mode = matches!(legend, LegendMode::Inside);
    let mut legend_items: Vec<(String, RGBAColor)> = Vec::new();

    for (idx, s) in series.iter().enumerate() {
        if !s.visible {
            continue;
        }
        let color = office_color(idx);
        // Total gets the heavier stroke, as on the dashboard.
        let stroke = if s.name == TOTAL_SERIES_NAME { 3 } else { 2 };
        let style = ShapeStyle {
            color,
            filled: false,
            stroke_width: stroke,
        };
        let points: Vec<(f64, f64)> = s
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();
        let elem = chart
            .draw_series(LineSeries::new(points, style))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if inside_mode {
            let legend_color = color;
            let legend_text = s.name.clone();
            elem.label(legend_text.clone()).legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + Circle::new((x + 8, y), 4, legend_color.filled())
                    + Text::new(legend_text.clone(), (x + 20, y), (FontFamily::SansSerif, 14))
            });
        } else {
            legend_items.push((s.name.clone(), color));
        }
    }

    // Label overlay: one pass per redraw, over the points the layout above
    // actually plotted, in dataset order then point order.
    let mut labeled: Vec<LabeledPoint> = Vec::new();
    for (idx, s) in series.iter().enumerate() {
        if !s.visible {
            continue;
        }
        for (i, v) in s.values.iter().enumerate() {
            let (px, py) = chart.backend_coord(&(i as f64, *v));
            labeled.push(LabeledPoint {
                x: px as f64,
                y: py as f64,
                value: *v,
                color: Some(office_rgb(idx)),
            });
        }
    }
    let placed = place_labels(&labeled, &EstimatedMeasure::default());
    overlay::draw_badges(&plot_area, &labeled, &placed, &BadgeStyle::default())?;

    if inside_mode {
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .label_font((FontFamily::SansSerif, 14))
            .draw()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    } else if let Some(ref legend_area) = legend_area_opt {
        draw_legend_panel(legend_area, &legend_items, axis_x_start_px)?;
    }

    plot_area
        .present()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if let Some(ref legend_area) = legend_area_opt {
        legend_area
            .present()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}
