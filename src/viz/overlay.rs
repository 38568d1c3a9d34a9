//! Plotters adapter for the label overlay engine.
//!
//! `labels` decides where every badge goes; this module turns the placements
//! into drawing commands on a pixel-space drawing area: a rounded-rectangle
//! badge behind each value, then the value text centered horizontally and
//! bottom-aligned at the anchor, in the series' line color.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::labels::{CORNER_RADIUS, LabeledPoint, PAD_Y, PlacedLabel, format_value};

/// Badge appearance.
#[derive(Debug, Clone)]
pub struct BadgeStyle {
    pub font_px: u32,
    pub background: RGBAColor,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            font_px: 12,
            background: WHITE.mix(0.85),
        }
    }
}

/// Draw one badge per placement. `placed` pairs each label with the index of
/// its source point, as returned by `labels::place_labels`.
pub fn draw_badges<DB>(
    area: &DrawingArea<DB, Shift>,
    points: &[LabeledPoint],
    placed: &[(usize, PlacedLabel)],
    style: &BadgeStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    for (index, label) in placed {
        let point = &points[*index];

        let x0 = label.x - label.width / 2.0;
        let x1 = label.x + label.width / 2.0;
        let y1 = label.y + PAD_Y;
        let y0 = y1 - label.height;
        area.draw(&Polygon::new(
            rounded_rect(x0, y0, x1, y1, CORNER_RADIUS),
            style.background.filled(),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let (r, g, b) = point.color.unwrap_or((0, 0, 0));
        let text_color = RGBColor(r, g, b);
        let text_style = TextStyle::from((FontFamily::SansSerif, style.font_px))
            .color(&text_color)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        area.draw(&Text::new(
            format_value(point.value),
            (label.x as i32, label.y as i32),
            text_style,
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// Clockwise outline of a rounded rectangle, corners sampled as quarter arcs.
fn rounded_rect(x0: f64, y0: f64, x1: f64, y1: f64, r: f64) -> Vec<(i32, i32)> {
    let r = r.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);
    // Corner centers and the start angle of each quarter arc, clockwise from
    // the top-left corner.
    let corners = [
        (x0 + r, y0 + r, 180.0f64),
        (x1 - r, y0 + r, 270.0),
        (x1 - r, y1 - r, 0.0),
        (x0 + r, y1 - r, 90.0),
    ];
    let steps = 4;
    let mut pts = Vec::with_capacity(corners.len() * (steps + 1));
    for (cx, cy, start) in corners {
        for s in 0..=steps {
            let a = (start + 90.0 * s as f64 / steps as f64).to_radians();
            pts.push((
                (cx + r * a.cos()).round() as i32,
                (cy + r * a.sin()).round() as i32,
            ));
        }
    }
    pts
}
