//! Bottom legend band: layout estimation and drawing.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::estimate_text_width_px;

const FONT_PX: u32 = 14;
const LINE_H: i32 = FONT_PX as i32 + 2;
const ROW_GAP: i32 = 4;
const PAD_BAND: i32 = 8;
const MARKER_RADIUS: i32 = 4;
const MARKER_TO_TEXT_GAP: i32 = 12;
const TRAILING_GAP: i32 = 12;

fn block_width(label: &str) -> i32 {
    MARKER_TO_TEXT_GAP + MARKER_RADIUS + estimate_text_width_px(label, FONT_PX) as i32 + TRAILING_GAP
}

/// Greedy row packing: how many rows do the items need at this width?
fn pack_rows(labels: &[String], start_x: i32, total_w: i32) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut cur: Vec<usize> = Vec::new();
    let mut x = start_x;
    for (i, label) in labels.iter().enumerate() {
        let w = block_width(label);
        if x + w > total_w && !cur.is_empty() {
            rows.push(std::mem::take(&mut cur));
            x = start_x;
        }
        x += w;
        cur.push(i);
    }
    if !cur.is_empty() {
        rows.push(cur);
    }
    rows
}

/// Estimate how tall the bottom legend band must be to fit all items.
/// Mirrors the constants and flow logic used in [`draw_legend_panel`] so the
/// band is neither clipped nor padded with dead space.
pub fn estimate_bottom_legend_height_px(labels: &[String], start_x: i32, total_w: i32) -> i32 {
    let rows = pack_rows(labels, start_x, total_w);
    PAD_BAND + 8 + rows.len() as i32 * (LINE_H + ROW_GAP) + PAD_BAND
}

/// Draw marker + label pairs flowing left to right, wrapping into rows.
/// `start_x` aligns the first column with the plot's X axis.
pub fn draw_legend_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBAColor)],
    start_x: i32,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let labels: Vec<String> = items.iter().map(|(l, _)| l.clone()).collect();
    let (w, _h) = area.dim_in_pixel();
    let rows = pack_rows(&labels, start_x, w as i32);

    let text_style = TextStyle::from((FontFamily::SansSerif, FONT_PX))
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    let mut y = PAD_BAND + 8 + LINE_H / 2;
    for row in rows {
        let mut x = start_x;
        for i in row {
            let (label, color) = &items[i];
            area.draw(&Circle::new(
                (x + MARKER_RADIUS, y),
                MARKER_RADIUS,
                color.filled(),
            ))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            area.draw(&Text::new(
                label.clone(),
                (x + MARKER_RADIUS + MARKER_TO_TEXT_GAP, y),
                text_style.clone(),
            ))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            x += block_width(label);
        }
        y += LINE_H + ROW_GAP;
    }
    Ok(())
}
