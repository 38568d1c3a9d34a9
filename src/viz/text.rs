//! Text measurement for labels and the legend.

use crate::labels::TextMeasure;

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// [`TextMeasure`] backed by the width heuristic, at a fixed font size.
#[derive(Debug, Clone, Copy)]
pub struct EstimatedMeasure {
    pub font_px: u32,
}

impl Default for EstimatedMeasure {
    fn default() -> Self {
        Self { font_px: 12 }
    }
}

impl TextMeasure for EstimatedMeasure {
    fn width(&self, text: &str) -> f64 {
        estimate_text_width_px(text, self.font_px) as f64
    }
}
