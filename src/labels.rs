//! Label overlay engine: collision-avoiding placement of value badges.
//!
//! This module is deliberately free of any rendering-library types. The host
//! chart finishes its layout pass, hands over screen-space points, and gets
//! back anchor positions plus badge boxes; drawing the result is the adapter's
//! job (see `viz::overlay`). Text measurement comes in through [`TextMeasure`]
//! so the engine never touches a font object.
//!
//! Placement is a pure fold over candidates in input order: the growing list
//! of already-placed labels is the only state, it is rebuilt from empty on
//! every pass, and nothing survives between passes.

/// Rendered text height assumed for every label, in screen units.
pub const TEXT_HEIGHT: f64 = 12.0;
/// Horizontal padding on each side of the badge.
pub const PAD_X: f64 = 6.0;
/// Vertical padding above and below the text.
pub const PAD_Y: f64 = 3.0;
/// Initial anchor offset above the plotted point.
pub const ANCHOR_LIFT: f64 = 10.0;
/// Vertical step applied while a candidate still collides.
pub const BUMP: f64 = TEXT_HEIGHT + 6.0;
/// Badge corner radius.
pub const CORNER_RADIUS: f64 = 4.0;

/// One already-plotted point, in screen coordinates, as produced by the host
/// chart's layout pass. Owned transiently for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    /// Series line color; `None` falls back to black at draw time.
    pub color: Option<(u8, u8, u8)>,
}

/// Final collision-resolved anchor and padded badge box for one label.
///
/// `(x, y)` is the text anchor (centered horizontally, bottom-aligned);
/// `width`/`height` describe the padded badge around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLabel {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Host-supplied text measurement callback.
pub trait TextMeasure {
    /// Width of `text` rendered in the active label font, in screen units.
    fn width(&self, text: &str) -> f64;
}

/// Format a value the way it appears on a badge: a plain numeric string with
/// no trailing `.0` on whole amounts.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Compute non-overlapping anchors for every labelable point.
///
/// Returns one `(input index, PlacedLabel)` pair per point whose value is
/// nonzero, in input order. A value of exactly zero means "no debt" and is
/// never labeled.
///
/// Two labels collide when their anchors are closer than the padded text
/// height vertically AND closer than the *candidate's* unpadded text width
/// horizontally. The test is asymmetric and order-dependent on purpose; ties
/// resolve by input order. While a candidate collides with any earlier label
/// it is pushed up by [`BUMP`] and re-tested against the whole list. The list
/// is fixed during one candidate's climb, so each push strictly grows the
/// vertical separation from every earlier anchor and the climb terminates —
/// though a label in a crowded column may end up above the visible plot area,
/// which is accepted.
pub fn place_labels(
    points: &[LabeledPoint],
    measure: &dyn TextMeasure,
) -> Vec<(usize, PlacedLabel)> {
    points
        .iter()
        .enumerate()
        .fold(Vec::new(), |mut placed, (index, point)| {
            if point.value == 0.0 {
                return placed;
            }
            let text = format_value(point.value);
            let text_width = measure.width(&text);

            let mut y = point.y - ANCHOR_LIFT;
            while placed
                .iter()
                .any(|(_, prior)| collides(point.x, y, text_width, prior))
            {
                y -= BUMP;
            }

            placed.push((
                index,
                PlacedLabel {
                    x: point.x,
                    y,
                    width: text_width + 2.0 * PAD_X,
                    height: TEXT_HEIGHT + 2.0 * PAD_Y,
                },
            ));
            placed
        })
}

fn collides(x: f64, y: f64, text_width: f64, prior: &PlacedLabel) -> bool {
    (y - prior.y).abs() < TEXT_HEIGHT + 2.0 * PAD_Y && (x - prior.x).abs() < text_width
}
