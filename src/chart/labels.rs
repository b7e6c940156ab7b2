use chrono::NaiveDate;
use smallvec::SmallVec;

use crate::chart::format::{estimate_text_width_px, format_point_label};
use crate::chart::layout::PlotArea;
use crate::chart::style::ChartStyle;
use crate::render::TextHAlign;

/// One history point already projected into pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub date: NaiveDate,
    pub price_man_won: i64,
    pub is_latest: bool,
}

/// One annotation that survived placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
    /// Rendered in the emphasis style; set for the latest point's label.
    pub emphasized: bool,
    pub point_index: usize,
}

/// Indices of the canonical label candidates: first, last, minimum price,
/// maximum price. Coinciding extrema collapse to a single index, so the
/// result holds between one and four indices, ascending.
#[must_use]
pub fn select_label_candidates(points: &[ScreenPoint]) -> SmallVec<[usize; 4]> {
    let mut candidates: SmallVec<[usize; 4]> = SmallVec::new();
    if points.is_empty() {
        return candidates;
    }

    let mut min_index = 0;
    let mut max_index = 0;
    for (index, point) in points.iter().enumerate().skip(1) {
        if point.price_man_won < points[min_index].price_man_won {
            min_index = index;
        }
        if point.price_man_won > points[max_index].price_man_won {
            max_index = index;
        }
    }

    for index in [0, points.len() - 1, min_index, max_index] {
        if !candidates.contains(&index) {
            candidates.push(index);
        }
    }
    candidates.sort_unstable();
    candidates
}

/// Greedy, single-pass label placement over the candidate extrema.
///
/// Candidates are visited in ascending index order. Each label is drawn
/// above its point unless that would cross the top padding boundary, in
/// which case it flips below; it is centered unless its estimated width
/// would cross a side boundary, in which case it aligns to the point. A
/// candidate whose anchor lands within the collision tolerance of an
/// already-placed label is dropped, not relocated. Order-dependent and not
/// globally optimal, by design.
#[must_use]
pub fn place_labels(points: &[ScreenPoint], plot: &PlotArea, style: &ChartStyle) -> Vec<PlacedLabel> {
    let mut placed: Vec<PlacedLabel> = Vec::new();

    for index in select_label_candidates(points) {
        let point = points[index];
        let text = format_point_label(point.date, point.price_man_won);
        let width =
            estimate_text_width_px(&text, style.ascii_char_width_px, style.wide_char_width_px);

        let mut y = point.y - style.label_offset_above_px;
        if y < plot.top() + style.label_top_clearance_px {
            y = point.y + style.label_offset_below_px;
        }

        let x = point.x;
        let h_align = if point.x - width / 2.0 < plot.left() {
            TextHAlign::Left
        } else if point.x + width / 2.0 > plot.right() {
            TextHAlign::Right
        } else {
            TextHAlign::Center
        };

        let collides = placed.iter().any(|label| {
            (x - label.x).abs() < style.collision_dx_px
                && (y - label.y).abs() < style.collision_dy_px
        });
        if collides {
            continue;
        }

        placed.push(PlacedLabel {
            text,
            x,
            y,
            h_align,
            emphasized: point.is_latest,
            point_index: index,
        });
    }

    placed
}
