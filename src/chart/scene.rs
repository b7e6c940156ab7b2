use tracing::trace;

use crate::chart::labels::{ScreenPoint, place_labels};
use crate::chart::layout::PlotArea;
use crate::chart::scale::ChartMapper;
use crate::chart::style::ChartStyle;
use crate::chart::ticks::{price_gridlines, year_ticks};
use crate::core::HistoryPoint;
use crate::error::TrendResult;
use crate::render::{CirclePrimitive, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Gap between the price axis labels and the left plot edge.
const PRICE_LABEL_GAP_PX: f64 = 4.0;
/// Gap between the bottom plot edge and the year labels.
const YEAR_LABEL_GAP_PX: f64 = 6.0;

/// Assembles the full renderable geometry for one group's price history.
///
/// `history` must be pre-sorted ascending by date; the first/last label
/// heuristics rely on it (domain extents do not). An empty history yields an
/// empty frame, which is the caller-side guard for the scaler's non-empty
/// precondition.
pub fn build_chart_frame(
    history: &[HistoryPoint],
    plot: PlotArea,
    style: &ChartStyle,
) -> TrendResult<RenderFrame> {
    let style = style.validate()?;
    let mut frame = RenderFrame::new(plot);

    if history.is_empty() {
        plot.validate()?;
        trace!("empty history, rendering nothing");
        return Ok(frame);
    }

    let mapper = ChartMapper::fit(history, plot)?;

    for gridline in price_gridlines(&mapper) {
        frame.lines.push(LinePrimitive::new(
            plot.left(),
            gridline.y,
            plot.right(),
            gridline.y,
            style.grid_stroke_width,
            style.grid_color,
        ));
        frame.texts.push(TextPrimitive::new(
            gridline.label,
            plot.left() - PRICE_LABEL_GAP_PX,
            gridline.y,
            style.axis_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
    }

    for tick in year_ticks(&mapper) {
        frame.texts.push(TextPrimitive::new(
            tick.label,
            tick.x,
            plot.bottom() + YEAR_LABEL_GAP_PX,
            style.axis_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }

    let screen_points: Vec<ScreenPoint> = history
        .iter()
        .enumerate()
        .map(|(index, point)| ScreenPoint {
            x: mapper.x_of(point.date),
            y: mapper.y_of(point.price_man_won),
            date: point.date,
            price_man_won: point.price_man_won,
            is_latest: index == history.len() - 1,
        })
        .collect();

    let line_color = style.series_color.with_alpha(style.line_alpha);
    for pair in screen_points.windows(2) {
        frame.lines.push(LinePrimitive::new(
            pair[0].x,
            pair[0].y,
            pair[1].x,
            pair[1].y,
            style.line_stroke_width,
            line_color,
        ));
    }

    for point in &screen_points {
        frame.circles.push(CirclePrimitive::new(
            point.x,
            point.y,
            style.marker_radius_px,
            style.series_color,
        ));
    }

    for label in place_labels(&screen_points, &plot, &style) {
        let color = if label.emphasized {
            style.emphasis_color
        } else {
            style.label_color
        };
        frame.texts.push(TextPrimitive::new(
            label.text,
            label.x,
            label.y,
            style.label_font_size_px,
            color,
            label.h_align,
        ));
    }

    // The latest transaction gets an enlarged accent marker drawn on top.
    if let Some(latest) = screen_points.last() {
        frame.circles.push(CirclePrimitive::new(
            latest.x,
            latest.y,
            style.latest_marker_radius_px,
            style.emphasis_color,
        ));
    }

    trace!(
        points = screen_points.len(),
        lines = frame.lines.len(),
        texts = frame.texts.len(),
        "built chart frame"
    );
    Ok(frame)
}
