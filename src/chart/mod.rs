pub mod format;
pub mod labels;
pub mod layout;
pub mod scale;
pub mod scene;
pub mod style;
pub mod ticks;

pub use format::{estimate_text_width_px, format_eok, format_grouped, format_point_label};
pub use labels::{PlacedLabel, ScreenPoint, place_labels, select_label_candidates};
pub use layout::{PlotArea, PlotPadding};
pub use scale::ChartMapper;
pub use scene::build_chart_frame;
pub use style::ChartStyle;
pub use ticks::{PriceGridline, YearTick, price_gridlines, year_ticks};
