/// Dataset location
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Chart geometry
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_MARGIN_TOP: u32 = 100;
pub const DEFAULT_MARGIN_RIGHT: u32 = 20;
pub const DEFAULT_MARGIN_BOTTOM: u32 = 100;
pub const DEFAULT_MARGIN_LEFT: u32 = 95;
pub const DEFAULT_LEGEND_OFFSET: u32 = 50;
pub const DEFAULT_LEGEND_ITEM_SIZE: u32 = 20;

/// Axis geometry
pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;
pub const YEAR_TICK_INTERVAL: i32 = 10;

/// Text
pub const CHART_TITLE: &str = "Monthly Global Land-Surface Temperature";
pub const X_AXIS_LABEL: &str = "Years";
pub const Y_AXIS_LABEL: &str = "Months";

/// Tooltip behaviour
pub const TOOLTIP_FADE_MS: u64 = 300;
pub const TOOLTIP_VISIBLE_OPACITY: f64 = 0.8;
pub const TOOLTIP_OFFSET_X: f64 = 20.0;
pub const TOOLTIP_OFFSET_Y: f64 = -40.0;

/// Output formats
pub const FORMAT_HTML: &str = "html";
pub const FORMAT_SVG: &str = "svg";

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
