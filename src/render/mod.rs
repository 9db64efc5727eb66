pub mod axis;
pub mod chart;
pub mod context;
pub mod element;
pub mod format;
pub mod legend;

pub use axis::{Axis, Orientation, Tick};
pub use chart::{render_chart, RenderOptions};
pub use context::RenderContext;
pub use element::Element;
pub use legend::{render_legend, render_legend_axis};
