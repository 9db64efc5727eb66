use tracing::debug;

use crate::models::{Dataset, Layout, TemperatureRecord};
use crate::scales::{temperature_palette, BandScale, LinearScale, QuantizeScale};

/// Everything the renderer needs, built once after the dataset is loaded
#[derive(Debug, Clone)]
pub struct RenderContext {
    dataset: Dataset,
    layout: Layout,
    x_scale: BandScale<i32>,
    y_scale: BandScale<u32>,
    color_scale: QuantizeScale<&'static str>,
    legend_scale: LinearScale,
    year_extent: (i32, i32),
    temperature_extent: (f64, f64),
}

impl RenderContext {
    pub fn new(dataset: Dataset, layout: Layout) -> Self {
        let year_extent = dataset.year_extent();
        let temperature_extent = dataset.temperature_extent();

        let x_scale = BandScale::new(
            dataset.records.iter().map(|r| r.year),
            (0.0, layout.inner_width()),
        );
        let y_scale = BandScale::new(
            dataset.records.iter().map(|r| r.month),
            (0.0, layout.inner_height()),
        );

        let palette = temperature_palette();
        let legend_width = layout.legend_width(palette.len());
        let color_scale = QuantizeScale::new(temperature_extent, palette);
        let legend_scale = LinearScale::new(temperature_extent, (0.0, legend_width));

        debug!(
            years = x_scale.domain().len(),
            months = y_scale.domain().len(),
            cell_width = x_scale.bandwidth(),
            cell_height = y_scale.bandwidth(),
            "Built scales"
        );

        Self {
            dataset,
            layout,
            x_scale,
            y_scale,
            color_scale,
            legend_scale,
            year_extent,
            temperature_extent,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn x_scale(&self) -> &BandScale<i32> {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &BandScale<u32> {
        &self.y_scale
    }

    pub fn color_scale(&self) -> &QuantizeScale<&'static str> {
        &self.color_scale
    }

    pub fn legend_scale(&self) -> &LinearScale {
        &self.legend_scale
    }

    pub fn year_extent(&self) -> (i32, i32) {
        self.year_extent
    }

    pub fn temperature_extent(&self) -> (f64, f64) {
        self.temperature_extent
    }

    /// Fill color of a record's cell
    pub fn color_for(&self, record: &TemperatureRecord) -> &'static str {
        self.color_scale
            .scale(record.temperature)
            .copied()
            .unwrap_or("none")
    }
}
