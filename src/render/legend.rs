use crate::render::axis::{Axis, Orientation};
use crate::render::format::{tick_label, translate};
use crate::render::{Element, RenderContext};
use crate::scales::legend_ticks;

/// Horizontal strip of one swatch per palette color, each titled with its temperature bucket
pub fn render_legend(ctx: &RenderContext) -> Element {
    let layout = ctx.layout();
    let size = layout.legend_item_size;
    let color_scale = ctx.color_scale();

    let swatches = color_scale.range().iter().enumerate().map(|(i, color)| {
        let mut swatch = Element::new("rect")
            .attr("class", "legend-item")
            .attr("x", size as u64 * i as u64)
            .attr("y", 0)
            .attr("width", size)
            .attr("height", size)
            .style("fill", color);

        if let Some((lo, hi)) = color_scale.invert_extent(color) {
            swatch = swatch.child(
                Element::new("title").text(format!("{} to {}℃", tick_label(lo), tick_label(hi))),
            );
        }
        swatch
    });

    Element::new("g")
        .attr("id", "legend")
        .attr("class", "legend")
        .attr("transform", translate(0.0, layout.legend_top()))
        .children(swatches)
}

/// Axis under the legend, driven by the linear legend scale rather than the color buckets
pub fn render_legend_axis(ctx: &RenderContext) -> Element {
    let layout = ctx.layout();
    let (min_temp, max_temp) = ctx.temperature_extent();
    let ticks = legend_ticks(min_temp, max_temp, ctx.color_scale().range().len());

    let axis = Axis::linear(Orientation::Bottom, ctx.legend_scale(), ticks, tick_label);
    let top = layout.legend_top() + layout.legend_item_size as f64;

    axis.render_into(
        Element::new("g")
            .attr("id", "legend-x-axis")
            .attr("class", "axis legend-x-axis")
            .attr("transform", translate(0.0, top)),
    )
}
