use crate::interaction::TooltipContent;
use crate::models::TemperatureRecord;
use crate::render::axis::{Axis, Orientation};
use crate::render::format::{month_name, number, translate};
use crate::render::legend::{render_legend, render_legend_axis};
use crate::render::{Element, RenderContext};
use crate::utils::constants::{CHART_TITLE, X_AXIS_LABEL, YEAR_TICK_INTERVAL, Y_AXIS_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Attach pre-rendered tooltip markup to each cell as `data-tooltip`
    pub tooltip_data: bool,
}

/// Build the whole chart as an `svg#graph` element
pub fn render_chart(ctx: &RenderContext, options: RenderOptions) -> Element {
    let layout = ctx.layout();
    let (left, top) = layout.origin();
    let (x_axis, y_axis) = render_axes(ctx);

    let graph = Element::new("g")
        .attr("transform", translate(left, top))
        .child(x_axis)
        .child(y_axis)
        .children(render_headers(ctx))
        .child(render_legend(ctx))
        .children(render_cells(ctx, options))
        .child(render_legend_axis(ctx));

    Element::new("svg")
        .attr("id", "graph")
        .attr("class", "graph")
        .attr("width", layout.width)
        .attr("height", layout.height)
        .child(graph)
}

/// Bottom year axis (decades only) and left month-name axis
pub fn render_axes(ctx: &RenderContext) -> (Element, Element) {
    let layout = ctx.layout();

    let decades: Vec<i32> = ctx
        .x_scale()
        .domain()
        .iter()
        .copied()
        .filter(|year| year % YEAR_TICK_INTERVAL == 0)
        .collect();
    let x_axis = Axis::band(Orientation::Bottom, ctx.x_scale(), decades, |year| {
        year.to_string()
    })
    .render_into(
        Element::new("g")
            .attr("id", "x-axis")
            .attr("class", "axis x-axis")
            .attr("transform", translate(0.0, layout.inner_height())),
    )
    .child(
        Element::new("text")
            .attr("class", "label")
            .attr("x", number(layout.inner_width()))
            .attr("y", 50)
            .text(X_AXIS_LABEL),
    );

    let months = ctx.y_scale().domain().to_vec();
    let y_axis = Axis::band(Orientation::Left, ctx.y_scale(), months, |month| {
        month_name(month).unwrap_or_else(|| month.to_string())
    })
    .render_into(
        Element::new("g")
            .attr("id", "y-axis")
            .attr("class", "axis y-axis"),
    )
    .child(
        Element::new("text")
            .attr("class", "label")
            .attr("transform", "rotate(-90)")
            .attr("x", 0)
            .attr("y", -65)
            .text(Y_AXIS_LABEL),
    );

    (x_axis, y_axis)
}

pub fn subtitle_text(ctx: &RenderContext) -> String {
    let (min_year, max_year) = ctx.year_extent();
    format!(
        "Base temperature: {}℃ ({} to {})",
        number(ctx.dataset().base_temperature),
        min_year,
        max_year
    )
}

/// Title and subtitle, centred above the plot
pub fn render_headers(ctx: &RenderContext) -> Vec<Element> {
    let layout = ctx.layout();
    let center = number(layout.inner_width() / 2.0);
    let half_top = layout.margin.top as f64 / 2.0;

    vec![
        Element::new("text")
            .attr("id", "title")
            .attr("class", "title")
            .attr("x", &center)
            .attr("y", number(-half_top - 5.0))
            .text(CHART_TITLE),
        Element::new("text")
            .attr("id", "description")
            .attr("class", "subtitle")
            .attr("x", &center)
            .attr("y", number(-half_top + 30.0))
            .text(subtitle_text(ctx)),
    ]
}

pub fn render_cells(ctx: &RenderContext, options: RenderOptions) -> Vec<Element> {
    ctx.dataset()
        .records
        .iter()
        .map(|record| render_cell(ctx, record, options))
        .collect()
}

/// One cell per record. `data-month` is zero-based while the month axis uses the one-based value.
pub fn render_cell(
    ctx: &RenderContext,
    record: &TemperatureRecord,
    options: RenderOptions,
) -> Element {
    let color = ctx.color_for(record);

    let cell = Element::new("rect")
        .attr("class", "cell")
        .attr("data-year", record.year)
        .attr("data-month", record.month_index())
        .attr("data-temp", number(record.temperature))
        .attr("x", number(ctx.x_scale().scale(record.year).unwrap_or_default()))
        .attr("y", number(ctx.y_scale().scale(record.month).unwrap_or_default()))
        .attr("width", number(ctx.x_scale().bandwidth()))
        .attr("height", number(ctx.y_scale().bandwidth()))
        .style("fill", color);

    if options.tooltip_data {
        cell.attr("data-tooltip", TooltipContent::new(record, color).to_html())
    } else {
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, Layout, RawDataset, RawVariance};
    use pretty_assertions::assert_eq;

    fn raw(entries: &[(i32, u32, f64)]) -> RawDataset {
        RawDataset {
            base_temperature: 8.0,
            monthly_variance: entries
                .iter()
                .map(|&(year, month, variance)| RawVariance {
                    year,
                    month,
                    variance,
                })
                .collect(),
        }
    }

    fn context(entries: &[(i32, u32, f64)]) -> RenderContext {
        RenderContext::new(Dataset::from_raw(raw(entries)).unwrap(), Layout::default())
    }

    #[test]
    fn test_subtitle() {
        let ctx = context(&[(1900, 1, -2.0), (1900, 2, 1.0), (1901, 1, 0.5)]);

        assert_eq!(subtitle_text(&ctx), "Base temperature: 8℃ (1900 to 1901)");
    }

    #[test]
    fn test_cell_attributes() {
        let ctx = context(&[(1900, 1, -2.0), (1900, 12, 1.0), (1901, 1, 0.5)]);
        let cells = render_cells(&ctx, RenderOptions::default());

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].get_attr("data-year"), Some("1900"));
        assert_eq!(cells[0].get_attr("data-month"), Some("0"));
        assert_eq!(cells[1].get_attr("data-month"), Some("11"));
        assert_eq!(cells[2].get_attr("data-temp"), Some("8.5"));
        assert_eq!(cells[2].get_attr("x"), Some("442.5"));
        assert_eq!(cells[1].get_attr("y"), Some("150"));
        assert_eq!(cells[0].get_attr("width"), Some("442.5"));
        assert_eq!(cells[0].get_style("fill"), Some("#313695"));
        assert_eq!(cells[0].get_attr("data-tooltip"), None);
    }

    #[test]
    fn test_cell_tooltip_data() {
        let ctx = context(&[(1900, 1, -2.0), (1901, 1, 0.5)]);
        let options = RenderOptions { tooltip_data: true };
        let cell = render_cell(&ctx, &ctx.dataset().records[0], options);

        let tooltip = cell.get_attr("data-tooltip").unwrap();
        assert!(tooltip.contains("January"));
        assert!(tooltip.contains("6.0ºC"));
        assert!(tooltip.contains("-2.0ºC"));
    }

    #[test]
    fn test_year_axis_shows_decades_only() {
        let entries: Vec<(i32, u32, f64)> = (1895..=1921).map(|y| (y, 1, 0.0)).collect();
        let ctx = context(&entries);
        let (x_axis, _) = render_axes(&ctx);

        let labels: Vec<String> = x_axis
            .find_all_by_class("tick")
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(labels, vec!["1900", "1910", "1920"]);
    }

    #[test]
    fn test_month_axis_uses_names() {
        let entries: Vec<(i32, u32, f64)> = (1..=12).map(|m| (1900, m, 0.0)).collect();
        let ctx = context(&entries);
        let (_, y_axis) = render_axes(&ctx);

        let labels: Vec<String> = y_axis
            .find_all_by_class("tick")
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(labels.first().map(String::as_str), Some("January"));
        assert_eq!(labels.last().map(String::as_str), Some("December"));
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn test_chart_roles() {
        let ctx = context(&[(1900, 1, -2.0), (1900, 2, 1.0), (1901, 1, 0.5)]);
        let chart = render_chart(&ctx, RenderOptions::default());

        for id in ["title", "description", "x-axis", "y-axis", "legend", "legend-x-axis"] {
            assert!(chart.find_by_id(id).is_some(), "missing #{}", id);
        }
        assert_eq!(chart.get_attr("width"), Some("1000"));
        assert_eq!(chart.children[0].get_attr("transform"), Some("translate(95, 100)"));
        assert_eq!(chart.find_all_by_class("cell").len(), 3);
        assert_eq!(
            chart.find_by_id("title").map(|t| t.text_content()),
            Some(CHART_TITLE.to_string())
        );
        assert_eq!(chart.find_by_id("title").and_then(|t| t.get_attr("y")), Some("-55"));
    }
}
