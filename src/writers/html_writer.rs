use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{HeatmapError, Result};
use crate::interaction::{Tooltip, HIDDEN_OPACITY};
use crate::render::format::number;
use crate::render::{render_chart, Element, RenderContext, RenderOptions};
use crate::settings::TooltipSettings;
use crate::utils::constants::CHART_TITLE;
use crate::writers::markup::{MarkupStyle, MarkupWriter};

const STYLESHEET: &str = r#"
body { margin: 0; font-family: sans-serif; background: #fafafa; }
.container { display: flex; justify-content: center; padding: 20px; }
.graph { background: #fff; box-shadow: 0 0 6px rgba(0, 0, 0, 0.2); }
.title { font-size: 22px; text-anchor: middle; }
.subtitle { font-size: 14px; text-anchor: middle; }
.label { fill: #000; font-size: 12px; text-anchor: end; }
.cell:hover { stroke: #000; stroke-width: 1px; }
.tooltip {
  position: absolute;
  pointer-events: none;
  padding: 6px 10px;
  border-radius: 4px;
  background: #222;
  color: #fff;
  font-size: 12px;
  text-align: center;
  transition: opacity __FADE_MS__ms cubic-bezier(0.645, 0.045, 0.355, 1);
}
.tooltip hr { margin: 4px 0 0; border-width: 4px 0 0; border-style: solid; }
"#;

// Show on mouseover, hide on mouseout. A new event restarts the opacity transition.
const SCRIPT: &str = r#"
(function () {
  var tooltip = document.getElementById("tooltip");
  document.querySelectorAll("rect.cell").forEach(function (cell) {
    cell.addEventListener("mouseover", function (event) {
      tooltip.style.opacity = "__VISIBLE_OPACITY__";
      tooltip.style.left = ((event.pageX || event.x) + __OFFSET_X__) + "px";
      tooltip.style.top = ((event.pageY || event.y) + __OFFSET_Y__) + "px";
      tooltip.setAttribute("data-year", cell.getAttribute("data-year"));
      tooltip.innerHTML = cell.getAttribute("data-tooltip");
    });
    cell.addEventListener("mouseout", function () {
      tooltip.style.opacity = "__HIDDEN_OPACITY__";
    });
  });
})();
"#;

/// Writes the chart into a self-contained HTML page with a hover tooltip
pub struct HtmlWriter {
    tooltip: TooltipSettings,
    indent: bool,
}

impl HtmlWriter {
    pub fn new(tooltip: TooltipSettings) -> Self {
        Self {
            tooltip,
            indent: true,
        }
    }

    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    pub fn stylesheet(&self) -> String {
        STYLESHEET.replace("__FADE_MS__", &self.tooltip.fade_ms.to_string())
    }

    /// Hover script; opacities and offsets come from the same settings as the `Tooltip` model
    pub fn script(&self) -> String {
        let model = Tooltip::new(self.tooltip.clone());
        SCRIPT
            .replace("__VISIBLE_OPACITY__", &number(model.visible_opacity()))
            .replace("__HIDDEN_OPACITY__", &number(HIDDEN_OPACITY))
            .replace("__OFFSET_X__", &number(self.tooltip.offset_x))
            .replace("__OFFSET_Y__", &number(self.tooltip.offset_y))
    }

    pub fn render(&self, ctx: &RenderContext) -> Result<String> {
        let chart = render_chart(ctx, RenderOptions { tooltip_data: true });
        let container = Element::new("div")
            .attr("class", "container")
            .child(chart);
        let tooltip = Tooltip::new(self.tooltip.clone()).to_element();

        let mut writer = MarkupWriter::new(Vec::new(), MarkupStyle::Html, self.indent);
        writer.write_doctype("html")?;
        writer.write_start(&Element::new("html").attr("lang", "en"))?;

        writer.write_start(&Element::new("head"))?;
        writer.write_element(&Element::new("meta").attr("charset", "utf-8"))?;
        writer.write_element(&Element::new("title").text(CHART_TITLE))?;
        writer.write_raw_element(&Element::new("style"), &self.stylesheet())?;
        writer.write_end("head")?;

        writer.write_start(&Element::new("body"))?;
        writer.write_element(&container)?;
        writer.write_element(&tooltip)?;
        writer.write_raw_element(&Element::new("script"), &self.script())?;
        writer.write_end("body")?;

        writer.write_end("html")?;

        String::from_utf8(writer.into_inner()).map_err(|e| HeatmapError::Render(e.to_string()))
    }

    pub fn write(&self, ctx: &RenderContext, path: &Path) -> Result<()> {
        let document = self.render(ctx)?;
        fs::write(path, document.as_bytes())?;
        info!(path = %path.display(), bytes = document.len(), "Wrote HTML page");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Pointer;
    use crate::models::{Dataset, Layout, RawDataset, RawVariance};
    use std::time::Duration;

    fn context() -> RenderContext {
        let raw = RawDataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                RawVariance {
                    year: 1900,
                    month: 1,
                    variance: -2.0,
                },
                RawVariance {
                    year: 1900,
                    month: 2,
                    variance: 1.0,
                },
            ],
        };
        RenderContext::new(Dataset::from_raw(raw).unwrap(), Layout::default())
    }

    #[test]
    fn test_page_structure() {
        let html = HtmlWriter::new(TooltipSettings::default())
            .render(&context())
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div class=\"container\">"));
        assert!(html.contains("id=\"tooltip\""));
        assert!(html.contains("data-tooltip="));
        assert!(html.contains("</script>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_tooltip_starts_hidden() {
        let html = HtmlWriter::new(TooltipSettings::default())
            .with_indent(false)
            .render(&context())
            .unwrap();

        assert!(html.contains(
            "<div id=\"tooltip\" class=\"tooltip\" style=\"opacity: 0; left: 0px; top: 0px\"></div>"
        ));
    }

    #[test]
    fn test_script_uses_tooltip_settings() {
        let writer = HtmlWriter::new(TooltipSettings::default());
        let script = writer.script();

        assert!(script.contains("tooltip.style.opacity = \"0.8\""));
        assert!(script.contains("(event.pageX || event.x) + 20"));
        assert!(script.contains("(event.pageY || event.y) + -40"));
        assert!(!script.contains("__"));
        assert!(writer.stylesheet().contains("opacity 300ms"));
    }

    fn handler<'a>(script: &'a str, event: &str) -> &'a str {
        let start = script
            .find(&format!("addEventListener(\"{}\"", event))
            .unwrap();
        let body = &script[start..];
        &body[..body.find("});").unwrap()]
    }

    #[test]
    fn test_script_hover_then_leave_matches_tooltip_model() {
        let settings = TooltipSettings {
            opacity: 0.6,
            ..TooltipSettings::default()
        };
        let script = HtmlWriter::new(settings.clone()).script();

        let mut model = Tooltip::new(settings);
        let record = context().dataset().records[0];
        model.on_pointer_enter(&record, "#313695", Pointer { x: 0.0, y: 0.0 });
        model.advance(Duration::from_millis(300));
        let shown = model.opacity();
        model.on_pointer_leave();
        model.advance(Duration::from_millis(300));
        let hidden = model.opacity();

        let mouseover = handler(&script, "mouseover");
        assert!(mouseover.contains(&format!("tooltip.style.opacity = \"{}\"", number(shown))));
        assert!(mouseover
            .contains("tooltip.setAttribute(\"data-year\", cell.getAttribute(\"data-year\"))"));
        assert!(mouseover.contains("tooltip.innerHTML = cell.getAttribute(\"data-tooltip\")"));

        let mouseout = handler(&script, "mouseout");
        assert_eq!(hidden, 0.0);
        assert!(mouseout.contains("tooltip.style.opacity = \"0\""));
    }

    #[test]
    fn test_write_html_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heatmap.html");

        HtmlWriter::new(TooltipSettings::default())
            .write(&context(), &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Monthly Global Land-Surface Temperature"));
    }
}
