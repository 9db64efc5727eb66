use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{HeatmapError, Result};
use crate::render::{render_chart, RenderContext, RenderOptions};
use crate::utils::constants::SVG_NAMESPACE;
use crate::writers::markup::{MarkupStyle, MarkupWriter};

/// Writes the chart as a standalone SVG document
pub struct SvgWriter {
    indent: bool,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self { indent: true }
    }

    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    pub fn render(&self, ctx: &RenderContext) -> Result<String> {
        let chart = render_chart(ctx, RenderOptions::default())
            .attr("xmlns", SVG_NAMESPACE)
            .attr("font-family", "sans-serif");

        let mut writer = MarkupWriter::new(Vec::new(), MarkupStyle::Xml, self.indent);
        writer.write_declaration()?;
        writer.write_element(&chart)?;

        String::from_utf8(writer.into_inner()).map_err(|e| HeatmapError::Render(e.to_string()))
    }

    pub fn write(&self, ctx: &RenderContext, path: &Path) -> Result<()> {
        let document = self.render(ctx)?;
        fs::write(path, document.as_bytes())?;
        info!(path = %path.display(), bytes = document.len(), "Wrote SVG document");
        Ok(())
    }
}
