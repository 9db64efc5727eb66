use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{HeatmapError, Result};
use crate::render::Element;

/// HTML elements that must not have a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// How childless elements are closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupStyle {
    /// Every childless element is self-closed
    Xml,
    /// Only void elements and SVG content are self-closed
    Html,
}

pub struct MarkupWriter<W: Write> {
    writer: Writer<W>,
    style: MarkupStyle,
}

impl<W: Write> MarkupWriter<W> {
    pub fn new(inner: W, style: MarkupStyle, indent: bool) -> Self {
        let writer = if indent {
            Writer::new_with_indent(inner, b' ', 2)
        } else {
            Writer::new(inner)
        };
        Self { writer, style }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    pub fn write_declaration(&mut self) -> Result<()> {
        self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    pub fn write_doctype(&mut self, doctype: &str) -> Result<()> {
        self.event(Event::DocType(BytesText::from_escaped(doctype)))
    }

    pub fn write_element(&mut self, element: &Element) -> Result<()> {
        self.write_node(element, false)
    }

    /// Open `element` without writing its children; pair with `write_end`
    pub fn write_start(&mut self, element: &Element) -> Result<()> {
        self.event(Event::Start(start_tag(element)))
    }

    pub fn write_end(&mut self, tag: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(tag)))
    }

    /// Write `element` with raw, unescaped body text (stylesheets and scripts)
    pub fn write_raw_element(&mut self, element: &Element, body: &str) -> Result<()> {
        self.event(Event::Start(start_tag(element)))?;
        self.event(Event::Text(BytesText::from_escaped(body)))?;
        self.event(Event::End(BytesEnd::new(element.tag.as_str())))
    }

    fn write_node(&mut self, element: &Element, in_svg: bool) -> Result<()> {
        let in_svg = in_svg || element.tag == "svg";
        let start = start_tag(element);

        let is_empty =
            element.children.is_empty() && element.text.is_none() && element.html.is_none();
        let self_close = match self.style {
            MarkupStyle::Xml => true,
            MarkupStyle::Html => in_svg || VOID_ELEMENTS.contains(&element.tag.as_str()),
        };

        if is_empty && self_close {
            return self.event(Event::Empty(start));
        }

        self.event(Event::Start(start))?;
        if let Some(text) = &element.text {
            self.event(Event::Text(BytesText::new(text)))?;
        }
        if let Some(html) = &element.html {
            self.event(Event::Text(BytesText::from_escaped(html.as_str())))?;
        }
        for child in &element.children {
            self.write_node(child, in_svg)?;
        }
        self.event(Event::End(BytesEnd::new(element.tag.as_str())))
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| HeatmapError::Render(e.to_string()))
    }
}

fn start_tag(element: &Element) -> BytesStart<'_> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    if let Some(style) = element.style_attr() {
        start.push_attribute(("style", style.as_str()));
    }
    start
}

/// Serialize a single element tree to a string
pub fn to_markup(element: &Element, style: MarkupStyle) -> Result<String> {
    let mut writer = MarkupWriter::new(Vec::new(), style, false);
    writer.write_element(element)?;
    String::from_utf8(writer.into_inner()).map_err(|e| HeatmapError::Render(e.to_string()))
}
