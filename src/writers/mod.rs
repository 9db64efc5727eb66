pub mod html_writer;
pub mod markup;
pub mod svg_writer;

pub use html_writer::HtmlWriter;
pub use markup::{to_markup, MarkupStyle, MarkupWriter};
pub use svg_writer::SvgWriter;
