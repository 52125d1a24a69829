//! `<body>` rendering: preview text and the outer container div.

use super::Renderer;
use crate::ast::Document;
use crate::error::Error;
use crate::helper::size::Pixel;
use crate::helper::tag::Tag;

impl Renderer<'_> {
	pub(super) fn render_body(&mut self, document: &Document) -> Result<String, Error> {
		let frame = self.frame(&document.body);
		let width = frame.attribute_pixel("width").unwrap_or_else(|| Pixel::new(600.0));
		let background_color = frame.attribute_string("background-color");

		let siblings = document.body.children.len();
		let raw_siblings = document.body.children.iter().filter(|child| child.is_raw()).count();
		let mut content = String::new();
		for child in document.body.children.iter() {
			content.push_str(&self.render_node(
				child,
				Some(width.clone()),
				siblings,
				raw_siblings,
			)?);
		}

		let container = Tag::div()
			.maybe_add_class(frame.attribute_string("css-class"))
			.maybe_add_attribute("lang", document.lang().map(ToOwned::to_owned))
			.maybe_add_attribute("dir", document.dir().map(ToOwned::to_owned))
			.maybe_add_style("background-color", background_color.clone());

		let mut inner = String::new();
		if let Some(preview) = self.preview.clone() {
			inner.push_str(
				"<div style=\"display:none;font-size:1px;color:#ffffff;line-height:1px;max-height:0px;max-width:0px;opacity:0;overflow:hidden;\">",
			);
			inner.push_str(&preview);
			inner.push_str("</div>");
		}
		inner.push_str(&container.render(content));

		let body = Tag::new("body")
			.add_style("word-spacing", "normal")
			.maybe_add_style("background-color", background_color);
		Ok(body.render(inner))
	}
}
