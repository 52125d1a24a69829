//! `mj-table` rendering. Rows and cells are authored as plain HTML inside
//! the element and pass through untouched; the wrapper carries the
//! typography.

use super::{Frame, Renderer};
use crate::error::Error;
use crate::helper::tag::Tag;

impl Renderer<'_> {
	pub(super) fn render_table(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		if let Some(family) = frame.attribute_string("font-family") {
			self.add_used_font_family(&family);
		}
		let content = self.render_mixed_children(frame)?;
		let table = Tag::new("table")
			.add_attribute("border", "0")
			.maybe_add_attribute("cellpadding", frame.attribute_string("cellpadding"))
			.maybe_add_attribute("cellspacing", frame.attribute_string("cellspacing"))
			.maybe_add_attribute("width", frame.attribute_string("width"))
			.maybe_add_style("color", frame.attribute_string("color"))
			.maybe_add_style("font-family", frame.attribute_string("font-family"))
			.maybe_add_style("font-size", frame.attribute_string("font-size"))
			.maybe_add_style("line-height", frame.attribute_string("line-height"))
			.maybe_add_style("table-layout", frame.attribute_string("table-layout"))
			.maybe_add_style("width", frame.attribute_string("width"))
			.maybe_add_style("border", frame.attribute_string("border"));
		Ok(table.render(content))
	}
}
