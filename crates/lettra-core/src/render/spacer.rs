//! `mj-spacer` rendering.

use super::{Frame, Renderer};
use crate::error::Error;
use crate::helper::tag::Tag;

impl Renderer<'_> {
	pub(super) fn render_spacer(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let div = Tag::div()
			.maybe_add_style("height", frame.attribute_string("height"))
			.maybe_add_style("line-height", frame.attribute_string("height"));
		// hair space so empty-cell collapsing clients keep the height
		Ok(div.render("&#8202;"))
	}
}
