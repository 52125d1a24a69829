//! `mj-text` rendering.

use super::{Frame, Renderer};
use crate::error::Error;
use crate::helper::condition::{END_CONDITIONAL_TAG, START_CONDITIONAL_TAG};
use crate::helper::size::format_value;
use crate::helper::tag::Tag;

impl Renderer<'_> {
	pub(super) fn render_text(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		if let Some(family) = frame.attribute_string("font-family") {
			self.add_used_font_family(&family);
		}
		let content = self.render_mixed_children(frame)?;
		let div = Tag::div()
			.maybe_add_style("font-family", frame.attribute_string("font-family"))
			.maybe_add_style("font-size", frame.attribute_string("font-size"))
			.maybe_add_style("font-style", frame.attribute_string("font-style"))
			.maybe_add_style("font-weight", frame.attribute_string("font-weight"))
			.maybe_add_style("letter-spacing", frame.attribute_string("letter-spacing"))
			.maybe_add_style("line-height", frame.attribute_string("line-height"))
			.maybe_add_style("text-align", frame.attribute_string("align"))
			.maybe_add_style("text-decoration", frame.attribute_string("text-decoration"))
			.maybe_add_style("text-transform", frame.attribute_string("text-transform"))
			.maybe_add_style("color", frame.attribute_string("color"))
			.maybe_add_style("height", frame.attribute_string("height"))
			.render(content);
		match frame.attribute_pixel("height") {
			// Outlook ignores div heights, so pin it with a fixed-height cell
			Some(height) => {
				let value = format_value(height.value());
				Ok(format!(
					"{START_CONDITIONAL_TAG}<table role=\"presentation\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\"><tr><td height=\"{value}\" style=\"vertical-align:top;height:{value}px;\">{END_CONDITIONAL_TAG}{div}{START_CONDITIONAL_TAG}</td></tr></table>{END_CONDITIONAL_TAG}"
				))
			}
			None => Ok(div),
		}
	}

	/// Renders mixed content: text verbatim, comments subject to the
	/// comment policy, elements through the regular dispatch.
	pub(super) fn render_mixed_children(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let siblings = frame.element.children.len();
		let mut out = String::new();
		for child in frame.element.children.iter() {
			out.push_str(&self.render_node(
				child,
				frame.container_width.clone(),
				siblings,
				0,
			)?);
		}
		Ok(out)
	}
}
