//! `mj-button` rendering.

use super::{Frame, Renderer};
use crate::error::Error;
use crate::helper::size::{Pixel, Size};
use crate::helper::tag::Tag;

impl Renderer<'_> {
	pub(super) fn render_button(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		if let Some(family) = frame.attribute_string("font-family") {
			self.add_used_font_family(&family);
		}
		let content = self.render_mixed_children(frame)?;
		let background = frame
			.attribute_string("background-color")
			.filter(|value| value != "none");

		let table = Tag::table_presentation()
			.add_style("border-collapse", "separate")
			.maybe_add_style(
				"width",
				frame
					.attribute_size("width")
					.filter(Size::is_pixel)
					.map(|width| width.to_string()),
			)
			.add_style("line-height", "100%");
		let cell = Tag::td()
			.add_attribute("align", "center")
			.maybe_add_attribute("bgcolor", background.clone())
			.add_attribute("role", "presentation")
			.maybe_add_attribute("valign", frame.attribute_string("vertical-align"))
			.maybe_add_style("border", frame.attribute_string("border"))
			.maybe_add_style("border-bottom", frame.attribute_string("border-bottom"))
			.maybe_add_style("border-left", frame.attribute_string("border-left"))
			.maybe_add_style("border-radius", frame.attribute_string("border-radius"))
			.maybe_add_style("border-right", frame.attribute_string("border-right"))
			.maybe_add_style("border-top", frame.attribute_string("border-top"))
			.add_style("cursor", "auto")
			.maybe_add_style("font-style", frame.attribute_string("font-style"))
			.maybe_add_style("height", frame.attribute_string("height"))
			.maybe_add_style("mso-padding-alt", frame.attribute_string("inner-padding"))
			.maybe_add_style("background", background.clone());

		let link = match frame.attribute_string("href") {
			Some(href) => Tag::new("a")
				.add_attribute("href", href)
				.maybe_add_attribute("rel", frame.attribute_string("rel"))
				.maybe_add_attribute("name", frame.attribute_string("name"))
				.maybe_add_attribute("target", frame.attribute_string("target")),
			None => Tag::new("p"),
		};
		let link = link
			.add_style("display", "inline-block")
			.maybe_add_style(
				"width",
				content_width(frame).map(|width| width.to_string()),
			)
			.maybe_add_style("background", background)
			.maybe_add_style("color", frame.attribute_string("color"))
			.maybe_add_style("font-family", frame.attribute_string("font-family"))
			.maybe_add_style("font-size", frame.attribute_string("font-size"))
			.maybe_add_style("font-style", frame.attribute_string("font-style"))
			.maybe_add_style("font-weight", frame.attribute_string("font-weight"))
			.maybe_add_style("line-height", frame.attribute_string("line-height"))
			.maybe_add_style("letter-spacing", frame.attribute_string("letter-spacing"))
			.add_style("margin", "0")
			.maybe_add_style("text-decoration", frame.attribute_string("text-decoration"))
			.maybe_add_style("text-transform", frame.attribute_string("text-transform"))
			.maybe_add_style("padding", frame.attribute_string("inner-padding"))
			.add_style("mso-padding-alt", "0px")
			.maybe_add_style("border-radius", frame.attribute_string("border-radius"));

		Ok(table.render(
			Tag::tbody().render(Tag::tr().render(cell.render(link.render(content)))),
		))
	}
}

/// Inner width of the clickable area when the button declares a pixel
/// width: the declared width minus the inner paddings.
fn content_width(frame: &Frame<'_>) -> Option<Pixel> {
	match frame.attribute_size("width") {
		Some(Size::Pixel(width)) => {
			let spacing = frame.attribute_spacing("inner-padding");
			let paddings = spacing
				.map(|inner| inner.left().value() + inner.right().value())
				.unwrap_or(0.0);
			Some(Pixel::new(width.value() - paddings))
		}
		_ => None,
	}
}
