//! `mj-divider` rendering.

use super::{Frame, Renderer};
use crate::error::Error;
use crate::helper::condition::conditional_tag;
use crate::helper::size::{Pixel, Size};
use crate::helper::tag::Tag;

impl Renderer<'_> {
	pub(super) fn render_divider(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let border = format!(
			"{} {} {}",
			frame.attribute("border-style").unwrap_or("solid"),
			frame.attribute("border-width").unwrap_or("4px"),
			frame.attribute("border-color").unwrap_or("#000000"),
		);
		let divider = Tag::new("p")
			.add_style("border-top", border.clone())
			.add_style("font-size", "1px")
			.add_style("margin", "0px auto")
			.maybe_add_style("width", frame.attribute_string("width"))
			.render("");

		// Outlook does not render p borders; mirror the divider with a
		// fixed-width table.
		let outlook_width = outlook_width(frame);
		let table = Tag::new("table")
			.add_attribute("align", "center")
			.add_attribute("border", "0")
			.add_attribute("cellpadding", "0")
			.add_attribute("cellspacing", "0")
			.add_attribute("role", "presentation")
			.add_attribute("width", outlook_width.to_string())
			.add_style("border-top", border)
			.add_style("font-size", "1px")
			.add_style("margin", "0px auto")
			.add_style("width", outlook_width.to_string());
		let fallback = table.render("<tr><td style=\"height:0;line-height:0;\">&nbsp;</td></tr>");
		Ok(format!("{divider}{}", conditional_tag(fallback)))
	}
}

fn outlook_width(frame: &Frame<'_>) -> Pixel {
	let container = frame
		.container_width
		.as_ref()
		.map(|width| width.value())
		.unwrap_or(600.0);
	let available = container - frame.get_padding_horizontal().value();
	match frame.attribute_size("width") {
		Some(Size::Percent(percent)) => Pixel::new(available * percent.value() / 100.0),
		Some(Size::Pixel(pixel)) => pixel,
		_ => Pixel::new(available),
	}
}
