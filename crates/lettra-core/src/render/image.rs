//! `mj-image` rendering.

use super::{missing_attribute, Frame, Renderer};
use crate::error::Error;
use crate::helper::size::{format_value, Pixel, Size};
use crate::helper::tag::Tag;

impl Renderer<'_> {
	pub(super) fn render_image(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let src = frame
			.attribute_string("src")
			.ok_or_else(|| missing_attribute("mj-image", "src"))?;

		let fluid = frame.attribute("fluid-on-mobile") == Some("true");
		if fluid {
			let max_width = self.breakpoint.lower();
			self.add_style(format!(
				"@media only screen and (max-width:{max_width}) {{ table.mj-full-width-mobile {{ width: 100% !important; }} td.mj-full-width-mobile {{ width: auto !important; }} }}"
			));
		}

		let width = content_width(frame);
		let width_value = width.as_ref().map(|pixel| format_value(pixel.value()));
		let height = frame
			.attribute_string("height")
			.map(|value| match Pixel::try_from(value.as_str()) {
				Ok(pixel) => format_value(pixel.value()),
				Err(_) => value,
			});

		let img = Tag::new("img")
			.maybe_add_attribute("alt", frame.attribute_string("alt"))
			.maybe_add_attribute("height", height.clone())
			.add_attribute("src", src)
			.maybe_add_attribute("srcset", frame.attribute_string("srcset"))
			.maybe_add_attribute("sizes", frame.attribute_string("sizes"))
			.maybe_add_attribute("title", frame.attribute_string("title"))
			.maybe_add_attribute("usemap", frame.attribute_string("usemap"))
			.maybe_add_attribute("width", width_value.clone())
			.maybe_add_style("border", frame.attribute_string("border"))
			.maybe_add_style("border-bottom", frame.attribute_string("border-bottom"))
			.maybe_add_style("border-left", frame.attribute_string("border-left"))
			.maybe_add_style("border-right", frame.attribute_string("border-right"))
			.maybe_add_style("border-top", frame.attribute_string("border-top"))
			.maybe_add_style("border-radius", frame.attribute_string("border-radius"))
			.add_style("display", "block")
			.add_style("outline", "none")
			.add_style("text-decoration", "none")
			.maybe_add_style(
				"height",
				height.map(|value| {
					if value == "auto" {
						value
					} else {
						format!("{value}px")
					}
				}),
			)
			.maybe_add_style("max-height", frame.attribute_string("max-height"))
			.add_style("width", "100%")
			.maybe_add_style("font-size", frame.attribute_string("font-size"));

		let image = match frame.attribute_string("href") {
			Some(href) => Tag::new("a")
				.add_attribute("href", href)
				.maybe_add_attribute("name", frame.attribute_string("name"))
				.maybe_add_attribute("rel", frame.attribute_string("rel"))
				.maybe_add_attribute("target", frame.attribute_string("target"))
				.render(img.closed()),
			None => img.closed(),
		};

		let cell = Tag::td()
			.maybe_add_class(fluid.then(|| String::from("mj-full-width-mobile")))
			.maybe_add_style("width", width.map(|pixel| pixel.to_string()));
		let table = Tag::table_presentation()
			.maybe_add_class(fluid.then(|| String::from("mj-full-width-mobile")))
			.add_style("border-collapse", "collapse")
			.add_style("border-spacing", "0px");
		Ok(table.render(Tag::tbody().render(Tag::tr().render(cell.render(image)))))
	}
}

/// The rendered width: the declared pixel width capped at the box width
/// left by the column paddings.
fn content_width(frame: &Frame<'_>) -> Option<Pixel> {
	let box_width = frame.container_width.as_ref().map(|container| {
		Pixel::new(
			container.value()
				- frame.get_padding_horizontal().value()
				- frame.get_border_horizontal().value(),
		)
	});
	match (frame.attribute_size("width"), box_width) {
		(Some(Size::Pixel(width)), Some(outer)) => {
			Some(Pixel::new(width.value().min(outer.value())))
		}
		(Some(Size::Pixel(width)), None) => Some(Pixel::new(width.value())),
		(_, outer) => outer,
	}
}
