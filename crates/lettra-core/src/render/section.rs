//! `mj-section` and `mj-wrapper` rendering.
//!
//! Both share the same shell: a conditional Outlook table around a
//! max-width div holding the real layout table. They differ in how the
//! children are laid out: sections place columns side by side in one
//! conditional row, wrappers stack their sections as full-width rows.

use super::{Frame, Renderer};
use crate::component::Component;
use crate::error::Error;
use crate::helper::condition::{END_CONDITIONAL_TAG, START_CONDITIONAL_TAG};
use crate::helper::size::{format_value, Pixel};
use crate::helper::tag::Tag;

impl Renderer<'_> {
	pub(super) fn render_section(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let container_width = frame
			.container_width
			.clone()
			.unwrap_or_else(|| Pixel::new(600.0));
		let inner_width = Pixel::new(
			container_width.value()
				- frame.get_padding_horizontal().value()
				- frame.get_border_horizontal().value(),
		);
		let background_color = frame.attribute_string("background-color");
		let is_wrapper = frame.element.is(Component::Wrapper);

		let children = if is_wrapper {
			self.render_wrapper_children(frame, &inner_width)?
		} else {
			self.render_section_children(frame, &inner_width)?
		};

		let outlook_table = Tag::new("table")
			.add_attribute("align", "center")
			.add_attribute("border", "0")
			.add_attribute("cellpadding", "0")
			.add_attribute("cellspacing", "0")
			.add_attribute("role", "presentation")
			.add_attribute("width", format_value(container_width.value()))
			.maybe_add_suffixed_class(frame.attribute_string("css-class"), "outlook")
			.add_style("width", container_width.to_string());

		let div = Tag::div()
			.maybe_add_class(frame.attribute_string("css-class"))
			.maybe_add_style("background", background_color.clone())
			.maybe_add_style("background-color", background_color.clone())
			.add_style("margin", "0px auto")
			.maybe_add_style("border-radius", frame.attribute_string("border-radius"))
			.add_style("max-width", container_width.to_string());

		let table = Tag::new("table")
			.add_attribute("align", "center")
			.add_attribute("border", "0")
			.add_attribute("cellpadding", "0")
			.add_attribute("cellspacing", "0")
			.add_attribute("role", "presentation")
			.maybe_add_style("background", background_color.clone())
			.maybe_add_style("background-color", background_color)
			.add_style("width", "100%")
			.maybe_add_style("border-radius", frame.attribute_string("border-radius"));

		let cell = Tag::td()
			.maybe_add_style("border", frame.attribute_string("border"))
			.maybe_add_style("border-bottom", frame.attribute_string("border-bottom"))
			.maybe_add_style("border-left", frame.attribute_string("border-left"))
			.maybe_add_style("border-right", frame.attribute_string("border-right"))
			.maybe_add_style("border-top", frame.attribute_string("border-top"))
			.maybe_add_style("direction", frame.attribute_string("direction"))
			.add_style("font-size", "0px")
			.maybe_add_style("padding", frame.attribute_string("padding"))
			.maybe_add_style("padding-bottom", frame.attribute_string("padding-bottom"))
			.maybe_add_style("padding-left", frame.attribute_string("padding-left"))
			.maybe_add_style("padding-right", frame.attribute_string("padding-right"))
			.maybe_add_style("padding-top", frame.attribute_string("padding-top"))
			.maybe_add_style("text-align", frame.attribute_string("text-align"));

		let mut out = String::new();
		out.push_str(START_CONDITIONAL_TAG);
		out.push_str(&outlook_table.open());
		out.push_str("<tr><td style=\"line-height:0px;font-size:0px;mso-line-height-rule:exactly;\">");
		out.push_str(END_CONDITIONAL_TAG);
		out.push_str(&div.open());
		out.push_str(&table.open());
		out.push_str("<tbody><tr>");
		out.push_str(&cell.open());
		out.push_str(&children);
		out.push_str(&cell.close());
		out.push_str("</tr></tbody>");
		out.push_str(&table.close());
		out.push_str(&div.close());
		out.push_str(START_CONDITIONAL_TAG);
		out.push_str("</td></tr>");
		out.push_str(&outlook_table.close());
		out.push_str(END_CONDITIONAL_TAG);
		Ok(out)
	}

	/// Columns and groups share one conditional row; each child sits in
	/// an Outlook `<td>` sized to its computed width.
	fn render_section_children(
		&mut self,
		frame: &Frame<'_>,
		inner_width: &Pixel,
	) -> Result<String, Error> {
		let siblings = frame.element.children.len();
		let raw_siblings = frame
			.element
			.children
			.iter()
			.filter(|child| child.is_raw())
			.count();
		let mut out = String::new();
		out.push_str(START_CONDITIONAL_TAG);
		out.push_str("<table role=\"presentation\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\"><tr>");
		for child in frame.element.children.iter() {
			if child.is_raw() {
				out.push_str(END_CONDITIONAL_TAG);
				out.push_str(&self.render_node(
					child,
					Some(inner_width.clone()),
					siblings,
					raw_siblings,
				)?);
				out.push_str(START_CONDITIONAL_TAG);
			} else if let Some(element) = child.as_element() {
				let mut child_frame = self.frame(element);
				child_frame.container_width = Some(inner_width.clone());
				child_frame.siblings = siblings;
				child_frame.raw_siblings = raw_siblings;
				let td = Tag::td()
					.maybe_add_suffixed_class(element.attribute("css-class").map(ToOwned::to_owned), "outlook")
					.add_style(
						"vertical-align",
						child_frame
							.attribute_string("vertical-align")
							.unwrap_or_else(|| String::from("top")),
					)
					.maybe_add_style(
						"width",
						child_frame.current_width().map(|width| width.to_string()),
					);
				out.push_str(&td.open());
				out.push_str(END_CONDITIONAL_TAG);
				out.push_str(&self.render_element(&child_frame)?);
				out.push_str(START_CONDITIONAL_TAG);
				out.push_str(&td.close());
			}
		}
		out.push_str("</tr></table>");
		out.push_str(END_CONDITIONAL_TAG);
		Ok(out)
	}

	/// Wrapped sections stack as full-width conditional rows.
	fn render_wrapper_children(
		&mut self,
		frame: &Frame<'_>,
		inner_width: &Pixel,
	) -> Result<String, Error> {
		let siblings = frame.element.children.len();
		let raw_siblings = frame
			.element
			.children
			.iter()
			.filter(|child| child.is_raw())
			.count();
		let mut out = String::new();
		out.push_str(START_CONDITIONAL_TAG);
		out.push_str("<table role=\"presentation\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\">");
		for child in frame.element.children.iter() {
			if child.is_raw() {
				out.push_str(END_CONDITIONAL_TAG);
				out.push_str(&self.render_node(
					child,
					Some(inner_width.clone()),
					siblings,
					raw_siblings,
				)?);
				out.push_str(START_CONDITIONAL_TAG);
			} else {
				let td = Tag::td().add_attribute("width", inner_width.to_string());
				out.push_str("<tr>");
				out.push_str(&td.open());
				out.push_str(END_CONDITIONAL_TAG);
				out.push_str(&self.render_node(
					child,
					Some(inner_width.clone()),
					siblings,
					raw_siblings,
				)?);
				out.push_str(START_CONDITIONAL_TAG);
				out.push_str(&td.close());
				out.push_str("</tr>");
			}
		}
		out.push_str("</table>");
		out.push_str(END_CONDITIONAL_TAG);
		Ok(out)
	}
}
