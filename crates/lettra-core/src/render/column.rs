//! `mj-column` and `mj-group` rendering.

use super::{Frame, Renderer};
use crate::error::Error;
use crate::helper::condition::{END_CONDITIONAL_TAG, START_CONDITIONAL_TAG};
use crate::helper::size::{Percent, Size};
use crate::helper::tag::Tag;

/// Width the column occupies once the layout stacks.
fn mobile_width(frame: &Frame<'_>) -> String {
	if !frame.attribute_exists("mobile-width") {
		return String::from("100%");
	}
	match frame.attribute_size("width") {
		Some(Size::Percent(percent)) => percent.to_string(),
		Some(Size::Pixel(_)) => frame
			.current_width()
			.map(|width| width.to_string())
			.unwrap_or_else(|| String::from("100%")),
		_ => {
			let siblings = frame.siblings.saturating_sub(frame.raw_siblings).max(1);
			Percent::new(100.0 / siblings as f32).to_string()
		}
	}
}

impl Renderer<'_> {
	pub(super) fn render_column(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let (classname, parsed) = frame.get_column_class();
		self.add_media_query(classname.clone(), parsed);

		let content = self.render_column_rows(frame)?;
		let has_gutter = frame.attribute_exists("padding")
			|| frame.attribute_exists("padding-top")
			|| frame.attribute_exists("padding-right")
			|| frame.attribute_exists("padding-bottom")
			|| frame.attribute_exists("padding-left");

		let inner = if has_gutter {
			let gutter_cell = Tag::td()
				.maybe_add_style("background-color", frame.attribute_string("background-color"))
				.maybe_add_style("border", frame.attribute_string("border"))
				.maybe_add_style("border-radius", frame.attribute_string("border-radius"))
				.add_style(
					"vertical-align",
					frame
						.attribute_string("vertical-align")
						.unwrap_or_else(|| String::from("top")),
				)
				.maybe_add_style("padding", frame.attribute_string("padding"))
				.maybe_add_style("padding-bottom", frame.attribute_string("padding-bottom"))
				.maybe_add_style("padding-left", frame.attribute_string("padding-left"))
				.maybe_add_style("padding-right", frame.attribute_string("padding-right"))
				.maybe_add_style("padding-top", frame.attribute_string("padding-top"));
			let inner_table = Tag::table_presentation().add_attribute("width", "100%");
			let outer_table = Tag::table_presentation().add_attribute("width", "100%");
			outer_table.render(
				Tag::tbody().render(Tag::tr().render(
					gutter_cell.render(inner_table.render(Tag::tbody().render(content))),
				)),
			)
		} else {
			let table = Tag::table_presentation()
				.add_attribute("width", "100%")
				.maybe_add_style("background-color", frame.attribute_string("background-color"))
				.maybe_add_style("border", frame.attribute_string("border"))
				.maybe_add_style("border-radius", frame.attribute_string("border-radius"))
				.add_style(
					"vertical-align",
					frame
						.attribute_string("vertical-align")
						.unwrap_or_else(|| String::from("top")),
				);
			table.render(Tag::tbody().render(content))
		};

		let div = Tag::div()
			.add_class(classname)
			.add_class("mj-outlook-group-fix")
			.maybe_add_class(frame.attribute_string("css-class"))
			.add_style("font-size", "0px")
			.add_style("text-align", "left")
			.maybe_add_style("direction", frame.attribute_string("direction"))
			.add_style("display", "inline-block")
			.add_style(
				"vertical-align",
				frame
					.attribute_string("vertical-align")
					.unwrap_or_else(|| String::from("top")),
			)
			.add_style("width", mobile_width(frame));
		Ok(div.render(inner))
	}

	/// One `<tr><td>` per non-raw child; raw children are emitted between
	/// the rows untouched.
	fn render_column_rows(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let width = frame.current_width();
		let siblings = frame.element.children.len();
		let raw_siblings = frame
			.element
			.children
			.iter()
			.filter(|child| child.is_raw())
			.count();
		let mut out = String::new();
		for child in frame.element.children.iter() {
			if child.is_raw() {
				out.push_str(&self.render_node(
					child,
					width.clone(),
					siblings,
					raw_siblings,
				)?);
			} else if let Some(element) = child.as_element() {
				let mut child_frame = self.frame(element);
				child_frame.container_width = width.clone();
				child_frame.siblings = siblings;
				child_frame.raw_siblings = raw_siblings;
				let cell = Tag::td()
					.maybe_add_attribute("align", child_frame.attribute_string("align"))
					.maybe_add_attribute(
						"vertical-align",
						child_frame.attribute_string("vertical-align"),
					)
					.maybe_add_class(child_frame.attribute_string("css-class"))
					.maybe_add_style(
						"background",
						child_frame.attribute_string("container-background-color"),
					)
					.add_style("font-size", "0px")
					.maybe_add_style("padding", child_frame.attribute_string("padding"))
					.maybe_add_style(
						"padding-bottom",
						child_frame.attribute_string("padding-bottom"),
					)
					.maybe_add_style(
						"padding-left",
						child_frame.attribute_string("padding-left"),
					)
					.maybe_add_style(
						"padding-right",
						child_frame.attribute_string("padding-right"),
					)
					.maybe_add_style("padding-top", child_frame.attribute_string("padding-top"))
					.add_style("word-break", "break-word");
				out.push_str("<tr>");
				out.push_str(&cell.render(self.render_element(&child_frame)?));
				out.push_str("</tr>");
			}
		}
		Ok(out)
	}

	pub(super) fn render_group(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let (classname, parsed) = frame.get_column_class();
		self.add_media_query(classname.clone(), parsed);
		let current_width = frame.current_width();
		let background_color = frame
			.attribute_string("background-color")
			.filter(|value| value != "none");

		let siblings = frame.element.children.len();
		let raw_siblings = frame
			.element
			.children
			.iter()
			.filter(|child| child.is_raw())
			.count();
		let mut content = String::new();
		content.push_str(START_CONDITIONAL_TAG);
		let conditional_table = Tag::table_presentation()
			.maybe_add_attribute("bgcolor", background_color.clone());
		content.push_str(&conditional_table.open());
		content.push_str("<tr>");
		for child in frame.element.children.iter() {
			if child.is_raw() {
				content.push_str(END_CONDITIONAL_TAG);
				content.push_str(&self.render_node(
					child,
					current_width.clone(),
					siblings,
					raw_siblings,
				)?);
				content.push_str(START_CONDITIONAL_TAG);
			} else if let Some(element) = child.as_element() {
				let mut child_frame = self.frame(element);
				child_frame.container_width = current_width.clone();
				child_frame.siblings = siblings;
				child_frame.raw_siblings = raw_siblings;
				// grouped columns keep their width when the layout stacks
				child_frame
					.extra
					.insert(String::from("mobile-width"), String::from("mobile-width"));
				let td = Tag::td()
					.maybe_add_attribute("align", child_frame.attribute_string("align"))
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
				content.push_str(&td.open());
				content.push_str(END_CONDITIONAL_TAG);
				content.push_str(&self.render_element(&child_frame)?);
				content.push_str(START_CONDITIONAL_TAG);
				content.push_str(&td.close());
			}
		}
		content.push_str("</tr>");
		content.push_str(&conditional_table.close());
		content.push_str(END_CONDITIONAL_TAG);

		let div = Tag::div()
			.add_class(classname)
			.add_class("mj-outlook-group-fix")
			.maybe_add_class(frame.attribute_string("css-class"))
			.add_style("font-size", "0")
			.add_style("line-height", "0")
			.add_style("text-align", "left")
			.add_style("display", "inline-block")
			.add_style("width", "100%")
			.maybe_add_style("direction", frame.attribute_string("direction"))
			.maybe_add_style("vertical-align", frame.attribute_string("vertical-align"))
			.maybe_add_style("background-color", background_color);
		Ok(div.render(content))
	}
}
