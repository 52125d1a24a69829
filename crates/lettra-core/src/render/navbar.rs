//! `mj-navbar` and `mj-navbar-link` rendering.

use super::{Frame, Renderer};
use crate::error::Error;
use crate::helper::condition::{
	mso_negation_conditional_tag, END_CONDITIONAL_TAG, START_CONDITIONAL_TAG,
};
use crate::helper::tag::Tag;

impl Renderer<'_> {
	pub(super) fn render_navbar(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let base_url = frame.attribute_string("base-url");
		let mut out = String::new();
		if frame.attribute("hamburger") == Some("hamburger") {
			out.push_str(&self.render_hamburger(frame));
		}

		let conditional_table = Tag::new("table")
			.add_attribute("role", "presentation")
			.add_attribute("border", "0")
			.add_attribute("cellpadding", "0")
			.add_attribute("cellspacing", "0")
			.maybe_add_attribute("align", frame.attribute_string("align"));
		let mut links = String::new();
		links.push_str(START_CONDITIONAL_TAG);
		links.push_str(&conditional_table.open());
		links.push_str("<tr>");
		links.push_str(END_CONDITIONAL_TAG);
		let siblings = frame.element.children.len();
		for child in frame.element.children.iter() {
			match child.as_element() {
				Some(element) => {
					let mut child_frame = self.frame(element);
					child_frame.container_width = frame.container_width.clone();
					child_frame.siblings = siblings;
					if let Some(base) = base_url.as_ref() {
						child_frame
							.extra
							.insert(String::from("navbar-base-url"), base.clone());
					}
					links.push_str(&self.render_element(&child_frame)?);
				}
				None => {
					links.push_str(&self.render_node(
						child,
						frame.container_width.clone(),
						siblings,
						0,
					)?);
				}
			}
		}
		links.push_str(START_CONDITIONAL_TAG);
		links.push_str("</tr>");
		links.push_str(&conditional_table.close());
		links.push_str(END_CONDITIONAL_TAG);

		out.push_str(&Tag::div().add_class("mj-inline-links").render(links));
		Ok(out)
	}

	/// Checkbox-driven menu toggle for mobile clients. The checkbox is
	/// invisible everywhere and stripped by Outlook; the stylesheet
	/// reveals the trigger below the breakpoint.
	fn render_hamburger(&mut self, frame: &Frame<'_>) -> String {
		let id = self.next_id();
		let max_width = self.breakpoint.lower();
		self.add_style(format!(
			"noinput.mj-menu-checkbox {{ display:block!important; max-height:none!important; visibility:visible!important; }} @media only screen and (max-width:{max_width}) {{ .mj-menu-checkbox[type=\"checkbox\"] ~ .mj-inline-links {{ display:none!important; }} .mj-menu-checkbox[type=\"checkbox\"]:checked ~ .mj-inline-links, .mj-menu-checkbox[type=\"checkbox\"] ~ .mj-menu-trigger {{ display:block!important; max-width:none!important; max-height:none!important; font-size:inherit!important; }} .mj-menu-checkbox[type=\"checkbox\"] ~ .mj-inline-links > a {{ display:block!important; }} .mj-menu-checkbox[type=\"checkbox\"]:checked ~ .mj-menu-trigger .mj-menu-icon-close {{ display:block!important; }} .mj-menu-checkbox[type=\"checkbox\"]:checked ~ .mj-menu-trigger .mj-menu-icon-open {{ display:none!important; }} }}"
		));

		let input = Tag::new("input")
			.add_attribute("id", id.clone())
			.add_attribute("type", "checkbox")
			.add_class("mj-menu-checkbox")
			.add_style("display", "none !important")
			.add_style("max-height", "0")
			.add_style("visibility", "hidden");
		let icon_open = Tag::new("span")
			.add_class("mj-menu-icon-open")
			.add_style("mso-hide", "all")
			.render(frame.attribute("ico-open").unwrap_or_default());
		let icon_close = Tag::new("span")
			.add_class("mj-menu-icon-close")
			.add_style("display", "none")
			.add_style("mso-hide", "all")
			.render(frame.attribute("ico-close").unwrap_or_default());
		let label = Tag::new("label")
			.maybe_add_attribute("align", frame.attribute_string("ico-align"))
			.add_attribute("for", id)
			.add_class("mj-menu-label")
			.add_style("display", "block")
			.add_style("cursor", "pointer")
			.add_style("mso-hide", "all")
			.add_style("-moz-user-select", "none")
			.add_style("user-select", "none")
			.maybe_add_style("color", frame.attribute_string("ico-color"))
			.maybe_add_style("font-size", frame.attribute_string("ico-font-size"))
			.maybe_add_style("font-family", frame.attribute_string("ico-font-family"))
			.maybe_add_style("text-transform", frame.attribute_string("ico-text-transform"))
			.maybe_add_style("text-decoration", frame.attribute_string("ico-text-decoration"))
			.maybe_add_style("line-height", frame.attribute_string("ico-line-height"))
			.maybe_add_style("padding", frame.attribute_string("ico-padding"));
		let trigger = Tag::div()
			.add_class("mj-menu-trigger")
			.add_style("display", "none")
			.add_style("max-height", "0px")
			.add_style("max-width", "0px")
			.add_style("font-size", "0px")
			.add_style("overflow", "hidden")
			.render(label.render(format!("{icon_open}{icon_close}")));
		format!("{}{trigger}", mso_negation_conditional_tag(input.closed()))
	}

	pub(super) fn render_navbar_link(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		if let Some(family) = frame.attribute_string("font-family") {
			self.add_used_font_family(&family);
		}
		let content = self.render_mixed_children(frame)?;
		let href = match (frame.attribute("navbar-base-url"), frame.attribute("href")) {
			(Some(base), Some(href)) => format!("{base}{href}"),
			(_, Some(href)) => href.to_owned(),
			_ => String::new(),
		};
		let link = Tag::new("a")
			.add_class("mj-link")
			.maybe_add_class(frame.attribute_string("css-class"))
			.add_attribute("href", href)
			.maybe_add_attribute("rel", frame.attribute_string("rel"))
			.maybe_add_attribute("name", frame.attribute_string("name"))
			.maybe_add_attribute("target", frame.attribute_string("target"))
			.add_style("display", "inline-block")
			.maybe_add_style("color", frame.attribute_string("color"))
			.maybe_add_style("font-family", frame.attribute_string("font-family"))
			.maybe_add_style("font-size", frame.attribute_string("font-size"))
			.maybe_add_style("font-style", frame.attribute_string("font-style"))
			.maybe_add_style("font-weight", frame.attribute_string("font-weight"))
			.maybe_add_style("letter-spacing", frame.attribute_string("letter-spacing"))
			.maybe_add_style("line-height", frame.attribute_string("line-height"))
			.maybe_add_style("text-decoration", frame.attribute_string("text-decoration"))
			.maybe_add_style("text-transform", frame.attribute_string("text-transform"))
			.maybe_add_style("padding", frame.attribute_string("padding"))
			.maybe_add_style("padding-bottom", frame.attribute_string("padding-bottom"))
			.maybe_add_style("padding-left", frame.attribute_string("padding-left"))
			.maybe_add_style("padding-right", frame.attribute_string("padding-right"))
			.maybe_add_style("padding-top", frame.attribute_string("padding-top"));

		let cell = Tag::td()
			.maybe_add_suffixed_class(frame.attribute_string("css-class"), "outlook")
			.maybe_add_style("padding", frame.attribute_string("padding"))
			.maybe_add_style("padding-bottom", frame.attribute_string("padding-bottom"))
			.maybe_add_style("padding-left", frame.attribute_string("padding-left"))
			.maybe_add_style("padding-right", frame.attribute_string("padding-right"))
			.maybe_add_style("padding-top", frame.attribute_string("padding-top"));
		Ok(format!(
			"{START_CONDITIONAL_TAG}{}{END_CONDITIONAL_TAG}{}{START_CONDITIONAL_TAG}{}{END_CONDITIONAL_TAG}",
			cell.open(),
			link.render(content),
			cell.close(),
		))
	}
}
