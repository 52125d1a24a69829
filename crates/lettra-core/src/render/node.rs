//! Passthrough rendering for unknown elements.

use super::Renderer;
use crate::ast::Element;
use crate::error::Error;
use crate::helper::tag::Tag;

/// Elements that break when written self-closing.
const FORCE_CLOSE: &[&str] = &["script"];

impl Renderer<'_> {
	pub(super) fn render_unknown(&mut self, element: &Element) -> Result<String, Error> {
		let mut tag = Tag::new(element.tag.name().to_owned());
		for (key, value) in element.attributes.iter() {
			tag = tag.add_attribute(key.clone(), value.clone());
		}
		if element.children.is_empty() && !FORCE_CLOSE.contains(&element.tag.name()) {
			return Ok(tag.closed());
		}
		let siblings = element.children.len();
		let mut inner = String::new();
		for child in element.children.iter() {
			inner.push_str(&self.render_node(child, None, siblings, 0)?);
		}
		Ok(tag.render(inner))
	}
}
