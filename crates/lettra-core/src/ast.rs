//! Component tree
//!
//! The immutable output of the tree builder. Attribute values stay raw
//! strings here; unit parsing belongs to the renderer.

use indexmap::IndexMap;

use crate::component::{Component, ContentModel};
use crate::tokenizer::Span;

/// Attribute mapping with unique keys and stable insertion order.
pub type AttributeMap = IndexMap<String, String>;

/// Tag of an element: a member of the closed vocabulary, or an unknown
/// name kept for forward-compatible passthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementTag {
	Known(Component),
	Unknown(String),
}

impl ElementTag {
	pub fn name(&self) -> &str {
		match self {
			Self::Known(component) => component.name(),
			Self::Unknown(name) => name.as_str(),
		}
	}

	pub fn component(&self) -> Option<Component> {
		match self {
			Self::Known(component) => Some(*component),
			Self::Unknown(_) => None,
		}
	}

	pub fn content_model(&self) -> ContentModel {
		match self {
			Self::Known(component) => component.spec().content,
			Self::Unknown(_) => ContentModel::Mixed,
		}
	}

	/// Raw elements and unknown passthrough nodes skip width distribution.
	pub fn is_raw(&self) -> bool {
		match self {
			Self::Known(component) => component.is_raw(),
			Self::Unknown(_) => true,
		}
	}
}

/// One unit of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
	Comment(String),
}

impl Node {
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}

	/// True for nodes that render outside the table layout (raw elements,
	/// unknown elements, text and comments).
	pub fn is_raw(&self) -> bool {
		match self {
			Self::Element(element) => element.tag.is_raw(),
			Self::Text(_) | Self::Comment(_) => true,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	pub tag: ElementTag,
	pub attributes: AttributeMap,
	pub children: Vec<Node>,
	pub span: Span,
}

impl Element {
	pub fn attribute(&self, key: &str) -> Option<&str> {
		self.attributes.get(key).map(String::as_str)
	}

	pub fn component(&self) -> Option<Component> {
		self.tag.component()
	}

	pub fn is(&self, component: Component) -> bool {
		self.component() == Some(component)
	}

	/// Concatenated text content, used for raw head elements.
	pub fn text_content(&self) -> String {
		self.children
			.iter()
			.filter_map(|child| match child {
				Node::Text(value) => Some(value.as_str()),
				_ => None,
			})
			.collect()
	}

	pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
		self.children.iter().filter_map(Node::as_element)
	}
}

/// Root wrapper: at most one head, exactly one body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	/// Attributes of the root element (`lang`, `dir`).
	pub attributes: AttributeMap,
	pub head: Option<Element>,
	pub body: Element,
}

impl Document {
	pub fn lang(&self) -> Option<&str> {
		self.attributes.get("lang").map(String::as_str)
	}

	pub fn dir(&self) -> Option<&str> {
		self.attributes.get("dir").map(String::as_str)
	}
}
