//! Component vocabulary
//!
//! The grammar is fixed to a closed set of components. Each component is a
//! variant of [`Component`] with an attached static [`ComponentSpec`]
//! describing its default attributes, permitted children, content model and
//! required attributes. The tree builder and renderer dispatch by matching
//! the variant against this table; there is no per-component type hierarchy.

/// How a component treats the bytes between its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
	/// Only element, comment or whitespace children.
	Elements,
	/// Arbitrary nodes, text kept verbatim (e.g. mj-text content).
	Mixed,
	/// No children at all; usually written self-closing.
	Void,
	/// Content captured byte-for-byte without tokenization.
	Raw,
}

/// Child grammar for a component with [`ContentModel::Elements`].
#[derive(Debug, Clone, Copy)]
pub enum ChildRule {
	/// Any known or unknown element.
	Any,
	/// Only the listed components (comments are always allowed).
	Only(&'static [Component]),
	/// mj-attributes: mj-all, mj-class, or any known tag as element rule.
	AttributeRules,
}

/// Static description of one component.
#[derive(Debug)]
pub struct ComponentSpec {
	pub name: &'static str,
	pub defaults: &'static [(&'static str, &'static str)],
	pub children: ChildRule,
	pub content: ContentModel,
	pub required: &'static [&'static str],
}

const FONT_STACK: &str = "Ubuntu, Helvetica, Arial, sans-serif";

/// The closed component set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
	Mjml,
	Head,
	Body,
	Attributes,
	All,
	Class,
	Breakpoint,
	Title,
	Preview,
	Style,
	Font,
	Include,
	Wrapper,
	Section,
	Group,
	Column,
	Text,
	Button,
	Image,
	Divider,
	Spacer,
	Navbar,
	NavbarLink,
	Social,
	SocialElement,
	Table,
	Raw,
}

impl Component {
	/// Looks a tag name up in the vocabulary.
	pub fn from_tag(name: &str) -> Option<Self> {
		Some(match name {
			"mjml" => Self::Mjml,
			"mj-head" => Self::Head,
			"mj-body" => Self::Body,
			"mj-attributes" => Self::Attributes,
			"mj-all" => Self::All,
			"mj-class" => Self::Class,
			"mj-breakpoint" => Self::Breakpoint,
			"mj-title" => Self::Title,
			"mj-preview" => Self::Preview,
			"mj-style" => Self::Style,
			"mj-font" => Self::Font,
			"mj-include" => Self::Include,
			"mj-wrapper" => Self::Wrapper,
			"mj-section" => Self::Section,
			"mj-group" => Self::Group,
			"mj-column" => Self::Column,
			"mj-text" => Self::Text,
			"mj-button" => Self::Button,
			"mj-image" => Self::Image,
			"mj-divider" => Self::Divider,
			"mj-spacer" => Self::Spacer,
			"mj-navbar" => Self::Navbar,
			"mj-navbar-link" => Self::NavbarLink,
			"mj-social" => Self::Social,
			"mj-social-element" => Self::SocialElement,
			"mj-table" => Self::Table,
			"mj-raw" => Self::Raw,
			_ => return None,
		})
	}

	pub fn spec(&self) -> &'static ComponentSpec {
		match self {
			Self::Mjml => &ComponentSpec {
				name: "mjml",
				defaults: &[],
				children: ChildRule::Only(&[Self::Head, Self::Body]),
				content: ContentModel::Elements,
				required: &[],
			},
			Self::Head => &ComponentSpec {
				name: "mj-head",
				defaults: &[],
				children: ChildRule::Only(&[
					Self::Attributes,
					Self::Breakpoint,
					Self::Title,
					Self::Preview,
					Self::Style,
					Self::Font,
					Self::Raw,
					Self::Include,
				]),
				content: ContentModel::Elements,
				required: &[],
			},
			Self::Body => &ComponentSpec {
				name: "mj-body",
				defaults: &[("width", "600px")],
				children: ChildRule::Any,
				content: ContentModel::Elements,
				required: &[],
			},
			Self::Attributes => &ComponentSpec {
				name: "mj-attributes",
				defaults: &[],
				children: ChildRule::AttributeRules,
				content: ContentModel::Elements,
				required: &[],
			},
			Self::All => &ComponentSpec {
				name: "mj-all",
				defaults: &[],
				children: ChildRule::Any,
				content: ContentModel::Void,
				required: &[],
			},
			Self::Class => &ComponentSpec {
				name: "mj-class",
				defaults: &[],
				children: ChildRule::Any,
				content: ContentModel::Void,
				required: &["name"],
			},
			Self::Breakpoint => &ComponentSpec {
				name: "mj-breakpoint",
				defaults: &[],
				children: ChildRule::Any,
				content: ContentModel::Void,
				required: &["width"],
			},
			Self::Title => &ComponentSpec {
				name: "mj-title",
				defaults: &[],
				children: ChildRule::Any,
				content: ContentModel::Raw,
				required: &[],
			},
			Self::Preview => &ComponentSpec {
				name: "mj-preview",
				defaults: &[],
				children: ChildRule::Any,
				content: ContentModel::Raw,
				required: &[],
			},
			Self::Style => &ComponentSpec {
				name: "mj-style",
				defaults: &[],
				children: ChildRule::Any,
				content: ContentModel::Raw,
				required: &[],
			},
			Self::Font => &ComponentSpec {
				name: "mj-font",
				defaults: &[],
				children: ChildRule::Any,
				content: ContentModel::Void,
				required: &["name", "href"],
			},
			Self::Include => &ComponentSpec {
				name: "mj-include",
				defaults: &[],
				children: ChildRule::Any,
				content: ContentModel::Void,
				required: &["path"],
			},
			Self::Wrapper => &ComponentSpec {
				name: "mj-wrapper",
				defaults: &[
					("background-position", "top center"),
					("background-repeat", "repeat"),
					("background-size", "auto"),
					("direction", "ltr"),
					("padding", "20px 0"),
					("text-align", "center"),
					("text-padding", "4px 4px 3px"),
				],
				children: ChildRule::Only(&[Self::Section, Self::Raw, Self::Include]),
				content: ContentModel::Elements,
				required: &[],
			},
			Self::Section => &ComponentSpec {
				name: "mj-section",
				defaults: &[
					("background-position", "top center"),
					("background-repeat", "repeat"),
					("background-size", "auto"),
					("direction", "ltr"),
					("padding", "20px 0"),
					("text-align", "center"),
					("text-padding", "4px 4px 3px"),
				],
				children: ChildRule::Only(&[
					Self::Column,
					Self::Group,
					Self::Raw,
					Self::Include,
				]),
				content: ContentModel::Elements,
				required: &[],
			},
			Self::Group => &ComponentSpec {
				name: "mj-group",
				defaults: &[("direction", "ltr")],
				children: ChildRule::Only(&[Self::Column, Self::Raw]),
				content: ContentModel::Elements,
				required: &[],
			},
			Self::Column => &ComponentSpec {
				name: "mj-column",
				defaults: &[("direction", "ltr"), ("vertical-align", "top")],
				children: ChildRule::Any,
				content: ContentModel::Elements,
				required: &[],
			},
			Self::Text => &ComponentSpec {
				name: "mj-text",
				defaults: &[
					("align", "left"),
					("color", "#000000"),
					("font-family", FONT_STACK),
					("font-size", "13px"),
					("line-height", "1"),
					("padding", "10px 25px"),
				],
				children: ChildRule::Any,
				content: ContentModel::Mixed,
				required: &[],
			},
			Self::Button => &ComponentSpec {
				name: "mj-button",
				defaults: &[
					("align", "center"),
					("background-color", "#414141"),
					("border", "none"),
					("border-radius", "3px"),
					("color", "#ffffff"),
					("font-family", FONT_STACK),
					("font-size", "13px"),
					("font-weight", "normal"),
					("inner-padding", "10px 25px"),
					("line-height", "120%"),
					("padding", "10px 25px"),
					("target", "_blank"),
					("text-decoration", "none"),
					("text-transform", "none"),
					("vertical-align", "middle"),
				],
				children: ChildRule::Any,
				content: ContentModel::Mixed,
				required: &[],
			},
			Self::Image => &ComponentSpec {
				name: "mj-image",
				defaults: &[
					("align", "center"),
					("border", "0"),
					("height", "auto"),
					("padding", "10px 25px"),
					("target", "_blank"),
					("font-size", "13px"),
				],
				children: ChildRule::Any,
				content: ContentModel::Void,
				required: &["src"],
			},
			Self::Divider => &ComponentSpec {
				name: "mj-divider",
				defaults: &[
					("align", "center"),
					("border-color", "#000000"),
					("border-style", "solid"),
					("border-width", "4px"),
					("padding", "10px 25px"),
					("width", "100%"),
				],
				children: ChildRule::Any,
				content: ContentModel::Void,
				required: &[],
			},
			Self::Spacer => &ComponentSpec {
				name: "mj-spacer",
				defaults: &[("height", "20px")],
				children: ChildRule::Any,
				content: ContentModel::Void,
				required: &[],
			},
			Self::Navbar => &ComponentSpec {
				name: "mj-navbar",
				defaults: &[
					("align", "center"),
					("ico-align", "center"),
					("ico-open", "&#9776;"),
					("ico-close", "&#8855;"),
					("ico-color", "#000000"),
					("ico-font-family", FONT_STACK),
					("ico-font-size", "30px"),
					("ico-text-transform", "uppercase"),
					("ico-padding", "10px"),
					("ico-text-decoration", "none"),
					("ico-line-height", "30px"),
				],
				children: ChildRule::Only(&[Self::NavbarLink]),
				content: ContentModel::Elements,
				required: &[],
			},
			Self::NavbarLink => &ComponentSpec {
				name: "mj-navbar-link",
				defaults: &[
					("color", "#000000"),
					("font-family", FONT_STACK),
					("font-size", "13px"),
					("font-weight", "normal"),
					("line-height", "22px"),
					("padding", "15px 10px"),
					("target", "_blank"),
					("text-decoration", "none"),
					("text-transform", "uppercase"),
				],
				children: ChildRule::Any,
				content: ContentModel::Mixed,
				required: &[],
			},
			Self::Social => &ComponentSpec {
				name: "mj-social",
				defaults: &[
					("align", "center"),
					("border-radius", "3px"),
					("color", "#333333"),
					("font-family", FONT_STACK),
					("font-size", "13px"),
					("icon-size", "20px"),
					("line-height", "22px"),
					("mode", "horizontal"),
					("padding", "10px 25px"),
					("text-decoration", "none"),
				],
				children: ChildRule::Only(&[Self::SocialElement]),
				content: ContentModel::Elements,
				required: &[],
			},
			Self::SocialElement => &ComponentSpec {
				name: "mj-social-element",
				defaults: &[
					("align", "left"),
					("border-radius", "3px"),
					("color", "#000"),
					("font-family", FONT_STACK),
					("font-size", "13px"),
					("line-height", "1"),
					("padding", "4px"),
					("target", "_blank"),
					("text-decoration", "none"),
					("text-padding", "4px 4px 4px 0"),
					("vertical-align", "middle"),
				],
				children: ChildRule::Any,
				content: ContentModel::Mixed,
				required: &[],
			},
			Self::Table => &ComponentSpec {
				name: "mj-table",
				defaults: &[
					("align", "left"),
					("border", "none"),
					("cellpadding", "0"),
					("cellspacing", "0"),
					("color", "#000000"),
					("font-family", FONT_STACK),
					("font-size", "13px"),
					("line-height", "22px"),
					("padding", "10px 25px"),
					("table-layout", "auto"),
					("width", "100%"),
				],
				children: ChildRule::Any,
				content: ContentModel::Mixed,
				required: &[],
			},
			Self::Raw => &ComponentSpec {
				name: "mj-raw",
				defaults: &[],
				children: ChildRule::Any,
				content: ContentModel::Raw,
				required: &[],
			},
		}
	}

	pub fn name(&self) -> &'static str {
		self.spec().name
	}

	/// Raw components are emitted byte-for-byte and do not take part in
	/// width distribution.
	pub fn is_raw(&self) -> bool {
		matches!(self, Self::Raw)
	}

	/// Whether this component may appear inside mj-body containers.
	pub fn is_body_element(&self) -> bool {
		matches!(
			self,
			Self::Wrapper
				| Self::Section
				| Self::Group
				| Self::Column
				| Self::Text
				| Self::Button
				| Self::Image
				| Self::Divider
				| Self::Spacer
				| Self::Navbar
				| Self::NavbarLink
				| Self::Social
				| Self::SocialElement
				| Self::Table
				| Self::Raw
				| Self::Include
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_tags_resolve() {
		assert_eq!(Component::from_tag("mjml"), Some(Component::Mjml));
		assert_eq!(Component::from_tag("mj-navbar-link"), Some(Component::NavbarLink));
		assert_eq!(Component::from_tag("mj-unknown"), None);
	}

	#[test]
	fn names_round_trip() {
		for component in [
			Component::Mjml,
			Component::Head,
			Component::Body,
			Component::Attributes,
			Component::Section,
			Component::Column,
			Component::Text,
			Component::Raw,
		] {
			assert_eq!(Component::from_tag(component.name()), Some(component));
		}
	}

	#[test]
	fn raw_classification() {
		assert!(Component::Raw.is_raw());
		assert!(!Component::Text.is_raw());
		assert_eq!(Component::Raw.spec().content, ContentModel::Raw);
		assert_eq!(Component::Style.spec().content, ContentModel::Raw);
	}
}
