//! HTML rendering
//!
//! Walks the resolved component tree and emits the final email document.
//! The renderer accumulates per-render state (width classes for media
//! queries, used font families, component styles, the id counter) and
//! assembles the `<head>` last, after the body has been rendered into its
//! own buffer.

mod body;
mod button;
mod column;
mod divider;
mod head;
mod image;
mod navbar;
mod node;
mod section;
mod social;
mod spacer;
mod table;
mod text;

use std::borrow::Cow;

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use crate::ast::{AttributeMap, Document, Element, Node};
use crate::cascade::HeadRules;
use crate::component::Component;
use crate::error::{Error, Origin};
use crate::helper::size::{format_value, Pixel, Size};
use crate::helper::spacing::Spacing;
use crate::options::RenderOptions;

/// Renders a resolved document into an HTML email.
pub fn render(document: &Document, opts: &RenderOptions) -> Result<String, Error> {
	let mut renderer = Renderer::new(document, opts);
	let body = renderer.render_body(document)?;
	let head = renderer.render_head();
	let mut out = String::from("<!doctype html>");
	out.push_str("<html lang=\"");
	out.push_str(document.lang().unwrap_or("und"));
	out.push_str("\" dir=\"");
	out.push_str(document.dir().unwrap_or("auto"));
	out.push_str(
		"\" xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:v=\"urn:schemas-microsoft-com:vml\" xmlns:o=\"urn:schemas-microsoft-com:office:office\">",
	);
	out.push_str(&head);
	out.push_str(&body);
	out.push_str("</html>");
	Ok(out)
}

/// Per-render state.
pub(crate) struct Renderer<'o> {
	opts: &'o RenderOptions,
	rules: HeadRules,
	breakpoint: Pixel,
	fonts: IndexMap<String, Cow<'static, str>>,
	title: Option<String>,
	preview: Option<String>,
	head_styles: Vec<String>,
	used_font_families: IndexSet<String>,
	media_queries: IndexMap<String, Size>,
	styles: IndexSet<String>,
	id_counter: u32,
}

impl<'o> Renderer<'o> {
	fn new(document: &Document, opts: &'o RenderOptions) -> Self {
		let rules = HeadRules::from_head(document.head.as_ref());
		let mut breakpoint = opts.breakpoint.clone();
		let mut fonts = opts.fonts.clone();
		let mut title = None;
		let mut preview = None;
		let mut head_styles = Vec::new();
		if let Some(head) = document.head.as_ref() {
			for child in head.child_elements() {
				match child.component() {
					Some(Component::Breakpoint) => {
						match child.attribute("width").and_then(|value| Pixel::try_from(value).ok())
						{
							Some(width) => breakpoint = width,
							None => warn!("ignoring mj-breakpoint without a pixel width"),
						}
					}
					Some(Component::Title) => {
						title = Some(child.text_content());
					}
					Some(Component::Preview) => {
						preview = Some(child.text_content());
					}
					Some(Component::Style) => {
						head_styles.push(child.text_content());
					}
					Some(Component::Font) => {
						if let (Some(name), Some(href)) =
							(child.attribute("name"), child.attribute("href"))
						{
							fonts.insert(name.to_owned(), Cow::Owned(href.to_owned()));
						}
					}
					_ => {}
				}
			}
		}
		Self {
			opts,
			rules,
			breakpoint,
			fonts,
			title,
			preview,
			head_styles,
			used_font_families: IndexSet::new(),
			media_queries: IndexMap::new(),
			styles: IndexSet::new(),
			id_counter: 0,
		}
	}

	fn frame<'e>(&self, element: &'e Element) -> Frame<'e> {
		Frame::build(&self.rules, element)
	}

	/// Sequential identifier, zero padded so output stays byte-stable
	/// between renders of the same document.
	fn next_id(&mut self) -> String {
		let id = format!("{:08}", self.id_counter);
		self.id_counter += 1;
		id
	}

	fn add_used_font_family(&mut self, declaration: &str) {
		for family in declaration.split(',') {
			let family = family.trim();
			if !family.is_empty() {
				self.used_font_families.insert(family.to_owned());
			}
		}
	}

	fn add_media_query(&mut self, classname: String, size: Size) {
		self.media_queries.insert(classname, size);
	}

	fn add_style(&mut self, style: String) {
		self.styles.insert(style);
	}

	fn render_comment(&self, content: &str) -> String {
		if self.opts.disable_comments {
			String::new()
		} else {
			format!("<!--{content}-->")
		}
	}

	/// Renders one arbitrary node in a container context.
	fn render_node(
		&mut self,
		node: &Node,
		container_width: Option<Pixel>,
		siblings: usize,
		raw_siblings: usize,
	) -> Result<String, Error> {
		match node {
			Node::Text(content) => Ok(content.clone()),
			Node::Comment(content) => Ok(self.render_comment(content)),
			Node::Element(element) => match element.component() {
				Some(_) => {
					let mut frame = self.frame(element);
					frame.container_width = container_width;
					frame.siblings = siblings;
					frame.raw_siblings = raw_siblings;
					self.render_element(&frame)
				}
				None => self.render_unknown(element),
			},
		}
	}

	fn render_element(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		check_required(frame)?;
		match frame.element.component() {
			Some(Component::Wrapper) | Some(Component::Section) => self.render_section(frame),
			Some(Component::Group) => self.render_group(frame),
			Some(Component::Column) => self.render_column(frame),
			Some(Component::Text) => self.render_text(frame),
			Some(Component::Button) => self.render_button(frame),
			Some(Component::Image) => self.render_image(frame),
			Some(Component::Divider) => self.render_divider(frame),
			Some(Component::Spacer) => self.render_spacer(frame),
			Some(Component::Navbar) => self.render_navbar(frame),
			Some(Component::NavbarLink) => self.render_navbar_link(frame),
			Some(Component::Social) => self.render_social(frame),
			Some(Component::SocialElement) => self.render_social_element(frame),
			Some(Component::Table) => self.render_table(frame),
			Some(Component::Raw) => Ok(frame.element.text_content()),
			// an unresolved include directive kept by keep_raw_includes
			Some(Component::Include) => Ok(String::new()),
			_ => Ok(String::new()),
		}
	}
}

pub(super) fn missing_attribute(tag: &str, attribute: &str) -> Error {
	Error::MissingRequiredAttribute {
		tag: tag.to_string(),
		attribute: attribute.to_string(),
		origin: Origin::Renderer,
	}
}

/// Required attributes declared in the component table; a miss is a
/// renderer failure. Include paths are validated during resolution.
fn check_required(frame: &Frame<'_>) -> Result<(), Error> {
	let Some(component) = frame.element.component() else {
		return Ok(());
	};
	if component == Component::Include {
		return Ok(());
	}
	for attribute in component.spec().required {
		if !frame.attribute_exists(attribute) {
			return Err(missing_attribute(component.name(), attribute));
		}
	}
	Ok(())
}

/// One element together with its resolved attributes and layout context.
pub(crate) struct Frame<'e> {
	pub element: &'e Element,
	pub attributes: AttributeMap,
	/// Attributes injected by the parent component (e.g. `mobile-width` on
	/// group children, `navbar-base-url` on navbar links).
	pub extra: AttributeMap,
	pub container_width: Option<Pixel>,
	pub siblings: usize,
	pub raw_siblings: usize,
}

impl<'e> Frame<'e> {
	fn build(rules: &HeadRules, element: &'e Element) -> Self {
		let attributes = match element.component() {
			Some(component) => rules.resolve(element, component.spec()),
			None => element.attributes.clone(),
		};
		Self {
			element,
			attributes,
			extra: AttributeMap::new(),
			container_width: None,
			siblings: 1,
			raw_siblings: 0,
		}
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.get(name)
			.or_else(|| self.extra.get(name))
			.map(String::as_str)
	}

	pub fn attribute_string(&self, name: &str) -> Option<String> {
		self.attribute(name).map(ToOwned::to_owned)
	}

	pub fn attribute_exists(&self, name: &str) -> bool {
		self.attribute(name).is_some()
	}

	pub fn attribute_size(&self, name: &str) -> Option<Size> {
		self.attribute(name).and_then(|value| Size::try_from(value).ok())
	}

	pub fn attribute_pixel(&self, name: &str) -> Option<Pixel> {
		self.attribute(name).and_then(|value| Pixel::try_from(value).ok())
	}

	pub fn attribute_spacing(&self, name: &str) -> Option<Spacing> {
		self.attribute(name).and_then(|value| Spacing::try_from(value).ok())
	}

	fn spacing_component(
		&self,
		shorthand: &str,
		explicit: &str,
		pick: fn(&Spacing) -> &Pixel,
	) -> Option<Pixel> {
		self.attribute_pixel(explicit).or_else(|| {
			self.attribute_spacing(shorthand)
				.map(|spacing| pick(&spacing).clone())
		})
	}

	pub fn get_padding_left(&self) -> Option<Pixel> {
		self.spacing_component("padding", "padding-left", Spacing::left)
	}

	pub fn get_padding_right(&self) -> Option<Pixel> {
		self.spacing_component("padding", "padding-right", Spacing::right)
	}

	pub fn get_padding_horizontal(&self) -> Pixel {
		let left = self.get_padding_left().map(|p| p.value()).unwrap_or(0.0);
		let right = self.get_padding_right().map(|p| p.value()).unwrap_or(0.0);
		Pixel::new(left + right)
	}

	fn border_width(&self, explicit: &str, shorthand: &str) -> Option<Pixel> {
		self.attribute(explicit)
			.and_then(Pixel::from_border)
			.or_else(|| self.attribute(shorthand).and_then(Pixel::from_border))
	}

	pub fn get_border_horizontal(&self) -> Pixel {
		let left = self
			.border_width("border-left", "border")
			.map(|p| p.value())
			.unwrap_or(0.0);
		let right = self
			.border_width("border-right", "border")
			.map(|p| p.value())
			.unwrap_or(0.0);
		Pixel::new(left + right)
	}

	pub fn get_inner_border_horizontal(&self) -> Pixel {
		let left = self
			.border_width("inner-border-left", "inner-border")
			.map(|p| p.value())
			.unwrap_or(0.0);
		let right = self
			.border_width("inner-border-right", "inner-border")
			.map(|p| p.value())
			.unwrap_or(0.0);
		Pixel::new(left + right)
	}

	fn non_raw_siblings(&self) -> usize {
		self.siblings.saturating_sub(self.raw_siblings).max(1)
	}

	/// Pixel width available to this element's own children, after the
	/// container has been split between siblings and the element's
	/// paddings and borders have been subtracted.
	pub fn current_width(&self) -> Option<Pixel> {
		let parent = self.container_width.as_ref()?.value();
		let all_paddings = self.get_padding_horizontal().value()
			+ self.get_border_horizontal().value()
			+ self.get_inner_border_horizontal().value();
		let width = match self.attribute_size("width") {
			Some(Size::Percent(percent)) => parent * percent.value() / 100.0 - all_paddings,
			Some(Size::Pixel(pixel)) => pixel.value() - all_paddings,
			_ => parent / self.non_raw_siblings() as f32 - all_paddings,
		};
		Some(Pixel::new(width))
	}

	/// Declared width, defaulting to an even percent split between
	/// non-raw siblings. Drives the responsive class name.
	pub fn get_parsed_width(&self) -> Size {
		match self.attribute_size("width") {
			Some(size @ (Size::Pixel(_) | Size::Percent(_))) => size,
			_ => Size::percent(100.0 / self.non_raw_siblings() as f32),
		}
	}

	/// Class name for the media query block, derived from the declared
	/// width. Dots are not valid in class names and become dashes.
	pub fn get_column_class(&self) -> (String, Size) {
		let parsed = self.get_parsed_width();
		let classname = match &parsed {
			Size::Percent(percent) => {
				format!("mj-column-per-{}", format_value(percent.value()))
			}
			other => format!("mj-column-px-{}", format_value(other.value())),
		};
		(classname.replace('.', "-"), parsed)
	}
}
