//! HTML tag builder
//!
//! Small fluent builder the renderer uses to assemble output markup.
//! Styles keep their insertion order so repeated renders are
//! byte-identical.

use std::borrow::Cow;

use indexmap::IndexMap;

pub struct Tag {
	name: Cow<'static, str>,
	attributes: IndexMap<Cow<'static, str>, Cow<'static, str>>,
	classes: Vec<Cow<'static, str>>,
	styles: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Tag {
	pub fn new<N: Into<Cow<'static, str>>>(name: N) -> Self {
		Self {
			name: name.into(),
			attributes: IndexMap::new(),
			classes: Vec::new(),
			styles: Vec::new(),
		}
	}

	pub fn table_presentation() -> Self {
		Self::new("table")
			.add_attribute("border", "0")
			.add_attribute("cellpadding", "0")
			.add_attribute("cellspacing", "0")
			.add_attribute("role", "presentation")
	}

	pub fn tbody() -> Self {
		Self::new("tbody")
	}

	pub fn tr() -> Self {
		Self::new("tr")
	}

	pub fn td() -> Self {
		Self::new("td")
	}

	pub fn div() -> Self {
		Self::new("div")
	}

	pub fn add_attribute<K, V>(mut self, name: K, value: V) -> Self
	where
		K: Into<Cow<'static, str>>,
		V: Into<Cow<'static, str>>,
	{
		self.attributes.insert(name.into(), value.into());
		self
	}

	pub fn maybe_add_attribute<K, V>(self, name: K, value: Option<V>) -> Self
	where
		K: Into<Cow<'static, str>>,
		V: Into<Cow<'static, str>>,
	{
		if let Some(value) = value {
			self.add_attribute(name, value)
		} else {
			self
		}
	}

	pub fn add_class<C: Into<Cow<'static, str>>>(mut self, value: C) -> Self {
		self.classes.push(value.into());
		self
	}

	pub fn maybe_add_class<C: Into<Cow<'static, str>>>(self, value: Option<C>) -> Self {
		if let Some(value) = value {
			self.add_class(value)
		} else {
			self
		}
	}

	pub fn add_suffixed_class<T: AsRef<str>>(self, value: T, suffix: &str) -> Self {
		self.add_class(format!("{}-{suffix}", value.as_ref()))
	}

	pub fn maybe_add_suffixed_class<T: AsRef<str>>(self, value: Option<T>, suffix: &str) -> Self {
		if let Some(value) = value {
			self.add_suffixed_class(value, suffix)
		} else {
			self
		}
	}

	pub fn add_style<N, V>(mut self, name: N, value: V) -> Self
	where
		N: Into<Cow<'static, str>>,
		V: Into<Cow<'static, str>>,
	{
		self.styles.push((name.into(), value.into()));
		self
	}

	pub fn maybe_add_style<N, V>(self, name: N, value: Option<V>) -> Self
	where
		N: Into<Cow<'static, str>>,
		V: Into<Cow<'static, str>>,
	{
		if let Some(value) = value {
			self.add_style(name, value)
		} else {
			self
		}
	}

	fn opening(&self) -> String {
		let mut out = String::from("<");
		out.push_str(&self.name);
		for (key, value) in self.attributes.iter() {
			out.push(' ');
			out.push_str(key);
			out.push_str("=\"");
			out.push_str(value);
			out.push('"');
		}
		if !self.classes.is_empty() {
			out.push_str(" class=\"");
			for (index, classname) in self.classes.iter().enumerate() {
				if index > 0 {
					out.push(' ');
				}
				out.push_str(classname);
			}
			out.push('"');
		}
		if !self.styles.is_empty() {
			out.push_str(" style=\"");
			for (key, value) in self.styles.iter() {
				out.push_str(key);
				out.push(':');
				out.push_str(value);
				out.push(';');
			}
			out.push('"');
		}
		out
	}

	pub fn open(&self) -> String {
		self.opening() + ">"
	}

	pub fn close(&self) -> String {
		format!("</{}>", self.name)
	}

	pub fn closed(&self) -> String {
		self.opening() + " />"
	}

	pub fn render<T: AsRef<str>>(&self, content: T) -> String {
		self.open() + content.as_ref() + &self.close()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn renders_attributes_classes_and_styles() {
		let tag = Tag::div()
			.add_attribute("align", "center")
			.add_class("first")
			.add_class("second")
			.add_style("font-size", "0px")
			.add_style("line-height", "0");
		assert_eq!(
			tag.render("x"),
			"<div align=\"center\" class=\"first second\" style=\"font-size:0px;line-height:0;\">x</div>"
		);
	}

	#[test]
	fn closed_tag() {
		assert_eq!(Tag::new("img").add_attribute("src", "a.png").closed(), "<img src=\"a.png\" />");
	}

	#[test]
	fn presentation_table_attributes() {
		assert_eq!(
			Tag::table_presentation().open(),
			"<table border=\"0\" cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\">"
		);
	}

	#[test]
	fn styles_keep_insertion_order() {
		let tag = Tag::td().add_style("b", "2").add_style("a", "1");
		assert_eq!(tag.open(), "<td style=\"b:2;a:1;\">");
	}
}
