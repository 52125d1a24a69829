//! Markup tokenizer
//!
//! Converts raw markup text into a flat sequence of structural events. The
//! tokenizer is restartable only from scratch and owns no state beyond its
//! position in the input. Raw-content regions (style blocks, passthrough
//! markup) are captured through [`Tokenizer::raw_text_until`] so none of
//! their content is mistaken for further tags.

use crate::error::Error;

/// Byte range into the source markup, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
	pub start: usize,
	pub end: usize,
}

impl Span {
	pub fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}
}

/// One structural event of the markup stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
	/// `<name`, attributes follow until [`Token::ElementOpenEnd`] or
	/// [`Token::ElementSelfClose`].
	ElementStart { name: &'a str, span: Span },
	/// `key="value"` (or a bare key, in which case `value` is empty).
	Attribute {
		name: &'a str,
		value: &'a str,
		span: Span,
	},
	/// `>` terminating an opening tag.
	ElementOpenEnd,
	/// `/>` terminating a childless element.
	ElementSelfClose,
	/// `</name>`
	ElementEnd { name: &'a str, span: Span },
	/// Character data between tags, verbatim.
	Text { content: &'a str, span: Span },
	/// `<!-- … -->`, content without the delimiters.
	Comment { content: &'a str, span: Span },
}

fn is_name_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':' || c == '.'
}

/// Streaming tokenizer over a markup string.
pub struct Tokenizer<'a> {
	input: &'a str,
	position: usize,
	// set between ElementStart and ElementOpenEnd/ElementSelfClose
	in_tag: bool,
}

impl<'a> Tokenizer<'a> {
	pub fn new(input: &'a str) -> Self {
		Self {
			input,
			position: 0,
			in_tag: false,
		}
	}

	/// Current byte offset into the input.
	pub fn position(&self) -> usize {
		self.position
	}

	fn rest(&self) -> &'a str {
		&self.input[self.position..]
	}

	fn malformed(&self, message: impl Into<String>) -> Error {
		Error::MalformedMarkup {
			position: self.position,
			message: message.into(),
		}
	}

	fn skip_whitespace(&mut self) {
		let rest = self.rest();
		let trimmed = rest.trim_start();
		self.position += rest.len() - trimmed.len();
	}

	fn read_name(&mut self) -> Result<&'a str, Error> {
		let rest = self.rest();
		let end = rest.find(|c| !is_name_char(c)).unwrap_or(rest.len());
		if end == 0 {
			return Err(self.malformed("expected a name"));
		}
		self.position += end;
		Ok(&rest[..end])
	}

	/// Returns the next token, or `None` at end of input.
	///
	/// # Errors
	///
	/// Fails with [`Error::MalformedMarkup`] on unterminated tags,
	/// attributes or comments.
	pub fn next(&mut self) -> Result<Option<Token<'a>>, Error> {
		if self.in_tag {
			return self.next_in_tag().map(Some);
		}
		if self.rest().is_empty() {
			return Ok(None);
		}
		let start = self.position;
		if let Some(rest) = self.rest().strip_prefix("<!--") {
			let Some(end) = rest.find("-->") else {
				return Err(self.malformed("unterminated comment"));
			};
			self.position += 4 + end + 3;
			return Ok(Some(Token::Comment {
				content: &rest[..end],
				span: Span::new(start, self.position),
			}));
		}
		if self.rest().starts_with("</") {
			self.position += 2;
			let name = self.read_name()?;
			self.skip_whitespace();
			if !self.rest().starts_with('>') {
				return Err(self.malformed("unterminated closing tag"));
			}
			self.position += 1;
			return Ok(Some(Token::ElementEnd {
				name,
				span: Span::new(start, self.position),
			}));
		}
		if self.rest().starts_with('<') {
			self.position += 1;
			let name = self.read_name()?;
			self.in_tag = true;
			return Ok(Some(Token::ElementStart {
				name,
				span: Span::new(start, self.position),
			}));
		}
		// character data up to the next tag
		let end = self.rest().find('<').unwrap_or_else(|| self.rest().len());
		let content = &self.rest()[..end];
		self.position += end;
		Ok(Some(Token::Text {
			content,
			span: Span::new(start, self.position),
		}))
	}

	fn next_in_tag(&mut self) -> Result<Token<'a>, Error> {
		self.skip_whitespace();
		if self.rest().starts_with("/>") {
			self.position += 2;
			self.in_tag = false;
			return Ok(Token::ElementSelfClose);
		}
		if self.rest().starts_with('>') {
			self.position += 1;
			self.in_tag = false;
			return Ok(Token::ElementOpenEnd);
		}
		if self.rest().is_empty() {
			return Err(self.malformed("unterminated tag"));
		}
		let start = self.position;
		let name = self.read_name()?;
		self.skip_whitespace();
		if !self.rest().starts_with('=') {
			// bare attribute, e.g. full-width
			return Ok(Token::Attribute {
				name,
				value: "",
				span: Span::new(start, self.position),
			});
		}
		self.position += 1;
		self.skip_whitespace();
		let quote = match self.rest().chars().next() {
			Some(c @ ('"' | '\'')) => c,
			_ => return Err(self.malformed("expected a quoted attribute value")),
		};
		self.position += 1;
		let rest = self.rest();
		let Some(end) = rest.find(quote) else {
			return Err(self.malformed("unterminated attribute value"));
		};
		let value = &rest[..end];
		self.position += end + 1;
		Ok(Token::Attribute {
			name,
			value,
			span: Span::new(start, self.position),
		})
	}

	/// Captures everything up to the closing tag of `name`, consuming that
	/// closing tag. Nested elements with the same name are balanced so a
	/// raw block may itself contain markup for the same component.
	pub fn raw_text_until(&mut self, name: &str) -> Result<&'a str, Error> {
		let start = self.position;
		let mut depth = 0usize;
		let mut cursor = self.position;
		loop {
			let Some(offset) = self.input[cursor..].find('<') else {
				self.position = self.input.len();
				return Err(self.malformed(format!("unterminated <{name}> block")));
			};
			let at = cursor + offset;
			let rest = &self.input[at..];
			if let Some(tail) = rest.strip_prefix("</") {
				if tail.starts_with(name) {
					let after_name = &tail[name.len()..];
					let whitespace = after_name.len() - after_name.trim_start().len();
					if after_name.trim_start().starts_with('>') {
						if depth == 0 {
							// consume "</", name, whitespace and ">"
							self.position = at + 2 + name.len() + whitespace + 1;
							return Ok(&self.input[start..at]);
						}
						depth -= 1;
					}
				}
			} else if rest.len() > 1
				&& rest[1..].starts_with(name)
				&& rest[1 + name.len()..]
					.chars()
					.next()
					.map(|c| !is_name_char(c))
					.unwrap_or(false)
			{
				depth += 1;
			}
			cursor = at + 1;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn collect(input: &str) -> Vec<Token<'_>> {
		let mut tokenizer = Tokenizer::new(input);
		let mut out = Vec::new();
		while let Some(token) = tokenizer.next().unwrap() {
			out.push(token);
		}
		out
	}

	#[test]
	fn tokenizes_simple_element() {
		let tokens = collect("<mj-text align=\"left\">Hello</mj-text>");
		assert!(matches!(
			tokens[0],
			Token::ElementStart { name: "mj-text", .. }
		));
		assert!(matches!(
			tokens[1],
			Token::Attribute {
				name: "align",
				value: "left",
				..
			}
		));
		assert!(matches!(tokens[2], Token::ElementOpenEnd));
		assert!(matches!(
			tokens[3],
			Token::Text {
				content: "Hello",
				..
			}
		));
		assert!(matches!(tokens[4], Token::ElementEnd { name: "mj-text", .. }));
	}

	#[test]
	fn tokenizes_self_closing_and_bare_attribute() {
		let tokens = collect("<mj-section full-width />");
		assert!(matches!(
			tokens[1],
			Token::Attribute {
				name: "full-width",
				value: "",
				..
			}
		));
		assert!(matches!(tokens[2], Token::ElementSelfClose));
	}

	#[test]
	fn tokenizes_comment() {
		let tokens = collect("<!-- Hello -->");
		assert!(matches!(
			tokens[0],
			Token::Comment {
				content: " Hello ",
				..
			}
		));
	}

	#[test]
	fn single_quoted_attribute() {
		let tokens = collect("<mj-image src='cat.png'/>");
		assert!(matches!(
			tokens[1],
			Token::Attribute {
				name: "src",
				value: "cat.png",
				..
			}
		));
	}

	#[test]
	fn unterminated_tag_is_malformed() {
		let mut tokenizer = Tokenizer::new("<mjml><mj-body>");
		let mut last: Result<Option<Token<'_>>, Error> = Ok(None);
		loop {
			match tokenizer.next() {
				Ok(None) => break,
				Ok(Some(_)) => continue,
				Err(err) => {
					last = Err(err);
					break;
				}
			}
		}
		// the stream itself terminates cleanly, truncation shows up in the
		// tree builder; an unterminated attribute fails here instead
		assert!(last.is_ok());
		let mut tokenizer = Tokenizer::new("<mj-text align=\"left");
		tokenizer.next().unwrap();
		assert!(matches!(
			tokenizer.next(),
			Err(Error::MalformedMarkup { .. })
		));
	}

	#[test]
	fn unterminated_comment_is_malformed() {
		let mut tokenizer = Tokenizer::new("<!-- Hello");
		assert!(matches!(
			tokenizer.next(),
			Err(Error::MalformedMarkup { .. })
		));
	}

	#[test]
	fn raw_block_ignores_inner_tags() {
		let mut tokenizer = Tokenizer::new("<mj-raw><tr><td>1</td></tr></mj-raw>");
		tokenizer.next().unwrap();
		tokenizer.next().unwrap();
		let raw = tokenizer.raw_text_until("mj-raw").unwrap();
		assert_eq!(raw, "<tr><td>1</td></tr>");
		assert!(tokenizer.next().unwrap().is_none());
	}

	#[test]
	fn raw_block_balances_nested_same_name() {
		let mut tokenizer = Tokenizer::new("<a><mj-raw>x</mj-raw>y</a>");
		// skip <a> open
		tokenizer.next().unwrap();
		tokenizer.next().unwrap();
		let raw = tokenizer.raw_text_until("a").unwrap();
		assert_eq!(raw, "<mj-raw>x</mj-raw>y");
	}
}
