//! Tree builder
//!
//! Consumes the token stream, checks each completed subtree against its
//! component's child grammar and produces the immutable [`Document`].
//! Unknown tags become opaque passthrough nodes instead of being rejected.
//! Include directives are left in place here; resolution is a separate
//! pass (see [`crate::includes`]).

use tracing::trace;

use crate::ast::{AttributeMap, Document, Element, ElementTag, Node};
use crate::component::{ChildRule, Component, ContentModel};
use crate::error::{Error, Origin};
use crate::tokenizer::{Span, Token, Tokenizer};

/// Parses a complete document.
///
/// # Errors
///
/// * [`Error::MalformedMarkup`] when tokenization fails or a tag never
///   closes
/// * [`Error::InvalidStructure`] when a child violates its parent grammar
/// * [`Error::DuplicateRoot`] when more than one top-level element exists
/// * [`Error::MissingBody`] when the root carries no mj-body
pub fn parse(markup: &str) -> Result<Document, Error> {
	let mut tokenizer = Tokenizer::new(markup);
	let mut root: Option<Element> = None;
	while let Some(token) = tokenizer.next()? {
		match token {
			Token::Text { content, .. } if content.trim().is_empty() => {}
			Token::Comment { .. } => {}
			Token::ElementStart { name, span } => {
				if root.is_some() {
					return Err(Error::DuplicateRoot);
				}
				let element = parse_element(&mut tokenizer, name, span)?;
				if element.tag.name() != "mjml" {
					return Err(Error::InvalidStructure {
						parent: String::from("document"),
						child: element.tag.name().to_string(),
					});
				}
				root = Some(element);
			}
			_ => {
				return Err(Error::MalformedMarkup {
					position: tokenizer.position(),
					message: String::from("unexpected content outside the root element"),
				});
			}
		}
	}
	let root = root.ok_or(Error::MissingBody)?;
	into_document(root)
}

/// Parses a fragment: a sequence of sibling nodes, as fetched by an
/// include directive.
pub fn parse_fragment(markup: &str) -> Result<Vec<Node>, Error> {
	let mut tokenizer = Tokenizer::new(markup);
	let mut nodes = Vec::new();
	while let Some(token) = tokenizer.next()? {
		match token {
			Token::Text { content, .. } => {
				if !content.trim().is_empty() {
					nodes.push(Node::Text(content.to_string()));
				}
			}
			Token::Comment { content, .. } => {
				nodes.push(Node::Comment(content.to_string()));
			}
			Token::ElementStart { name, span } => {
				nodes.push(Node::Element(parse_element(&mut tokenizer, name, span)?));
			}
			_ => {
				return Err(Error::MalformedMarkup {
					position: tokenizer.position(),
					message: String::from("unexpected token in fragment"),
				});
			}
		}
	}
	Ok(nodes)
}

fn into_document(root: Element) -> Result<Document, Error> {
	let mut head = None;
	let mut body = None;
	for child in root.children {
		let Node::Element(element) = child else {
			continue;
		};
		match element.component() {
			Some(Component::Head) if head.is_none() => head = Some(element),
			Some(Component::Body) if body.is_none() => body = Some(element),
			Some(Component::Head) | Some(Component::Body) => {
				return Err(Error::InvalidStructure {
					parent: String::from("mjml"),
					child: element.tag.name().to_string(),
				});
			}
			_ => unreachable!("grammar check rejects other mjml children"),
		}
	}
	let body = body.ok_or(Error::MissingBody)?;
	Ok(Document {
		attributes: root.attributes,
		head,
		body,
	})
}

fn parse_element(
	tokenizer: &mut Tokenizer<'_>,
	name: &str,
	span: Span,
) -> Result<Element, Error> {
	let tag = match Component::from_tag(name) {
		Some(component) => ElementTag::Known(component),
		None => ElementTag::Unknown(name.to_string()),
	};
	trace!(tag = name, "open element");
	let mut attributes = AttributeMap::new();
	loop {
		match tokenizer.next()? {
			Some(Token::Attribute { name, value, .. }) => {
				attributes.insert(name.to_string(), value.to_string());
			}
			Some(Token::ElementSelfClose) => {
				let element = Element {
					tag,
					attributes,
					children: Vec::new(),
					span: Span::new(span.start, tokenizer.position()),
				};
				check_children(&element)?;
				return Ok(element);
			}
			Some(Token::ElementOpenEnd) => break,
			_ => {
				return Err(Error::MalformedMarkup {
					position: tokenizer.position(),
					message: format!("unterminated <{name}> tag"),
				});
			}
		}
	}
	let children = match tag.content_model() {
		ContentModel::Raw => {
			let content = tokenizer.raw_text_until(name)?;
			if content.is_empty() {
				Vec::new()
			} else {
				vec![Node::Text(content.to_string())]
			}
		}
		model => parse_children(tokenizer, name, model)?,
	};
	let element = Element {
		tag,
		attributes,
		children,
		span: Span::new(span.start, tokenizer.position()),
	};
	check_children(&element)?;
	Ok(element)
}

fn parse_children(
	tokenizer: &mut Tokenizer<'_>,
	parent: &str,
	model: ContentModel,
) -> Result<Vec<Node>, Error> {
	let mut children = Vec::new();
	loop {
		let Some(token) = tokenizer.next()? else {
			return Err(Error::MalformedMarkup {
				position: tokenizer.position(),
				message: format!("<{parent}> is never closed"),
			});
		};
		match token {
			Token::ElementEnd { name, .. } => {
				if name != parent {
					return Err(Error::MalformedMarkup {
						position: tokenizer.position(),
						message: format!("expected </{parent}>, found </{name}>"),
					});
				}
				return Ok(children);
			}
			Token::ElementStart { name, span } => {
				children.push(Node::Element(parse_element(tokenizer, name, span)?));
			}
			Token::Text { content, .. } => match model {
				ContentModel::Mixed => children.push(Node::Text(content.to_string())),
				_ => {
					if !content.trim().is_empty() {
						return Err(Error::InvalidStructure {
							parent: parent.to_string(),
							child: String::from("#text"),
						});
					}
				}
			},
			Token::Comment { content, .. } => {
				children.push(Node::Comment(content.to_string()));
			}
			Token::ElementOpenEnd | Token::ElementSelfClose | Token::Attribute { .. } => {
				unreachable!("attributes are consumed with the opening tag")
			}
		}
	}
}

/// Whether `child` may sit under a parent with the given child grammar.
/// Shared with the include resolver, which re-validates spliced fragments.
pub(crate) fn child_allowed(rule: ChildRule, child: &Element) -> bool {
	match rule {
		ChildRule::Any => true,
		ChildRule::Only(tags) => child
			.component()
			.map(|c| tags.contains(&c))
			.unwrap_or(false),
		ChildRule::AttributeRules => match child.component() {
			Some(Component::All) | Some(Component::Class) => true,
			Some(other) => other.is_body_element(),
			None => false,
		},
	}
}

fn check_children(element: &Element) -> Result<(), Error> {
	let Some(component) = element.component() else {
		return Ok(());
	};
	let spec = component.spec();
	// body-level requirements (mj-image src) surface at render time; head
	// and structural requirements fail the parse
	if !component.is_body_element() {
		for attribute in spec.required {
			if !element.attributes.contains_key(*attribute) {
				return Err(Error::MissingRequiredAttribute {
					tag: spec.name.to_string(),
					attribute: (*attribute).to_string(),
					origin: Origin::Parser,
				});
			}
		}
	}
	if spec.content == ContentModel::Void && !element.children.is_empty() {
		return Err(Error::InvalidStructure {
			parent: spec.name.to_string(),
			child: String::from("#content"),
		});
	}
	for child in element.child_elements() {
		if !child_allowed(spec.children, child) {
			return Err(Error::InvalidStructure {
				parent: spec.name.to_string(),
				child: child.tag.name().to_string(),
			});
		}
	}
	Ok(())
}
