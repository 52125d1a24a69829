//! Include resolution
//!
//! Walks the parsed tree, replaces every include directive with the parsed
//! content fetched through the configured [`IncludeLoader`], and recurses
//! into spliced fragments up to a bounded depth. Sibling order is
//! preserved; a failed include is a hard failure for the whole document.

mod loader;
mod local;
mod memory;

pub use loader::{IncludeLoader, IncludeLoaderError, NoopIncludeLoader};
pub use local::LocalIncludeLoader;
pub use memory::MemoryIncludeLoader;

use tracing::{debug, warn};

use crate::ast::{Document, Element, Node};
use crate::component::Component;
use crate::error::Error;
use crate::options::ParseOptions;
use crate::parser;

fn include_path(element: &Element) -> Result<&str, Error> {
	element.attribute("path").ok_or_else(|| Error::MissingRequiredAttribute {
		tag: String::from("mj-include"),
		attribute: String::from("path"),
		origin: crate::error::Origin::Parser,
	})
}

// Includes carry body fragments: a whole document spliced into the tree
// would nest a second root, and splicing must not smuggle in children the
// parent's grammar would have rejected inline.
fn check_fragment(parent: Option<Component>, nodes: &[Node], path: &str) -> Result<(), Error> {
	for node in nodes {
		let Node::Element(element) = node else {
			continue;
		};
		if element.is(Component::Mjml)
			|| element.is(Component::Head)
			|| element.is(Component::Body)
		{
			warn!(path, tag = element.tag.name(), "include is not a fragment");
			return Err(Error::InvalidStructure {
				parent: String::from("mj-include"),
				child: element.tag.name().to_string(),
			});
		}
		if let Some(parent) = parent {
			if !parser::child_allowed(parent.spec().children, element) {
				warn!(path, tag = element.tag.name(), "spliced child violates the parent grammar");
				return Err(Error::InvalidStructure {
					parent: parent.name().to_string(),
					child: element.tag.name().to_string(),
				});
			}
		}
	}
	Ok(())
}

fn translate(err: IncludeLoaderError, path: &str) -> Error {
	match err {
		IncludeLoaderError::Unsupported => Error::IncludeNotSupported {
			path: path.to_string(),
		},
		IncludeLoaderError::SyncUnsupported => Error::UnsupportedSyncLoader,
		IncludeLoaderError::NotFound { path, reason } => Error::IncludeNotFound { path, reason },
	}
}

/// Resolves all include directives in place, synchronously.
pub fn resolve(document: &mut Document, opts: &ParseOptions) -> Result<(), Error> {
	if let Some(head) = document.head.as_mut() {
		resolve_children(&mut head.children, Some(Component::Head), opts, 0)?;
	}
	resolve_children(&mut document.body.children, Some(Component::Body), opts, 0)
}

fn resolve_children(
	children: &mut Vec<Node>,
	parent: Option<Component>,
	opts: &ParseOptions,
	depth: usize,
) -> Result<(), Error> {
	let mut index = 0;
	while index < children.len() {
		let replacement = match &mut children[index] {
			Node::Element(element) if element.is(Component::Include) => {
				if opts.keep_raw_includes {
					None
				} else {
					let path = include_path(element)?;
					if depth >= opts.max_include_depth {
						return Err(Error::IncludeTooDeep {
							path: path.to_string(),
							limit: opts.max_include_depth,
						});
					}
					debug!(path, depth, "resolving include");
					let markup = opts
						.include_loader
						.load(path)
						.map_err(|err| translate(err, path))?;
					let mut nodes = parser::parse_fragment(&markup)?;
					check_fragment(parent, &nodes, path)?;
					resolve_children(&mut nodes, parent, opts, depth + 1)?;
					Some(nodes)
				}
			}
			Node::Element(element) => {
				let component = element.component();
				resolve_children(&mut element.children, component, opts, depth)?;
				None
			}
			_ => None,
		};
		match replacement {
			Some(nodes) => {
				let count = nodes.len();
				children.splice(index..=index, nodes);
				index += count;
			}
			None => index += 1,
		}
	}
	Ok(())
}

/// Resolves all include directives in place, suspending on loader I/O.
///
/// Sibling directives are resolved strictly in source order, so output is
/// deterministic regardless of loader latency.
pub async fn resolve_async(document: &mut Document, opts: &ParseOptions) -> Result<(), Error> {
	if let Some(head) = document.head.as_mut() {
		resolve_children_async(&mut head.children, Some(Component::Head), opts, 0).await?;
	}
	resolve_children_async(&mut document.body.children, Some(Component::Body), opts, 0).await
}

fn resolve_children_async<'a>(
	children: &'a mut Vec<Node>,
	parent: Option<Component>,
	opts: &'a ParseOptions,
	depth: usize,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), Error>> + Send + 'a>> {
	Box::pin(async move {
		let mut index = 0;
		while index < children.len() {
			let replacement = match &mut children[index] {
				Node::Element(element) if element.is(Component::Include) => {
					if opts.keep_raw_includes {
						None
					} else {
						let path = include_path(element)?;
						if depth >= opts.max_include_depth {
							return Err(Error::IncludeTooDeep {
								path: path.to_string(),
								limit: opts.max_include_depth,
							});
						}
						debug!(path, depth, "resolving include");
						let markup = opts
							.include_loader
							.load_async(path)
							.await
							.map_err(|err| translate(err, path))?;
						let mut nodes = parser::parse_fragment(&markup)?;
						check_fragment(parent, &nodes, path)?;
						resolve_children_async(&mut nodes, parent, opts, depth + 1).await?;
						Some(nodes)
					}
				}
				Node::Element(element) => {
					let component = element.component();
					resolve_children_async(&mut element.children, component, opts, depth).await?;
					None
				}
				_ => None,
			};
			match replacement {
				Some(nodes) => {
					let count = nodes.len();
					children.splice(index..=index, nodes);
					index += count;
				}
				None => index += 1,
			}
		}
		Ok(())
	})
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::options::ParseOptions;

	fn parse_with(markup: &str, opts: &ParseOptions) -> Result<Document, Error> {
		let mut document = crate::parser::parse(markup)?;
		resolve(&mut document, opts)?;
		Ok(document)
	}

	const DOC: &str = "<mjml><mj-body><mj-section><mj-column><mj-include path=\"./header.mjml\" /></mj-column></mj-section></mj-body></mjml>";

	#[test]
	fn noop_loader_fails_include() {
		let err = parse_with(DOC, &ParseOptions::default()).unwrap_err();
		assert!(matches!(err, Error::IncludeNotSupported { path } if path == "./header.mjml"));
	}

	#[test]
	fn memory_loader_splices_fragment() {
		let opts = ParseOptions {
			include_loader: Arc::new(MemoryIncludeLoader::from([(
				"./header.mjml",
				"<mj-text>Hello World</mj-text>",
			)])),
			..ParseOptions::default()
		};
		let document = parse_with(DOC, &opts).unwrap();
		let section = document.body.child_elements().next().unwrap();
		let column = section.child_elements().next().unwrap();
		let text = column.child_elements().next().unwrap();
		assert_eq!(text.tag.name(), "mj-text");
		assert_eq!(text.text_content(), "Hello World");
	}

	#[test]
	fn sibling_order_is_preserved() {
		let markup = "<mjml><mj-body><mj-section><mj-column><mj-text>a</mj-text><mj-include path=\"x\" /><mj-text>d</mj-text></mj-column></mj-section></mj-body></mjml>";
		let opts = ParseOptions {
			include_loader: Arc::new(MemoryIncludeLoader::from([(
				"x",
				"<mj-text>b</mj-text><mj-text>c</mj-text>",
			)])),
			..ParseOptions::default()
		};
		let document = parse_with(markup, &opts).unwrap();
		let section = document.body.child_elements().next().unwrap();
		let column = section.child_elements().next().unwrap();
		let contents: Vec<_> = column
			.child_elements()
			.map(|child| child.text_content())
			.collect();
		assert_eq!(contents, ["a", "b", "c", "d"]);
	}

	#[test]
	fn nested_includes_resolve_up_to_limit() {
		let opts = ParseOptions {
			include_loader: Arc::new(MemoryIncludeLoader::from([
				("a", "<mj-include path=\"b\" />"),
				("b", "<mj-text>deep</mj-text>"),
			])),
			..ParseOptions::default()
		};
		let markup = "<mjml><mj-body><mj-section><mj-column><mj-include path=\"a\" /></mj-column></mj-section></mj-body></mjml>";
		let document = parse_with(markup, &opts).unwrap();
		let section = document.body.child_elements().next().unwrap();
		let column = section.child_elements().next().unwrap();
		assert_eq!(column.child_elements().next().unwrap().text_content(), "deep");
	}

	#[test]
	fn cyclic_includes_hit_depth_limit() {
		let opts = ParseOptions {
			include_loader: Arc::new(MemoryIncludeLoader::from([(
				"loop",
				"<mj-include path=\"loop\" />",
			)])),
			..ParseOptions::default()
		};
		let markup = "<mjml><mj-body><mj-section><mj-column><mj-include path=\"loop\" /></mj-column></mj-section></mj-body></mjml>";
		let err = parse_with(markup, &opts).unwrap_err();
		assert!(matches!(err, Error::IncludeTooDeep { .. }));
	}

	#[test]
	fn spliced_children_respect_the_parent_grammar() {
		let opts = ParseOptions {
			include_loader: Arc::new(MemoryIncludeLoader::from([(
				"x",
				"<mj-text>stray</mj-text>",
			)])),
			..ParseOptions::default()
		};
		let markup = "<mjml><mj-body><mj-section><mj-include path=\"x\" /></mj-section></mj-body></mjml>";
		let err = parse_with(markup, &opts).unwrap_err();
		assert!(matches!(err, Error::InvalidStructure { parent, child }
			if parent == "mj-section" && child == "mj-text"));
	}

	#[test]
	fn full_documents_cannot_be_included() {
		let opts = ParseOptions {
			include_loader: Arc::new(MemoryIncludeLoader::from([(
				"./header.mjml",
				"<mjml><mj-body><mj-section><mj-column><mj-text>no</mj-text></mj-column></mj-section></mj-body></mjml>",
			)])),
			..ParseOptions::default()
		};
		let err = parse_with(DOC, &opts).unwrap_err();
		assert!(matches!(err, Error::InvalidStructure { parent, child }
			if parent == "mj-include" && child == "mjml"));
	}

	#[test]
	fn keep_raw_includes_leaves_directive() {
		let opts = ParseOptions {
			keep_raw_includes: true,
			..ParseOptions::default()
		};
		let document = parse_with(DOC, &opts).unwrap();
		let section = document.body.child_elements().next().unwrap();
		let column = section.child_elements().next().unwrap();
		assert!(column.child_elements().next().unwrap().is(Component::Include));
	}

	#[tokio::test]
	async fn async_resolution_matches_sync() {
		let opts = ParseOptions {
			include_loader: Arc::new(MemoryIncludeLoader::from([(
				"./header.mjml",
				"<mj-text>Hello World</mj-text>",
			)])),
			..ParseOptions::default()
		};
		let mut document = crate::parser::parse(DOC).unwrap();
		resolve_async(&mut document, &opts).await.unwrap();
		let mut sync_document = crate::parser::parse(DOC).unwrap();
		resolve(&mut sync_document, &opts).unwrap();
		assert_eq!(document, sync_document);
	}
}
