//! Attribute cascade
//!
//! `mj-attributes` declarations in the document head are collected into
//! [`HeadRules`] and merged with component defaults and per-node
//! attributes. Precedence, lowest to highest:
//!
//! 1. component defaults
//! 2. `mj-all` declarations
//! 3. `mj-class` declarations referenced by the node, in declaration order
//! 4. per-tag element declarations
//! 5. attributes written on the node itself

use indexmap::IndexMap;

use crate::ast::{AttributeMap, Element};
use crate::component::{Component, ComponentSpec};

#[derive(Debug, Default)]
pub struct HeadRules {
	all: AttributeMap,
	classes: Vec<(String, AttributeMap)>,
	elements: IndexMap<String, AttributeMap>,
}

impl HeadRules {
	/// Collects every `mj-attributes` block found in the head. Later
	/// declarations override earlier ones with the same key.
	pub fn from_head(head: Option<&Element>) -> Self {
		let mut rules = Self::default();
		let Some(head) = head else {
			return rules;
		};
		for attributes in head
			.child_elements()
			.filter(|child| child.is(Component::Attributes))
		{
			for child in attributes.child_elements() {
				match child.component() {
					Some(Component::All) => {
						merge(&mut rules.all, &child.attributes);
					}
					Some(Component::Class) => {
						if let Some(name) = child.attribute("name") {
							let mut decl = child.attributes.clone();
							decl.shift_remove("name");
							rules.classes.push((name.to_owned(), decl));
						}
					}
					_ => {
						let entry = rules
							.elements
							.entry(child.tag.name().to_owned())
							.or_default();
						merge(entry, &child.attributes);
					}
				}
			}
		}
		rules
	}

	/// Resolves the effective attributes for one node.
	pub fn resolve(&self, element: &Element, spec: &ComponentSpec) -> AttributeMap {
		let mut resolved = AttributeMap::new();
		for (key, value) in spec.defaults.iter() {
			resolved.insert((*key).to_owned(), (*value).to_owned());
		}
		merge(&mut resolved, &self.all);
		if let Some(requested) = element.attribute("mj-class") {
			for (name, decl) in self.classes.iter() {
				if requested.split_whitespace().any(|item| item == name) {
					merge(&mut resolved, decl);
				}
			}
		}
		if let Some(decl) = self.elements.get(element.tag.name()) {
			merge(&mut resolved, decl);
		}
		merge(&mut resolved, &element.attributes);
		resolved.shift_remove("mj-class");
		resolved
	}
}

fn merge(target: &mut AttributeMap, source: &AttributeMap) {
	for (key, value) in source.iter() {
		target.insert(key.clone(), value.clone());
	}
}
