//! Parsing and rendering options.

use std::borrow::Cow;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::helper::size::Pixel;
use crate::includes::{IncludeLoader, NoopIncludeLoader};

/// Maximum depth of nested `mj-include` directives before resolution
/// aborts with an error. Also breaks include cycles.
pub const DEFAULT_INCLUDE_DEPTH: usize = 10;

/// Google-hosted families injected for templates that use them without
/// declaring an `mj-font`.
pub fn default_fonts() -> IndexMap<String, Cow<'static, str>> {
	IndexMap::from_iter([
		(
			String::from("Open Sans"),
			Cow::Borrowed("https://fonts.googleapis.com/css?family=Open+Sans:300,400,500,700"),
		),
		(
			String::from("Droid Sans"),
			Cow::Borrowed("https://fonts.googleapis.com/css?family=Droid+Sans:300,400,500,700"),
		),
		(
			String::from("Lato"),
			Cow::Borrowed("https://fonts.googleapis.com/css?family=Lato:300,400,500,700"),
		),
		(
			String::from("Roboto"),
			Cow::Borrowed("https://fonts.googleapis.com/css?family=Roboto:300,400,500,700"),
		),
		(
			String::from("Ubuntu"),
			Cow::Borrowed("https://fonts.googleapis.com/css?family=Ubuntu:300,400,500,700"),
		),
	])
}

/// Options for the parsing stage.
#[derive(Clone, Debug)]
pub struct ParseOptions {
	/// Loader consulted for every `mj-include` directive.
	pub include_loader: Arc<dyn IncludeLoader>,
	/// When set, include directives are left in the tree instead of being
	/// resolved; the renderer then skips them.
	pub keep_raw_includes: bool,
	/// Depth limit for nested includes.
	pub max_include_depth: usize,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			include_loader: Arc::new(NoopIncludeLoader),
			keep_raw_includes: false,
			max_include_depth: DEFAULT_INCLUDE_DEPTH,
		}
	}
}

/// Options for the rendering stage.
#[derive(Clone, Debug)]
pub struct RenderOptions {
	/// Viewport width under which the layout stacks. An `mj-breakpoint`
	/// element in the document head takes precedence over this value.
	pub breakpoint: Pixel,
	/// Drop markup comments from the output.
	pub disable_comments: bool,
	/// Known font families and their stylesheet URLs. An `mj-font` element
	/// in the document head overrides an entry with the same name.
	pub fonts: IndexMap<String, Cow<'static, str>>,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			breakpoint: Pixel::new(480.0),
			disable_comments: false,
			fonts: default_fonts(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_breakpoint() {
		assert_eq!(RenderOptions::default().breakpoint.value(), 480.0);
	}

	#[test]
	fn default_fonts_are_google_hosted() {
		let fonts = default_fonts();
		assert_eq!(fonts.len(), 5);
		assert_eq!(
			fonts.get("Ubuntu").map(|href| href.as_ref()),
			Some("https://fonts.googleapis.com/css?family=Ubuntu:300,400,500,700")
		);
	}
}
