//! Email markup compiler core.
//!
//! Turns `mj-*` markup into responsive HTML email in three stages: the
//! parser builds a component tree, include directives are resolved through
//! a pluggable [`IncludeLoader`], and the renderer emits the final
//! document.
//!
//! ```rust
//! let markup = r#"<mjml>
//!   <mj-body>
//!     <mj-section>
//!       <mj-column>
//!         <mj-text>Hello World</mj-text>
//!       </mj-column>
//!     </mj-section>
//!   </mj-body>
//! </mjml>"#;
//! let html = lettra_core::compile(
//! 	markup,
//! 	&lettra_core::ParseOptions::default(),
//! 	&lettra_core::RenderOptions::default(),
//! )
//! .unwrap();
//! assert!(html.starts_with("<!doctype html>"));
//! ```

pub mod ast;
mod cascade;
pub mod component;
mod error;
mod helper;
pub mod includes;
mod options;
mod parser;
mod render;
mod tokenizer;

use std::time::Duration;

use tracing::debug;

pub use error::{Error, Origin, RenderResult};
pub use helper::size::{Percent, Pixel, Size};
pub use includes::{
	IncludeLoader, IncludeLoaderError, LocalIncludeLoader, MemoryIncludeLoader,
	NoopIncludeLoader,
};
pub use options::{default_fonts, ParseOptions, RenderOptions, DEFAULT_INCLUDE_DEPTH};
pub use parser::{parse, parse_fragment};

/// Compiles a document synchronously.
///
/// Fails fast with [`Error::UnsupportedSyncLoader`] when the configured
/// include loader only supports asynchronous I/O, even if the document
/// contains no include directive.
pub fn compile(
	markup: &str,
	parse_opts: &ParseOptions,
	render_opts: &RenderOptions,
) -> Result<String, Error> {
	if !parse_opts.include_loader.supports_sync() {
		return Err(Error::UnsupportedSyncLoader);
	}
	debug!(length = markup.len(), "compiling document");
	let mut document = parser::parse(markup)?;
	includes::resolve(&mut document, parse_opts)?;
	render::render(&document, render_opts)
}

/// Compiles a document, suspending on include loader I/O.
pub async fn compile_async(
	markup: &str,
	parse_opts: &ParseOptions,
	render_opts: &RenderOptions,
) -> Result<String, Error> {
	debug!(length = markup.len(), "compiling document");
	let mut document = parser::parse(markup)?;
	includes::resolve_async(&mut document, parse_opts).await?;
	render::render(&document, render_opts)
}

/// Compiles a document with an upper bound on wall-clock time. Returns
/// [`Error::Cancelled`] when the deadline elapses first.
pub async fn compile_with_deadline(
	markup: &str,
	parse_opts: &ParseOptions,
	render_opts: &RenderOptions,
	deadline: Duration,
) -> Result<String, Error> {
	tokio::time::timeout(deadline, compile_async(markup, parse_opts, render_opts))
		.await
		.map_err(|_| Error::Cancelled)?
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;

	const BASIC: &str = "<mjml><mj-body><mj-section><mj-column><mj-text>Hello World</mj-text></mj-column></mj-section></mj-body></mjml>";

	#[test]
	fn compile_produces_a_full_document() {
		let html = compile(BASIC, &ParseOptions::default(), &RenderOptions::default()).unwrap();
		assert!(html.starts_with("<!doctype html>"));
		assert!(html.ends_with("</html>"));
		assert!(html.contains("Hello World"));
		assert!(html.contains("mj-column-per-100"));
	}

	#[test]
	fn compile_is_deterministic() {
		let parse_opts = ParseOptions::default();
		let render_opts = RenderOptions::default();
		let first = compile(BASIC, &parse_opts, &render_opts).unwrap();
		let second = compile(BASIC, &parse_opts, &render_opts).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn sync_entry_rejects_async_only_loaders() {
		#[derive(Debug)]
		struct AsyncOnly;

		#[async_trait::async_trait]
		impl IncludeLoader for AsyncOnly {
			fn supports_sync(&self) -> bool {
				false
			}

			fn load(&self, _path: &str) -> Result<String, IncludeLoaderError> {
				Err(IncludeLoaderError::SyncUnsupported)
			}
		}

		let parse_opts = ParseOptions {
			include_loader: Arc::new(AsyncOnly),
			..ParseOptions::default()
		};
		// rejected before parsing, even without any include in the markup
		let err = compile(BASIC, &parse_opts, &RenderOptions::default()).unwrap_err();
		assert!(matches!(err, Error::UnsupportedSyncLoader));
	}

	#[tokio::test]
	async fn async_entry_matches_sync_output() {
		let parse_opts = ParseOptions::default();
		let render_opts = RenderOptions::default();
		let sync_html = compile(BASIC, &parse_opts, &render_opts).unwrap();
		let async_html = compile_async(BASIC, &parse_opts, &render_opts).await.unwrap();
		assert_eq!(sync_html, async_html);
	}

	#[tokio::test]
	async fn deadline_cancels_compilation() {
		#[derive(Debug)]
		struct Stalling;

		#[async_trait::async_trait]
		impl IncludeLoader for Stalling {
			fn supports_sync(&self) -> bool {
				false
			}

			fn load(&self, _path: &str) -> Result<String, IncludeLoaderError> {
				Err(IncludeLoaderError::SyncUnsupported)
			}

			async fn load_async(&self, _path: &str) -> Result<String, IncludeLoaderError> {
				tokio::time::sleep(Duration::from_secs(60)).await;
				Ok(String::new())
			}
		}

		let parse_opts = ParseOptions {
			include_loader: Arc::new(Stalling),
			..ParseOptions::default()
		};
		let markup = "<mjml><mj-body><mj-include path=\"slow\" /></mj-body></mjml>";
		let err = compile_with_deadline(
			markup,
			&parse_opts,
			&RenderOptions::default(),
			Duration::from_millis(50),
		)
		.await
		.unwrap_err();
		assert!(matches!(err, Error::Cancelled));
	}
}
