//! # Lettra
//!
//! A compiler for the MJML email markup language: it turns `mj-*` markup
//! into responsive HTML that renders consistently across email clients,
//! including the Outlook family.
//!
//! ```rust
//! use lettra::{compile, ParseOptions, RenderOptions};
//!
//! let markup = r#"<mjml>
//!   <mj-body>
//!     <mj-section>
//!       <mj-column>
//!         <mj-text>Hello World</mj-text>
//!       </mj-column>
//!     </mj-section>
//!   </mj-body>
//! </mjml>"#;
//! let html = compile(markup, &ParseOptions::default(), &RenderOptions::default()).unwrap();
//! assert!(html.contains("Hello World"));
//! ```
//!
//! ## Includes
//!
//! Templates can be split into fragments with `mj-include`. Resolution is
//! opt-in: the default loader rejects every include. Configure a
//! [`MemoryIncludeLoader`], a [`LocalIncludeLoader`] or (with the
//! `http-loader` feature) an HTTP-backed loader through
//! [`ParseOptions::include_loader`].
//!
//! ## Feature Flags
//!
//! - `http-loader` - network include loader, usable from the asynchronous
//!   entry points only

pub use lettra_core::{
	compile, compile_async, compile_with_deadline, default_fonts, parse, parse_fragment, ast,
	component, includes, Error, IncludeLoader, IncludeLoaderError, LocalIncludeLoader,
	MemoryIncludeLoader, NoopIncludeLoader, Origin, ParseOptions, Percent, Pixel, RenderOptions,
	RenderResult, Size, DEFAULT_INCLUDE_DEPTH,
};

#[cfg(feature = "http-loader")]
pub use lettra_http_loader::HttpIncludeLoader;

pub mod prelude {
	//! Common imports for working with the compiler.
	pub use super::{
		compile, compile_async, compile_with_deadline, Error, IncludeLoader, Origin,
		ParseOptions, RenderOptions, RenderResult,
	};

	#[cfg(feature = "http-loader")]
	pub use super::HttpIncludeLoader;
}
