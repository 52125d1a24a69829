//! Include loader capability
//!
//! Loaders resolve the `path` of an include directive into markup text.
//! The engine depends only on this interface; loader selection is caller
//! configuration, injected per compile call and never retained.

use std::fmt;

use async_trait::async_trait;

/// Failure reported by a loader, translated by the resolver into the
/// public error taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum IncludeLoaderError {
	#[error("{path:?} was not found: {reason}")]
	NotFound { path: String, reason: String },
	/// The loader does not resolve includes at all (the default).
	#[error("includes are not supported by this loader")]
	Unsupported,
	/// The loader can only be driven from the asynchronous entry point.
	#[error("this loader requires the asynchronous entry point")]
	SyncUnsupported,
}

impl IncludeLoaderError {
	pub fn not_found(path: impl Into<String>, reason: impl fmt::Display) -> Self {
		Self::NotFound {
			path: path.into(),
			reason: reason.to_string(),
		}
	}
}

/// Capability interface for resolving include directives.
///
/// Implementations must be cheap to share: the engine takes an
/// `Arc<dyn IncludeLoader>` and may call it from an async task.
///
/// # Example
///
/// ```
/// use lettra_core::includes::{IncludeLoader, IncludeLoaderError, MemoryIncludeLoader};
///
/// let loader = MemoryIncludeLoader::from([("./header.mjml", "<mj-text>Hello</mj-text>")]);
/// assert!(loader.load("./header.mjml").is_ok());
/// assert!(matches!(
/// 	loader.load("./missing.mjml"),
/// 	Err(IncludeLoaderError::NotFound { .. })
/// ));
/// ```
#[async_trait]
pub trait IncludeLoader: fmt::Debug + Send + Sync {
	/// Whether [`IncludeLoader::load`] may be called without a runtime.
	/// Loaders backed by network I/O return `false` here, which makes the
	/// synchronous entry point fail fast instead of blocking.
	fn supports_sync(&self) -> bool {
		true
	}

	/// Resolves `path` into markup, synchronously.
	fn load(&self, path: &str) -> Result<String, IncludeLoaderError>;

	/// Resolves `path` into markup, suspending on I/O. The default
	/// delegates to the synchronous operation.
	async fn load_async(&self, path: &str) -> Result<String, IncludeLoaderError> {
		self.load(path)
	}
}

/// Default loader: every include fails with
/// [`IncludeLoaderError::Unsupported`]. Callers opt in to real include
/// resolution by configuring another loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopIncludeLoader;

#[async_trait]
impl IncludeLoader for NoopIncludeLoader {
	fn load(&self, _path: &str) -> Result<String, IncludeLoaderError> {
		Err(IncludeLoaderError::Unsupported)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn noop_rejects_everything() {
		let loader = NoopIncludeLoader;
		assert!(matches!(
			loader.load("./partial.mjml"),
			Err(IncludeLoaderError::Unsupported)
		));
		assert!(loader.supports_sync());
	}

	#[tokio::test]
	async fn async_default_delegates_to_sync() {
		let loader = NoopIncludeLoader;
		assert!(matches!(
			loader.load_async("./partial.mjml").await,
			Err(IncludeLoaderError::Unsupported)
		));
	}
}
