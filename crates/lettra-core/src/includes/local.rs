//! Filesystem include loader
//!
//! Resolves include paths relative to a base directory. Paths are checked
//! against directory traversal before and after canonicalization so an
//! include can never read outside the configured root.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use super::loader::{IncludeLoader, IncludeLoaderError};

/// Resolves include paths against a base directory on disk.
#[derive(Debug, Clone)]
pub struct LocalIncludeLoader {
	base: PathBuf,
}

impl LocalIncludeLoader {
	pub fn new(base: impl Into<PathBuf>) -> Self {
		Self { base: base.into() }
	}

	/// # Security
	///
	/// Rejects paths containing parent-directory components and paths
	/// whose canonical form escapes the base directory.
	fn resolve(&self, path: &str) -> Result<PathBuf, IncludeLoaderError> {
		let relative = path.strip_prefix("./").unwrap_or(path);
		let relative = Path::new(relative);
		for component in relative.components() {
			match component {
				Component::ParentDir => {
					return Err(IncludeLoaderError::not_found(
						path,
						"parent directory components are not allowed",
					));
				}
				Component::RootDir | Component::Prefix(_) => {
					return Err(IncludeLoaderError::not_found(
						path,
						"absolute paths are not allowed",
					));
				}
				_ => {}
			}
		}
		let candidate = self.base.join(relative);
		let canonical = candidate
			.canonicalize()
			.map_err(|err| IncludeLoaderError::not_found(path, err))?;
		let base = self
			.base
			.canonicalize()
			.map_err(|err| IncludeLoaderError::not_found(path, err))?;
		if !canonical.starts_with(&base) {
			return Err(IncludeLoaderError::not_found(
				path,
				"path escapes the base directory",
			));
		}
		Ok(canonical)
	}
}

#[async_trait]
impl IncludeLoader for LocalIncludeLoader {
	fn load(&self, path: &str) -> Result<String, IncludeLoaderError> {
		let resolved = self.resolve(path)?;
		std::fs::read_to_string(resolved)
			.map_err(|err| IncludeLoaderError::not_found(path, err))
	}

	async fn load_async(&self, path: &str) -> Result<String, IncludeLoaderError> {
		let resolved = self.resolve(path)?;
		tokio::fs::read_to_string(resolved)
			.await
			.map_err(|err| IncludeLoaderError::not_found(path, err))
	}
}
