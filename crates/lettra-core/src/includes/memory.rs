//! In-memory include loader, mostly useful for tests and embedding.

use std::collections::HashMap;

use async_trait::async_trait;

use super::loader::{IncludeLoader, IncludeLoaderError};

/// Resolves include paths against a fixed `path → markup` mapping.
#[derive(Debug, Clone, Default)]
pub struct MemoryIncludeLoader {
	entries: HashMap<String, String>,
}

impl MemoryIncludeLoader {
	pub fn new(entries: HashMap<String, String>) -> Self {
		Self { entries }
	}

	pub fn insert(&mut self, path: impl Into<String>, markup: impl Into<String>) {
		self.entries.insert(path.into(), markup.into());
	}
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for MemoryIncludeLoader {
	fn from(value: [(K, V); N]) -> Self {
		Self {
			entries: value
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

#[async_trait]
impl IncludeLoader for MemoryIncludeLoader {
	fn load(&self, path: &str) -> Result<String, IncludeLoaderError> {
		self.entries
			.get(path)
			.cloned()
			.ok_or_else(|| IncludeLoaderError::not_found(path, "no entry in memory loader"))
	}
}
