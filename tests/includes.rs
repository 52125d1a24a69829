//! Include resolution through the public entry points.

use std::sync::Arc;
use std::time::Duration;

use lettra::{
	compile, compile_async, compile_with_deadline, Error, IncludeLoader, IncludeLoaderError,
	LocalIncludeLoader, MemoryIncludeLoader, Origin, ParseOptions, RenderOptions,
};

const DOC: &str = concat!(
	"<mjml><mj-body><mj-section><mj-column>",
	"<mj-include path=\"./hello.mjml\" />",
	"</mj-column></mj-section></mj-body></mjml>",
);

#[test]
fn includes_are_rejected_by_default() {
	let err = compile(DOC, &ParseOptions::default(), &RenderOptions::default()).unwrap_err();
	assert!(matches!(&err, Error::IncludeNotSupported { path } if path == "./hello.mjml"));
	assert_eq!(err.origin(), Origin::Parser);
}

#[test]
fn memory_loader_round_trip() {
	let opts = ParseOptions {
		include_loader: Arc::new(MemoryIncludeLoader::from([(
			"./hello.mjml",
			"<mj-text>Hello World</mj-text>",
		)])),
		..ParseOptions::default()
	};
	let html = compile(DOC, &opts, &RenderOptions::default()).unwrap();
	assert!(html.contains("Hello World"));
}

#[test]
fn local_loader_reads_from_disk() {
	let dir = tempfile::TempDir::new().unwrap();
	std::fs::write(dir.path().join("hello.mjml"), "<mj-text>From disk</mj-text>").unwrap();
	let opts = ParseOptions {
		include_loader: Arc::new(LocalIncludeLoader::new(dir.path().to_path_buf())),
		..ParseOptions::default()
	};
	let html = compile(DOC, &opts, &RenderOptions::default()).unwrap();
	assert!(html.contains("From disk"));
}

#[test]
fn missing_file_reports_the_path() {
	let dir = tempfile::TempDir::new().unwrap();
	let opts = ParseOptions {
		include_loader: Arc::new(LocalIncludeLoader::new(dir.path().to_path_buf())),
		..ParseOptions::default()
	};
	let err = compile(DOC, &opts, &RenderOptions::default()).unwrap_err();
	assert!(matches!(&err, Error::IncludeNotFound { path, .. } if path == "./hello.mjml"));
}

#[derive(Debug)]
struct AsyncOnlyLoader(MemoryIncludeLoader);

#[async_trait::async_trait]
impl IncludeLoader for AsyncOnlyLoader {
	fn supports_sync(&self) -> bool {
		false
	}

	fn load(&self, _path: &str) -> Result<String, IncludeLoaderError> {
		Err(IncludeLoaderError::SyncUnsupported)
	}

	async fn load_async(&self, path: &str) -> Result<String, IncludeLoaderError> {
		self.0.load_async(path).await
	}
}

#[test]
fn sync_entry_fails_fast_with_async_only_loader() {
	let opts = ParseOptions {
		include_loader: Arc::new(AsyncOnlyLoader(MemoryIncludeLoader::from([(
			"./hello.mjml",
			"<mj-text>Hello</mj-text>",
		)]))),
		..ParseOptions::default()
	};
	// no include needed to trigger the failure
	let err = compile(
		"<mjml><mj-body></mj-body></mjml>",
		&opts,
		&RenderOptions::default(),
	)
	.unwrap_err();
	assert!(matches!(err, Error::UnsupportedSyncLoader));
}

#[tokio::test]
async fn async_entry_drives_async_only_loaders() {
	let opts = ParseOptions {
		include_loader: Arc::new(AsyncOnlyLoader(MemoryIncludeLoader::from([(
			"./hello.mjml",
			"<mj-text>Hello World</mj-text>",
		)]))),
		..ParseOptions::default()
	};
	let html = compile_async(DOC, &opts, &RenderOptions::default()).await.unwrap();
	assert!(html.contains("Hello World"));
}

#[tokio::test]
async fn deadline_is_enforced() {
	#[derive(Debug)]
	struct NeverReturns;

	#[async_trait::async_trait]
	impl IncludeLoader for NeverReturns {
		fn supports_sync(&self) -> bool {
			false
		}

		fn load(&self, _path: &str) -> Result<String, IncludeLoaderError> {
			Err(IncludeLoaderError::SyncUnsupported)
		}

		async fn load_async(&self, _path: &str) -> Result<String, IncludeLoaderError> {
			tokio::time::sleep(Duration::from_secs(3600)).await;
			Ok(String::new())
		}
	}

	let opts = ParseOptions {
		include_loader: Arc::new(NeverReturns),
		..ParseOptions::default()
	};
	let err = compile_with_deadline(
		DOC,
		&opts,
		&RenderOptions::default(),
		Duration::from_millis(20),
	)
	.await
	.unwrap_err();
	assert!(matches!(err, Error::Cancelled));
}

#[test]
fn depth_limit_breaks_cycles() {
	let opts = ParseOptions {
		include_loader: Arc::new(MemoryIncludeLoader::from([(
			"./hello.mjml",
			"<mj-include path=\"./hello.mjml\" />",
		)])),
		..ParseOptions::default()
	};
	let err = compile(DOC, &opts, &RenderOptions::default()).unwrap_err();
	assert!(matches!(err, Error::IncludeTooDeep { limit, .. } if limit == 10));
}

#[test]
fn keep_raw_includes_skips_resolution() {
	let opts = ParseOptions {
		keep_raw_includes: true,
		..ParseOptions::default()
	};
	// the directive stays in the tree and renders to nothing
	let html = compile(DOC, &opts, &RenderOptions::default()).unwrap();
	assert!(!html.contains("mj-include"));
}
