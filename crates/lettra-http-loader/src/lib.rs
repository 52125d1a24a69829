//! HTTP include loader.
//!
//! Resolves include directives over HTTP(S). The loader is asynchronous
//! only: the synchronous compile entry point fails fast with an
//! `UnsupportedSyncLoader` error when it is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use lettra_core::{IncludeLoader, IncludeLoaderError};
use tracing::debug;

/// Fetches include content from a remote server.
///
/// Relative include paths are joined onto the configured base URL;
/// absolute `http(s)://` paths are fetched as-is.
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use lettra_core::ParseOptions;
/// use lettra_http_loader::HttpIncludeLoader;
///
/// let opts = ParseOptions {
/// 	include_loader: Arc::new(
/// 		HttpIncludeLoader::new().with_base_url("https://templates.example.com"),
/// 	),
/// 	..ParseOptions::default()
/// };
/// ```
#[derive(Debug, Default)]
pub struct HttpIncludeLoader {
	client: reqwest::Client,
	base_url: Option<String>,
	headers: BTreeMap<String, String>,
}

impl HttpIncludeLoader {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_client(mut self, client: reqwest::Client) -> Self {
		self.client = client;
		self
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// Header sent with every request, e.g. an authorization token.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());
		self
	}

	fn resolve_url(&self, path: &str) -> String {
		if path.starts_with("http://") || path.starts_with("https://") {
			return path.to_owned();
		}
		match self.base_url.as_deref() {
			Some(base) => format!(
				"{}/{}",
				base.trim_end_matches('/'),
				path.trim_start_matches('/')
			),
			None => path.to_owned(),
		}
	}
}

#[async_trait]
impl IncludeLoader for HttpIncludeLoader {
	fn supports_sync(&self) -> bool {
		false
	}

	fn load(&self, _path: &str) -> Result<String, IncludeLoaderError> {
		Err(IncludeLoaderError::SyncUnsupported)
	}

	async fn load_async(&self, path: &str) -> Result<String, IncludeLoaderError> {
		let url = self.resolve_url(path);
		debug!(url, "fetching include");
		let mut request = self.client.get(&url);
		for (name, value) in self.headers.iter() {
			request = request.header(name, value);
		}
		let response = request
			.send()
			.await
			.map_err(|err| IncludeLoaderError::not_found(path, err))?;
		if !response.status().is_success() {
			return Err(IncludeLoaderError::not_found(
				path,
				format!("unexpected status {}", response.status()),
			));
		}
		response
			.text()
			.await
			.map_err(|err| IncludeLoaderError::not_found(path, err))
	}
}

#[cfg(test)]
mod tests {
	use tokio::io::{AsyncReadExt, AsyncWriteExt};

	use super::*;

	/// One-shot HTTP server answering the first connection with a canned
	/// response, so fetching is covered without leaving the host.
	async fn serve_once(status_line: &'static str, body: &'static str) -> std::net::SocketAddr {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			let (mut stream, _) = listener.accept().await.unwrap();
			let mut buffer = [0u8; 1024];
			let _ = stream.read(&mut buffer).await.unwrap();
			let response = format!(
				"HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
				body.len(),
			);
			stream.write_all(response.as_bytes()).await.unwrap();
		});
		addr
	}

	#[tokio::test]
	async fn fetches_includes_from_the_server() {
		let addr = serve_once("200 OK", "<mj-text>remote</mj-text>").await;
		let loader = HttpIncludeLoader::new().with_base_url(format!("http://{addr}"));
		let markup = loader.load_async("/partials/header.mjml").await.unwrap();
		assert_eq!(markup, "<mj-text>remote</mj-text>");
	}

	#[tokio::test]
	async fn error_statuses_surface_as_not_found() {
		let addr = serve_once("404 Not Found", "").await;
		let loader = HttpIncludeLoader::new().with_base_url(format!("http://{addr}"));
		let err = loader.load_async("/missing.mjml").await.unwrap_err();
		assert!(matches!(
			err,
			IncludeLoaderError::NotFound { reason, .. } if reason.contains("404")
		));
	}

	#[test]
	fn relative_paths_join_the_base_url() {
		let loader = HttpIncludeLoader::new().with_base_url("https://templates.example.com/");
		assert_eq!(
			loader.resolve_url("/partials/header.mjml"),
			"https://templates.example.com/partials/header.mjml"
		);
		assert_eq!(
			loader.resolve_url("partials/header.mjml"),
			"https://templates.example.com/partials/header.mjml"
		);
	}

	#[test]
	fn absolute_urls_bypass_the_base() {
		let loader = HttpIncludeLoader::new().with_base_url("https://templates.example.com");
		assert_eq!(
			loader.resolve_url("https://other.example.com/x.mjml"),
			"https://other.example.com/x.mjml"
		);
	}

	#[test]
	fn sync_loading_is_rejected() {
		let loader = HttpIncludeLoader::new();
		assert!(!loader.supports_sync());
		assert!(matches!(
			loader.load("x"),
			Err(IncludeLoaderError::SyncUnsupported)
		));
	}
}
