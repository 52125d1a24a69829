//! Error taxonomy for the compiler
//!
//! Every failure path surfaces as an [`Error`] variant carrying the phase it
//! originated from. The serializable [`RenderResult`] mirrors the shape that
//! external consumers (CLI, HTTP handlers, browser bindings) branch on.

use serde::{Deserialize, Serialize};

/// Phase of the pipeline an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
	Parser,
	Renderer,
}

impl std::fmt::Display for Origin {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Parser => f.write_str("parser"),
			Self::Renderer => f.write_str("renderer"),
		}
	}
}

/// Compilation error
///
/// Callers that only branch on [`Error::origin`] stay forward-compatible
/// when new variants are added.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The markup could not be tokenized (unterminated tag, attribute or
	/// comment). `position` is a byte offset into the input.
	#[error("malformed markup at byte {position}: {message}")]
	MalformedMarkup { position: usize, message: String },
	/// A completed subtree violates its parent's child grammar.
	#[error("unexpected <{child}> inside <{parent}>")]
	InvalidStructure { parent: String, child: String },
	/// More than one top-level element.
	#[error("document contains more than one root element")]
	DuplicateRoot,
	/// The root element has no mj-body child.
	#[error("document is missing the mj-body element")]
	MissingBody,
	/// An include directive was found but the configured loader does not
	/// resolve includes. This is the default behavior.
	#[error("include {path:?} cannot be resolved: the configured loader does not support includes")]
	IncludeNotSupported { path: String },
	/// Nested includes exceeded the configured depth limit.
	#[error("include {path:?} exceeds the include depth limit of {limit}")]
	IncludeTooDeep { path: String, limit: usize },
	/// The loader could not provide content for the given path.
	#[error("include {path:?} could not be loaded: {reason}")]
	IncludeNotFound { path: String, reason: String },
	/// The synchronous entry point was called with a loader that requires
	/// asynchronous I/O.
	#[error("the configured include loader requires the asynchronous entry point")]
	UnsupportedSyncLoader,
	/// A component is missing an attribute it cannot be emitted without.
	#[error("<{tag}> requires the {attribute:?} attribute")]
	MissingRequiredAttribute {
		tag: String,
		attribute: String,
		origin: Origin,
	},
	/// The asynchronous entry point was cancelled before completion.
	#[error("compilation was cancelled")]
	Cancelled,
}

impl Error {
	/// Returns the pipeline phase this error belongs to.
	pub fn origin(&self) -> Origin {
		match self {
			Self::MalformedMarkup { .. }
			| Self::InvalidStructure { .. }
			| Self::DuplicateRoot
			| Self::MissingBody
			| Self::IncludeNotSupported { .. }
			| Self::IncludeTooDeep { .. }
			| Self::IncludeNotFound { .. }
			| Self::UnsupportedSyncLoader
			| Self::Cancelled => Origin::Parser,
			Self::MissingRequiredAttribute { origin, .. } => *origin,
		}
	}
}

/// Serializable compilation outcome
///
/// Exactly one variant is ever populated. The JSON shape is
/// `{"type":"success","content":…}` or
/// `{"type":"error","origin":"parser"|"renderer","message":…}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderResult {
	Success { content: String },
	Error { origin: Origin, message: String },
}

impl From<Result<String, Error>> for RenderResult {
	fn from(value: Result<String, Error>) -> Self {
		match value {
			Ok(content) => Self::Success { content },
			Err(err) => Self::Error {
				origin: err.origin(),
				message: err.to_string(),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn success_shape() {
		let result = RenderResult::from(Ok(String::from("<html></html>")));
		let json = serde_json::to_value(&result).unwrap();
		assert_eq!(json["type"], "success");
		assert_eq!(json["content"], "<html></html>");
	}

	#[test]
	fn error_shape_carries_origin() {
		let result = RenderResult::from(Err(Error::MissingBody));
		let json = serde_json::to_value(&result).unwrap();
		assert_eq!(json["type"], "error");
		assert_eq!(json["origin"], "parser");
		assert!(json["message"].as_str().unwrap().contains("mj-body"));
	}

	#[test]
	fn renderer_origin_for_missing_attribute() {
		let err = Error::MissingRequiredAttribute {
			tag: String::from("mj-image"),
			attribute: String::from("src"),
			origin: Origin::Renderer,
		};
		assert_eq!(err.origin(), Origin::Renderer);
	}
}
