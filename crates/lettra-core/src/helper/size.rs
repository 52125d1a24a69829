//! Dimension values
//!
//! Attribute values carrying a unit (`42px`, `33.33%`, bare numbers) are
//! parsed into [`Size`]. Formatting truncates fractions toward zero at two
//! decimal places so computed widths are deterministic across platforms.

use std::convert::TryFrom;

/// Formats a dimension value: fractional digits are truncated (not
/// rounded) at two decimals and trailing zeros are trimmed.
pub(crate) fn format_value(value: f32) -> String {
	let truncated = (value * 100.0).trunc() / 100.0;
	if truncated.fract() == 0.0 {
		format!("{}", truncated as i64)
	} else {
		let mut out = format!("{truncated:.2}");
		while out.ends_with('0') {
			out.pop();
		}
		if out.ends_with('.') {
			out.pop();
		}
		out
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Size {
	Pixel(Pixel),
	Percent(Percent),
	Raw(f32),
}

impl Size {
	pub fn pixel(value: f32) -> Self {
		Self::Pixel(Pixel::new(value))
	}

	pub fn percent(value: f32) -> Self {
		Self::Percent(Percent::new(value))
	}

	pub fn is_percent(&self) -> bool {
		matches!(self, Self::Percent(_))
	}

	pub fn is_pixel(&self) -> bool {
		matches!(self, Self::Pixel(_))
	}

	pub fn value(&self) -> f32 {
		match self {
			Self::Pixel(inner) => inner.value(),
			Self::Percent(inner) => inner.value(),
			Self::Raw(value) => *value,
		}
	}
}

impl TryFrom<&str> for Size {
	type Error = String;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		if value.ends_with("px") {
			Ok(Self::Pixel(Pixel::try_from(value)?))
		} else if value.ends_with('%') {
			Ok(Self::Percent(Percent::try_from(value)?))
		} else {
			Ok(Self::Raw(
				value.parse::<f32>().map_err(|err| err.to_string())?,
			))
		}
	}
}

impl std::fmt::Display for Size {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Pixel(inner) => inner.fmt(f),
			Self::Percent(inner) => inner.fmt(f),
			Self::Raw(inner) => f.write_str(&format_value(*inner)),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pixel(f32);

impl Pixel {
	pub fn new(value: f32) -> Self {
		Self(value)
	}

	pub fn value(&self) -> f32 {
		self.0
	}

	/// One pixel below, floored at zero; used for max-width media queries.
	pub fn lower(&self) -> Self {
		if self.0 <= 1.0 {
			Self(0.0)
		} else {
			Self(self.0 - 1.0)
		}
	}

	/// Reads the first token of a CSS border shorthand as a pixel width.
	pub fn from_border(input: &str) -> Option<Self> {
		input
			.split_whitespace()
			.next()
			.and_then(|value| Self::try_from(value).ok())
	}
}

impl TryFrom<&str> for Pixel {
	type Error = String;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		if let Some(value) = value.strip_suffix("px") {
			value
				.parse::<f32>()
				.map(Pixel::new)
				.map_err(|err| err.to_string())
		} else {
			Err(String::from("pixel value should end with px"))
		}
	}
}

impl std::fmt::Display for Pixel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}px", format_value(self.0))
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Percent(f32);

impl Percent {
	pub fn new(value: f32) -> Self {
		Self(value)
	}

	pub fn value(&self) -> f32 {
		self.0
	}
}

impl TryFrom<&str> for Percent {
	type Error = String;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		if let Some(value) = value.strip_suffix('%') {
			value
				.parse::<f32>()
				.map(Percent::new)
				.map_err(|err| err.to_string())
		} else {
			Err(String::from("percent value should end with %"))
		}
	}
}

impl std::fmt::Display for Percent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}%", format_value(self.0))
	}
}
