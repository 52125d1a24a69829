//! CSS spacing shorthand (1 to 4 pixel values).

use std::convert::TryFrom;

use super::size::Pixel;

pub enum Spacing {
	Single(Pixel),
	Two(Pixel, Pixel),
	Three(Pixel, Pixel, Pixel),
	Four(Pixel, Pixel, Pixel, Pixel),
}

impl Spacing {
	pub fn right(&self) -> &Pixel {
		match self {
			Self::Single(all) => all,
			Self::Two(_vertical, horizontal) => horizontal,
			Self::Three(_top, horizontal, _bottom) => horizontal,
			Self::Four(_top, right, _bottom, _left) => right,
		}
	}

	pub fn left(&self) -> &Pixel {
		match self {
			Self::Single(all) => all,
			Self::Two(_vertical, horizontal) => horizontal,
			Self::Three(_top, horizontal, _bottom) => horizontal,
			Self::Four(_top, _right, _bottom, left) => left,
		}
	}
}

impl TryFrom<&str> for Spacing {
	type Error = String;

	fn try_from(input: &str) -> Result<Self, Self::Error> {
		let mut sections = input.split_whitespace();
		match (
			sections.next(),
			sections.next(),
			sections.next(),
			sections.next(),
		) {
			(Some(first), None, None, None) => Ok(Self::Single(Pixel::try_from(first)?)),
			(Some(first), Some(second), None, None) => {
				Ok(Self::Two(Pixel::try_from(first)?, Pixel::try_from(second)?))
			}
			(Some(first), Some(second), Some(third), None) => Ok(Self::Three(
				Pixel::try_from(first)?,
				Pixel::try_from(second)?,
				Pixel::try_from(third)?,
			)),
			(Some(first), Some(second), Some(third), Some(fourth)) => Ok(Self::Four(
				Pixel::try_from(first)?,
				Pixel::try_from(second)?,
				Pixel::try_from(third)?,
				Pixel::try_from(fourth)?,
			)),
			_ => Err(String::from("no value provided")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn single_value() {
		let spacing = Spacing::try_from("1px").unwrap();
		assert_eq!(spacing.left(), &Pixel::new(1.0));
		assert_eq!(spacing.left(), spacing.right());
	}

	#[test]
	fn two_values() {
		let spacing = Spacing::try_from("20px 0px").unwrap();
		assert!(matches!(spacing, Spacing::Two(vertical, _) if vertical == Pixel::new(20.0)));
	}

	#[test]
	fn four_values() {
		let spacing = Spacing::try_from("2px 3px 4px 5px").unwrap();
		assert_eq!(spacing.right(), &Pixel::new(3.0));
		assert_eq!(spacing.left(), &Pixel::new(5.0));
	}

	#[test]
	fn invalid_unit_is_rejected() {
		assert!(Spacing::try_from("2em 3px").is_err());
	}
}
