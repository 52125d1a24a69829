//! Outlook conditional comment wrappers.

pub const START_CONDITIONAL_TAG: &str = "<!--[if mso | IE]>";
pub const END_CONDITIONAL_TAG: &str = "<![endif]-->";
pub const START_MSO_NEGATION_CONDITIONAL_TAG: &str = "<!--[if !mso]><!-->";
pub const END_NEGATION_CONDITIONAL_TAG: &str = "<!--<![endif]-->";

pub fn conditional_tag(content: impl AsRef<str>) -> String {
	format!("{START_CONDITIONAL_TAG}{}{END_CONDITIONAL_TAG}", content.as_ref())
}

pub fn mso_negation_conditional_tag(content: impl AsRef<str>) -> String {
	format!(
		"{START_MSO_NEGATION_CONDITIONAL_TAG}{}{END_NEGATION_CONDITIONAL_TAG}",
		content.as_ref()
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wraps_content() {
		assert_eq!(
			conditional_tag("<table></table>"),
			"<!--[if mso | IE]><table></table><![endif]-->"
		);
	}

	#[test]
	fn negation_wrapper_hides_from_outlook() {
		assert_eq!(
			mso_negation_conditional_tag("<input />"),
			"<!--[if !mso]><!--><input /><!--<![endif]-->"
		);
	}
}
