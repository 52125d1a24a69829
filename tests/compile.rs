//! End-to-end compilation behavior.

use lettra::{compile, Error, Origin, ParseOptions, RenderOptions, RenderResult};

fn render(markup: &str) -> String {
	compile(markup, &ParseOptions::default(), &RenderOptions::default()).unwrap()
}

#[test]
fn three_columns_share_the_row() {
	let html = render(concat!(
		"<mjml><mj-body><mj-section>",
		"<mj-column><mj-text>a</mj-text></mj-column>",
		"<mj-column><mj-text>b</mj-text></mj-column>",
		"<mj-column><mj-text>c</mj-text></mj-column>",
		"</mj-section></mj-body></mjml>",
	));
	assert_eq!(html.matches("mj-column-per-33-33").count() >= 3, true);
	assert!(html.contains("@media only screen and (min-width:480px)"));
	assert!(html.contains(".mj-column-per-33-33 { width:33.33% !important; max-width:33.33%; }"));
}

#[test]
fn explicit_widths_are_respected() {
	let html = render(concat!(
		"<mjml><mj-body><mj-section>",
		"<mj-column width=\"70%\"></mj-column>",
		"<mj-column width=\"30%\"></mj-column>",
		"</mj-section></mj-body></mjml>",
	));
	assert!(html.contains("mj-column-per-70"));
	assert!(html.contains("mj-column-per-30"));
	// 70% of the 600px body
	assert!(html.contains("width:420px"));
	assert!(html.contains("width:180px"));
}

#[test]
fn output_is_byte_identical_across_renders() {
	let markup = concat!(
		"<mjml><mj-body><mj-section><mj-column>",
		"<mj-navbar hamburger=\"hamburger\">",
		"<mj-navbar-link href=\"/home\">Home</mj-navbar-link>",
		"</mj-navbar>",
		"</mj-column></mj-section></mj-body></mjml>",
	);
	assert_eq!(render(markup), render(markup));
}

#[test]
fn comments_round_trip_unless_disabled() {
	let markup = concat!(
		"<mjml><mj-body><mj-section><mj-column>",
		"<mj-text><!-- greeting -->Hello</mj-text>",
		"</mj-column></mj-section></mj-body></mjml>",
	);
	let html = render(markup);
	assert!(html.contains("<!-- greeting -->"));

	let silent = compile(
		markup,
		&ParseOptions::default(),
		&RenderOptions {
			disable_comments: true,
			..RenderOptions::default()
		},
	)
	.unwrap();
	assert!(!silent.contains("greeting"));
	assert!(silent.contains("Hello"));
}

#[test]
fn unterminated_markup_is_a_parser_error() {
	let err = compile(
		"<mjml><mj-body>",
		&ParseOptions::default(),
		&RenderOptions::default(),
	)
	.unwrap_err();
	assert!(matches!(err, Error::MalformedMarkup { .. }));
	assert_eq!(err.origin(), Origin::Parser);
}

#[test]
fn missing_body_is_rejected() {
	let err = compile(
		"<mjml><mj-head></mj-head></mjml>",
		&ParseOptions::default(),
		&RenderOptions::default(),
	)
	.unwrap_err();
	assert!(matches!(err, Error::MissingBody));
}

#[test]
fn image_without_src_is_a_renderer_error() {
	let err = compile(
		"<mjml><mj-body><mj-section><mj-column><mj-image /></mj-column></mj-section></mj-body></mjml>",
		&ParseOptions::default(),
		&RenderOptions::default(),
	)
	.unwrap_err();
	assert!(matches!(
		&err,
		Error::MissingRequiredAttribute { tag, attribute, .. }
			if tag == "mj-image" && attribute == "src"
	));
	assert_eq!(err.origin(), Origin::Renderer);
}

#[test]
fn result_serialization_shapes() {
	let ok = RenderResult::from(compile(
		"<mjml><mj-body></mj-body></mjml>",
		&ParseOptions::default(),
		&RenderOptions::default(),
	));
	let json = serde_json::to_value(&ok).unwrap();
	assert_eq!(json["type"], "success");
	assert!(json["content"].as_str().unwrap().starts_with("<!doctype html>"));

	let err = RenderResult::from(compile(
		"<mjml></mjml>",
		&ParseOptions::default(),
		&RenderOptions::default(),
	));
	let json = serde_json::to_value(&err).unwrap();
	assert_eq!(json["type"], "error");
	assert_eq!(json["origin"], "parser");
}

#[test]
fn raw_content_passes_through_untouched() {
	let html = render(concat!(
		"<mjml><mj-body><mj-section><mj-column>",
		"<mj-raw><table data-x=\"1\"><tr><td>kept   as-is</td></tr></table></mj-raw>",
		"</mj-column></mj-section></mj-body></mjml>",
	));
	assert!(html.contains("<table data-x=\"1\"><tr><td>kept   as-is</td></tr></table>"));
}

#[test]
fn lang_and_dir_are_forwarded() {
	let html = render("<mjml lang=\"fr\" dir=\"rtl\"><mj-body></mj-body></mjml>");
	assert!(html.contains("<html lang=\"fr\" dir=\"rtl\""));
	let default = render("<mjml><mj-body></mj-body></mjml>");
	assert!(default.contains("<html lang=\"und\" dir=\"auto\""));
}
